pub mod finding;
pub mod sample;

pub use finding::Finding;
pub use sample::{HealthSample, ServiceState};
