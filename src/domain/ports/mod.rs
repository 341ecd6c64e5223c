pub mod collector;
pub mod log_sink;
pub mod service_manager;

pub use collector::{CollectionError, HealthCollector};
pub use log_sink::{LogSink, LogSinkError};
pub use service_manager::{ServiceError, ServiceManager};
