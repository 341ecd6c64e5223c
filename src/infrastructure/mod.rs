pub mod collectors;
pub mod os;
