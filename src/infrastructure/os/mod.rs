pub mod syslog;
pub mod systemctl;

pub use syslog::SyslogSink;
pub use systemctl::SystemctlManager;
