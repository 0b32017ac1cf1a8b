pub mod dns;
pub mod errors;
pub mod logging;
pub mod root;
pub mod server;
pub mod tls;
pub mod zone;

pub use dns::{DnsConfig, ForwardMode};
pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use tls::TlsConfig;
pub use zone::{SeedRecord, ZoneConfig};
