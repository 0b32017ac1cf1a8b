mod config;
mod logging;
mod network;

pub use config::load_config;
pub use logging::init_logging;
pub use network::resolve_listen_address;
