mod upstream_forwarder;
mod zone_store;

pub use upstream_forwarder::UpstreamForwarder;
pub use zone_store::ZoneStore;
