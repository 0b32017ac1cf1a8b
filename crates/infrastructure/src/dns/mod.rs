pub mod forwarding;
pub mod server;
pub mod transport;
pub mod wire;

pub use forwarding::UdpForwarder;
pub use server::DnsRequestHandler;
pub use wire::WireCodec;
