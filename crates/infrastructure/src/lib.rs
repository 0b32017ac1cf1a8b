//! Orbital DNS infrastructure: adapters for the application ports plus the
//! wire, TLS and network plumbing the listeners need.
pub mod dns;
pub mod system;
pub mod tls;
pub mod zone;
