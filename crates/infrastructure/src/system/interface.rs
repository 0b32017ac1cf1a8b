use orbital_dns_domain::DomainError;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use tracing::{debug, info};

/// Finds the address the listeners should bind to on interface `name`.
pub fn discover_interface_address(name: &str) -> Result<IpAddr, DomainError> {
    let interface = netdev::get_interfaces()
        .into_iter()
        .find(|iface| iface.name == name)
        .ok_or_else(|| DomainError::ConfigError(format!("Interface '{}' not found", name)))?;

    let ipv6: Vec<Ipv6Addr> = interface.ipv6.iter().map(|net| net.addr()).collect();
    let ipv4: Vec<Ipv4Addr> = interface.ipv4.iter().map(|net| net.addr()).collect();

    debug!(
        interface = name,
        ipv6 = ipv6.len(),
        ipv4 = ipv4.len(),
        up = interface.is_up(),
        "Inspecting interface"
    );

    let address = select_address(&ipv6, &ipv4).ok_or_else(|| {
        DomainError::ConfigError(format!("Interface '{}' has no usable address", name))
    })?;

    info!(interface = name, address = %address, "Discovered listen address");
    Ok(address)
}

/// Picks the first routable IPv6 address, then any IPv6 address, then the
/// first IPv4 address.
///
/// Link-local addresses go last because binding them needs a scope id.
pub fn select_address(ipv6: &[Ipv6Addr], ipv4: &[Ipv4Addr]) -> Option<IpAddr> {
    ipv6.iter()
        .find(|addr| !is_link_local(addr))
        .or_else(|| ipv6.first())
        .map(|addr| IpAddr::V6(*addr))
        .or_else(|| ipv4.first().map(|addr| IpAddr::V4(*addr)))
}

fn is_link_local(addr: &Ipv6Addr) -> bool {
    (addr.segments()[0] & 0xffc0) == 0xfe80
}
