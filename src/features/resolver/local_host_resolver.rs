use std::net::IpAddr;
use crate::domain::errors::ResolutionError;
use crate::domain::models::{AddressExt, AddressFamily, InterfaceOrder, LocalHost, NetworkInterface};
use crate::features::resolver::SystemNetwork;

/// OS calls needed to pick a host address, injectable so tests can fake them
pub trait NetworkProvider {
    fn default_local_host(&self) -> Result<LocalHost, ResolutionError>;
    fn network_interfaces(&self) -> Result<Vec<NetworkInterface>, ResolutionError>;
}

/// Picks the address other nodes should use to reach this process
pub struct LocalHostResolver<P: NetworkProvider> {
    provider: P,
    order: InterfaceOrder,
}

impl<P: NetworkProvider> LocalHostResolver<P> {
    /// Creates a resolver that walks interfaces in the current platform's order
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            order: InterfaceOrder::current(),
        }
    }

    pub fn with_order(mut self, order: InterfaceOrder) -> Self {
        self.order = order;
        self
    }

    /// Returns the platform default address unless it is loopback, in which
    /// case the first interface carrying a routable address wins. Falls back
    /// to the loopback default when no interface qualifies.
    pub fn resolve(&self) -> Result<IpAddr, ResolutionError> {
        let local_host = self.provider.default_local_host()?;
        if !local_host.address.is_loopback_address() {
            return Ok(local_host.address);
        }

        log::debug!(
            "Hostname {} resolves to a loopback address, trying to resolve an external IP address.",
            local_host.hostname
        );

        let interfaces = self.order.arrange(self.provider.network_interfaces()?);
        for interface in &interfaces {
            let Some(address) = select_candidate(&interface.addresses) else {
                continue;
            };
            log::debug!(
                "Found an external IP address {} on {} which represents the localhost.",
                address,
                interface.name
            );
            return Ok(normalize(address));
        }

        Ok(local_host.address)
    }
}

/// Resolves the local host against the real OS network layer
pub fn get_local_host() -> Result<IpAddr, ResolutionError> {
    LocalHostResolver::new(SystemNetwork).resolve()
}

/// First IPv4 among the routable addresses, else the first routable address.
///
/// Addresses are classified in canonical form, so `::ffff:a.b.c.d` counts as IPv4.
fn select_candidate(addresses: &[IpAddr]) -> Option<IpAddr> {
    let routable: Vec<IpAddr> = addresses
        .iter()
        .map(IpAddr::to_canonical)
        .filter(|address| !(address.is_link_local_address() || address.is_loopback_address()))
        .collect();

    routable
        .iter()
        .find(|address| address.family() == AddressFamily::V4)
        .or_else(|| routable.first())
        .copied()
}

// Rebuild from raw octets; IPv4-mapped IPv6 comes back as IPv4.
fn normalize(address: IpAddr) -> IpAddr {
    match address {
        IpAddr::V4(v4) => IpAddr::from(v4.octets()),
        IpAddr::V6(v6) => IpAddr::from(v6.octets()).to_canonical(),
    }
}
