use std::io;
use std::net::{IpAddr, ToSocketAddrs};
use if_addrs::get_if_addrs;
use crate::domain::errors::ResolutionError;
use crate::domain::models::{LocalHost, NetworkInterface};
use crate::features::resolver::NetworkProvider;

/// Network provider backed by the host's real hostname and interface table
pub struct SystemNetwork;

impl NetworkProvider for SystemNetwork {
    fn default_local_host(&self) -> Result<LocalHost, ResolutionError> {
        let hostname = hostname::get()
            .map_err(ResolutionError::DefaultAddress)?
            .into_string()
            .map_err(|raw| {
                ResolutionError::DefaultAddress(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("hostname {:?} is not valid unicode", raw),
                ))
            })?;

        let resolved = (hostname.as_str(), 0)
            .to_socket_addrs()
            .map_err(ResolutionError::DefaultAddress)?
            .map(|socket_addr| socket_addr.ip());
        let address = prefer_ipv4(resolved)
            .ok_or_else(|| ResolutionError::NoAddressForHost(hostname.clone()))?;

        Ok(LocalHost { hostname, address })
    }

    fn network_interfaces(&self) -> Result<Vec<NetworkInterface>, ResolutionError> {
        let addrs = get_if_addrs().map_err(ResolutionError::Enumeration)?;
        Ok(group_by_interface(addrs.iter().map(|iface| (iface.name.as_str(), iface.ip()))))
    }
}

// Resolver order may put IPv6 first; the first IPv4 result wins when there is one.
fn prefer_ipv4(addresses: impl Iterator<Item = IpAddr>) -> Option<IpAddr> {
    let addresses: Vec<IpAddr> = addresses.collect();
    addresses
        .iter()
        .find(|address| address.is_ipv4())
        .or_else(|| addresses.first())
        .copied()
}

// if-addrs reports one entry per address; fold them back into adapters in first-seen order.
fn group_by_interface<'a>(
    entries: impl Iterator<Item = (&'a str, IpAddr)>,
) -> Vec<NetworkInterface> {
    let mut interfaces: Vec<NetworkInterface> = Vec::new();
    for (name, ip) in entries {
        match interfaces.iter_mut().find(|iface| iface.name == name) {
            Some(iface) => iface.addresses.push(ip),
            None => interfaces.push(NetworkInterface::new(name, vec![ip])),
        }
    }
    interfaces
}
