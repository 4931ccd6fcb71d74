use std::net::IpAddr;

/// A named adapter and the addresses bound to it, in OS order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkInterface {
    pub name: String,
    pub addresses: Vec<IpAddr>,
}

impl NetworkInterface {
    pub fn new(name: impl Into<String>, addresses: Vec<IpAddr>) -> Self {
        Self {
            name: name.into(),
            addresses,
        }
    }
}

/// The platform's own answer to "who am I": its hostname resolved to an address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalHost {
    pub hostname: String,
    pub address: IpAddr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressFamily {
    V4,
    V6,
}

/// Derived properties used when choosing a host address.
///
/// Selection never compares addresses by value, only by these flags. Flags are
/// taken on the canonical form, so IPv4-mapped IPv6 addresses classify as IPv4.
pub trait AddressExt {
    fn family(&self) -> AddressFamily;
    fn is_loopback_address(&self) -> bool;
    fn is_link_local_address(&self) -> bool;
}

impl AddressExt for IpAddr {
    fn family(&self) -> AddressFamily {
        match self.to_canonical() {
            IpAddr::V4(_) => AddressFamily::V4,
            IpAddr::V6(_) => AddressFamily::V6,
        }
    }

    fn is_loopback_address(&self) -> bool {
        self.to_canonical().is_loopback()
    }

    fn is_link_local_address(&self) -> bool {
        match self.to_canonical() {
            IpAddr::V4(v4) => v4.is_link_local(),
            // fe80::/10
            IpAddr::V6(v6) => (v6.segments()[0] & 0xffc0) == 0xfe80,
        }
    }
}

/// Order in which interfaces are searched for a host address.
///
/// Windows reports interfaces in a usable order; everywhere else the OS list
/// is walked back to front. This is a fixed tie-break and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterfaceOrder {
    AsReported,
    Reversed,
}

impl InterfaceOrder {
    pub fn for_os(os_name: &str) -> Self {
        if os_name.to_ascii_lowercase().starts_with("windows") {
            Self::AsReported
        } else {
            Self::Reversed
        }
    }

    pub fn current() -> Self {
        Self::for_os(std::env::consts::OS)
    }

    pub fn arrange<T>(self, mut items: Vec<T>) -> Vec<T> {
        if self == Self::Reversed {
            items.reverse();
        }
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{Ipv4Addr, Ipv6Addr};

    #[test]
    fn test_loopback_flags() {
        assert!(IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)).is_loopback_address());
        assert!(IpAddr::V4(Ipv4Addr::new(127, 1, 2, 3)).is_loopback_address());
        assert!(IpAddr::V6(Ipv6Addr::LOCALHOST).is_loopback_address());
        assert!(!IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1)).is_loopback_address());
    }

    #[test]
    fn test_link_local_flags() {
        assert!(IpAddr::V4(Ipv4Addr::new(169, 254, 10, 1)).is_link_local_address());
        assert!("fe80::1".parse::<IpAddr>().unwrap().is_link_local_address());
        assert!("febf::1".parse::<IpAddr>().unwrap().is_link_local_address());
        assert!(!"fec0::1".parse::<IpAddr>().unwrap().is_link_local_address());
        assert!(!"2001:db8::1".parse::<IpAddr>().unwrap().is_link_local_address());
        assert!(!IpAddr::V4(Ipv4Addr::new(192, 168, 1, 2)).is_link_local_address());
    }

    #[test]
    fn test_mapped_addresses_classified_as_ipv4() {
        let mapped_loopback: IpAddr = "::ffff:127.0.0.1".parse().unwrap();
        let mapped_link_local: IpAddr = "::ffff:169.254.1.1".parse().unwrap();
        let mapped_routable: IpAddr = "::ffff:10.0.0.9".parse().unwrap();
        assert!(mapped_loopback.is_loopback_address());
        assert!(mapped_link_local.is_link_local_address());
        assert_eq!(mapped_routable.family(), AddressFamily::V4);
        assert!(!mapped_routable.is_loopback_address());
    }

    #[test]
    fn test_family() {
        assert_eq!(IpAddr::V4(Ipv4Addr::LOCALHOST).family(), AddressFamily::V4);
        assert_eq!(IpAddr::V6(Ipv6Addr::LOCALHOST).family(), AddressFamily::V6);
    }

    #[test]
    fn test_interface_order_for_os() {
        assert_eq!(InterfaceOrder::for_os("windows"), InterfaceOrder::AsReported);
        assert_eq!(InterfaceOrder::for_os("Windows 10"), InterfaceOrder::AsReported);
        assert_eq!(InterfaceOrder::for_os("linux"), InterfaceOrder::Reversed);
        assert_eq!(InterfaceOrder::for_os("macos"), InterfaceOrder::Reversed);
    }

    #[test]
    fn test_arrange() {
        assert_eq!(InterfaceOrder::Reversed.arrange(vec![1, 2, 3]), vec![3, 2, 1]);
        assert_eq!(InterfaceOrder::AsReported.arrange(vec![1, 2, 3]), vec![1, 2, 3]);
    }
}
