pub mod identity;
pub mod network;

pub use identity::NodeIdentity;
pub use network::{AddressExt, AddressFamily, InterfaceOrder, LocalHost, NetworkInterface};
