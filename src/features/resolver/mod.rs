pub mod local_host_resolver;
pub mod system_network;

pub use local_host_resolver::{get_local_host, LocalHostResolver, NetworkProvider};
pub use system_network::SystemNetwork;
