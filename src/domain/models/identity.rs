use std::net::IpAddr;
use serde::Serialize;
use crate::domain::config::Config;

/// What this node advertises about itself once startup preparation is done
#[derive(Serialize, Debug, Clone)]
pub struct NodeIdentity {
    pub hostname: String,
    pub address: IpAddr,
    pub framework_version: String,
    pub task_class_version: String,
    pub config: Config,
}
