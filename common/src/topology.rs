//! # Topology Model
//!
//! A read-only snapshot of how containers attach to networks, taken once per
//! run. Nothing in here is mutated after the builder hands it out.

mod container;
mod network;

use std::collections::BTreeMap;

pub use container::{Container, Interface, Port, short_id};
pub use network::{HOST_NETWORK, NO_NETWORK, Network};

/// One container attached to one network through one endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Link {
    pub container_id: String,
    pub endpoint_id: String,
    pub network_name: String,
}

impl Link {
    /// Attachments to `none` mean "no networking" and are never drawn.
    pub fn is_detached(&self) -> bool {
        self.network_name == NO_NETWORK
    }
}

#[derive(Clone, Debug, Default)]
pub struct Topology {
    /// Keyed by network name, always contains the synthetic `host` network.
    pub networks: BTreeMap<String, Network>,
    pub containers: Vec<Container>,
    pub links: Vec<Link>,
}

impl Topology {
    pub fn network(&self, name: &str) -> Option<&Network> {
        self.networks.get(name)
    }

    /// Networks reachable from outside the host, excluding `host` itself.
    pub fn exposed_networks(&self) -> impl Iterator<Item = &Network> {
        self.networks.values().filter(|net| net.is_exposed())
    }
}
