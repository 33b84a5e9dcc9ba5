use crate::color::{BORDER_ALPHA, HOST_COLOR};

/// Name of the synthetic network standing for host networking.
pub const HOST_NETWORK: &str = "host";

/// Network name the runtime reports for containers without networking.
pub const NO_NETWORK: &str = "none";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Network {
    pub name: String,
    /// First configured subnet. Never empty inside a [`super::Topology`].
    pub gateway: String,
    /// Not routable from outside the host.
    pub internal: bool,
    /// Inter-container communication is disabled.
    pub isolated: bool,
    pub color: String,
}

impl Network {
    /// The `host` network. Its attributes are fixed.
    pub fn host() -> Self {
        Self {
            name: HOST_NETWORK.to_string(),
            gateway: "0.0.0.0".to_string(),
            internal: false,
            isolated: false,
            color: HOST_COLOR.to_string(),
        }
    }

    pub fn is_host(&self) -> bool {
        self.name == HOST_NETWORK
    }

    pub fn is_exposed(&self) -> bool {
        !self.internal && !self.is_host()
    }

    /// Semi-transparent variant of the network color.
    pub fn border_color(&self) -> String {
        format!("{}{}", self.color, BORDER_ALPHA)
    }
}
