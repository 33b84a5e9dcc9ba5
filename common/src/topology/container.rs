/// Length of the abbreviated container ID the runtime uses as an alias.
const SHORT_ID_LEN: usize = 12;

/// Abbreviated form of a container ID.
pub fn short_id(id: &str) -> &str {
    id.get(..SHORT_ID_LEN).unwrap_or(id)
}

/// A bound port, without its protocol suffix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Port {
    pub number: String,
}

impl Port {
    /// Parses a runtime port key such as `8080/tcp`.
    pub fn from_binding(key: &str) -> Self {
        let number = key.split_once('/').map_or(key, |(number, _)| number);
        Self {
            number: number.to_string(),
        }
    }
}

/// One attachment point of a container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Interface {
    /// Unique within the container, edges anchor on it.
    pub endpoint_id: String,
    pub address: String,
    /// Without the container's own short ID and name.
    pub aliases: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Container {
    pub container_id: String,
    /// Display name, without the leading `/`.
    pub name: String,
    pub ports: Vec<Port>,
    pub interfaces: Vec<Interface>,
}

impl Container {
    pub fn short_id(&self) -> &str {
        short_id(&self.container_id)
    }
}
