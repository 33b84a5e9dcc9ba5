/// Structured record label. Nested groups flip orientation when rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Record {
    Field { port: Option<String>, text: String },
    Group(Vec<Record>),
}

impl Record {
    pub fn field(text: impl Into<String>) -> Self {
        Record::Field {
            port: None,
            text: text.into(),
        }
    }

    /// A field edges can attach to through `port`.
    pub fn anchored(port: impl Into<String>, text: impl Into<String>) -> Self {
        Record::Field {
            port: Some(port.into()),
            text: text.into(),
        }
    }

    pub fn group(items: impl IntoIterator<Item = Record>) -> Self {
        Record::Group(items.into_iter().collect())
    }

    /// All port names, depth first.
    pub fn ports(&self) -> Vec<&str> {
        let mut ports = Vec::new();
        self.collect_ports(&mut ports);
        ports
    }

    fn collect_ports<'a>(&'a self, ports: &mut Vec<&'a str>) {
        match self {
            Record::Field { port, .. } => ports.extend(port.as_deref()),
            Record::Group(items) => items.iter().for_each(|item| item.collect_ports(ports)),
        }
    }

    /// Field texts in reading order.
    pub fn texts(&self) -> Vec<&str> {
        match self {
            Record::Field { text, .. } => vec![text.as_str()],
            Record::Group(items) => items.iter().flat_map(Record::texts).collect(),
        }
    }
}
