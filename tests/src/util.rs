#![cfg(test)]

use std::collections::{BTreeSet, HashMap};

use dockmap_core::runtime::{AttachmentRecord, ContainerDetails, ContainerRecord, NetworkRecord};
use dockmap_core::topology::ICC_OPTION;

pub fn network(name: &str, subnet: &str) -> NetworkRecord {
    NetworkRecord {
        name: name.into(),
        subnets: vec![subnet.into()],
        ..Default::default()
    }
}

pub fn isolated_network(name: &str, subnet: &str) -> NetworkRecord {
    NetworkRecord {
        options: HashMap::from([(ICC_OPTION.to_string(), "false".to_string())]),
        ..network(name, subnet)
    }
}

/// A network the runtime reports without any IPAM configuration.
pub fn bare_network(name: &str) -> NetworkRecord {
    NetworkRecord {
        name: name.into(),
        ..Default::default()
    }
}

pub fn container(id: &str, name: &str) -> ContainerRecord {
    ContainerRecord {
        id: id.into(),
        names: vec![format!("/{name}")],
    }
}

pub fn attachment(network: &str, endpoint_id: &str, ip: &str, aliases: &[&str]) -> AttachmentRecord {
    AttachmentRecord {
        network: network.into(),
        endpoint_id: endpoint_id.into(),
        ip_address: ip.into(),
        aliases: aliases.iter().map(|a| a.to_string()).collect(),
    }
}

pub fn details(ports: &[&str], attachments: Vec<AttachmentRecord>) -> ContainerDetails {
    ContainerDetails {
        ports: ports.iter().map(|p| p.to_string()).collect(),
        attachments,
    }
}

/// Node and edge statements found in DOT text.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DotCounts {
    pub nodes: usize,
    pub edges: usize,
}

/// Reads back the body of a `digraph`, counting distinct node statements and edges.
///
/// Quoted strings are opaque, graph attribute statements (`key=value`) are skipped.
pub fn count_statements(text: &str) -> DotCounts {
    // (raw text, text with quoted strings collapsed to `Q`)
    let mut statements: Vec<(String, String)> = Vec::new();
    let mut raw = String::new();
    let mut sane = String::new();
    let mut in_quote = false;
    let mut escaped = false;
    let mut depth = 0usize;

    for c in text.chars() {
        if in_quote {
            if depth == 1 {
                raw.push(c);
            }
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_quote = false;
                if depth == 1 {
                    sane.push('Q');
                }
            }
            continue;
        }

        match c {
            '"' => {
                in_quote = true;
                if depth == 1 {
                    raw.push(c);
                }
            }
            '{' => depth += 1,
            '}' => depth = depth.saturating_sub(1),
            ';' if depth == 1 => {
                statements.push((std::mem::take(&mut raw), std::mem::take(&mut sane)));
            }
            _ if depth == 1 => {
                raw.push(c);
                sane.push(c);
            }
            _ => {}
        }
    }

    let mut nodes: BTreeSet<String> = BTreeSet::new();
    let mut edges = 0;
    for (raw, sane) in statements {
        let sane = sane.trim();
        let head = sane.split(['[', ' ']).next().unwrap_or_default();
        if sane.contains("->") {
            edges += 1;
        } else if !head.is_empty() && !head.contains('=') {
            nodes.insert(raw.trim().to_string());
        }
    }

    DotCounts {
        nodes: nodes.len(),
        edges,
    }
}

#[test]
fn test_count_statements_ignores_quoted_syntax() {
    let text = "digraph \"g\" {\n  layout=\"sfdp\";\n  \"a\" [label=\"{ x -> y ; z }\"];\n  \"b\";\n  \"a\":\"p\" -> \"b\" [style=\"solid\"];\n}\n";
    assert_eq!(count_statements(text), DotCounts { nodes: 2, edges: 1 });
}
