pub mod graph;

use std::path::PathBuf;

use clap::Parser;
use dockmap_common::config::Config;

#[derive(Parser)]
#[command(name = "dockmap")]
#[command(about = "Draws how containers are wired to networks.")]
pub struct CommandLine {
    /// Print the discovered networks and containers
    #[arg(short, long)]
    pub verbose: bool,
    /// Render into a file, the format follows the extension (e.g. net.svg)
    #[arg(short, long, value_name = "PATH")]
    pub out: Option<PathBuf>,
    /// Generate a shareable URL instead (not implemented)
    #[arg(short, long)]
    pub url: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse_from(known_args(std::env::args()))
    }

    pub fn config(&self) -> Config {
        Config {
            verbose: self.verbose,
            output: self.out.clone(),
            url: self.url,
        }
    }
}

/// Keeps the arguments defined above, anything else is ignored rather than rejected.
fn known_args(args: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut args = args.into_iter();
    let mut kept: Vec<String> = args.next().into_iter().collect();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            // Attached form, so a path that looks like a flag stays a path.
            "-o" | "--out" => kept.extend(args.next().map(|path| format!("--out={path}"))),
            "-v" | "--verbose" | "-u" | "--url" | "-h" | "--help" => kept.push(arg),
            _ if arg.starts_with("--out=") => kept.push(arg),
            _ => {}
        }
    }
    kept
}
