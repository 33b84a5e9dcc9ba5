//! # Render Driver
//!
//! Hands the assembled graph to Graphviz and puts the result where the
//! [`RenderTarget`] asks for it.

pub mod dot;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, info};

use dockmap_common::config::RenderTarget;
use dockmap_common::error::RenderError;
use dockmap_common::graph::Graph;

/// Printed instead of a rendering when a URL is requested.
pub const URL_NOTICE: &str = "URL generation is not implemented";

/// Formats written as DOT text without calling Graphviz.
const TEXT_FORMATS: [&str; 2] = ["dot", "gv"];

pub struct RenderOptions {
    /// Graphviz layout engine.
    pub layout: String,
    pub rankdir: String,
    /// Graphviz executable used for every format but DOT text.
    pub graphviz: PathBuf,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            layout: "sfdp".to_string(),
            rankdir: "LR".to_string(),
            graphviz: PathBuf::from("dot"),
        }
    }
}

#[derive(Default)]
pub struct RenderDriver {
    options: RenderOptions,
}

impl RenderDriver {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// DOT text of `graph`, carrying the layout settings.
    pub fn to_dot(&self, graph: &Graph) -> String {
        let attrs = [
            ("layout", self.options.layout.as_str()),
            ("rankdir", self.options.rankdir.as_str()),
        ];
        dot::write_graph(graph, &attrs)
    }

    /// Renders `graph` to `target`. `out` stands in for standard output.
    pub fn render<W: Write>(
        &self,
        graph: &Graph,
        target: &RenderTarget,
        out: &mut W,
    ) -> Result<(), RenderError> {
        match target {
            RenderTarget::File(path) => self.render_file(graph, path),
            RenderTarget::Url => {
                writeln!(out, "{URL_NOTICE}")?;
                Ok(())
            }
            RenderTarget::Stdout => {
                out.write_all(self.to_dot(graph).as_bytes())?;
                out.flush()?;
                Ok(())
            }
        }
    }

    fn render_file(&self, graph: &Graph, path: &Path) -> Result<(), RenderError> {
        let format: String = output_format(path)?;
        let text: String = self.to_dot(graph);

        if TEXT_FORMATS.contains(&format.as_str()) {
            fs::write(path, text)?;
        } else {
            self.run_graphviz(&text, &format, path)?;
        }

        info!(path = %path.display(), format = %format, "graph written");
        Ok(())
    }

    fn run_graphviz(&self, text: &str, format: &str, path: &Path) -> Result<(), RenderError> {
        debug!(graphviz = %self.options.graphviz.display(), format, "running graphviz");

        let mut child = Command::new(&self.options.graphviz)
            .arg(format!("-T{format}"))
            .arg("-o")
            .arg(path)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            match stdin.write_all(text.as_bytes()) {
                Ok(()) => {}
                // Graphviz exits before reading on bad arguments, its status says why.
                Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {}
                Err(err) => {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(err.into());
                }
            }
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(RenderError::Graphviz {
                format: format.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(())
    }
}

/// Output format implied by the file extension, lower-cased.
pub fn output_format(path: &Path) -> Result<String, RenderError> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty())
        .map(|ext| ext.to_ascii_lowercase())
        .ok_or_else(|| RenderError::MissingExtension(path.to_path_buf()))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
