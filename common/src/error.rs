//! # Errors
//!
//! One enum per pipeline stage, folded into [`Error`] at the top. Every
//! failure is fatal to the run: nothing here is retried or recovered.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Underlying cause reported by a runtime client.
pub type Cause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failures while querying the container runtime.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to connect to the container runtime")]
    Connect(#[source] Cause),

    #[error("failed to list networks")]
    ListNetworks(#[source] Cause),

    #[error("failed to list containers")]
    ListContainers(#[source] Cause),

    #[error("failed to inspect container {id}")]
    Inspect {
        id: String,
        #[source]
        source: Cause,
    },

    #[error("no such container: {0}")]
    UnknownContainer(String),
}

/// Failures while assembling the abstract graph.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("node '{0}' already exists")]
    DuplicateNode(String),

    #[error("node '{0}' does not exist")]
    UnknownNode(String),

    #[error("node '{node}' has no port '{port}'")]
    UnknownPort { node: String, port: String },
}

/// Failures while rendering or writing the graph.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("cannot infer an output format from '{}'", .0.display())]
    MissingExtension(PathBuf),

    #[error("graphviz failed to render '{format}': {stderr}")]
    Graphviz { format: String, stderr: String },

    #[error(transparent)]
    Io(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

pub type Result<T> = std::result::Result<T, Error>;
