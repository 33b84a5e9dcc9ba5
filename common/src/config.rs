use std::path::PathBuf;

pub struct Config {
    /// Prints the discovered networks and containers.
    pub verbose: bool,
    /// Renders into this file, the format follows its extension.
    pub output: Option<PathBuf>,
    /// Requests a shareable URL instead of a rendering.
    ///
    /// Not supported yet, only a notice is printed.
    pub url: bool,
}

/// Where a rendered graph ends up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderTarget {
    File(PathBuf),
    Url,
    Stdout,
}

impl Config {
    /// Resolves the render target. A file wins over the URL flag.
    pub fn target(&self) -> RenderTarget {
        match (&self.output, self.url) {
            (Some(path), _) => RenderTarget::File(path.clone()),
            (None, true) => RenderTarget::Url,
            (None, false) => RenderTarget::Stdout,
        }
    }
}
