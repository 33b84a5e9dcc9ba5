//! # Network Colors
//!
//! Every network gets a color that its node border and its edges share. The
//! first networks draw from a fixed palette, the rest get pseudo-random colors.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Fixed palette, handed out in order.
pub const PALETTE: [&str; 18] = [
    "#1f78b4", "#33a02c", "#e31a1c", "#ff7f00", "#6a3d9a", "#b15928",
    "#a6cee3", "#b2df8a", "#fdbf6f", "#cab2d6", "#90f530", "#0d8bad",
    "#e98420", "#0e9997", "#6a5164", "#afa277", "#149ead", "#a54a56",
];

/// Color of the synthetic `host` network.
pub const HOST_COLOR: &str = "#808080";

/// Color of the `start -> end` exposure edges.
pub const EXPOSURE_COLOR: &str = "#808080";

/// Background of container nodes.
pub const CONTAINER_FILL: &str = "#cdcdcd";

/// Alpha suffix appended to a network color for its node border.
pub const BORDER_ALPHA: &str = "60";

/// Hands out one color per call.
///
/// Palette entries are unique. Once the palette is exhausted the allocator
/// falls back to random `#rrggbb` values, which may collide with each other.
pub struct ColorAllocator {
    cursor: usize,
    rng: StdRng,
}

impl ColorAllocator {
    pub fn new() -> Self {
        Self {
            cursor: 0,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Same as [`ColorAllocator::new`] but with a reproducible fallback sequence.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            cursor: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn next_color(&mut self) -> String {
        if let Some(color) = PALETTE.get(self.cursor) {
            self.cursor += 1;
            return (*color).to_string();
        }

        let value: u32 = self.rng.random_range(0..0xFF_FFFF);
        format!("#{value:06x}")
    }

    /// Number of palette colors not handed out yet.
    pub fn remaining(&self) -> usize {
        PALETTE.len().saturating_sub(self.cursor)
    }
}

impl Default for ColorAllocator {
    fn default() -> Self {
        Self::new()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
