//! End-to-end checks of the snapshot-and-render pipeline against in-memory runtime data.

mod pipeline;
mod util;
