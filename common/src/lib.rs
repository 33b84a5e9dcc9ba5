//! # dockmap-common
//!
//! Shared building blocks for the `dockmap` workspace:
//!
//! * **[`topology`]**: the point-in-time model of networks, containers and links.
//! * **[`graph`]**: the abstract node/edge graph handed to a renderer.
//! * **[`color`]**: per-network color allocation.
//! * **[`config`]**: run configuration assembled by the command line.
//! * **[`error`]**: error types shared by every pipeline stage.

pub mod color;
pub mod config;
pub mod error;
pub mod graph;
pub mod topology;
