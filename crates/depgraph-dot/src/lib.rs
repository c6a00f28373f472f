//! Graph rendering module for producing DOT format output.
//!
//! This crate transforms a `ModuleGraph` into a DOT digraph for
//! visualization. Modules can be grouped into nested subgraph clusters
//! mirroring the package hierarchy, or collapsed into a cluster-level graph.
//!
//! # Module Structure
//!
//! - [`dot`]: DOT format utilities and the output builder
//! - [`render`]: Render modes, scope tracking, and weighted edge emission

mod dot;
mod render;

pub use dot::{DotBuilder, escape_label, module_label, sanitize_id};
pub use render::{RenderMode, RenderOptions, WeightScheme, render};
