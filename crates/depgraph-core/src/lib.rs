//! Core import-graph construction for depgraph.
//!
//! This crate turns scanned source files into a module dependency graph and
//! provides the clustering and coloring machinery consumed by the renderer.
//!
//! # Module Structure
//!
//! - [`name`]: Hierarchical module names and the containment relation
//! - [`distance`]: Hop distance between names in the containment tree
//! - [`scan`]: Static `import`/`from` extraction from source text
//! - [`graph`]: The module dependency graph and its builder
//! - [`cluster`]: Cluster assignment and the cluster-level graph
//! - [`color`]: Recursive hue partitioning for visually grouped colors

pub mod cluster;
pub mod color;
pub mod distance;
pub mod graph;
pub mod name;
pub mod scan;

pub use cluster::{Cluster, build_cluster_graph, find_best_cluster};
pub use color::{assign_colors, rgb};
pub use distance::{distance, max_distance};
pub use graph::{ModuleGraph, SourceFile};
pub use name::ModuleName;

pub use depgraph_error::{Error, ErrorKind, ErrorStatus, Result};
