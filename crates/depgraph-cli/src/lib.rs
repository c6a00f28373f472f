//! depgraph command-line interface.
//!
pub mod discovery;
pub mod pipeline;

use depgraph_core::Result;
use depgraph_dot::{RenderMode, WeightScheme};

pub use discovery::{FileSet, discover};
pub use pipeline::process;

/// Options for running depgraph.
#[derive(Debug, Clone)]
pub struct DepgraphOptions {
    /// Root directories to analyze.
    pub paths: Vec<String>,
    /// File and directory names to skip.
    pub exclude: Vec<String>,
    /// Explicit cluster names; `None` derives clusters from directories.
    pub clusters: Option<Vec<String>>,
    pub mode: RenderMode,
    pub concentrate: bool,
    pub recursive: bool,
    pub damping: Option<f64>,
    pub weights: WeightScheme,
}

impl Default for DepgraphOptions {
    fn default() -> Self {
        Self {
            paths: vec![".".to_string()],
            exclude: Vec::new(),
            clusters: None,
            mode: RenderMode::default(),
            concentrate: false,
            recursive: true,
            damping: None,
            weights: WeightScheme::default(),
        }
    }
}

/// Main entry point: discover files, build the graph, render DOT.
pub fn run_main(opts: &DepgraphOptions) -> Result<String> {
    let set = discovery::discover(opts)?;
    pipeline::process(opts, set)
}
