//! Core processing pipeline: read sources -> build graph -> render DOT.

use std::fs;
use std::time::Instant;

use tracing::{debug, info};

use depgraph_core::{Cluster, Error, ModuleGraph, ModuleName, Result, SourceFile};
use depgraph_dot::{RenderOptions, render};

use crate::DepgraphOptions;
use crate::discovery::FileSet;

/// Run the full pipeline over a discovered file set.
///
/// Files are expected readable at this point; a read failure is fatal.
pub fn process(opts: &DepgraphOptions, set: FileSet) -> Result<String> {
    let read_start = Instant::now();
    let mut sources = Vec::with_capacity(set.files.len());
    for (rel, root) in &set.files {
        let full = root.join(rel);
        let text = fs::read_to_string(&full).map_err(|err| {
            Error::from(err)
                .with_operation("pipeline::read_sources")
                .with_context("file", full.to_string_lossy())
        })?;
        let Some(name) = ModuleName::from_path(rel) else {
            debug!(file = %rel.display(), "path yields no module name, skipping");
            continue;
        };
        sources.push(SourceFile::new(name, text));
    }
    info!(
        "Source reading: {:.2}s ({} files)",
        read_start.elapsed().as_secs_f64(),
        sources.len()
    );

    let build_start = Instant::now();
    let graph = ModuleGraph::build(&sources);
    info!(
        "Graph building: {:.2}s ({} modules)",
        build_start.elapsed().as_secs_f64(),
        graph.len()
    );

    let clusters = match &opts.clusters {
        Some(list) => list
            .iter()
            .filter_map(|raw| ModuleName::from_dotted(raw))
            .map(Cluster::explicit)
            .collect(),
        None => set.clusters,
    };

    let render_start = Instant::now();
    let render_options = RenderOptions {
        mode: opts.mode,
        concentrate: opts.concentrate,
        damping: opts.damping,
        weights: opts.weights,
    };
    let output = render(&graph, &clusters, &render_options)?;
    info!(
        "Graph rendering: {:.2}s",
        render_start.elapsed().as_secs_f64()
    );
    Ok(output)
}
