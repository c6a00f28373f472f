//! File and cluster discovery for depgraph.

use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Instant;

use ignore::WalkBuilder;
use tracing::{info, warn};

use depgraph_core::{Cluster, ModuleName, Result};

use crate::DepgraphOptions;

/// The discovery result: eligible source files as (relative path, root)
/// pairs plus every visited directory as an implicit cluster.
#[derive(Debug, Default)]
pub struct FileSet {
    pub files: Vec<(PathBuf, PathBuf)>,
    pub clusters: Vec<Cluster>,
}

/// Walk every root in `opts.paths` collecting Python files and directories.
///
/// Hidden names and names in the exclusion set are skipped. An unreadable
/// directory is non-fatal: it logs a warning and contributes nothing.
pub fn discover(opts: &DepgraphOptions) -> Result<FileSet> {
    let discovery_start = Instant::now();
    let exclude: HashSet<&str> = opts.exclude.iter().map(String::as_str).collect();

    let mut set = FileSet::default();
    for root in &opts.paths {
        walk_root(root, &exclude, opts.recursive, &mut set);
    }

    set.files.sort();
    set.clusters.sort_by(|a, b| a.name.cmp(&b.name));

    info!(
        "File discovery: {:.2}s ({} files, {} clusters)",
        discovery_start.elapsed().as_secs_f64(),
        set.files.len(),
        set.clusters.len()
    );
    Ok(set)
}

fn walk_root(root: &str, exclude: &HashSet<&str>, recursive: bool, set: &mut FileSet) {
    let root_path = PathBuf::from(root);
    let exclude_owned: Vec<String> = exclude.iter().map(|s| s.to_string()).collect();

    let mut builder = WalkBuilder::new(&root_path);
    builder
        .standard_filters(false)
        .follow_links(false)
        .filter_entry(move |entry| {
            if entry.depth() == 0 {
                return true;
            }
            let Some(name) = entry.file_name().to_str() else {
                return true;
            };
            !name.starts_with('.') && !exclude_owned.iter().any(|e| e == name)
        });
    if !recursive {
        builder.max_depth(Some(1));
    }

    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(root, error = %err, "cannot open path, skipping subtree");
                continue;
            }
        };
        if entry.depth() == 0 {
            continue;
        }

        let Ok(rel) = entry.path().strip_prefix(&root_path) else {
            continue;
        };
        let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());

        if is_dir {
            // Directories become implicit clusters; only descended-into
            // ones count, so a non-recursive walk derives none.
            if recursive {
                if let Some(name) = ModuleName::from_path(rel) {
                    set.clusters.push(Cluster::discovered(name, root_path.clone()));
                }
            }
        } else if rel.extension().is_some_and(|ext| ext == "py") {
            set.files.push((rel.to_path_buf(), root_path.clone()));
        }
    }
}
