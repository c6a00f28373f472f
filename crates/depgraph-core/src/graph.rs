//! The module dependency graph and its builder.

use std::collections::BTreeMap;

use rayon::prelude::*;
use tracing::debug;

use crate::name::ModuleName;
use crate::scan::scan_imports;

/// One analyzed source file: its normalized module name and full text.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub name: ModuleName,
    pub text: String,
}

impl SourceFile {
    pub fn new(name: ModuleName, text: impl Into<String>) -> Self {
        Self {
            name,
            text: text.into(),
        }
    }
}

/// Adjacency mapping from module name to its direct dependency targets.
///
/// Keys are exactly the analyzed modules. Targets may reference modules that
/// are not keys (external or unanalyzed); those are kept for distance
/// reasoning but excluded from edge rendering. Per-source target lists
/// preserve first-seen order and contain no duplicates.
#[derive(Debug, Clone, Default)]
pub struct ModuleGraph {
    edges: BTreeMap<ModuleName, Vec<ModuleName>>,
}

impl ModuleGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the graph by scanning every file's imports.
    ///
    /// Files are scanned in parallel; each file's result is independent and
    /// the merge into the ordered map makes the output deterministic.
    pub fn build(files: &[SourceFile]) -> Self {
        let scanned: Vec<(ModuleName, Vec<ModuleName>)> = files
            .par_iter()
            .map(|file| (file.name.clone(), scan_imports(&file.text)))
            .collect();

        let mut graph = Self::new();
        for (name, targets) in scanned {
            graph.add_node(name.clone());
            for target in targets {
                graph.add_edge(&name, target);
            }
        }
        debug!(modules = graph.len(), "module graph built");
        graph
    }

    /// Ensure `name` exists as a node, with no targets yet.
    pub fn add_node(&mut self, name: ModuleName) {
        self.edges.entry(name).or_default();
    }

    /// Add a dependency edge, creating the source node if needed.
    /// Duplicate targets per source are filtered, first-seen order kept.
    pub fn add_edge(&mut self, source: &ModuleName, target: ModuleName) {
        let targets = self.edges.entry(source.clone()).or_default();
        if !targets.contains(&target) {
            targets.push(target);
        }
    }

    /// Whether `name` is an analyzed module (a graph key).
    pub fn contains(&self, name: &ModuleName) -> bool {
        self.edges.contains_key(name)
    }

    /// The dependency targets of `name`, empty if absent.
    pub fn targets(&self, name: &ModuleName) -> &[ModuleName] {
        self.edges.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Node names in sorted order.
    pub fn nodes(&self) -> impl Iterator<Item = &ModuleName> {
        self.edges.keys()
    }

    /// Iterate (node, targets) pairs in sorted node order.
    pub fn iter(&self) -> impl Iterator<Item = (&ModuleName, &[ModuleName])> {
        self.edges.iter().map(|(k, v)| (k, v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
