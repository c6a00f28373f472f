//! Cluster assignment and the cluster-level graph.
//!
//! A cluster is a containment boundary (a directory, in practice) used to
//! group modules visually. The cluster set is either supplied explicitly or
//! derived from every directory visited during discovery.

use std::path::PathBuf;

use crate::graph::ModuleGraph;
use crate::name::ModuleName;

/// A containment boundary, with display bookkeeping for its origin.
#[derive(Debug, Clone)]
pub struct Cluster {
    pub name: ModuleName,
    /// The base directory this cluster was discovered under. Display
    /// bookkeeping only; containment is decided purely by `name`.
    pub origin: PathBuf,
    /// Whether the cluster was user-supplied rather than auto-derived.
    pub explicit: bool,
}

impl Cluster {
    pub fn explicit(name: ModuleName) -> Self {
        Self {
            name,
            origin: PathBuf::new(),
            explicit: true,
        }
    }

    pub fn discovered(name: ModuleName, origin: PathBuf) -> Self {
        Self {
            name,
            origin,
            explicit: false,
        }
    }
}

/// The most specific cluster containing `name`, or `None` if no cluster
/// contains it.
///
/// Candidates from a directory hierarchy are totally ordered by containment
/// among themselves, so "most specific" is unambiguous. If the configured
/// set holds incomparable candidates both containing `name`, the earliest
/// in `clusters` wins; callers pass the set sorted, making the tie-break
/// deterministic (lexicographically first).
pub fn find_best_cluster<'a>(
    name: &ModuleName,
    clusters: &'a [ModuleName],
) -> Option<&'a ModuleName> {
    let mut best: Option<&ModuleName> = None;
    for cluster in clusters {
        if !name.is_within(cluster) {
            continue;
        }
        match best {
            None => best = Some(cluster),
            Some(current) if cluster.is_within(current) => best = Some(cluster),
            Some(_) => {}
        }
    }
    best
}

/// Collapse a module graph into a cluster-level graph.
///
/// Every node maps to its best cluster (nodes without one are skipped), and
/// every edge maps both endpoints the same way. Self edges are dropped
/// unless `self_edges` is set; cluster-level duplicates are filtered.
pub fn build_cluster_graph(
    graph: &ModuleGraph,
    clusters: &[ModuleName],
    self_edges: bool,
) -> ModuleGraph {
    let mut collapsed = ModuleGraph::new();
    for (name, targets) in graph.iter() {
        let Some(source) = find_best_cluster(name, clusters) else {
            continue;
        };
        collapsed.add_node(source.clone());
        for target in targets {
            let Some(target) = find_best_cluster(target, clusters) else {
                continue;
            };
            if self_edges || target != source {
                collapsed.add_edge(source, target.clone());
            }
        }
    }
    collapsed
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn name(raw: &str) -> ModuleName {
        ModuleName::from_dotted(raw).unwrap()
    }

    fn names(raw: &[&str]) -> Vec<ModuleName> {
        raw.iter().map(|s| name(s)).collect()
    }

    #[test]
    fn test_most_specific_wins() {
        let clusters = names(&["a", "a.b", "a.b.c"]);
        assert_eq!(
            find_best_cluster(&name("a.b.c.d"), &clusters),
            Some(&name("a.b.c"))
        );
        assert_eq!(find_best_cluster(&name("a.x"), &clusters), Some(&name("a")));
    }

    #[test]
    fn test_exact_match_selected() {
        let clusters = names(&["a", "a.b"]);
        assert_eq!(find_best_cluster(&name("a.b"), &clusters), Some(&name("a.b")));
    }

    #[test]
    fn test_no_containing_cluster() {
        let clusters = names(&["a", "b"]);
        assert_eq!(find_best_cluster(&name("c.d"), &clusters), None);
    }

    #[test]
    fn test_selection_order_independent() {
        // Any two clusters containing the same name are both prefixes of it
        // and therefore comparable, so input order cannot change the result.
        let forward = names(&["a", "a.b"]);
        let reverse = names(&["a.b", "a"]);
        assert_eq!(
            find_best_cluster(&name("a.b.x"), &forward),
            find_best_cluster(&name("a.b.x"), &reverse)
        );
    }

    #[test]
    fn test_cluster_graph_no_self_edges() {
        let mut graph = ModuleGraph::new();
        graph.add_edge(&name("a.one"), name("a.two"));
        graph.add_edge(&name("a.one"), name("b.three"));
        graph.add_node(name("a.two"));
        graph.add_node(name("b.three"));

        let clusters = names(&["a", "b"]);
        let collapsed = build_cluster_graph(&graph, &clusters, false);
        assert_eq!(collapsed.targets(&name("a")), &[name("b")]);
        assert!(collapsed.targets(&name("b")).is_empty());
    }

    #[test]
    fn test_cluster_graph_self_edges() {
        let mut graph = ModuleGraph::new();
        graph.add_edge(&name("a.one"), name("a.two"));
        graph.add_node(name("a.two"));

        let clusters = names(&["a"]);
        let collapsed = build_cluster_graph(&graph, &clusters, true);
        assert_eq!(collapsed.targets(&name("a")), &[name("a")]);

        let collapsed = build_cluster_graph(&graph, &clusters, false);
        assert!(collapsed.targets(&name("a")).is_empty());
    }

    #[test]
    fn test_cross_cluster_edge_always_present() {
        let mut graph = ModuleGraph::new();
        graph.add_edge(&name("x.m"), name("y.n"));
        graph.add_node(name("y.n"));
        let clusters = names(&["x", "y"]);
        let collapsed = build_cluster_graph(&graph, &clusters, false);
        assert_eq!(collapsed.targets(&name("x")), &[name("y")]);
    }

    #[test]
    fn test_unclustered_nodes_skipped() {
        let mut graph = ModuleGraph::new();
        graph.add_edge(&name("loose"), name("x.m"));
        graph.add_node(name("x.m"));
        let clusters = names(&["x"]);
        let collapsed = build_cluster_graph(&graph, &clusters, false);
        assert!(!collapsed.contains(&name("loose")));
        assert!(collapsed.contains(&name("x")));
    }
}
