//! Render modes, cluster scope tracking, and weighted edge emission.

use std::collections::BTreeMap;

use tracing::debug;

use depgraph_core::{
    Cluster, Error, ModuleGraph, ModuleName, Result, assign_colors, build_cluster_graph, distance,
    max_distance,
};

use crate::dot::{DotBuilder, module_label, sanitize_id};

/// How the graph body is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Bare node/edge list, no cluster boxes.
    #[default]
    Flat,
    /// Node/edge list with nested visual cluster boxes.
    Clustered,
    /// Cluster-level graph only.
    ClustersOnly,
    /// Cluster-level graph only, keeping self loops.
    ClustersOnlyLoops,
}

impl RenderMode {
    /// Convert from the numeric CLI selector. Out-of-range values are a
    /// configuration error and must abort before any output is produced.
    pub fn from_number(n: usize) -> Result<Self> {
        match n {
            0 => Ok(Self::Flat),
            1 => Ok(Self::Clustered),
            2 => Ok(Self::ClustersOnly),
            3 => Ok(Self::ClustersOnlyLoops),
            _ => Err(Error::config_invalid(format!(
                "render mode {n} out of range (expected 0-3)"
            ))
            .with_operation("render_mode::from_number")
            .with_context("mode", n.to_string())),
        }
    }

    /// Convert to the numeric selector.
    pub fn as_number(&self) -> usize {
        match self {
            Self::Flat => 0,
            Self::Clustered => 1,
            Self::ClustersOnly => 2,
            Self::ClustersOnlyLoops => 3,
        }
    }

    /// Whether the collapsed cluster graph replaces the module graph.
    pub fn clusters_only(&self) -> bool {
        matches!(self, Self::ClustersOnly | Self::ClustersOnlyLoops)
    }

    /// Whether individual module nodes are declared.
    pub fn shows_modules(&self) -> bool {
        matches!(self, Self::Flat | Self::Clustered)
    }

    /// Whether cluster-level self loops are kept.
    pub fn self_edges(&self) -> bool {
        matches!(self, Self::ClustersOnlyLoops)
    }

    /// Default color damping for this mode. Cluster-level graphs have few
    /// nodes, so they spread hues more uniformly.
    pub fn default_damping(&self) -> f64 {
        if self.clusters_only() { 2.0 } else { 3.0 }
    }
}

/// Edge weight as a function of hop distance.
///
/// Both schemes decrease monotonically with distance and never drop below
/// 1, so no edge has non-positive weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeightScheme {
    /// `2^(max - d)`: structurally near edges dominate the layout.
    #[default]
    Exponential,
    /// `max - d + 1`: a gentler additive falloff.
    Linear,
}

impl WeightScheme {
    pub fn weight(&self, max_dist: usize, dist: usize) -> u64 {
        let closeness = max_dist.saturating_sub(dist);
        match self {
            Self::Exponential => 1u64 << closeness.min(62),
            Self::Linear => closeness as u64 + 1,
        }
    }
}

/// Options consumed by [`render`].
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub mode: RenderMode,
    /// Emit the `concentrate=true` hint to merge parallel-path edges.
    pub concentrate: bool,
    /// Color damping override; `None` uses the mode default.
    pub damping: Option<f64>,
    pub weights: WeightScheme,
}

/// Per-cluster scope state during one render pass.
///
/// A cluster opens at most once and never reopens after closing; tracking
/// this explicitly avoids mutating the cluster list mid-iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScopeState {
    NotOpened,
    Opened,
    Closed,
}

/// Render the graph as a complete DOT digraph.
///
/// Walks the sorted node names once, opening and closing cluster scopes as
/// the active cluster prefix changes, then emits distance-weighted edges
/// for every edge whose target is itself a node of the rendered graph.
pub fn render(graph: &ModuleGraph, clusters: &[Cluster], options: &RenderOptions) -> Result<String> {
    let damping = options.damping.unwrap_or(options.mode.default_damping());
    if damping < 1.0 {
        return Err(Error::config_invalid(format!(
            "damping {damping} out of range (expected >= 1.0)"
        ))
        .with_operation("render"));
    }

    let mut cluster_names: Vec<ModuleName> = clusters.iter().map(|c| c.name.clone()).collect();
    cluster_names.sort();
    cluster_names.dedup();

    let mode = options.mode;
    let collapsed;
    let rendered: &ModuleGraph = if mode.clusters_only() {
        collapsed = build_cluster_graph(graph, &cluster_names, mode.self_edges());
        &collapsed
    } else {
        graph
    };

    let colors = assign_colors(rendered.nodes(), 0.0, 1.0, damping);
    debug!(
        nodes = rendered.len(),
        clusters = cluster_names.len(),
        mode = mode.as_number(),
        "rendering graph"
    );

    let mut dot = DotBuilder::new("G");
    if options.concentrate {
        dot.attr_raw("concentrate", "true");
    }
    dot.node_style("style=filled,fontname=Helvetica,fontsize=16");
    dot.blank();

    // Node/cluster body. Broader clusters sort before the more specific
    // ones they contain, so opening in ascending order nests correctly.
    let mut scopes: BTreeMap<&ModuleName, ScopeState> = cluster_names
        .iter()
        .map(|c| (c, ScopeState::NotOpened))
        .collect();

    for node in graph.nodes() {
        for (cluster, state) in scopes.iter_mut() {
            if *state == ScopeState::Opened && !node.is_within(cluster) {
                if mode == RenderMode::Clustered {
                    dot.end_cluster();
                }
                *state = ScopeState::Closed;
            }
        }

        for (cluster, state) in scopes.iter_mut() {
            if *state != ScopeState::NotOpened || !node.is_within(cluster) {
                continue;
            }
            match mode {
                RenderMode::Clustered => {
                    dot.start_cluster(&sanitize_id(cluster.as_str()));
                }
                RenderMode::ClustersOnly | RenderMode::ClustersOnlyLoops => {
                    // Only clusters that made it into the collapsed graph
                    // are declared; enclosing ones merely track scope.
                    if let Some(color) = colors.get(*cluster) {
                        dot.node_full(
                            &sanitize_id(cluster.as_str()),
                            &[
                                ("label", &module_label(cluster)),
                                ("fillcolor", &format!("#{color}")),
                            ],
                        );
                    }
                }
                RenderMode::Flat => {}
            }
            *state = ScopeState::Opened;
        }

        if mode.shows_modules() {
            let color = colors
                .get(node)
                .ok_or_else(|| Error::unexpected("color map missing a graph node"))?;
            dot.node_full(
                &sanitize_id(node.as_str()),
                &[
                    ("label", &module_label(node)),
                    ("fillcolor", &format!("#{color}")),
                ],
            );
        }
    }

    for state in scopes.values_mut() {
        if *state == ScopeState::Opened {
            if mode == RenderMode::Clustered {
                dot.end_cluster();
            }
            *state = ScopeState::Closed;
        }
    }

    dot.blank();

    // Weighted edges over the rendered graph.
    let max_dist = max_distance(rendered);
    for (name, targets) in rendered.iter() {
        for target in targets {
            if !rendered.contains(target) {
                continue;
            }
            let weight = options.weights.weight(max_dist, distance(name, target));
            dot.edge_with_attrs(
                &sanitize_id(name.as_str()),
                &sanitize_id(target.as_str()),
                &[("weight", &weight.to_string())],
            );
        }
    }

    Ok(dot.build())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn name(raw: &str) -> ModuleName {
        ModuleName::from_dotted(raw).unwrap()
    }

    fn cluster(raw: &str) -> Cluster {
        Cluster::explicit(name(raw))
    }

    fn two_module_graph() -> ModuleGraph {
        let mut graph = ModuleGraph::new();
        graph.add_edge(&name("pkg.a"), name("pkg.b"));
        graph.add_node(name("pkg.b"));
        graph
    }

    fn opens(output: &str) -> usize {
        output.matches("subgraph cluster_").count()
    }

    fn closes(output: &str) -> usize {
        // The digraph's own closing brace is not a scope close.
        output.lines().filter(|l| l.trim() == "}").count() - 1
    }

    #[test]
    fn test_mode_from_number() {
        assert_eq!(RenderMode::from_number(0).unwrap(), RenderMode::Flat);
        assert_eq!(
            RenderMode::from_number(3).unwrap(),
            RenderMode::ClustersOnlyLoops
        );
        assert!(RenderMode::from_number(4).is_err());
    }

    #[test]
    fn test_weight_floor_is_one() {
        assert_eq!(WeightScheme::Exponential.weight(3, 3), 1);
        assert_eq!(WeightScheme::Linear.weight(3, 3), 1);
        assert_eq!(WeightScheme::Exponential.weight(3, 1), 4);
        assert_eq!(WeightScheme::Linear.weight(3, 1), 3);
    }

    #[test]
    fn test_flat_end_to_end() {
        let graph = two_module_graph();
        let options = RenderOptions::default();
        let output = render(&graph, &[], &options).unwrap();

        assert!(output.starts_with("digraph G {\n"));
        assert!(output.contains("node [style=filled,fontname=Helvetica,fontsize=16];"));
        assert!(output.contains("pkg_a[label=\"pkg.\\na\""));
        assert!(output.contains("pkg_b[label=\"pkg.\\nb\""));
        // Both modules share the pkg cluster, so the single retained edge
        // has the maximum distance and weight floors at 1.
        assert!(output.contains("pkg_a -> pkg_b [weight=\"1\"];"));
        assert!(output.ends_with("}\n"));
        assert_eq!(opens(&output), 0);
    }

    #[test]
    fn test_external_targets_not_rendered() {
        let mut graph = two_module_graph();
        graph.add_edge(&name("pkg.a"), name("os.path"));
        let output = render(&graph, &[], &RenderOptions::default()).unwrap();
        assert!(!output.contains("os_path"));
    }

    #[test]
    fn test_clustered_scope_balance() {
        let mut graph = ModuleGraph::new();
        graph.add_edge(&name("a.x.one"), name("a.y.two"));
        graph.add_node(name("a.y.two"));
        graph.add_node(name("b.three"));
        graph.add_node(name("loose"));

        let clusters = vec![cluster("a"), cluster("a.x"), cluster("a.y"), cluster("b")];
        let options = RenderOptions {
            mode: RenderMode::Clustered,
            ..Default::default()
        };
        let output = render(&graph, &clusters, &options).unwrap();

        assert_eq!(opens(&output), 4);
        assert_eq!(opens(&output), closes(&output));
        assert!(output.contains("subgraph cluster_a {"));
        assert!(output.contains("subgraph cluster_a_x {"));
    }

    #[test]
    fn test_clustered_nesting_order() {
        let mut graph = ModuleGraph::new();
        graph.add_node(name("a.x.one"));
        let clusters = vec![cluster("a.x"), cluster("a")];
        let options = RenderOptions {
            mode: RenderMode::Clustered,
            ..Default::default()
        };
        let output = render(&graph, &clusters, &options).unwrap();
        let outer = output.find("subgraph cluster_a {").unwrap();
        let inner = output.find("subgraph cluster_a_x {").unwrap();
        assert!(outer < inner, "broader cluster must open first");
    }

    #[test]
    fn test_clusters_only() {
        let mut graph = ModuleGraph::new();
        graph.add_edge(&name("a.one"), name("b.two"));
        graph.add_edge(&name("a.one"), name("a.three"));
        graph.add_node(name("a.three"));
        graph.add_node(name("b.two"));

        let clusters = vec![cluster("a"), cluster("b")];
        let options = RenderOptions {
            mode: RenderMode::ClustersOnly,
            ..Default::default()
        };
        let output = render(&graph, &clusters, &options).unwrap();

        // Cluster declarations, no module declarations, no self loop.
        assert!(output.contains("a[label=\"a\""));
        assert!(output.contains("b[label=\"b\""));
        assert!(!output.contains("a_one"));
        assert!(output.contains("a -> b [weight=\"1\"];"));
        assert!(!output.contains("a -> a "));
    }

    #[test]
    fn test_clusters_only_self_loops() {
        let mut graph = ModuleGraph::new();
        graph.add_edge(&name("a.one"), name("a.two"));
        graph.add_node(name("a.two"));

        let clusters = vec![cluster("a")];
        let options = RenderOptions {
            mode: RenderMode::ClustersOnlyLoops,
            ..Default::default()
        };
        let output = render(&graph, &clusters, &options).unwrap();
        assert!(output.contains("a -> a [weight=\"1\"];"));
    }

    #[test]
    fn test_empty_graph_minimal_output() {
        let output = render(&ModuleGraph::new(), &[], &RenderOptions::default()).unwrap();
        assert!(output.starts_with("digraph G {\n"));
        assert!(output.ends_with("}\n"));
        assert!(!output.contains("label="));
        assert!(!output.contains("->"));
    }

    #[test]
    fn test_concentrate_hint() {
        let options = RenderOptions {
            concentrate: true,
            ..Default::default()
        };
        let output = render(&ModuleGraph::new(), &[], &options).unwrap();
        assert!(output.contains("concentrate=true;"));
    }

    #[test]
    fn test_bad_damping_rejected() {
        let options = RenderOptions {
            damping: Some(0.5),
            ..Default::default()
        };
        assert!(render(&ModuleGraph::new(), &[], &options).is_err());
    }
}
