//! Hop distance between hierarchical names.
//!
//! The distance between two names is the number of containment-tree edges
//! separating them through their nearest common ancestor. It drives both the
//! edge-weight heuristic (near modules get pulled visually tighter) and the
//! renderer's normalization via [`max_distance`].

use crate::graph::ModuleGraph;
use crate::name::ModuleName;

/// Number of hops separating `a` and `b` in the containment tree.
///
/// Each side contributes the hops walked from that name up through its
/// ancestors until the other name lies within the current ancestor. The
/// virtual root above the top level contains every name, and the hop onto it
/// is shared by all names, so it is not counted: `a.b` and `c.d` are two
/// hops apart, one per side.
pub fn distance(a: &ModuleName, b: &ModuleName) -> usize {
    hops_until_contains(a, b) + hops_until_contains(b, a)
}

/// Hops from `from` up toward the root until `target` is contained in the
/// current ancestor of `from`.
fn hops_until_contains(target: &ModuleName, from: &ModuleName) -> usize {
    let depth = from.depth();
    for stripped in 0..depth {
        if target.is_within(&from.prefix(depth - stripped)) {
            return stripped;
        }
    }
    depth - 1
}

/// The maximum [`distance`] over all edges whose target is itself a node of
/// `graph`. Returns 0 for an edgeless graph.
pub fn max_distance(graph: &ModuleGraph) -> usize {
    let mut max = 0;
    for (name, targets) in graph.iter() {
        for target in targets {
            if graph.contains(target) {
                max = max.max(distance(name, target));
            }
        }
    }
    max
}
