//! Bridge (cut edge) detection.
//!
//! Two flavors:
//! - [`is_bridge`] answers for a single edge of a graph that is being consumed
//!   edge by edge. It removes the edge, compares reachability, and puts the
//!   edge back. Fleury asks this once per candidate edge, which is fine for
//!   viewer-sized graphs.
//! - [`bridges`] lists every bridge at once with Tarjan's low-link DFS.

use super::connectivity::component_size;
use crate::error::EulerResult;
use crate::graph::{DetachedEdge, UnGraph};
use std::ops::Deref;

/// Holds an edge out of the graph and puts it back on drop.
struct RemovedEdge<'g> {
    graph: &'g mut UnGraph,
    edge: Option<DetachedEdge>,
}

impl<'g> RemovedEdge<'g> {
    fn new(graph: &'g mut UnGraph, a: usize, b: usize) -> EulerResult<Self> {
        let edge = graph.detach_edge(a, b)?;
        Ok(RemovedEdge {
            graph,
            edge: Some(edge),
        })
    }
}

impl Deref for RemovedEdge<'_> {
    type Target = UnGraph;

    fn deref(&self) -> &UnGraph {
        &*self.graph
    }
}

impl Drop for RemovedEdge<'_> {
    fn drop(&mut self) {
        if let Some(edge) = self.edge.take() {
            self.graph.reattach_edge(edge);
        }
    }
}

/// Check whether removing edge a-b shrinks the set of vertices reachable from `a`.
///
/// The edge must be present. The graph is left exactly as it was, neighbor
/// order included. The last remaining edge of a graph is never a bridge.
pub fn is_bridge(graph: &mut UnGraph, a: usize, b: usize) -> EulerResult<bool> {
    if graph.edge_count() == 1 {
        // Still fail on a missing edge
        let edge = graph.detach_edge(a, b)?;
        graph.reattach_edge(edge);
        return Ok(false);
    }

    let reachable_before = component_size(graph, a);
    let without = RemovedEdge::new(graph, a, b)?;
    let reachable_after = if without.degree_at(a) > 0 {
        component_size(&without, a)
    } else {
        0
    };
    drop(without);

    Ok(reachable_after < reachable_before)
}

/// Find all bridges in the graph.
///
/// # Algorithm
/// Tarjan's DFS with discovery times and low-links:
/// - disc[v]: discovery time of vertex v
/// - low[v]: minimum discovery time reachable from subtree of v
///
/// Tree edge v-u is a bridge iff low[u] > disc[v].
///
/// # Returns
/// Bridges as (lower index, higher index) pairs.
pub fn bridges(graph: &UnGraph) -> Vec<(usize, usize)> {
    let n = graph.len();
    if n == 0 {
        return Vec::new();
    }

    let mut disc = vec![0usize; n];
    let mut low = vec![0usize; n];
    let mut parent = vec![usize::MAX; n];
    let mut visited = vec![false; n];
    let mut bridge_list = Vec::new();
    let mut time = 0usize;

    for start in 0..n {
        if !visited[start] {
            bridge_dfs(
                start,
                graph,
                &mut disc,
                &mut low,
                &mut parent,
                &mut visited,
                &mut bridge_list,
                &mut time,
            );
        }
    }

    bridge_list
}

/// DFS for bridge detection.
#[allow(clippy::too_many_arguments)]
fn bridge_dfs(
    v: usize,
    graph: &UnGraph,
    disc: &mut [usize],
    low: &mut [usize],
    parent: &mut [usize],
    visited: &mut [bool],
    bridges: &mut Vec<(usize, usize)>,
    time: &mut usize,
) {
    visited[v] = true;
    *time += 1;
    disc[v] = *time;
    low[v] = *time;

    for &u in graph.neighbors_slice(v) {
        if !visited[u] {
            parent[u] = v;
            bridge_dfs(u, graph, disc, low, parent, visited, bridges, time);

            low[v] = low[v].min(low[u]);

            if low[u] > disc[v] {
                bridges.push((v.min(u), v.max(u))); // Canonical order
            }
        } else if u != parent[v] {
            low[v] = low[v].min(disc[u]);
        }
    }
}
