//! Reachability over the undirected graph.

use crate::graph::UnGraph;
use std::collections::VecDeque;

/// Get the connected component containing `source`.
///
/// Uses BFS, so vertices come back in discovery order with `source` first.
/// An out-of-range source yields an empty component.
pub fn component_of(graph: &UnGraph, source: usize) -> Vec<usize> {
    let n = graph.len();
    if source >= n {
        return Vec::new();
    }

    let mut visited = vec![false; n];
    let mut result = Vec::new();
    let mut queue = VecDeque::new();

    visited[source] = true;
    result.push(source);
    queue.push_back(source);

    while let Some(v) = queue.pop_front() {
        for &w in graph.neighbors_slice(v) {
            if !visited[w] {
                visited[w] = true;
                result.push(w);
                queue.push_back(w);
            }
        }
    }

    result
}

/// Number of vertices reachable from `source`, including itself.
pub fn component_size(graph: &UnGraph, source: usize) -> usize {
    component_of(graph, source).len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_out_of_range() {
        let graph = UnGraph::new();
        assert!(component_of(&graph, 0).is_empty());
    }

    #[test]
    fn test_component_isolated_vertex() {
        let mut graph = UnGraph::new();
        let a = graph.add_node("a");
        graph.add_edge("b", "c").unwrap();
        assert_eq!(component_of(&graph, a), vec![a]);
    }

    #[test]
    fn test_component_bfs_order() {
        //   a - b - d
        //   |
        //   c
        let mut graph = UnGraph::new();
        graph.add_edge("a", "b").unwrap();
        graph.add_edge("a", "c").unwrap();
        graph.add_edge("b", "d").unwrap();

        let comp = component_of(&graph, 0);
        let names: Vec<&str> = comp.iter().map(|&i| graph.name(i)).collect();
        assert_eq!(names, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_component_two_pieces() {
        let mut graph = UnGraph::new();
        graph.add_edge("a", "b").unwrap();
        graph.add_edge("c", "d").unwrap();

        assert_eq!(component_size(&graph, 0), 2);
        let c = graph.node_idx("c").unwrap();
        let comp = component_of(&graph, c);
        assert_eq!(comp.len(), 2);
        assert!(!comp.contains(&0));
    }
}
