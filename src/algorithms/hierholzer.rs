//! Hierholzer's algorithm for Eulerian trails and circuits.
//!
//! Follows unused edges until stuck, then backtracks along a stack, emitting
//! vertices as they run out of edges. Needs no bridge tests and runs in O(E)
//! neighbor steps. Starting at an odd vertex turns the circuit search into a
//! trail search.

use super::{EulerTrail, WalkPlan};
use crate::error::EulerResult;
use crate::graph::UnGraph;
use tracing::debug;

/// Find an Eulerian trail or circuit with Hierholzer's algorithm.
///
/// Vertices complete in reverse walk order; the result is flipped so the
/// first edge leaves the reported start vertex.
pub fn hierholzer(graph: &UnGraph, start: Option<&str>) -> EulerResult<EulerTrail> {
    let plan = WalkPlan::new(graph, start)?;

    let mut working = graph.copy();
    let mut stack = vec![plan.start];
    let mut circuit = Vec::with_capacity(working.edge_count() + 1);

    while let Some(&v) = stack.last() {
        match working.neighbors_slice(v).first().copied() {
            Some(u) => {
                working.remove_edge_at(v, u)?;
                stack.push(u);
            }
            None => {
                circuit.push(v);
                stack.pop();
            }
        }
    }

    circuit.reverse();
    let edges: Vec<(usize, usize)> = circuit.windows(2).map(|w| (w[0], w[1])).collect();

    debug!(steps = edges.len(), "hierholzer walk finished");
    plan.finish(graph, &working, edges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::eligibility::{Classification, IneligibleReason};
    use crate::error::EulerError;

    fn make_graph(edges: &[(&str, &str)]) -> UnGraph {
        let mut g = UnGraph::new();
        for (u, v) in edges {
            g.add_edge(u, v).unwrap();
        }
        g
    }

    fn assert_valid_walk(graph: &UnGraph, trail: &EulerTrail) {
        assert_eq!(trail.edges.len(), graph.edge_count());
        let mut h = graph.copy();
        let mut cur = trail.start.as_str();
        for (from, to) in &trail.edges {
            assert_eq!(from, cur);
            h.remove_edge(from, to).unwrap();
            cur = to.as_str();
        }
        assert_eq!(h.edge_count(), 0);
    }

    #[test]
    fn test_square_circuit() {
        let g = make_graph(&[("A", "B"), ("B", "C"), ("C", "D"), ("D", "A")]);
        let trail = hierholzer(&g, Some("C")).unwrap();

        assert_eq!(trail.kind, Classification::Circuit);
        assert_eq!(trail.start, "C");
        assert_eq!(trail.end(), "C");
        assert_eq!(trail.edges.len(), 4);
        assert_valid_walk(&g, &trail);
    }

    #[test]
    fn test_path_trail() {
        let g = make_graph(&[("A", "B"), ("B", "C")]);
        let trail = hierholzer(&g, Some("B")).unwrap();

        assert_eq!(trail.kind, Classification::Trail);
        assert_eq!(trail.start, "A");
        assert_eq!(trail.vertices(), vec!["A", "B", "C"]);
        assert_valid_walk(&g, &trail);
    }

    #[test]
    fn test_splices_subcircuit() {
        // The first greedy pass from a closes a-b-c-a before visiting the
        // c-d-e-c loop; the backtrack has to splice it in.
        let g = make_graph(&[
            ("a", "b"),
            ("b", "c"),
            ("c", "a"),
            ("c", "d"),
            ("d", "e"),
            ("e", "c"),
        ]);
        let trail = hierholzer(&g, Some("a")).unwrap();
        assert!(trail.is_circuit());
        assert_eq!(trail.end(), "a");
        assert_valid_walk(&g, &trail);
    }

    #[test]
    fn test_tail_trail() {
        let g = make_graph(&[("b", "t"), ("a", "b"), ("b", "c"), ("c", "a")]);
        let trail = hierholzer(&g, None).unwrap();
        assert_eq!(trail.start, "b");
        assert_eq!(trail.end(), "t");
        assert_valid_walk(&g, &trail);
    }

    #[test]
    fn test_four_odd_ineligible() {
        let g = make_graph(&[("hub", "l1"), ("hub", "l2"), ("hub", "l3")]);
        match hierholzer(&g, None) {
            Err(EulerError::Ineligible { reason, odd }) => {
                assert_eq!(reason, IneligibleReason::OddVertices(4));
                assert_eq!(odd, vec!["hub", "l1", "l2", "l3"]);
            }
            other => panic!("expected ineligible, got {:?}", other),
        }
    }

    #[test]
    fn test_input_not_mutated() {
        let g = make_graph(&[("A", "B"), ("B", "C"), ("C", "D"), ("D", "A")]);
        let first = hierholzer(&g, None).unwrap();
        let second = hierholzer(&g, None).unwrap();
        assert_eq!(first, second);
        assert_eq!(g.edge_count(), 4);
        assert_eq!(g.degree("A"), Ok(2));
    }
}
