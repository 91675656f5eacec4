//! Euler engine algorithms.
//!
//! Both walkers consume a private copy of the caller's graph, so running them
//! never mutates the input and repeated calls give the same answer.

pub mod bridges;
pub mod connectivity;
pub mod eligibility;
pub mod fleury;
pub mod hierholzer;

use crate::error::{EulerError, EulerResult};
use crate::graph::UnGraph;
use eligibility::{normalize_start, require_eligible, Classification, EulerAnalysis};
use serde::Serialize;
use tracing::error;

/// An Eulerian trail or circuit found by one of the walkers.
///
/// The full vertex sequence is `start`, then the second vertex of each edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EulerTrail {
    /// Vertex the walk starts from, after normalization
    pub start: String,
    /// Odd-degree vertices: empty for a circuit, the two endpoints for a trail
    pub odd: Vec<String>,
    pub kind: Classification,
    /// Traversed edges as (from, to), in walk order
    pub edges: Vec<(String, String)>,
}

impl EulerTrail {
    /// Vertex the walk ends on.
    pub fn end(&self) -> &str {
        self.edges.last().map_or(self.start.as_str(), |(_, to)| to)
    }

    /// Vertices in visiting order, `edges.len() + 1` of them.
    pub fn vertices(&self) -> Vec<&str> {
        std::iter::once(self.start.as_str())
            .chain(self.edges.iter().map(|(_, to)| to.as_str()))
            .collect()
    }

    pub fn is_circuit(&self) -> bool {
        self.kind == Classification::Circuit
    }
}

/// Eligibility and start vertex, settled before a walk begins.
pub(crate) struct WalkPlan {
    analysis: EulerAnalysis,
    pub(crate) start: usize,
}

impl WalkPlan {
    pub(crate) fn new(graph: &UnGraph, requested: Option<&str>) -> EulerResult<Self> {
        let analysis = require_eligible(graph)?;
        let start = normalize_start(graph, &analysis, requested).ok_or(EulerError::EmptyGraph)?;
        Ok(WalkPlan { analysis, start })
    }

    /// Check that the walk used up `working` and convert it to ids.
    pub(crate) fn finish(
        self,
        graph: &UnGraph,
        working: &UnGraph,
        edges: Vec<(usize, usize)>,
    ) -> EulerResult<EulerTrail> {
        let remaining = working.edge_count();
        if remaining > 0 {
            error!(remaining, "walk stopped before consuming every edge");
            return Err(EulerError::IncompleteWalk { remaining });
        }

        Ok(EulerTrail {
            start: graph.name(self.start).to_string(),
            odd: self.analysis.odd_ids(graph),
            kind: self.analysis.classification,
            edges: edges
                .into_iter()
                .map(|(a, b)| (graph.name(a).to_string(), graph.name(b).to_string()))
                .collect(),
        })
    }
}
