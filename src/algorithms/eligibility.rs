//! Eulerian eligibility of an undirected graph.
//!
//! A finite undirected graph has an Eulerian circuit iff every vertex has even
//! degree and all edge-bearing vertices share one connected component. It has
//! an open Eulerian trail iff exactly two vertices have odd degree under the
//! same connectivity condition. Isolated vertices never matter.

use super::connectivity::component_of;
use crate::error::{EulerError, EulerResult};
use crate::graph::UnGraph;
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// What kind of Euler structure the graph admits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Ineligible,
    Circuit,
    Trail,
}

/// Why a graph is ineligible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IneligibleReason {
    /// No vertex carries an edge
    NoEdges,
    /// Edge-bearing vertices span more than one component
    Disconnected,
    /// Odd-degree count other than 0 or 2
    OddVertices(usize),
}

impl fmt::Display for IneligibleReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IneligibleReason::NoEdges => write!(f, "graph has no edges"),
            IneligibleReason::Disconnected => write!(f, "edges span several components"),
            IneligibleReason::OddVertices(n) => write!(f, "{n} odd-degree vertices"),
        }
    }
}

/// Result of [`analyze`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EulerAnalysis {
    pub classification: Classification,
    /// Odd-degree vertex indices in graph order. Always filled, even when ineligible.
    pub odd: Vec<usize>,
    pub reason: Option<IneligibleReason>,
}

impl EulerAnalysis {
    fn ineligible(odd: Vec<usize>, reason: IneligibleReason) -> Self {
        EulerAnalysis {
            classification: Classification::Ineligible,
            odd,
            reason: Some(reason),
        }
    }

    pub fn is_eligible(&self) -> bool {
        self.classification != Classification::Ineligible
    }

    /// Odd-degree vertex ids.
    pub fn odd_ids(&self, graph: &UnGraph) -> Vec<String> {
        self.odd.iter().map(|&i| graph.name(i).to_string()).collect()
    }
}

/// Classify the graph as circuit, trail, or ineligible.
pub fn analyze(graph: &UnGraph) -> EulerAnalysis {
    let n = graph.len();
    let odd: Vec<usize> = (0..n).filter(|&v| graph.degree_at(v) % 2 == 1).collect();

    let Some(first) = (0..n).find(|&v| graph.degree_at(v) > 0) else {
        return EulerAnalysis::ineligible(odd, IneligibleReason::NoEdges);
    };

    let mut in_component = vec![false; n];
    for v in component_of(graph, first) {
        in_component[v] = true;
    }
    if (0..n).any(|v| graph.degree_at(v) > 0 && !in_component[v]) {
        return EulerAnalysis::ineligible(odd, IneligibleReason::Disconnected);
    }

    let classification = match odd.len() {
        0 => Classification::Circuit,
        2 => Classification::Trail,
        count => return EulerAnalysis::ineligible(odd, IneligibleReason::OddVertices(count)),
    };

    EulerAnalysis {
        classification,
        odd,
        reason: None,
    }
}

/// Analyze and turn ineligibility into an error carrying the odd vertex ids.
pub fn require_eligible(graph: &UnGraph) -> EulerResult<EulerAnalysis> {
    let analysis = analyze(graph);
    match analysis.reason {
        None => Ok(analysis),
        Some(IneligibleReason::NoEdges) => Err(EulerError::EmptyGraph),
        Some(reason) => Err(EulerError::Ineligible {
            reason,
            odd: analysis.odd_ids(graph),
        }),
    }
}

/// Pick the vertex a walk starts from.
///
/// A trail can only begin at an odd-degree vertex, so any other request is
/// overridden to the first odd vertex. For a circuit, an unknown or isolated
/// request falls back to the first edge-bearing vertex. Returns `None` for an
/// ineligible analysis.
pub fn normalize_start(
    graph: &UnGraph,
    analysis: &EulerAnalysis,
    requested: Option<&str>,
) -> Option<usize> {
    let requested = requested.and_then(|id| graph.node_idx(id));

    let start = match analysis.classification {
        Classification::Ineligible => return None,
        Classification::Trail => match requested {
            Some(v) if analysis.odd.contains(&v) => v,
            _ => *analysis.odd.first()?,
        },
        Classification::Circuit => match requested {
            Some(v) if graph.degree_at(v) > 0 => v,
            _ => (0..graph.len()).find(|&v| graph.degree_at(v) > 0)?,
        },
    };

    if requested != Some(start) {
        debug!(start = graph.name(start), "start vertex overridden");
    }
    Some(start)
}
