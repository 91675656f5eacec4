//! Error types for the Euler engine.
//!
//! Ineligibility and malformed input are reported back to the caller as
//! structured responses. `EdgeNotFound`, `BridgeOnly` and `IncompleteWalk`
//! mean a walker broke its own bookkeeping; they abort the current request only.

use crate::algorithms::eligibility::IneligibleReason;
use thiserror::Error;

/// Result type alias for graph and walker operations.
pub type EulerResult<T> = Result<T, EulerError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EulerError {
    /// Vertex id not present in the graph.
    #[error("Unknown vertex: {0}")]
    UnknownVertex(String),

    /// Edge not present in the graph.
    #[error("Edge not found: {0} - {1}")]
    EdgeNotFound(String, String),

    /// Self-loops have no place in a simple graph.
    #[error("Self-loop on vertex {0} is not supported")]
    SelfLoop(String),

    /// The graph has no Eulerian trail or circuit.
    #[error("No Euler trail/circuit ({reason}). Odd={odd:?}")]
    Ineligible {
        reason: IneligibleReason,
        odd: Vec<String>,
    },

    /// No vertex carries an edge.
    #[error("Graph has no edges to traverse")]
    EmptyGraph,

    /// Fleury found only bridge edges at a vertex of an eligible graph.
    #[error("Only bridge edges remain at vertex {vertex}")]
    BridgeOnly { vertex: String },

    /// A walk ended before consuming every edge.
    #[error("Walk ended with {remaining} edge(s) unconsumed")]
    IncompleteWalk { remaining: usize },

    /// Request body could not be parsed.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl EulerError {
    /// Odd-degree vertices to report alongside the error, if any.
    pub fn odd_vertices(&self) -> &[String] {
        match self {
            EulerError::Ineligible { odd, .. } => odd,
            _ => &[],
        }
    }

    /// True for errors that indicate a defect in the engine itself.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(
            self,
            EulerError::EdgeNotFound(..)
                | EulerError::BridgeOnly { .. }
                | EulerError::IncompleteWalk { .. }
        )
    }
}

impl From<serde_json::Error> for EulerError {
    fn from(err: serde_json::Error) -> Self {
        EulerError::InvalidRequest(err.to_string())
    }
}
