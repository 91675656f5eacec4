//! Fleury's algorithm for Eulerian trails and circuits.
//!
//! Walks edge by edge from the start vertex and, at every step, avoids
//! crossing a bridge of the remaining graph unless it is the only edge left
//! at the current vertex. Each candidate costs one reachability pass, so a
//! full walk is O(E^2).

use super::bridges::is_bridge;
use super::{EulerTrail, WalkPlan};
use crate::error::{EulerError, EulerResult};
use crate::graph::UnGraph;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

/// What to do when every edge at the current vertex is a bridge.
///
/// On an eligible graph that can only happen if bridge detection is wrong.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BridgeFallback {
    /// Abort the walk with [`EulerError::BridgeOnly`]
    #[default]
    Fail,
    /// Take the first neighbor anyway
    TakeFirst,
}

/// Configuration for Fleury's algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleuryConfig {
    #[serde(default)]
    pub bridge_fallback: BridgeFallback,
}

/// Find an Eulerian trail or circuit with Fleury's algorithm.
///
/// # Arguments
/// * `graph` - The graph; left untouched
/// * `start` - Requested start vertex; normalized (see `eligibility::normalize_start`)
/// * `config` - Bridge fallback policy
pub fn fleury(
    graph: &UnGraph,
    start: Option<&str>,
    config: &FleuryConfig,
) -> EulerResult<EulerTrail> {
    let plan = WalkPlan::new(graph, start)?;

    let mut working = graph.copy();
    let mut trail = Vec::with_capacity(working.edge_count());
    let mut cur = plan.start;

    while working.degree_at(cur) > 0 {
        let next = choose_next(&mut working, cur, config)?;
        working.remove_edge_at(cur, next)?;
        trail.push((cur, next));
        cur = next;
    }

    debug!(steps = trail.len(), "fleury walk finished");
    plan.finish(graph, &working, trail)
}

/// Pick the first neighbor whose edge is not a bridge.
fn choose_next(working: &mut UnGraph, cur: usize, config: &FleuryConfig) -> EulerResult<usize> {
    let neighbors = working.neighbors_slice(cur).to_vec();
    if let [only] = neighbors[..] {
        return Ok(only);
    }

    for &v in &neighbors {
        if !is_bridge(working, cur, v)? {
            return Ok(v);
        }
    }

    let vertex = working.name(cur).to_string();
    match (config.bridge_fallback, neighbors.first()) {
        (BridgeFallback::TakeFirst, Some(&first)) => {
            warn!(%vertex, "only bridges remain, taking the first neighbor");
            Ok(first)
        }
        _ => {
            error!(%vertex, "only bridges remain on an eligible graph");
            Err(EulerError::BridgeOnly { vertex })
        }
    }
}
