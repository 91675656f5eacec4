//! Core undirected simple graph with adjacency lists.

use crate::algorithms::connectivity;
use crate::error::{EulerError, EulerResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use wasm_bindgen::prelude::*;

/// Undirected simple graph over string vertex ids.
///
/// Neighbor lists keep insertion order, and removing an edge leaves the
/// remaining neighbors in their relative order. That order is the tie-break
/// the walkers use when several edges are valid; it decides which Eulerian
/// trail comes out, never whether one does.
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct UnGraph {
    /// Vertex id strings as given by the caller
    nodes: Vec<String>,

    /// Reverse lookup: id string -> index
    node_index: HashMap<String, usize>,

    /// adj[u] = neighbors of u, in insertion order
    adj: Vec<Vec<usize>>,

    /// Number of undirected edges
    edge_count: usize,
}

/// Serializable graph snapshot for import/export.
#[derive(Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<String>,
    pub edges: Vec<(usize, usize)>,
}

/// An edge taken out of the graph together with its adjacency slots.
///
/// Handing it back to [`UnGraph::reattach_edge`] restores the exact neighbor
/// order, as long as detach/reattach pairs nest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DetachedEdge {
    a: usize,
    b: usize,
    pos_in_a: usize,
    pos_in_b: usize,
}

#[wasm_bindgen]
impl UnGraph {
    /// Create an empty graph.
    #[wasm_bindgen(constructor)]
    pub fn new() -> UnGraph {
        UnGraph::default()
    }

    /// Create a graph with pre-allocated capacity.
    #[wasm_bindgen(js_name = withCapacity)]
    pub fn with_capacity(node_capacity: usize) -> UnGraph {
        UnGraph {
            nodes: Vec::with_capacity(node_capacity),
            node_index: HashMap::with_capacity(node_capacity),
            adj: Vec::with_capacity(node_capacity),
            edge_count: 0,
        }
    }

    /// Add a vertex, returns its index. Idempotent - returns existing index if already present.
    #[wasm_bindgen(js_name = addNode)]
    pub fn add_node(&mut self, id: &str) -> usize {
        if let Some(&idx) = self.node_index.get(id) {
            return idx;
        }
        let idx = self.nodes.len();
        self.nodes.push(id.to_string());
        self.node_index.insert(id.to_string(), idx);
        self.adj.push(Vec::new());
        idx
    }

    /// Add an undirected edge, creating unknown endpoints. Re-adding is a no-op.
    #[wasm_bindgen(js_name = addEdge)]
    pub fn add_edge(&mut self, u: &str, v: &str) -> EulerResult<()> {
        if u == v {
            return Err(EulerError::SelfLoop(u.to_string()));
        }
        let a = self.add_node(u);
        let b = self.add_node(v);
        self.add_edge_at(a, b)
    }

    /// Remove an undirected edge.
    #[wasm_bindgen(js_name = removeEdge)]
    pub fn remove_edge(&mut self, u: &str, v: &str) -> EulerResult<()> {
        let a = self.index_of(u)?;
        let b = self.index_of(v)?;
        self.remove_edge_at(a, b)
    }

    /// Number of vertices.
    #[wasm_bindgen(js_name = nodeCount)]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges.
    #[wasm_bindgen(js_name = edgeCount)]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    #[wasm_bindgen(js_name = hasNode)]
    pub fn has_node(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    #[wasm_bindgen(js_name = hasEdge)]
    pub fn has_edge(&self, u: &str, v: &str) -> bool {
        match (self.node_idx(u), self.node_idx(v)) {
            (Some(a), Some(b)) => self.adj[a].contains(&b),
            _ => false,
        }
    }

    /// Number of incident edges.
    pub fn degree(&self, id: &str) -> EulerResult<usize> {
        Ok(self.degree_at(self.index_of(id)?))
    }

    /// Get vertex id by index.
    #[wasm_bindgen(js_name = nodeId)]
    pub fn node_id(&self, idx: usize) -> Option<String> {
        self.nodes.get(idx).cloned()
    }

    /// Get vertex index by id.
    #[wasm_bindgen(js_name = nodeIdx)]
    pub fn node_idx(&self, id: &str) -> Option<usize> {
        self.node_index.get(id).copied()
    }

    /// Get all vertex ids as JSON array.
    #[wasm_bindgen(js_name = nodeIds)]
    pub fn node_ids(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.nodes).unwrap_or(JsValue::NULL)
    }

    /// Neighbor ids of a vertex, in adjacency order.
    #[wasm_bindgen(js_name = neighborIds)]
    pub fn neighbor_ids(&self, id: &str) -> EulerResult<js_sys::Array> {
        Ok(self.neighbors(id)?.map(JsValue::from_str).collect())
    }

    /// Independent deep copy.
    #[wasm_bindgen(js_name = copy)]
    pub fn copy(&self) -> UnGraph {
        self.clone()
    }

    /// Export graph as JSON snapshot.
    #[wasm_bindgen(js_name = toJson)]
    pub fn to_json(&self) -> String {
        let snapshot = GraphSnapshot {
            nodes: self.nodes.clone(),
            edges: self.edges().collect(),
        };
        serde_json::to_string(&snapshot).unwrap_or_default()
    }

    /// Import graph from JSON snapshot.
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> EulerResult<UnGraph> {
        let snapshot: GraphSnapshot = serde_json::from_str(json)?;

        let mut graph = UnGraph::with_capacity(snapshot.nodes.len());
        for (i, id) in snapshot.nodes.iter().enumerate() {
            // Edge indices refer to snapshot positions, so ids must be unique
            if graph.add_node(id) != i {
                return Err(EulerError::InvalidRequest(format!(
                    "duplicate vertex id {id:?} in snapshot"
                )));
            }
        }
        let n = graph.node_count();
        for (a, b) in snapshot.edges {
            if a >= n || b >= n {
                return Err(EulerError::InvalidRequest(format!(
                    "edge ({a}, {b}) references a vertex outside 0..{n}"
                )));
            }
            graph.add_edge_at(a, b)?;
        }
        Ok(graph)
    }
}

// Rust-side API (not exposed to WASM)
impl UnGraph {
    /// Adjacent vertex ids, in adjacency order. Call again to restart.
    pub fn neighbors(&self, id: &str) -> EulerResult<impl Iterator<Item = &str> + '_> {
        let idx = self.index_of(id)?;
        Ok(self.adj[idx].iter().map(move |&n| self.nodes[n].as_str()))
    }

    /// Vertices reachable from `id`, in breadth-first order (including `id`).
    pub fn connected_component(&self, id: &str) -> EulerResult<Vec<String>> {
        let idx = self.index_of(id)?;
        Ok(connectivity::component_of(self, idx)
            .into_iter()
            .map(|i| self.nodes[i].clone())
            .collect())
    }

    /// All edges as id pairs, each undirected edge once.
    pub fn edge_ids(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.edges()
            .map(|(a, b)| (self.nodes[a].as_str(), self.nodes[b].as_str()))
    }

    pub(crate) fn index_of(&self, id: &str) -> EulerResult<usize> {
        self.node_idx(id)
            .ok_or_else(|| EulerError::UnknownVertex(id.to_string()))
    }

    /// Vertex id by index (internal use; index must be valid).
    pub(crate) fn name(&self, idx: usize) -> &str {
        &self.nodes[idx]
    }

    /// Neighbors slice (internal use).
    pub(crate) fn neighbors_slice(&self, node: usize) -> &[usize] {
        self.adj.get(node).map_or(&[], |v| v.as_slice())
    }

    pub(crate) fn degree_at(&self, node: usize) -> usize {
        self.adj.get(node).map_or(0, |v| v.len())
    }

    pub(crate) fn add_edge_at(&mut self, a: usize, b: usize) -> EulerResult<()> {
        if a == b {
            return Err(EulerError::SelfLoop(self.nodes[a].clone()));
        }
        // Linear scan is fine for typical degree
        if self.adj[a].contains(&b) {
            return Ok(());
        }
        self.adj[a].push(b);
        self.adj[b].push(a);
        self.edge_count += 1;
        Ok(())
    }

    pub(crate) fn remove_edge_at(&mut self, a: usize, b: usize) -> EulerResult<()> {
        self.detach_edge(a, b).map(|_| ())
    }

    /// Remove edge a-b, remembering where it sat in both adjacency lists.
    pub(crate) fn detach_edge(&mut self, a: usize, b: usize) -> EulerResult<DetachedEdge> {
        let pos_in_a = self.adj.get(a).and_then(|ns| ns.iter().position(|&n| n == b));
        let pos_in_b = self.adj.get(b).and_then(|ns| ns.iter().position(|&n| n == a));
        match (pos_in_a, pos_in_b) {
            (Some(pos_in_a), Some(pos_in_b)) => {
                self.adj[a].remove(pos_in_a);
                self.adj[b].remove(pos_in_b);
                self.edge_count -= 1;
                Ok(DetachedEdge {
                    a,
                    b,
                    pos_in_a,
                    pos_in_b,
                })
            }
            _ => Err(EulerError::EdgeNotFound(
                self.node_id(a).unwrap_or_default(),
                self.node_id(b).unwrap_or_default(),
            )),
        }
    }

    /// Put a detached edge back into its original adjacency slots.
    pub(crate) fn reattach_edge(&mut self, edge: DetachedEdge) {
        self.adj[edge.a].insert(edge.pos_in_a, edge.b);
        self.adj[edge.b].insert(edge.pos_in_b, edge.a);
        self.edge_count += 1;
    }

    /// Iterate over all edges as (lower index, higher index).
    pub(crate) fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adj.iter().enumerate().flat_map(|(u, ns)| {
            ns.iter()
                .filter(move |&&v| u < v)
                .map(move |&v| (u, v))
        })
    }

    /// Get vertex count (internal, non-WASM).
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }
}

impl From<EulerError> for JsValue {
    fn from(err: EulerError) -> Self {
        JsError::new(&err.to_string()).into()
    }
}
