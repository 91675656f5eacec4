//! Graph description as sent by the viewer front end.
//!
//! `{ nodes: [{id, label}], edges: [{id, from, to, label}], isDirected }`.
//! The edge label carries a weight for other tools; the Euler engine ignores
//! it. Ids may be JSON strings or numbers and are normalized to strings.

use crate::graph::UnGraph;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

/// A vertex of the description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSpec {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<Value>,
}

/// An edge of the description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(deserialize_with = "id_string")]
    pub from: String,
    #[serde(deserialize_with = "id_string")]
    pub to: String,
    /// Weight, as label text or number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphDescription {
    #[serde(default)]
    pub nodes: Vec<NodeSpec>,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
    #[serde(default)]
    pub is_directed: bool,
}

impl GraphDescription {
    /// Build the undirected simple graph the Euler engine works on.
    ///
    /// Declared vertices come first, in order, then any endpoint that was
    /// not declared. Directed input collapses each reciprocal pair u->v,
    /// v->u into one edge. Self-loops are dropped.
    pub fn to_undirected(&self) -> UnGraph {
        let mut graph = UnGraph::with_capacity(self.nodes.len());
        for node in &self.nodes {
            graph.add_node(&node.id);
        }
        for edge in &self.edges {
            if graph.add_edge(&edge.from, &edge.to).is_err() {
                warn!(vertex = %edge.from, "skipping self-loop");
            }
        }
        graph
    }
}

/// Accept a string or a number as an id.
fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    value_to_id(Value::deserialize(deserializer)?)
}

/// Like `id_string`, but `null` means no id.
pub(crate) fn optional_id_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        value => value_to_id(value).map(Some),
    }
}

fn value_to_id<E: serde::de::Error>(value: Value) -> Result<String, E> {
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(E::custom(format!(
            "expected string or number id, got {other}"
        ))),
    }
}
