//! JSON request/response layer.
//!
//! Every handler takes a JSON request string and returns a JSON response
//! string. Failures come back as `{"status": "error", ...}` and never cross
//! the boundary as exceptions.

use crate::algorithms::bridges::bridges;
use crate::algorithms::eligibility::{analyze, normalize_start, Classification, IneligibleReason};
use crate::algorithms::fleury::{fleury, FleuryConfig};
use crate::algorithms::hierholzer::hierholzer;
use crate::algorithms::EulerTrail;
use crate::description::{optional_id_string, GraphDescription};
use crate::error::{EulerError, EulerResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

/// Walker to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Fleury,
    Hierholzer,
}

/// Body of an Euler request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EulerRequest {
    pub graph: GraphDescription,
    /// Requested start vertex, string or number; blank means "pick one"
    #[serde(default, deserialize_with = "optional_id_string")]
    pub start: Option<String>,
    #[serde(default)]
    pub fleury: FleuryConfig,
}

impl EulerRequest {
    fn start(&self) -> Option<&str> {
        self.start.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }
}

/// Body of a bridge listing request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BridgesRequest {
    pub graph: GraphDescription,
}

/// Response of the walkers.
///
/// Fleury reports its edges as `trail_edges`, Hierholzer as `circuit_edges`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EulerResponse {
    Success {
        start: String,
        odd: Vec<String>,
        kind: Classification,
        #[serde(skip_serializing_if = "Option::is_none")]
        trail_edges: Option<Vec<(String, String)>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        circuit_edges: Option<Vec<(String, String)>>,
    },
    Error {
        message: String,
        odd: Vec<String>,
    },
}

impl EulerResponse {
    fn from_trail(trail: EulerTrail, algorithm: Algorithm) -> Self {
        let (trail_edges, circuit_edges) = match algorithm {
            Algorithm::Fleury => (Some(trail.edges), None),
            Algorithm::Hierholzer => (None, Some(trail.edges)),
        };
        EulerResponse::Success {
            start: trail.start,
            odd: trail.odd,
            kind: trail.kind,
            trail_edges,
            circuit_edges,
        }
    }

    fn from_error(err: &EulerError) -> Self {
        if err.is_invariant_violation() {
            error!(%err, "euler walk aborted");
        }
        EulerResponse::Error {
            message: err.to_string(),
            odd: err.odd_vertices().to_vec(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, EulerResponse::Success { .. })
    }
}

/// Classification report, with the start vertex a walker would use.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub status: &'static str,
    pub kind: Classification,
    pub odd: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<IneligibleReason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BridgesReport {
    pub status: &'static str,
    pub bridges: Vec<(String, String)>,
}

/// Error body shared by the non-walker handlers.
#[derive(Debug, Clone, PartialEq, Serialize)]
struct ErrorReport {
    status: &'static str,
    message: String,
}

/// Run one walker on a parsed request.
pub fn run_euler(request: &EulerRequest, algorithm: Algorithm) -> EulerResponse {
    let graph = request.graph.to_undirected();
    debug!(
        ?algorithm,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "euler request"
    );

    let result = match algorithm {
        Algorithm::Fleury => fleury(&graph, request.start(), &request.fleury),
        Algorithm::Hierholzer => hierholzer(&graph, request.start()),
    };

    match result {
        Ok(trail) => EulerResponse::from_trail(trail, algorithm),
        Err(err) => EulerResponse::from_error(&err),
    }
}

/// Classify the request graph without walking it.
pub fn analyze_request(request: &EulerRequest) -> AnalysisReport {
    let graph = request.graph.to_undirected();
    let analysis = analyze(&graph);
    let start = normalize_start(&graph, &analysis, request.start())
        .map(|idx| graph.name(idx).to_string());

    AnalysisReport {
        status: "success",
        kind: analysis.classification,
        odd: analysis.odd_ids(&graph),
        reason: analysis.reason,
        start,
    }
}

/// List every bridge of the request graph.
pub fn bridges_request(request: &BridgesRequest) -> BridgesReport {
    let graph = request.graph.to_undirected();
    let bridges = bridges(&graph)
        .into_iter()
        .map(|(a, b)| (graph.name(a).to_string(), graph.name(b).to_string()))
        .collect();

    BridgesReport {
        status: "success",
        bridges,
    }
}

/// JSON in, JSON out wrapper around [`run_euler`].
pub fn handle_euler(json: &str, algorithm: Algorithm) -> String {
    let response = match parse::<EulerRequest>(json) {
        Ok(request) => run_euler(&request, algorithm),
        Err(err) => EulerResponse::from_error(&err),
    };
    serde_json::to_string(&response).unwrap_or_default()
}

/// JSON in, JSON out wrapper around [`analyze_request`].
pub fn handle_analyze(json: &str) -> String {
    let body = match parse::<EulerRequest>(json) {
        Ok(request) => serde_json::to_string(&analyze_request(&request)),
        Err(err) => serde_json::to_string(&error_report(&err)),
    };
    body.unwrap_or_default()
}

/// JSON in, JSON out wrapper around [`bridges_request`].
pub fn handle_bridges(json: &str) -> String {
    let body = match parse::<BridgesRequest>(json) {
        Ok(request) => serde_json::to_string(&bridges_request(&request)),
        Err(err) => serde_json::to_string(&error_report(&err)),
    };
    body.unwrap_or_default()
}

fn parse<T: for<'de> Deserialize<'de>>(json: &str) -> EulerResult<T> {
    Ok(serde_json::from_str(json)?)
}

fn error_report(err: &EulerError) -> ErrorReport {
    ErrorReport {
        status: "error",
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn request(edges: &[(&str, &str)], start: &str) -> String {
        let nodes: Vec<Value> = edges
            .iter()
            .flat_map(|(u, v)| [*u, *v])
            .map(|id| json!({"id": id, "label": id}))
            .collect();
        let edges: Vec<Value> = edges
            .iter()
            .enumerate()
            .map(|(i, (u, v))| json!({"id": format!("e{}", i + 1), "from": u, "to": v, "label": "1"}))
            .collect();
        json!({
            "graph": {"nodes": nodes, "edges": edges, "isDirected": false},
            "start": start
        })
        .to_string()
    }

    fn call(json: &str, algorithm: Algorithm) -> Value {
        serde_json::from_str(&handle_euler(json, algorithm)).unwrap()
    }

    #[test]
    fn test_fleury_square() {
        let body = request(&[("A", "B"), ("B", "C"), ("C", "D"), ("D", "A")], "A");
        let out = call(&body, Algorithm::Fleury);

        assert_eq!(out["status"], "success");
        assert_eq!(out["start"], "A");
        assert_eq!(out["kind"], "circuit");
        assert_eq!(out["odd"], json!([]));
        let edges = out["trail_edges"].as_array().unwrap();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[3][1], "A");
        assert!(out.get("circuit_edges").is_none());
    }

    #[test]
    fn test_hierholzer_path_blank_start() {
        let body = request(&[("A", "B"), ("B", "C")], "  ");
        let out = call(&body, Algorithm::Hierholzer);

        assert_eq!(out["status"], "success");
        assert_eq!(out["start"], "A");
        assert_eq!(out["kind"], "trail");
        assert_eq!(out["odd"], json!(["A", "C"]));
        assert_eq!(out["circuit_edges"], json!([["A", "B"], ["B", "C"]]));
    }

    #[test]
    fn test_ineligible_reports_odd() {
        let body = request(&[("A", "B"), ("C", "D")], "");
        for algorithm in [Algorithm::Fleury, Algorithm::Hierholzer] {
            let out = call(&body, algorithm);
            assert_eq!(out["status"], "error");
            assert_eq!(out["odd"], json!(["A", "B", "C", "D"]));
            assert!(out["message"].as_str().unwrap().contains("components"));
        }
    }

    #[test]
    fn test_malformed_json() {
        let out = call("{not json", Algorithm::Fleury);
        assert_eq!(out["status"], "error");
        assert!(out["message"].as_str().unwrap().starts_with("Invalid request"));
    }

    #[test]
    fn test_empty_graph_is_error() {
        let body = json!({"graph": {"nodes": [{"id": "a"}], "edges": []}}).to_string();
        let out = call(&body, Algorithm::Hierholzer);
        assert_eq!(out["status"], "error");
        assert_eq!(out["odd"], json!([]));
    }

    #[test]
    fn test_numeric_ids() {
        let body = json!({
            "graph": {
                "nodes": [{"id": 1}, {"id": 2}, {"id": 3}],
                "edges": [{"from": 1, "to": 2}, {"from": 2, "to": 3}, {"from": 3, "to": 1}]
            },
            "start": "2"
        })
        .to_string();
        let out = call(&body, Algorithm::Fleury);
        assert_eq!(out["start"], "2");
        assert_eq!(out["trail_edges"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_numeric_start() {
        let body = json!({
            "graph": {
                "nodes": [{"id": 1}, {"id": 2}, {"id": 3}],
                "edges": [{"from": 1, "to": 2}, {"from": 2, "to": 3}, {"from": 3, "to": 1}]
            },
            "start": 3
        })
        .to_string();
        for algorithm in [Algorithm::Fleury, Algorithm::Hierholzer] {
            let out = call(&body, algorithm);
            assert_eq!(out["status"], "success");
            assert_eq!(out["start"], "3");
        }

        let body = json!({"graph": {"edges": [{"from": "a", "to": "b"}]}, "start": null}).to_string();
        let out = call(&body, Algorithm::Hierholzer);
        assert_eq!(out["start"], "a");
    }

    #[test]
    fn test_run_euler_typed() {
        let req: EulerRequest =
            serde_json::from_str(&request(&[("A", "B"), ("B", "C"), ("C", "A")], "B")).unwrap();
        let resp = run_euler(&req, Algorithm::Hierholzer);
        assert!(resp.is_success());
        match resp {
            EulerResponse::Success {
                start,
                circuit_edges: Some(edges),
                ..
            } => {
                assert_eq!(start, "B");
                assert_eq!(edges.len(), 3);
            }
            other => panic!("unexpected response {:?}", other),
        }
    }

    #[test]
    fn test_analyze() {
        let out: Value =
            serde_json::from_str(&handle_analyze(&request(&[("A", "B"), ("B", "C")], "B"))).unwrap();
        assert_eq!(out["status"], "success");
        assert_eq!(out["kind"], "trail");
        assert_eq!(out["start"], "A");
        assert!(out.get("reason").is_none());

        let out: Value = serde_json::from_str(&handle_analyze(&request(
            &[("hub", "a"), ("hub", "b"), ("hub", "c")],
            "",
        )))
        .unwrap();
        assert_eq!(out["kind"], "ineligible");
        assert_eq!(out["reason"], json!({"odd_vertices": 4}));
        assert!(out.get("start").is_none());
    }

    #[test]
    fn test_bridges() {
        let out: Value =
            serde_json::from_str(&handle_bridges(&request(&[("A", "B"), ("B", "C")], ""))).unwrap();
        assert_eq!(out["status"], "success");
        assert_eq!(out["bridges"].as_array().unwrap().len(), 2);

        let out: Value = serde_json::from_str(&handle_bridges("42")).unwrap();
        assert_eq!(out["status"], "error");
    }
}
