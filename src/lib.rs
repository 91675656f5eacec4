//! Eulerian trail and circuit engine for the graph viewer.
//!
//! Decides whether an undirected graph has an Eulerian circuit or trail and
//! builds one with Fleury's or Hierholzer's algorithm. Compiled to WASM, the
//! exported functions take the viewer's JSON request and return a JSON
//! response; they never throw.

pub mod algorithms;
pub mod api;
pub mod description;
pub mod error;
pub mod graph;

pub use algorithms::eligibility::{analyze, Classification, EulerAnalysis, IneligibleReason};
pub use algorithms::fleury::{fleury, BridgeFallback, FleuryConfig};
pub use algorithms::hierholzer::hierholzer;
pub use algorithms::EulerTrail;
pub use api::{Algorithm, EulerRequest, EulerResponse};
pub use description::GraphDescription;
pub use error::{EulerError, EulerResult};
pub use graph::UnGraph;

use wasm_bindgen::prelude::*;

/// Module initialization: route panics to the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Eulerian trail/circuit by Fleury's algorithm.
///
/// Request: `{ graph, start? }`. Response: `{ status, start, odd, kind, trail_edges }`
/// or `{ status: "error", message, odd }`.
#[wasm_bindgen(js_name = eulerFleury)]
pub fn euler_fleury(request_json: &str) -> String {
    api::handle_euler(request_json, Algorithm::Fleury)
}

/// Eulerian trail/circuit by Hierholzer's algorithm.
///
/// Same request as [`euler_fleury`]; edges are returned as `circuit_edges`.
#[wasm_bindgen(js_name = eulerHierholzer)]
pub fn euler_hierholzer(request_json: &str) -> String {
    api::handle_euler(request_json, Algorithm::Hierholzer)
}

/// Classification, odd vertices and the start vertex a walk would use.
#[wasm_bindgen(js_name = analyzeEuler)]
pub fn analyze_euler(request_json: &str) -> String {
    api::handle_analyze(request_json)
}

/// All bridges of the request graph.
#[wasm_bindgen(js_name = findBridges)]
pub fn find_bridges(request_json: &str) -> String {
    api::handle_bridges(request_json)
}
