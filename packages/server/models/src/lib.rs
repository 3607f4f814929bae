#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the query map server.
//!
//! These types are serialized to JSON for the REST API. They are separate
//! from the domain types in `query_map_geo_models` to allow independent
//! evolution of the API contract.

use query_map_geo_models::{RenderedMap, Shape, Viewport};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Service version.
    pub version: String,
}

/// Initial map display parameters the console reads from the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiMapDefaults {
    /// Tile layer URL template.
    pub tile_url: String,
    /// Tile layer attribution line.
    pub attribution: String,
    /// Initial zoom level.
    pub default_zoom: u8,
    /// Maximum zoom level.
    pub max_zoom: u8,
}

/// Request body for a render pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderRequest {
    /// The raw result payload from the query executor, as received.
    #[serde(default)]
    pub results: Value,
    /// The current query text.
    #[serde(default)]
    pub query: String,
}

/// One rendered map, as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRenderResponse {
    /// Result-derived shapes, in extraction order.
    pub shapes: Vec<Shape>,
    /// The supplementary query highlight, if any.
    pub highlight: Option<Shape>,
    /// The viewport framing the result shapes.
    pub viewport: Viewport,
    /// Usage instructions for the empty state.
    pub instructions: Option<String>,
}

impl From<RenderedMap> for ApiRenderResponse {
    fn from(map: RenderedMap) -> Self {
        Self {
            shapes: map.shapes,
            highlight: map.highlight,
            viewport: map.viewport,
            instructions: map.instructions,
        }
    }
}
