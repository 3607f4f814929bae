//! HTTP handler functions for the query map API.

use actix_web::{HttpResponse, web};
use query_map_server_models::{ApiHealth, ApiMapDefaults, ApiRenderResponse, RenderRequest};

/// Tile layer the console starts with.
const DEFAULT_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

/// Attribution line for the default tile layer.
const DEFAULT_ATTRIBUTION: &str =
    "&copy <a href=\"http://osm.org/copyright\">OpenStreetMap</a> contributors";

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/geo/defaults`
///
/// Returns the initial map display parameters for the console.
pub async fn map_defaults() -> HttpResponse {
    HttpResponse::Ok().json(ApiMapDefaults {
        tile_url: DEFAULT_TILE_URL.to_string(),
        attribution: DEFAULT_ATTRIBUTION.to_string(),
        default_zoom: 19,
        max_zoom: 19,
    })
}

/// `POST /api/geo/render`
///
/// Runs one render pass over the posted result payload and query text.
pub async fn render(body: web::Json<RenderRequest>) -> HttpResponse {
    let request = body.into_inner();
    let map = query_map_geo::render(&request.results, &request.query);
    HttpResponse::Ok().json(ApiRenderResponse::from(map))
}
