#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Turns graph query results and query text into a drawable map description.
//!
//! One render pass is a pure function of two inputs: the current result
//! payload and the current query text. [`render`] runs the full pipeline:
//!
//! 1. [`extract`] — filter the payload down to records carrying a usable
//!    `location` attribute.
//! 2. [`shapes`] — classify each record's geometry into drawable shapes.
//! 3. [`bounds`] — compute the viewport framing every shape.
//! 4. [`query`] — best-effort parse of the query text for a supported geo
//!    predicate, drawn as a supplementary highlight shape.
//!
//! Nothing here can fail: malformed input degrades to an empty map with
//! usage instructions, never an error.

pub mod bounds;
pub mod extract;
pub mod query;
pub mod shapes;

use query_map_geo_models::{RenderedMap, ShapeColor};
use serde_json::Value;

/// Attribute a record must carry to appear on the map.
pub const LOCATION_FIELD: &str = "location";

/// Attribute used as the popup label when present.
pub const NAME_FIELD: &str = "name";

/// Message shown instead of a map when no record carries a location.
pub const USAGE_INSTRUCTIONS: &str = "Your objects must contain a predicate or alias named \
     'location' to use the geo display. To show a label, use a predicate or alias named 'name'.";

/// Runs one full render pass over the result payload and query text.
#[must_use]
pub fn render(results: &Value, query_text: &str) -> RenderedMap {
    let records = extract::extract_located(results);

    let shapes = records
        .iter()
        .flat_map(|record| shapes::shapes_for_record(record, ShapeColor::Blue))
        .collect();
    let viewport = bounds::viewport_for(&records);
    let highlight = query::highlight_for_query(query_text);
    let instructions = records
        .is_empty()
        .then(|| USAGE_INSTRUCTIONS.to_string());

    RenderedMap {
        shapes,
        highlight,
        viewport,
        instructions,
    }
}
