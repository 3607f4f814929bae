//! Best-effort geo predicate recognition over raw query text.
//!
//! The query editor owns the query string; this module only pattern-matches
//! the first `func: <name>(<args>)` occurrence against the four geo
//! predicates the view knows how to draw (`near`, `within`, `contains`,
//! `intersects`). Later predicates in the same query are ignored. The result
//! is a supplementary highlight shape showing the literal query argument —
//! it is not a query result, and it is drawn red so it cannot be mistaken
//! for one.

use std::sync::LazyLock;

use query_map_geo_models::{LatLng, LonLat, Shape, ShapeColor};
use regex::Regex;
use strum_macros::{Display, EnumString};
use thiserror::Error;

use crate::shapes::polygon_shape;

/// Color used for query-derived highlight shapes.
pub const HIGHLIGHT_COLOR: ShapeColor = ShapeColor::Red;

/// Matches the first `func: <name>(<args>)` call in a query.
static GEO_FUNC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"func:\s*([A-Za-z_][A-Za-z0-9_]*)\s*\(([^)]*)").expect("valid regex")
});

/// Matches `near` arguments: a coordinate array literal and a distance.
static NEAR_ARGS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)(\[.*\])\s*,\s*(\d+)").expect("valid regex"));

/// Matches the coordinate array literal leading the region predicates'
/// arguments.
static COORDINATES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)(\[.*)").expect("valid regex"));

/// A geo predicate the view can draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum GeoPredicate {
    /// Distance search around a point.
    Near,
    /// Containment of the results within a region.
    Within,
    /// Containment of a point or region by the results.
    Contains,
    /// Intersection with a region.
    Intersects,
}

/// Outcome of scanning query text for a geo function call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeoFunctionCall {
    /// The first `func:` call names a supported geo predicate.
    Recognized {
        /// Which predicate was called.
        predicate: GeoPredicate,
        /// The raw argument text, up to the closing parenthesis.
        args: String,
    },
    /// No `func:` call, or one naming an unsupported predicate.
    Unrecognized,
}

/// Why a recognized predicate's arguments could not be drawn.
#[derive(Debug, Error)]
pub enum HighlightError {
    /// `near` arguments did not match `[coordinate], distance`.
    #[error("near() arguments did not match `[coordinate], distance`: {args}")]
    MalformedNearArguments {
        /// The offending argument text.
        args: String,
    },
    /// No coordinate array literal in the argument text.
    #[error("no coordinate array literal in arguments: {args}")]
    MissingCoordinates {
        /// The offending argument text.
        args: String,
    },
    /// A coordinate literal that is not valid JSON of the expected shape.
    #[error("malformed coordinate literal: {0}")]
    BadCoordinateLiteral(#[from] serde_json::Error),

    /// A distance literal that does not fit a float.
    #[error("malformed distance literal: {0}")]
    BadDistance(#[from] std::num::ParseFloatError),
}

/// Scans query text for its first geo function call.
#[must_use]
pub fn recognize(query_text: &str) -> GeoFunctionCall {
    let Some(captures) = GEO_FUNC_RE.captures(query_text) else {
        return GeoFunctionCall::Unrecognized;
    };
    let Ok(predicate) = captures[1].parse::<GeoPredicate>() else {
        return GeoFunctionCall::Unrecognized;
    };

    GeoFunctionCall::Recognized {
        predicate,
        args: captures[2].to_string(),
    }
}

/// Produces the supplementary highlight shape for the current query text,
/// if its first geo function call can be drawn.
///
/// Malformed arguments never escape as an error: the highlight is simply
/// omitted and the reason logged at debug level.
#[must_use]
pub fn highlight_for_query(query_text: &str) -> Option<Shape> {
    match recognize(query_text) {
        GeoFunctionCall::Recognized { predicate, args } => {
            match build_highlight(predicate, &args) {
                Ok(shape) => Some(shape),
                Err(err) => {
                    log::debug!("no highlight for {predicate}({args}): {err}");
                    None
                }
            }
        }
        GeoFunctionCall::Unrecognized => None,
    }
}

fn build_highlight(predicate: GeoPredicate, args: &str) -> Result<Shape, HighlightError> {
    match predicate {
        GeoPredicate::Near => near_highlight(args),
        GeoPredicate::Within | GeoPredicate::Contains | GeoPredicate::Intersects => {
            region_highlight(predicate, args)
        }
    }
}

/// Draws `near([lon, lat], distance)` as a circle of the given radius.
///
/// The distance is rendered as-is. The query language never states its
/// unit; it is assumed to be meters, which is also the map layer's native
/// radius unit.
fn near_highlight(args: &str) -> Result<Shape, HighlightError> {
    let captures =
        NEAR_ARGS_RE
            .captures(args)
            .ok_or_else(|| HighlightError::MalformedNearArguments {
                args: args.to_string(),
            })?;

    let coordinates: LonLat = serde_json::from_str(&captures[1])?;
    let radius: f64 = captures[2].parse()?;

    Ok(Shape::Circle {
        center: LatLng::from(coordinates),
        radius,
        label: highlight_label(GeoPredicate::Near, args),
        color: HIGHLIGHT_COLOR,
    })
}

/// Draws `within`/`contains`/`intersects` arguments as either a polygon or
/// a point-style circle marker, decided by a textual heuristic: a
/// triple-nested array opening token means polygon coordinates.
fn region_highlight(predicate: GeoPredicate, args: &str) -> Result<Shape, HighlightError> {
    let captures = COORDINATES_RE
        .captures(args)
        .ok_or_else(|| HighlightError::MissingCoordinates {
            args: args.to_string(),
        })?;

    let literal: String = captures[1]
        .chars()
        .filter(|character| !character.is_whitespace())
        .collect();
    let label = highlight_label(predicate, args);

    if literal.contains("[[[") {
        let rings: Vec<Vec<LonLat>> = serde_json::from_str(&literal)?;
        Ok(polygon_shape(&rings, label, HIGHLIGHT_COLOR))
    } else {
        let center: LonLat = serde_json::from_str(&literal)?;
        Ok(Shape::CircleMarker {
            center: LatLng::from(center),
            label,
            color: HIGHLIGHT_COLOR,
        })
    }
}

/// The literal `name(args)` call text, used verbatim as the popup label.
fn highlight_label(predicate: GeoPredicate, args: &str) -> String {
    format!("{predicate}({args})")
}
