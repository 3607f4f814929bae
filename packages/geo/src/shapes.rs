//! Maps a record's geometry to drawable shapes.

use query_map_geo_models::{GeoLocation, LatLng, LocatedRecord, LonLat, Shape, ShapeColor};

/// Label for a point record without a `name` attribute.
pub const UNNAMED_MARKER: &str = "Unnamed Marker";

/// Label for a polygon record without a `name` attribute.
pub const UNNAMED_POLYGON: &str = "Unnamed Polygon";

/// Base label for a multi-polygon record without a `name` attribute.
pub const UNNAMED_MULTI_POLYGON: &str = "Unnamed MultiPolygon";

/// Produces the drawable shapes for one located record.
///
/// A point becomes a marker and a polygon a single polygon draw. A
/// multi-polygon decomposes into one polygon draw per sub-polygon, in input
/// order, each labeled with the parent label and a zero-based index.
/// Unrecognized geometry produces nothing.
#[must_use]
pub fn shapes_for_record(record: &LocatedRecord, color: ShapeColor) -> Vec<Shape> {
    match &record.location {
        GeoLocation::Point { coordinates } => vec![Shape::Marker {
            position: LatLng::from(*coordinates),
            label: record
                .name
                .clone()
                .unwrap_or_else(|| UNNAMED_MARKER.to_string()),
            color,
        }],
        GeoLocation::Polygon { coordinates } => vec![polygon_shape(
            coordinates,
            record
                .name
                .clone()
                .unwrap_or_else(|| UNNAMED_POLYGON.to_string()),
            color,
        )],
        GeoLocation::MultiPolygon { coordinates } => {
            let base = record.name.as_deref().unwrap_or(UNNAMED_MULTI_POLYGON);
            coordinates
                .iter()
                .enumerate()
                .map(|(index, rings)| polygon_shape(rings, format!("{base} {index}"), color))
                .collect()
        }
        GeoLocation::Unrecognized => Vec::new(),
    }
}

/// Builds a polygon shape from storage-order rings.
pub(crate) fn polygon_shape(rings: &[Vec<LonLat>], label: String, color: ShapeColor) -> Shape {
    Shape::Polygon {
        rings: rings
            .iter()
            .map(|ring| ring.iter().copied().map(LatLng::from).collect())
            .collect(),
        label,
        color,
    }
}
