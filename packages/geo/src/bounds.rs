//! Computes the viewport framing a set of located records.

use query_map_geo_models::{GeoLocation, LatLng, LocatedRecord, LonLat, Viewport, ViewportBounds};

/// Relative padding applied to each side of the computed bounds.
const PADDING_RATIO: f64 = 0.1;

/// Computes the viewport enclosing every leaf coordinate of every record.
///
/// An empty record list skips bounds computation entirely and centers the
/// map on the origin. The same fallback applies when no record's geometry
/// contributes a coordinate (all kinds unrecognized).
#[must_use]
pub fn viewport_for(records: &[LocatedRecord]) -> Viewport {
    if records.is_empty() {
        return Viewport {
            center: LatLng::ORIGIN,
            bounds: None,
        };
    }

    let bounds = ViewportBounds::enclosing(
        records
            .iter()
            .flat_map(|record| leaf_coordinates(&record.location)),
    )
    .map(|bounds| bounds.pad(PADDING_RATIO));

    Viewport {
        center: bounds.map_or(LatLng::ORIGIN, |bounds| bounds.center()),
        bounds,
    }
}

/// Every leaf coordinate of a geometry, converted to display order.
fn leaf_coordinates(location: &GeoLocation) -> Vec<LatLng> {
    match location {
        GeoLocation::Point { coordinates } => vec![LatLng::from(*coordinates)],
        GeoLocation::Polygon { coordinates } => ring_coordinates(coordinates),
        GeoLocation::MultiPolygon { coordinates } => coordinates
            .iter()
            .flat_map(|polygon| ring_coordinates(polygon))
            .collect(),
        GeoLocation::Unrecognized => Vec::new(),
    }
}

fn ring_coordinates(rings: &[Vec<LonLat>]) -> Vec<LatLng> {
    rings
        .iter()
        .flatten()
        .copied()
        .map(LatLng::from)
        .collect()
}
