#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Geometry, shape, and viewport types for the geo result view.
//!
//! Query results store coordinates in GeoJSON order (`[longitude, latitude]`)
//! while the map layer draws latitude-first. The storage-to-display
//! conversion happens in exactly one place, [`LatLng::from`], and every
//! consumer goes through it.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display};

/// A coordinate pair in storage order: `[longitude, latitude]`.
///
/// This is the GeoJSON convention used by the query results themselves.
pub type LonLat = [f64; 2];

/// A coordinate pair in display order: latitude first.
///
/// This is the order the map layer draws in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

impl LatLng {
    /// The fallback map center when there is nothing to frame.
    pub const ORIGIN: Self = Self { lat: 0.0, lng: 0.0 };
}

impl From<LonLat> for LatLng {
    /// The single storage-order to display-order conversion point.
    fn from([lng, lat]: LonLat) -> Self {
        Self { lat, lng }
    }
}

/// The geometry carried by a record's `location` attribute.
///
/// Deserialized from the GeoJSON `type` discriminator. Geometry kinds the
/// view cannot draw land in [`GeoLocation::Unrecognized`]: the record still
/// counts as located, but contributes no shape and no bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GeoLocation {
    /// A single coordinate pair.
    Point {
        /// The point, in storage order.
        coordinates: LonLat,
    },
    /// An ordered sequence of linear rings.
    Polygon {
        /// The rings, each an ordered sequence of storage-order pairs.
        coordinates: Vec<Vec<LonLat>>,
    },
    /// An ordered sequence of polygon coordinate structures.
    MultiPolygon {
        /// One ring sequence per sub-polygon, in input order.
        coordinates: Vec<Vec<Vec<LonLat>>>,
    },
    /// Any other geometry kind.
    #[serde(other)]
    Unrecognized,
}

/// A query result record that carries a usable `location` attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct LocatedRecord {
    /// The record's `name` attribute, when present and a non-empty string.
    pub name: Option<String>,
    /// The record's geometry.
    pub location: GeoLocation,
}

/// Color a shape is drawn in.
///
/// Ordinary results are blue; the supplementary query highlight is red so
/// query-derived shapes are visually distinct from result-derived ones.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ShapeColor {
    /// Default color for result-derived shapes.
    #[default]
    Blue,
    /// Distinguishing color for the query highlight.
    Red,
}

/// A drawable shape, ready for the map layer.
///
/// All coordinates are in display order. `label` is the popup text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Shape {
    /// A point marker.
    Marker {
        /// Marker position.
        position: LatLng,
        /// Popup label.
        label: String,
        /// Draw color.
        color: ShapeColor,
    },
    /// A small fixed-size circle marker, used for point-style query
    /// highlights so they read differently from ordinary markers.
    CircleMarker {
        /// Marker center.
        center: LatLng,
        /// Popup label.
        label: String,
        /// Draw color.
        color: ShapeColor,
    },
    /// A filled/stroked polygon.
    Polygon {
        /// The rings, each an ordered sequence of display-order pairs.
        rings: Vec<Vec<LatLng>>,
        /// Popup label.
        label: String,
        /// Draw color.
        color: ShapeColor,
    },
    /// A circle with a geographic radius.
    ///
    /// The radius is passed through from the query's distance argument
    /// unconverted. It is assumed to be meters, the map layer's native
    /// radius unit; the query language never states the unit.
    Circle {
        /// Circle center.
        center: LatLng,
        /// Radius in meters (assumed).
        radius: f64,
        /// Popup label.
        label: String,
        /// Draw color.
        color: ShapeColor,
    },
}

/// A rectangular region enclosing a set of display-order coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewportBounds {
    /// South-west corner.
    pub south_west: LatLng,
    /// North-east corner.
    pub north_east: LatLng,
}

impl ViewportBounds {
    /// Returns the minimal bounds enclosing `points`, or `None` for an
    /// empty point set.
    #[must_use]
    pub fn enclosing<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = LatLng>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut bounds = Self {
            south_west: first,
            north_east: first,
        };
        for point in points {
            bounds.extend(point);
        }
        Some(bounds)
    }

    fn extend(&mut self, point: LatLng) {
        self.south_west.lat = self.south_west.lat.min(point.lat);
        self.south_west.lng = self.south_west.lng.min(point.lng);
        self.north_east.lat = self.north_east.lat.max(point.lat);
        self.north_east.lng = self.north_east.lng.max(point.lng);
    }

    /// Expands each side by `ratio` times the corresponding span, so shapes
    /// are not drawn flush against the viewport edge.
    #[must_use]
    pub fn pad(self, ratio: f64) -> Self {
        let lat_buffer = (self.north_east.lat - self.south_west.lat) * ratio;
        let lng_buffer = (self.north_east.lng - self.south_west.lng) * ratio;
        Self {
            south_west: LatLng {
                lat: self.south_west.lat - lat_buffer,
                lng: self.south_west.lng - lng_buffer,
            },
            north_east: LatLng {
                lat: self.north_east.lat + lat_buffer,
                lng: self.north_east.lng + lng_buffer,
            },
        }
    }

    /// Returns the midpoint of the bounds.
    #[must_use]
    pub fn center(&self) -> LatLng {
        LatLng {
            lat: f64::midpoint(self.south_west.lat, self.north_east.lat),
            lng: f64::midpoint(self.south_west.lng, self.north_east.lng),
        }
    }
}

/// The region the map should frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    /// Map center. The origin when there is nothing to frame.
    pub center: LatLng,
    /// Enclosing bounds, absent when no geometry contributed coordinates.
    pub bounds: Option<ViewportBounds>,
}

/// Everything the map layer needs to draw one render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedMap {
    /// Result-derived shapes, in extraction order.
    pub shapes: Vec<Shape>,
    /// The supplementary query highlight, when the query text matched a
    /// supported geo predicate.
    pub highlight: Option<Shape>,
    /// The viewport framing the result shapes.
    pub viewport: Viewport,
    /// Usage instructions shown instead of a map when no record carried a
    /// location.
    pub instructions: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverses_storage_order() {
        let point = LatLng::from([1.5, 2.5]);
        assert!((point.lat - 2.5).abs() < f64::EPSILON);
        assert!((point.lng - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn deserializes_point() {
        let location: GeoLocation =
            serde_json::from_str(r#"{"type":"Point","coordinates":[1.0,2.0]}"#).unwrap();
        assert_eq!(
            location,
            GeoLocation::Point {
                coordinates: [1.0, 2.0]
            }
        );
    }

    #[test]
    fn deserializes_polygon_rings() {
        let location: GeoLocation = serde_json::from_str(
            r#"{"type":"Polygon","coordinates":[[[0.0,0.0],[0.0,1.0],[1.0,1.0],[0.0,0.0]]]}"#,
        )
        .unwrap();
        let GeoLocation::Polygon { coordinates } = location else {
            panic!("expected a polygon");
        };
        assert_eq!(coordinates.len(), 1);
        assert_eq!(coordinates[0].len(), 4);
    }

    #[test]
    fn unknown_geometry_kind_is_unrecognized() {
        let location: GeoLocation =
            serde_json::from_str(r#"{"type":"LineString","coordinates":[[0.0,0.0],[1.0,1.0]]}"#)
                .unwrap();
        assert_eq!(location, GeoLocation::Unrecognized);
    }

    #[test]
    fn rejects_location_without_type() {
        let result: Result<GeoLocation, _> = serde_json::from_str(r#"{"coordinates":[1.0,2.0]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn encloses_all_points() {
        let bounds = ViewportBounds::enclosing([
            LatLng { lat: 0.0, lng: 0.0 },
            LatLng {
                lat: 10.0,
                lng: -5.0,
            },
            LatLng { lat: 5.0, lng: 3.0 },
        ])
        .unwrap();
        assert!((bounds.south_west.lat - 0.0).abs() < f64::EPSILON);
        assert!((bounds.south_west.lng - -5.0).abs() < f64::EPSILON);
        assert!((bounds.north_east.lat - 10.0).abs() < f64::EPSILON);
        assert!((bounds.north_east.lng - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn no_bounds_for_empty_point_set() {
        assert_eq!(ViewportBounds::enclosing([]), None);
    }

    #[test]
    fn pads_each_side_by_span_ratio() {
        let bounds = ViewportBounds {
            south_west: LatLng { lat: 0.0, lng: 0.0 },
            north_east: LatLng {
                lat: 10.0,
                lng: 20.0,
            },
        }
        .pad(0.1);
        assert!((bounds.south_west.lat - -1.0).abs() < f64::EPSILON);
        assert!((bounds.south_west.lng - -2.0).abs() < f64::EPSILON);
        assert!((bounds.north_east.lat - 11.0).abs() < f64::EPSILON);
        assert!((bounds.north_east.lng - 22.0).abs() < f64::EPSILON);
    }

    #[test]
    fn padding_preserves_center() {
        let bounds = ViewportBounds {
            south_west: LatLng { lat: 2.0, lng: 4.0 },
            north_east: LatLng { lat: 6.0, lng: 8.0 },
        };
        let center = bounds.center();
        let padded = bounds.pad(0.1).center();
        assert!((center.lat - padded.lat).abs() < 1e-9);
        assert!((center.lng - padded.lng).abs() < 1e-9);
    }

    #[test]
    fn serializes_shape_with_kind_tag() {
        let shape = Shape::Marker {
            position: LatLng { lat: 2.0, lng: 1.0 },
            label: "A".to_string(),
            color: ShapeColor::Blue,
        };
        let json = serde_json::to_value(&shape).unwrap();
        assert_eq!(json["kind"], "marker");
        assert_eq!(json["color"], "blue");
    }
}
