//! Filters raw query results down to location-bearing records.
//!
//! The query executor hands the view a payload shaped
//! `{ "response": { "data": { <key>: [ <record>, ... ] } } }`. Only records
//! whose `location` attribute deserializes to a [`GeoLocation`] survive;
//! everything else is the view's documented empty state, not an error.

use query_map_geo_models::{GeoLocation, LocatedRecord};
use serde::Deserialize;
use serde_json::Value;

use crate::{LOCATION_FIELD, NAME_FIELD};

/// Extracts the location-bearing records from a result payload.
///
/// Order is preserved within each result sequence, and sequences are
/// concatenated in the order their keys appear in the payload. Absent or
/// malformed payloads yield an empty list.
#[must_use]
pub fn extract_located(results: &Value) -> Vec<LocatedRecord> {
    let Some(data) = results
        .get("response")
        .and_then(|response| response.get("data"))
        .and_then(Value::as_object)
    else {
        return Vec::new();
    };

    let mut records = Vec::new();
    for rows in data.values().filter_map(Value::as_array) {
        records.extend(rows.iter().filter_map(located_record));
    }
    records
}

/// Builds a [`LocatedRecord`] from one raw record, or `None` if the record
/// carries no usable `location` attribute.
fn located_record(record: &Value) -> Option<LocatedRecord> {
    let location_value = record.get(LOCATION_FIELD).filter(|value| is_truthy(value))?;

    let location = match GeoLocation::deserialize(location_value) {
        Ok(location) => location,
        Err(err) => {
            log::debug!("skipping record with malformed location: {err}");
            return None;
        }
    };

    let name = record
        .get(NAME_FIELD)
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
        .map(ToString::to_string);

    Some(LocatedRecord { name, location })
}

/// Truthiness of a `location` attribute value. An explicit `null`, `false`,
/// `0`, or `""` means "no location" rather than a malformed one.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(value) => *value,
        Value::Number(number) => number.as_f64().is_some_and(|number| number != 0.0),
        Value::String(string) => !string.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn keeps_only_location_bearing_records_in_order() {
        let results = json!({
            "response": {
                "data": {
                    "q": [
                        { "name": "a", "location": { "type": "Point", "coordinates": [1.0, 2.0] } },
                        { "name": "b" },
                        { "name": "c", "location": { "type": "Point", "coordinates": [3.0, 4.0] } }
                    ]
                }
            }
        });

        let records = extract_located(&results);
        let names: Vec<_> = records.iter().filter_map(|r| r.name.as_deref()).collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn concatenates_sequences_in_key_order() {
        let results = json!({
            "response": {
                "data": {
                    "second": [
                        { "name": "s", "location": { "type": "Point", "coordinates": [0.0, 0.0] } }
                    ],
                    "first": [
                        { "name": "f", "location": { "type": "Point", "coordinates": [0.0, 0.0] } }
                    ]
                }
            }
        });

        let names: Vec<_> = extract_located(&results)
            .into_iter()
            .filter_map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["s", "f"]);
    }

    #[test]
    fn missing_payload_is_empty() {
        assert!(extract_located(&json!({})).is_empty());
        assert!(extract_located(&json!({ "response": {} })).is_empty());
        assert!(extract_located(&json!({ "response": { "data": 5 } })).is_empty());
    }

    #[test]
    fn skips_non_array_result_values() {
        let results = json!({
            "response": {
                "data": {
                    "extensions": { "elapsed": 3 },
                    "q": [
                        { "location": { "type": "Point", "coordinates": [1.0, 2.0] } }
                    ]
                }
            }
        });

        assert_eq!(extract_located(&results).len(), 1);
    }

    #[test]
    fn null_location_is_excluded() {
        let results = json!({
            "response": { "data": { "q": [ { "location": null } ] } }
        });

        assert!(extract_located(&results).is_empty());
    }

    #[test]
    fn malformed_location_is_excluded() {
        let results = json!({
            "response": {
                "data": {
                    "q": [
                        { "location": { "coordinates": [1.0, 2.0] } },
                        { "location": "downtown" },
                        { "location": { "type": "Point", "coordinates": "oops" } }
                    ]
                }
            }
        });

        assert!(extract_located(&results).is_empty());
    }

    #[test]
    fn unrecognized_geometry_kind_is_kept() {
        let results = json!({
            "response": {
                "data": {
                    "q": [
                        { "location": { "type": "GeometryCollection", "geometries": [] } }
                    ]
                }
            }
        });

        let records = extract_located(&results);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].location, GeoLocation::Unrecognized);
    }

    #[test]
    fn non_string_name_uses_no_label() {
        let results = json!({
            "response": {
                "data": {
                    "q": [
                        { "name": 7, "location": { "type": "Point", "coordinates": [1.0, 2.0] } }
                    ]
                }
            }
        });

        assert_eq!(extract_located(&results)[0].name, None);
    }
}
