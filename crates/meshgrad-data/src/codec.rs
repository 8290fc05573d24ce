// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Entry points of the gradient document codec.
//!
//! Encoding checks the closed color-space set and the finiteness of every
//! number up front so that an unrepresentable value surfaces as
//! [`EncodeError::UnsupportedValue`] rather than an opaque serializer message
//! or a JSON `null`. Decoding parses the document and then
//! walks it strictly; every failure is returned as a typed [`DecodeError`].
//!
//! The codec is pure: no I/O, no shared state.

use crate::color_space::ColorSpaceTag;
use crate::decode::FromJson;
use crate::error::{DecodeError, EncodeError};
use crate::gradient::GradientData;
use crate::locations::Locations;
use serde_json::Value;

/// Path of the first non-finite number in `data`, if any.
fn first_non_finite(data: &GradientData) -> Option<String> {
    let location = match &data.locations {
        Locations::Points(points) => points
            .iter()
            .position(|p| !p.is_finite())
            .map(|i| format!("locations.points[{i}]")),
        Locations::BezierPoints(points) => points
            .iter()
            .position(|p| !p.to_array().iter().all(|v| v.is_finite()))
            .map(|i| format!("locations.bezierPoints[{i}]")),
    };
    location
        .or_else(|| {
            data.colors
                .iter()
                .position(|c| !c.is_finite())
                .map(|i| format!("colors[{i}]"))
        })
        .or_else(|| (!data.background.is_finite()).then(|| "background".to_string()))
}

fn check_encodable(data: &GradientData) -> Result<(), EncodeError> {
    ColorSpaceTag::try_from(data.color_space)?;
    match first_non_finite(data) {
        Some(path) => {
            log::error!("Refusing to encode non-finite value at `{path}`");
            Err(EncodeError::UnsupportedValue(format!(
                "non-finite number at `{path}`"
            )))
        }
        None => Ok(()),
    }
}

fn log_encode(data: &GradientData) {
    log::debug!(
        "Encoding {}x{} gradient ({:?} locations, {} colors)",
        data.width,
        data.height,
        data.locations.tag(),
        data.colors.len()
    );
}

/// Encodes `data` into a JSON tree.
pub fn to_value(data: &GradientData) -> Result<Value, EncodeError> {
    check_encodable(data)?;
    log_encode(data);
    serde_json::to_value(data).map_err(|e| EncodeError::Serialize(e.to_string()))
}

/// Encodes `data` into compact JSON bytes.
pub fn to_vec(data: &GradientData) -> Result<Vec<u8>, EncodeError> {
    check_encodable(data)?;
    log_encode(data);
    serde_json::to_vec(data).map_err(|e| EncodeError::Serialize(e.to_string()))
}

/// Encodes `data` into indented JSON bytes.
pub fn to_vec_pretty(data: &GradientData) -> Result<Vec<u8>, EncodeError> {
    check_encodable(data)?;
    log_encode(data);
    serde_json::to_vec_pretty(data).map_err(|e| EncodeError::Serialize(e.to_string()))
}

/// Decodes a gradient from an already parsed JSON tree.
pub fn from_value(value: &Value) -> Result<GradientData, DecodeError> {
    let data = GradientData::from_json(value, "")?;
    log::debug!(
        "Decoded {}x{} gradient ({:?} locations)",
        data.width,
        data.height,
        data.locations.tag()
    );
    Ok(data)
}

/// Decodes a gradient from JSON bytes.
pub fn from_slice(bytes: &[u8]) -> Result<GradientData, DecodeError> {
    let value: Value =
        serde_json::from_slice(bytes).map_err(|e| DecodeError::Syntax(e.to_string()))?;
    from_value(&value)
}

/// Decodes a gradient from a JSON string.
pub fn from_str(text: &str) -> Result<GradientData, DecodeError> {
    from_slice(text.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locations::{BezierPoint, Locations};
    use meshgrad_core::{ColorSpace, LinearRgba, Vec2};
    use serde_json::json;

    fn two_by_two() -> GradientData {
        GradientData::new(
            2,
            2,
            Locations::Points(vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(1.0, 0.0),
                Vec2::new(0.0, 1.0),
                Vec2::new(1.0, 1.0),
            ]),
            vec![LinearRgba::BLACK; 4],
            LinearRgba::BLACK,
            false,
            ColorSpace::Device,
        )
    }

    fn black() -> Value {
        json!({ "r": 0.0, "g": 0.0, "b": 0.0, "a": 1.0 })
    }

    #[test]
    fn test_two_by_two_encodes_documented_shape() {
        let value = to_value(&two_by_two()).unwrap();
        assert_eq!(
            value,
            json!({
                "width": 2,
                "height": 2,
                "colors": [black(), black(), black(), black()],
                "background": black(),
                "smoothsColors": false,
                "colorSpace": "device",
                "locations": { "points": [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0]] }
            })
        );
        assert_eq!(from_value(&value).unwrap(), two_by_two());
    }

    #[test]
    fn test_keys_are_written_in_wire_order() {
        let value = to_value(&two_by_two()).unwrap();
        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, crate::gradient::FIELDS);

        let text = String::from_utf8(to_vec(&two_by_two()).unwrap()).unwrap();
        let smooths = text.find("\"smoothsColors\"").unwrap();
        let locations = text.find("\"locations\"").unwrap();
        assert!(smooths < locations);
    }

    #[test]
    fn test_round_trip_all_variants() {
        let bezier = Locations::BezierPoints(vec![
            BezierPoint::new(
                Vec2::new(0.0, 0.0),
                Vec2::new(-0.1, 0.0),
                Vec2::new(0.0, -0.1),
                Vec2::new(0.1, 0.0),
                Vec2::new(0.0, 0.1),
            );
            4
        ]);
        for locations in [two_by_two().locations, bezier] {
            for color_space in [ColorSpace::Device, ColorSpace::Perceptual] {
                let mut data = two_by_two();
                data.locations = locations.clone();
                data.color_space = color_space;
                data.smooths_colors = true;
                data.colors[2] = LinearRgba::new(0.25, 0.5, 0.75, 0.5);

                let bytes = to_vec(&data).unwrap();
                assert_eq!(from_slice(&bytes).unwrap(), data);
                let pretty = to_vec_pretty(&data).unwrap();
                assert_eq!(from_slice(&pretty).unwrap(), data);
            }
        }
    }

    #[test]
    fn test_every_field_is_required() {
        let full = to_value(&two_by_two()).unwrap();
        for key in crate::gradient::FIELDS {
            let mut value = full.clone();
            value.as_object_mut().unwrap().remove(key);
            assert_eq!(
                from_value(&value).unwrap_err(),
                DecodeError::MissingField { field: key.into() },
                "removing `{key}`"
            );
        }
    }

    #[test]
    fn test_unknown_color_space_is_unknown_variant() {
        let mut value = to_value(&two_by_two()).unwrap();
        value["colorSpace"] = json!("linear");
        assert_eq!(
            from_value(&value).unwrap_err(),
            DecodeError::UnknownVariant {
                tag: "linear".into()
            }
        );
    }

    #[test]
    fn test_wrong_field_types_are_type_mismatches() {
        let mut value = to_value(&two_by_two()).unwrap();
        value["smoothsColors"] = json!("no");
        assert_eq!(
            from_value(&value).unwrap_err(),
            DecodeError::TypeMismatch {
                field: "smoothsColors".into(),
                expected: "a boolean"
            }
        );

        let mut value = to_value(&two_by_two()).unwrap();
        value["colors"][1] = json!("black");
        assert_eq!(
            from_value(&value).unwrap_err(),
            DecodeError::TypeMismatch {
                field: "colors[1]".into(),
                expected: "a color"
            }
        );

        let mut value = to_value(&two_by_two()).unwrap();
        value["width"] = json!(2.5);
        assert!(matches!(
            from_value(&value),
            Err(DecodeError::TypeMismatch { ref field, .. }) if field == "width"
        ));
    }

    #[test]
    fn test_malformed_bezier_nodes() {
        let mut value = to_value(&two_by_two()).unwrap();
        value["locations"] = json!({ "bezierPoints": [[[0, 0], [0, 0], [0, 0], [0, 0]]] });
        assert_eq!(
            from_value(&value).unwrap_err(),
            DecodeError::MalformedArray {
                field: "locations.bezierPoints[0]".into(),
                expected: 5,
                actual: 4
            }
        );

        value["locations"] =
            json!({ "bezierPoints": [[[0, 0], [0, 0], [0, 0], [0, 0], [0, 0], [0, 0]]] });
        assert!(matches!(
            from_value(&value),
            Err(DecodeError::MalformedArray { expected: 5, actual: 6, .. })
        ));
    }

    #[test]
    fn test_cardinality_is_not_checked_by_codec() {
        let mut data = two_by_two();
        data.colors.truncate(1);
        let decoded = from_slice(&to_vec(&data).unwrap()).unwrap();
        assert_eq!(decoded.colors.len(), 1);
        assert!(decoded.validate().is_err());
    }

    #[test]
    fn test_unsupported_color_space_fails_encoding() {
        let mut data = two_by_two();
        data.color_space = ColorSpace::ExtendedLinear;
        assert!(matches!(
            to_value(&data),
            Err(EncodeError::UnsupportedValue(_))
        ));
        assert!(matches!(to_vec(&data), Err(EncodeError::UnsupportedValue(_))));
    }

    #[test]
    fn test_non_finite_values_fail_encoding() {
        let mut data = two_by_two();
        data.locations = Locations::Points(vec![Vec2::new(f32::NAN, 0.0); 4]);
        assert_eq!(
            to_value(&data).unwrap_err(),
            EncodeError::UnsupportedValue("non-finite number at `locations.points[0]`".into())
        );

        let mut data = two_by_two();
        let mut node = BezierPoint::at(Vec2::ONE);
        node.trailing_control_point = Vec2::new(0.0, f32::INFINITY);
        data.locations = Locations::BezierPoints(vec![BezierPoint::at(Vec2::ZERO), node]);
        assert!(matches!(
            to_vec(&data),
            Err(EncodeError::UnsupportedValue(ref msg)) if msg.contains("bezierPoints[1]")
        ));

        let mut data = two_by_two();
        data.colors[3] = LinearRgba::new(f32::INFINITY, 0.0, 0.0, 1.0);
        assert!(matches!(
            to_vec_pretty(&data),
            Err(EncodeError::UnsupportedValue(ref msg)) if msg.contains("colors[3]")
        ));

        let mut data = two_by_two();
        data.background = LinearRgba::new(0.0, 0.0, 0.0, f32::NAN);
        assert!(matches!(
            to_value(&data),
            Err(EncodeError::UnsupportedValue(ref msg)) if msg.contains("background")
        ));
    }

    #[test]
    fn test_numbers_beyond_f32_range_fail_decoding() {
        let mut value = to_value(&two_by_two()).unwrap();
        value["locations"] = json!({ "points": [[1e39, 0]] });
        assert_eq!(
            from_value(&value).unwrap_err(),
            DecodeError::TypeMismatch {
                field: "locations.points[0][0]".into(),
                expected: "a 32-bit float"
            }
        );
    }

    #[test]
    fn test_syntax_errors_are_reported() {
        assert!(matches!(from_str("{ not json"), Err(DecodeError::Syntax(_))));
        assert!(matches!(
            from_str("[]"),
            Err(DecodeError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_serde_bridge_matches_codec() {
        let text = String::from_utf8(to_vec(&two_by_two()).unwrap()).unwrap();
        let via_serde: GradientData = serde_json::from_str(&text).unwrap();
        assert_eq!(via_serde, from_str(&text).unwrap());
    }
}
