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

//! Grid node locations of a portable gradient.
//!
//! Wire shapes:
//!
//! ```text
//! {"points": [[x, y], ...]}
//! {"bezierPoints": [[position, leading, top, trailing, bottom], ...]}
//! ```
//!
//! The tag is mandatory: a list of 2-element arrays and a list of 5-element
//! arrays cannot be told apart by shape alone once their lengths coincide.

use crate::decode::{self, FromJson};
use crate::error::DecodeError;
use meshgrad_core::Vec2;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// A grid node with its four Bezier control handles.
///
/// Encoded as the positional array
/// `[position, leadingControlPoint, topControlPoint, trailingControlPoint, bottomControlPoint]`.
/// That order is the interchange contract and must not change.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct BezierPoint {
    /// The node position.
    pub position: Vec2,
    /// The handle pointing towards the previous column.
    pub leading_control_point: Vec2,
    /// The handle pointing towards the previous row.
    pub top_control_point: Vec2,
    /// The handle pointing towards the next column.
    pub trailing_control_point: Vec2,
    /// The handle pointing towards the next row.
    pub bottom_control_point: Vec2,
}

impl BezierPoint {
    /// Number of vectors in the wire array.
    pub const WIRE_LEN: usize = 5;

    /// Creates a new point from its five vectors.
    pub const fn new(
        position: Vec2,
        leading_control_point: Vec2,
        top_control_point: Vec2,
        trailing_control_point: Vec2,
        bottom_control_point: Vec2,
    ) -> Self {
        Self {
            position,
            leading_control_point,
            top_control_point,
            trailing_control_point,
            bottom_control_point,
        }
    }

    /// Creates a point whose handles all sit on the node itself.
    pub const fn at(position: Vec2) -> Self {
        Self::new(position, position, position, position, position)
    }

    /// The five vectors in wire order.
    pub fn to_array(&self) -> [Vec2; 5] {
        [
            self.position,
            self.leading_control_point,
            self.top_control_point,
            self.trailing_control_point,
            self.bottom_control_point,
        ]
    }

    /// Builds a point from five vectors in wire order.
    pub fn from_array([position, leading, top, trailing, bottom]: [Vec2; 5]) -> Self {
        Self::new(position, leading, top, trailing, bottom)
    }
}

impl Serialize for BezierPoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_array().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for BezierPoint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        decode::deserialize_with(deserializer)
    }
}

impl FromJson for BezierPoint {
    fn from_json(value: &Value, path: &str) -> Result<Self, DecodeError> {
        let items = decode::as_fixed_array::<5>(value, path)?;
        let mut vectors = [Vec2::ZERO; 5];
        for (i, (slot, item)) in vectors.iter_mut().zip(items).enumerate() {
            *slot = Vec2::from_json(item, &decode::index_path(path, i))?;
        }
        Ok(Self::from_array(vectors))
    }
}

/// The tag of a [`Locations`] value on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationsTag {
    /// `"points"`
    Points,
    /// `"bezierPoints"`
    BezierPoints,
}

impl LocationsTag {
    /// Every recognized tag.
    pub const ALL: [LocationsTag; 2] = [LocationsTag::Points, LocationsTag::BezierPoints];

    /// The wire key of this tag.
    pub const fn key(self) -> &'static str {
        match self {
            LocationsTag::Points => "points",
            LocationsTag::BezierPoints => "bezierPoints",
        }
    }

    /// Maps a wire key back to its tag.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.key() == key)
    }
}

/// The positions of every grid node, row-major.
///
/// The element count is expected to equal `width * height` of the owning
/// gradient. The codec does not check this; see
/// [`GradientData::validate`](crate::GradientData::validate).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Locations {
    /// One plain position per node.
    Points(Vec<Vec2>),
    /// One Bezier node per node.
    BezierPoints(Vec<BezierPoint>),
}

impl Locations {
    /// The wire tag of the active variant.
    pub fn tag(&self) -> LocationsTag {
        match self {
            Locations::Points(_) => LocationsTag::Points,
            Locations::BezierPoints(_) => LocationsTag::BezierPoints,
        }
    }

    /// Number of grid nodes described.
    pub fn len(&self) -> usize {
        match self {
            Locations::Points(points) => points.len(),
            Locations::BezierPoints(points) => points.len(),
        }
    }

    /// Returns `true` if no grid node is described.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'de> Deserialize<'de> for Locations {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        decode::deserialize_with(deserializer)
    }
}

impl FromJson for Locations {
    fn from_json(value: &Value, path: &str) -> Result<Self, DecodeError> {
        let object = decode::as_object(value, path)?;
        let (key, payload) = match object.len() {
            0 => {
                return Err(DecodeError::MissingVariant {
                    field: path.to_string(),
                })
            }
            1 => object
                .iter()
                .next()
                .ok_or_else(|| DecodeError::MissingVariant {
                    field: path.to_string(),
                })?,
            _ => {
                return Err(DecodeError::ConflictingVariants {
                    field: path.to_string(),
                    tags: object.keys().cloned().collect(),
                })
            }
        };

        let tag = LocationsTag::from_key(key)
            .ok_or_else(|| DecodeError::UnknownVariant { tag: key.clone() })?;
        let payload_path = decode::child_path(path, key);
        match tag {
            LocationsTag::Points => Ok(Locations::Points(decode::sequence(
                payload,
                &payload_path,
            )?)),
            LocationsTag::BezierPoints => Ok(Locations::BezierPoints(decode::sequence(
                payload,
                &payload_path,
            )?)),
        }
    }
}
