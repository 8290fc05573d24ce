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

//! Defines [`GradientData`], the portable root of a gradient document.

use crate::color_space::ColorSpaceTag;
use crate::decode::{self, FromJson};
use crate::error::{DecodeError, ValidationError};
use crate::locations::Locations;
use meshgrad_core::{ColorSpace, LinearRgba};
use serde::ser::{Error as _, SerializeStruct};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Document keys, in the order they are written.
pub(crate) const FIELDS: [&str; 7] = [
    "width",
    "height",
    "colors",
    "background",
    "smoothsColors",
    "colorSpace",
    "locations",
];

/// A mesh gradient in its portable, serializable form.
///
/// A `width` x `height` grid of nodes, each with a location and a color.
/// `colors.len()` and `locations.len()` are expected to equal
/// `width * height`; decoding does not enforce it, call [`validate`](Self::validate)
/// when the guarantee is needed.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientData {
    /// Number of columns in the grid.
    pub width: i64,
    /// Number of rows in the grid.
    pub height: i64,
    /// Node locations, row-major.
    pub locations: Locations,
    /// One color per node, row-major.
    pub colors: Vec<LinearRgba>,
    /// Color drawn outside the mesh.
    pub background: LinearRgba,
    /// Whether colors are interpolated with a smooth curve.
    pub smooths_colors: bool,
    /// Interpolation color space. Only `Device` and `Perceptual` can be encoded.
    pub color_space: ColorSpace,
}

impl GradientData {
    /// Media type of the document representation.
    pub const MEDIA_TYPE: &'static str = "application/json";

    /// Creates a gradient from every field.
    pub fn new(
        width: i64,
        height: i64,
        locations: Locations,
        colors: Vec<LinearRgba>,
        background: LinearRgba,
        smooths_colors: bool,
        color_space: ColorSpace,
    ) -> Self {
        Self {
            width,
            height,
            locations,
            colors,
            background,
            smooths_colors,
            color_space,
        }
    }

    /// Returns `true` when the locations carry Bezier control handles.
    pub fn uses_bezier_points(&self) -> bool {
        matches!(self.locations, Locations::BezierPoints(_))
    }

    /// Checks that the grid holds exactly one location and one color per node.
    ///
    /// The codec never calls this; it is meant for callers that need the
    /// cardinality guarantee after decoding.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let (width, height) = (self.width, self.height);
        if width < 0 || height < 0 {
            return Err(ValidationError::NegativeDimension { width, height });
        }
        let expected = width
            .checked_mul(height)
            .and_then(|n| usize::try_from(n).ok())
            .ok_or(ValidationError::TooLarge { width, height })?;

        if self.locations.len() != expected {
            return Err(ValidationError::LocationCount {
                expected,
                actual: self.locations.len(),
            });
        }
        if self.colors.len() != expected {
            return Err(ValidationError::ColorCount {
                expected,
                actual: self.colors.len(),
            });
        }
        Ok(())
    }
}

impl Serialize for GradientData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let color_space = ColorSpaceTag::try_from(self.color_space).map_err(S::Error::custom)?;

        // `locations` goes last regardless of declaration order.
        let mut state = serializer.serialize_struct("GradientData", FIELDS.len())?;
        state.serialize_field("width", &self.width)?;
        state.serialize_field("height", &self.height)?;
        state.serialize_field("colors", &self.colors)?;
        state.serialize_field("background", &self.background)?;
        state.serialize_field("smoothsColors", &self.smooths_colors)?;
        state.serialize_field("colorSpace", &color_space)?;
        state.serialize_field("locations", &self.locations)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for GradientData {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        decode::deserialize_with(deserializer)
    }
}

impl FromJson for GradientData {
    fn from_json(value: &Value, path: &str) -> Result<Self, DecodeError> {
        let object = decode::as_object(value, path)?;
        let field = |key: &str| decode::required(object, path, key);
        let at = |key: &str| decode::child_path(path, key);

        let width = decode::as_i64(field("width")?, &at("width"))?;
        let height = decode::as_i64(field("height")?, &at("height"))?;
        let colors = decode::as_array(field("colors")?, &at("colors"))?
            .iter()
            .enumerate()
            .map(|(i, color)| {
                decode::opaque(color, &decode::index_path(&at("colors"), i), "a color")
            })
            .collect::<Result<Vec<LinearRgba>, _>>()?;
        let background = decode::opaque(field("background")?, &at("background"), "a color")?;
        let smooths_colors = decode::as_bool(field("smoothsColors")?, &at("smoothsColors"))?;
        let color_space = ColorSpaceTag::from_json(field("colorSpace")?, &at("colorSpace"))?;
        let locations = Locations::from_json(field("locations")?, &at("locations"))?;

        Ok(Self {
            width,
            height,
            locations,
            colors,
            background,
            smooths_colors,
            color_space: color_space.into(),
        })
    }
}
