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

//! The closed wire encoding of a gradient's interpolation color space.

use crate::decode::{self, FromJson};
use crate::error::{DecodeError, EncodeError};
use meshgrad_core::ColorSpace;
use serde::Serialize;
use serde_json::Value;

/// The only color spaces a document can carry: `"device"` or `"perceptual"`.
///
/// Unlike [`ColorSpace`], this set is closed. Unknown tags are rejected on
/// decode and unrepresentable color spaces are rejected on encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorSpaceTag {
    /// `"device"`
    Device,
    /// `"perceptual"`
    Perceptual,
}

impl ColorSpaceTag {
    /// The wire string of this tag.
    pub const fn as_str(self) -> &'static str {
        match self {
            ColorSpaceTag::Device => "device",
            ColorSpaceTag::Perceptual => "perceptual",
        }
    }

    /// Maps a wire string to its tag.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "device" => Some(ColorSpaceTag::Device),
            "perceptual" => Some(ColorSpaceTag::Perceptual),
            _ => None,
        }
    }
}

impl From<ColorSpaceTag> for ColorSpace {
    fn from(tag: ColorSpaceTag) -> Self {
        match tag {
            ColorSpaceTag::Device => ColorSpace::Device,
            ColorSpaceTag::Perceptual => ColorSpace::Perceptual,
        }
    }
}

impl TryFrom<ColorSpace> for ColorSpaceTag {
    type Error = EncodeError;

    fn try_from(space: ColorSpace) -> Result<Self, Self::Error> {
        match space {
            ColorSpace::Device => Ok(ColorSpaceTag::Device),
            ColorSpace::Perceptual => Ok(ColorSpaceTag::Perceptual),
            other => {
                log::error!(
                    "Color space '{}' has no portable representation",
                    other.name()
                );
                Err(EncodeError::UnsupportedValue(format!(
                    "color space `{}`",
                    other.name()
                )))
            }
        }
    }
}

impl FromJson for ColorSpaceTag {
    fn from_json(value: &Value, path: &str) -> Result<Self, DecodeError> {
        let name = decode::as_str(value, path)?;
        Self::from_name(name).ok_or_else(|| DecodeError::UnknownVariant {
            tag: name.to_string(),
        })
    }
}
