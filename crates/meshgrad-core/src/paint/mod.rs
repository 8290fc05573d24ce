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

//! Paint-level settings shared by renderers.

/// The color space in which a renderer interpolates gradient colors.
///
/// This set is owned by the rendering side and may grow: downstream crates
/// must handle unknown members. Only [`ColorSpace::Device`] and
/// [`ColorSpace::Perceptual`] have a portable document representation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ColorSpace {
    /// Interpolate in the output device's color space.
    #[default]
    Device,
    /// Interpolate in a perceptually uniform color space.
    Perceptual,
    /// Interpolate in extended-range linear sRGB.
    ExtendedLinear,
}

impl ColorSpace {
    /// A short human-readable name, used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            ColorSpace::Device => "device",
            ColorSpace::Perceptual => "perceptual",
            ColorSpace::ExtendedLinear => "extendedLinear",
        }
    }
}
