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

//! # Meshgrad Data
//!
//! The portable mesh gradient model and its JSON document codec.
//!
//! A document looks like:
//!
//! ```text
//! {
//!   "width": 2, "height": 2,
//!   "colors": [<color>, ...],
//!   "background": <color>,
//!   "smoothsColors": false,
//!   "colorSpace": "device" | "perceptual",
//!   "locations": {"points": [[x, y], ...]} | {"bezierPoints": [[[x, y] x5], ...]}
//! }
//! ```
//!
//! With the `rich-epoch` feature, the [`epoch`] module converts between this
//! model and the renderer types of `meshgrad-render`.

#![warn(missing_docs)]

pub mod codec;
mod color_space;
mod decode;
mod error;
mod gradient;
mod locations;

#[cfg(feature = "rich-epoch")]
pub mod epoch;

pub use color_space::ColorSpaceTag;
pub use error::{DecodeError, EncodeError, ValidationError};
pub use gradient::GradientData;
pub use locations::{BezierPoint, Locations, LocationsTag};
pub use meshgrad_core::{ColorSpace, LinearRgba, Vec2};
