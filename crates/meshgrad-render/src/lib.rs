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

//! # Meshgrad Render
//!
//! The mesh gradient value consumed by renderers.
//!
//! These types belong to the rendering side of the system. Their grid location
//! model is richer than the portable document model and uses its own field
//! semantics: see [`MeshBezierPoint`]. Nothing in this crate knows how to
//! serialize itself; conversion to and from the portable model lives in
//! `meshgrad-data` behind its `rich-epoch` feature.

#![warn(missing_docs)]

mod mesh;

pub use mesh::{MeshBezierPoint, MeshGradient, MeshLocations};
