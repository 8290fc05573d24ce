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

use meshgrad_core::{ColorSpace, LinearRgba, Vec2};

/// A grid node with Bezier control handles, as understood by the renderer.
///
/// The renderer anchors the patch corner at `position`. Portable documents
/// store that same anchor in their bottom control point slot, so the two
/// models must never be converted field-by-name.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct MeshBezierPoint {
    /// The anchor of the patch corner.
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

impl MeshBezierPoint {
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
}

/// The grid locations of a [`MeshGradient`].
///
/// New location models may be added by the renderer; consumers outside this
/// crate must be ready to reject variants they cannot represent.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum MeshLocations {
    /// One plain position per grid node, row-major.
    Points(Vec<Vec2>),
    /// One Bezier node per grid node, row-major.
    BezierPoints(Vec<MeshBezierPoint>),
}

impl MeshLocations {
    /// Number of grid nodes described.
    pub fn len(&self) -> usize {
        match self {
            MeshLocations::Points(points) => points.len(),
            MeshLocations::BezierPoints(points) => points.len(),
        }
    }

    /// Returns `true` if no grid node is described.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A two-dimensional gradient defined by a `width` x `height` grid of colored nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshGradient {
    /// Number of columns in the grid.
    pub width: i64,
    /// Number of rows in the grid.
    pub height: i64,
    /// Node locations, row-major.
    pub locations: MeshLocations,
    /// One color per node, row-major.
    pub colors: Vec<LinearRgba>,
    /// Color drawn outside the mesh.
    pub background: LinearRgba,
    /// Whether colors are interpolated with a smooth (cubic) curve.
    pub smooths_colors: bool,
    /// Interpolation color space.
    pub color_space: ColorSpace,
}

impl MeshGradient {
    /// Creates a gradient from every field.
    pub fn new(
        width: i64,
        height: i64,
        locations: MeshLocations,
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

    /// Creates a gradient from plain points with the renderer defaults:
    /// a transparent background, smoothed colors and the device color space.
    pub fn from_points(
        width: i64,
        height: i64,
        points: Vec<Vec2>,
        colors: Vec<LinearRgba>,
    ) -> Self {
        Self::new(
            width,
            height,
            MeshLocations::Points(points),
            colors,
            LinearRgba::TRANSPARENT,
            true,
            ColorSpace::Device,
        )
    }

    /// The fixed 2x2 all-black gradient shown when a document cannot be loaded.
    pub fn fallback() -> Self {
        Self::from_points(
            2,
            2,
            vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(1.0, 0.0),
                Vec2::new(0.0, 1.0),
                Vec2::new(1.0, 1.0),
            ],
            vec![LinearRgba::BLACK; 4],
        )
    }
}
