// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
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

//! Perspective-correct interpolation
//!
//! Screen-space weights `b_i` do not interpolate attributes correctly across a
//! perspective-projected primitive. Attributes are instead interpolated as
//!
//! ```text
//!         Σ b_i · a_i / w_i
//!   a  =  ─────────────────
//!           Σ b_i / w_i
//! ```
//!
//! which is linear in eye space. Depth goes through the same formula.
//!
//! # References
//!
//! - [Scratchapixel: Perspective Correct Interpolation](https://www.scratchapixel.com/lessons/3d-basic-rendering/rasterization-practical-implementation/perspective-correct-interpolation-vertex-attributes.html)

use glam::{Vec2, Vec4};

use super::super::primitives::WindowVertex;

/// Attributes of a single fragment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attributes {
    pub depth: f32,
    pub color: Vec4,
    pub tex_coord: Vec2,
}

impl Attributes {
    /// Attributes of a vertex taken as-is
    pub fn of(vertex: &WindowVertex) -> Self {
        Self {
            depth: vertex.position.z,
            color: vertex.color,
            tex_coord: vertex.tex_coord,
        }
    }
}

/// Interpolate vertex attributes with screen-space `weights`
///
/// # Examples
///
/// ```
/// use glam::{Vec2, Vec3, Vec4};
/// use softgl::{interpolate, WindowVertex};
///
/// let near = WindowVertex {
///     position: Vec3::new(0.0, 0.0, 0.0),
///     w: 1.0,
///     color: Vec4::ZERO,
///     tex_coord: Vec2::ZERO,
///     front_facing: true,
/// };
/// let far = WindowVertex { w: 3.0, color: Vec4::ONE, ..near };
///
/// // Halfway on screen is only a quarter of the way in eye space
/// let mid = interpolate(&[near, far], &[0.5, 0.5]);
/// assert!((mid.color.x - 0.25).abs() < 1e-6);
/// ```
pub fn interpolate(vertices: &[WindowVertex], weights: &[f32]) -> Attributes {
    let mut sum_q = 0.0;
    let mut depth = 0.0;
    let mut color = Vec4::ZERO;
    let mut tex_coord = Vec2::ZERO;

    for (vertex, &weight) in vertices.iter().zip(weights) {
        let q = weight * vertex.inv_w();
        sum_q += q;
        depth += q * vertex.position.z;
        color += q * vertex.color;
        tex_coord += q * vertex.tex_coord;
    }

    // Division keeps constant attributes exact
    Attributes {
        depth: depth / sum_q,
        color: color / sum_q,
        tex_coord: tex_coord / sum_q,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn vertex(w: f32, value: f32) -> WindowVertex {
        WindowVertex {
            position: Vec3::new(0.0, 0.0, value),
            w,
            color: Vec4::splat(value),
            tex_coord: Vec2::splat(value),
            front_facing: true,
        }
    }

    #[test]
    fn test_equal_w_is_linear() {
        let a = interpolate(&[vertex(2.0, 0.0), vertex(2.0, 1.0)], &[0.25, 0.75]);
        assert!((a.color.x - 0.75).abs() < 1e-6);
        assert!((a.depth - 0.75).abs() < 1e-6);
        assert!((a.tex_coord.y - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_endpoints_are_exact() {
        let vertices = [vertex(1.0, 0.2), vertex(5.0, 0.9)];
        let a = interpolate(&vertices, &[1.0, 0.0]);
        assert!((a.color.x - 0.2).abs() < 1e-6);
        let b = interpolate(&vertices, &[0.0, 1.0]);
        assert!((b.color.x - 0.9).abs() < 1e-6);
    }

    #[test]
    fn test_perspective_differs_from_linear() {
        let vertices = [vertex(1.0, 0.0), vertex(4.0, 1.0)];
        let a = interpolate(&vertices, &[0.5, 0.5]);

        // (0.5 * 1 / 4) / (0.5 / 1 + 0.5 / 4) = 0.125 / 0.625 = 0.2
        assert!((a.color.x - 0.2).abs() < 1e-6);
        assert!((a.color.x - 0.5).abs() > 0.1);
    }

    #[test]
    fn test_three_vertex_weights() {
        let vertices = [vertex(1.0, 0.0), vertex(1.0, 1.0), vertex(2.0, 1.0)];
        let a = interpolate(&vertices, &[0.5, 0.25, 0.25]);

        // q = (0.5, 0.25, 0.125), sum 0.875; value = 0.375 / 0.875
        assert!((a.color.z - 0.375 / 0.875).abs() < 1e-6);
    }

    #[test]
    fn test_attributes_of_vertex() {
        let v = vertex(3.0, 0.5);
        let a = Attributes::of(&v);
        assert_eq!(a.depth, 0.5);
        assert_eq!(a.color, Vec4::splat(0.5));
    }
}
