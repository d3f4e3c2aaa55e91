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

//! Transform stage
//!
//! Maps submitted vertices to window space:
//!
//! 1. eye  = model-view × (x, y, z, 1)
//! 2. clip = projection × eye
//! 3. ndc  = clip.xyz / clip.w
//! 4. window = ((ndc.x + 1) / 2 × width, (1 − ndc.y) / 2 × height, ndc.z)
//!
//! Window Y grows downwards. No clipping is performed; vertices outside the
//! view volume simply land outside the framebuffer.
//!
//! # Facing
//!
//! When culling is enabled, the first vertex of each complete polygon records
//! whether the polygon faces the viewer. The test runs in eye space: with
//! `n = (v1 − v0) × (v2 − v0)`, the polygon is front-facing iff `n · v0 <= 0`,
//! i.e. it is wound counter-clockwise as seen from the eye.

use glam::{Mat4, Vec3};

use super::enums::DrawMode;
use super::primitives::{Vertex, WindowVertex};

/// Inputs of the transform stage that come from context state
#[derive(Debug, Clone, Copy)]
pub struct TransformParams<'a> {
    pub model_view: &'a Mat4,
    pub projection: &'a Mat4,
    pub width: f32,
    pub height: f32,
    pub cull: bool,
}

/// Eye-space facing test for the triangle (a, b, c)
pub fn is_front_facing(a: Vec3, b: Vec3, c: Vec3) -> bool {
    let normal = (b - a).cross(c - a);
    normal.dot(a) <= 0.0
}

/// Transform a primitive group into a fresh window-space buffer
///
/// `vertices` is never modified.
pub fn transform_vertices(
    mode: DrawMode,
    vertices: &[Vertex],
    params: &TransformParams<'_>,
) -> Vec<WindowVertex> {
    let eye: Vec<Vec3> = vertices
        .iter()
        .map(|v| params.model_view.transform_point3(v.position))
        .collect();

    let mut out: Vec<WindowVertex> = vertices
        .iter()
        .zip(&eye)
        .map(|(vertex, &eye)| {
            let clip = *params.projection * eye.extend(1.0);
            let ndc = clip.truncate() / clip.w;
            WindowVertex {
                position: Vec3::new(
                    (ndc.x + 1.0) / 2.0 * params.width,
                    (1.0 - ndc.y) / 2.0 * params.height,
                    ndc.z,
                ),
                w: clip.w,
                color: vertex.color,
                tex_coord: vertex.tex_coord,
                front_facing: true,
            }
        })
        .collect();

    if params.cull && mode.is_polygon() {
        let stride = mode.vertices_per_primitive();
        for (start, corners) in eye.chunks_exact(stride).enumerate() {
            out[start * stride].front_facing =
                is_front_facing(corners[0], corners[1], corners[2]);
        }
    }

    out
}
