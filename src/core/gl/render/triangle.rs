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

//! Triangle rasterization
//!
//! # Algorithm
//!
//! 1. Floor the three window positions to integer pixel coordinates
//! 2. Compute their bounding box, clipped to the framebuffer
//! 3. For each pixel in the box, compute barycentric weights from doubled
//!    signed areas
//! 4. The pixel is covered iff every weight lies in [0, 1]
//!
//! Edges are inclusive, so two triangles sharing an edge both shade it.
//!
//! # References
//!
//! - [Barycentric Coordinates](https://www.scratchapixel.com/lessons/3d-basic-rendering/ray-tracing-rendering-a-triangle/barycentric-coordinates)

use super::super::primitives::WindowVertex;
use super::interpolate::interpolate;
use super::rasterizer::Rasterizer;

/// Doubled-area barycentric setup for an integer triangle
///
/// Coordinates are held as `f64` so every product of pixel coordinates stays
/// exact.
#[derive(Debug, Clone, Copy)]
pub(super) struct Barycentric {
    p: [(f64, f64); 3],
    denom: f64,
}

impl Barycentric {
    /// Returns `None` for a zero-area triangle
    pub(super) fn new(p: [(f64, f64); 3]) -> Option<Self> {
        let [(x1, y1), (x2, y2), (x3, y3)] = p;
        let denom = (y2 - y3) * (x1 - x3) + (x3 - x2) * (y1 - y3);
        if denom == 0.0 {
            return None;
        }
        Some(Self { p, denom })
    }

    /// Weights of pixel (x, y), or `None` if it is not covered
    pub(super) fn weights(&self, x: f64, y: f64) -> Option<[f32; 3]> {
        let [(x1, y1), (x2, y2), (x3, y3)] = self.p;
        let n0 = (y2 - y3) * (x - x3) + (x3 - x2) * (y - y3);
        let n1 = (y3 - y1) * (x - x3) + (x1 - x3) * (y - y3);
        let n2 = self.denom - n0 - n1;

        let inside = |n: f64| {
            let w = n / self.denom;
            (0.0..=1.0).contains(&w)
        };
        if !(inside(n0) && inside(n1) && inside(n2)) {
            return None;
        }

        Some([
            (n0 / self.denom) as f32,
            (n1 / self.denom) as f32,
            (n2 / self.denom) as f32,
        ])
    }
}

impl Rasterizer<'_> {
    /// Rasterize a filled triangle with perspective-correct attributes
    pub fn draw_triangle(&mut self, vertices: &[WindowVertex; 3]) {
        let p = vertices.map(|v| (v.position.x.floor() as f64, v.position.y.floor() as f64));

        let Some(bary) = Barycentric::new(p) else {
            log::trace!("Skipping degenerate triangle {:?}", p);
            return;
        };

        let (width, height) = self.bounds();
        let min_x = p[0].0.min(p[1].0).min(p[2].0).max(0.0);
        let max_x = p[0].0.max(p[1].0).max(p[2].0).min(width - 1.0);
        let min_y = p[0].1.min(p[1].1).min(p[2].1).max(0.0);
        let max_y = p[0].1.max(p[1].1).max(p[2].1).min(height - 1.0);

        log::trace!(
            "Rasterizing triangle: ({}, {}), ({}, {}), ({}, {}) box=[{}..{}]x[{}..{}]",
            p[0].0,
            p[0].1,
            p[1].0,
            p[1].1,
            p[2].0,
            p[2].1,
            min_x,
            max_x,
            min_y,
            max_y
        );

        if min_x > max_x || min_y > max_y {
            return;
        }

        for y in min_y as i32..=max_y as i32 {
            for x in min_x as i32..=max_x as i32 {
                if let Some(weights) = bary.weights(x as f64, y as f64) {
                    let attributes = interpolate(vertices, &weights);
                    self.shade_fragment(x, y, &attributes);
                }
            }
        }
    }
}
