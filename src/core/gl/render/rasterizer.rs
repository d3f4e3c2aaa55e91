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

//! Software Rasterizer
//!
//! Converts assembled primitives into fragments and writes them to the
//! framebuffer.
//!
//! # Fragment pipeline
//!
//! For every covered pixel:
//!
//! 1. Drop the fragment if it falls outside the framebuffer
//! 2. Depth test (when enabled): discard if the fragment depth is greater than
//!    the stored depth, otherwise store it
//! 3. Texture (when enabled and an image is bound): multiply the nearest texel
//!    into the interpolated color
//! 4. Write the color
//!
//! Without the depth test, later fragments always overwrite earlier ones.

use glam::Vec4;

use super::super::framebuffer::Framebuffer;
use super::super::primitives::{Primitive, WindowVertex};
use super::super::texture::Texture;
use super::interpolate::Attributes;

/// Rasterizer bound to a framebuffer for the duration of one primitive group
///
/// # Examples
///
/// ```
/// use glam::{Vec2, Vec3, Vec4};
/// use softgl::{Framebuffer, Primitive, Rasterizer, WindowVertex};
///
/// let mut fb = Framebuffer::new(4, 4, false);
/// let point = WindowVertex {
///     position: Vec3::new(1.5, 2.5, 0.0),
///     w: 1.0,
///     color: Vec4::new(0.0, 1.0, 0.0, 1.0),
///     tex_coord: Vec2::ZERO,
///     front_facing: true,
/// };
///
/// let mut rasterizer = Rasterizer::new(&mut fb, false, None);
/// rasterizer.draw_primitive(&Primitive::Point(point), false);
///
/// assert_eq!(fb.pixel(1, 2), Some([0.0, 1.0, 0.0, 1.0]));
/// ```
pub struct Rasterizer<'a> {
    framebuffer: &'a mut Framebuffer,
    depth_test: bool,
    texture: Option<&'a Texture>,
}

impl<'a> Rasterizer<'a> {
    /// Create a rasterizer
    ///
    /// # Arguments
    ///
    /// * `framebuffer` - Target buffers
    /// * `depth_test` - Whether the depth test capability is enabled
    /// * `texture` - Texture to modulate with, or `None` when texturing is off
    ///   or nothing usable is bound
    pub fn new(
        framebuffer: &'a mut Framebuffer,
        depth_test: bool,
        texture: Option<&'a Texture>,
    ) -> Self {
        Self {
            framebuffer,
            depth_test,
            texture: texture.filter(|t| !t.is_empty()),
        }
    }

    /// Rasterize one primitive
    ///
    /// When `cull` is set, triangles flagged as back-facing are skipped.
    /// Primitives with non-finite window coordinates are skipped as well.
    pub fn draw_primitive(&mut self, primitive: &Primitive, cull: bool) {
        match primitive {
            Primitive::Point(v) => {
                if Self::is_finite(v) {
                    self.draw_point(v);
                }
            }
            Primitive::Line([v0, v1]) => {
                if Self::is_finite(v0) && Self::is_finite(v1) {
                    self.draw_line(v0, v1);
                }
            }
            Primitive::Triangle {
                vertices,
                front_facing,
            } => {
                if cull && !front_facing {
                    log::trace!("Culled back-facing triangle");
                    return;
                }
                if vertices.iter().all(Self::is_finite) {
                    self.draw_triangle(vertices);
                }
            }
        }
    }

    /// Framebuffer size as floating-point (width, height)
    pub(super) fn bounds(&self) -> (f64, f64) {
        (
            self.framebuffer.width() as f64,
            self.framebuffer.height() as f64,
        )
    }

    fn is_finite(v: &WindowVertex) -> bool {
        v.position.is_finite() && v.w.is_finite() && v.w != 0.0
    }

    /// Single fragment at the floored window position
    pub fn draw_point(&mut self, v: &WindowVertex) {
        let x = v.position.x.floor() as i32;
        let y = v.position.y.floor() as i32;
        log::trace!("Rasterizing point at ({}, {})", x, y);
        self.shade_fragment(x, y, &Attributes::of(v));
    }

    /// Run one fragment through depth test, texturing and color write
    #[inline(always)]
    pub(super) fn shade_fragment(&mut self, x: i32, y: i32, attributes: &Attributes) {
        let Some(index) = self.framebuffer.index(x, y) else {
            return;
        };

        if self.depth_test && !self.framebuffer.test_and_store_depth(index, attributes.depth) {
            return;
        }

        let mut color = attributes.color;
        if let Some(texel) = self
            .texture
            .and_then(|t| t.sample(attributes.tex_coord.x, attributes.tex_coord.y))
        {
            color *= Vec4::from_array(texel);
        }

        self.framebuffer.write_color(index, color.to_array());
    }
}
