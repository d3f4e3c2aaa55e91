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

//! Immediate-mode submission
//!
//! Vertices are buffered between `begin` and `end`. Nothing reaches the
//! framebuffer until `end`, which runs the whole group through transform,
//! assembly and rasterization in one go.

use glam::{Vec2, Vec3, Vec4};

use super::super::assembler::assemble;
use super::super::enums::{Capabilities, DrawMode};
use super::super::render::Rasterizer;
use super::super::transform::{transform_vertices, TransformParams};
use super::Context;
use crate::core::error::{GlError, Result};

impl Context {
    /// Open a primitive group
    ///
    /// # Arguments
    ///
    /// * `mode` - `POINTS`, `LINES`, `TRIANGLES` or `QUADS`
    ///
    /// Records `InvalidOperation` if a group is already open and
    /// `InvalidEnum` for any other mode.
    pub fn begin(&mut self, mode: u32) {
        let result = self.open_group(mode);
        self.record(result);
    }

    fn open_group(&mut self, mode: u32) -> Result<()> {
        if self.assembler.is_open() {
            return Err(GlError::InvalidOperation);
        }
        let mode = DrawMode::try_from(mode)?;
        self.assembler.begin(mode)
    }

    /// Close the open group and rasterize it
    ///
    /// Trailing vertices that do not make up a whole primitive are dropped.
    pub fn end(&mut self) {
        let result = self.flush_group();
        self.record(result);
    }

    fn flush_group(&mut self) -> Result<()> {
        let (mode, vertices) = self.assembler.end()?;

        let cull = self.capabilities.contains(Capabilities::CULL_FACE);
        let params = TransformParams {
            model_view: self.matrices.model_view(),
            projection: self.matrices.projection(),
            width: self.framebuffer.width() as f32,
            height: self.framebuffer.height() as f32,
            cull,
        };
        let window = transform_vertices(mode, &vertices, &params);
        let primitives = assemble(mode, &window);

        let texture = if self.capabilities.contains(Capabilities::TEXTURE_2D) {
            self.textures.get(self.bound_texture)
        } else {
            None
        };
        let depth_test = self.capabilities.contains(Capabilities::DEPTH_TEST);

        let mut rasterizer = Rasterizer::new(&mut self.framebuffer, depth_test, texture);
        for primitive in &primitives {
            rasterizer.draw_primitive(primitive, cull);
        }
        Ok(())
    }

    /// Submit a vertex at (x, y, 0)
    pub fn vertex2f(&mut self, x: f32, y: f32) {
        self.vertex3f(x, y, 0.0);
    }

    /// Submit a vertex carrying the current color and texture coordinate
    ///
    /// Records `InvalidOperation` outside a primitive group.
    pub fn vertex3f(&mut self, x: f32, y: f32, z: f32) {
        let result = self.assembler.push_vertex(Vec3::new(x, y, z));
        self.record(result);
    }

    /// Set the current color with alpha 1
    pub fn color3f(&mut self, r: f32, g: f32, b: f32) {
        self.color4f(r, g, b, 1.0);
    }

    /// Set the current color; components are clamped to [0, 1]
    pub fn color4f(&mut self, r: f32, g: f32, b: f32, a: f32) {
        self.assembler.set_color(Vec4::new(r, g, b, a));
    }

    /// Set the current texture coordinate
    pub fn tex_coord2f(&mut self, u: f32, v: f32) {
        self.assembler.set_tex_coord(Vec2::new(u, v));
    }
}
