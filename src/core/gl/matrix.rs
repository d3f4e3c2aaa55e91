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

//! Model-view and projection matrices
//!
//! Two named 4×4 slots plus a selector for the "current" one. Every transform
//! call right-multiplies onto the current matrix (`current = current × delta`),
//! so the most recently issued transform is the first one applied to a vertex.
//!
//! The arithmetic itself is delegated to `glam`.

use glam::{Mat4, Vec3, Vec4};

use super::enums::MatrixMode;
use crate::core::error::{GlError, Result};

/// The two transform slots and the current selector
#[derive(Debug, Clone)]
pub struct MatrixStack {
    model_view: Mat4,
    projection: Mat4,
    mode: MatrixMode,
}

impl MatrixStack {
    /// Both slots at identity, model-view selected
    pub fn new() -> Self {
        Self {
            model_view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
            mode: MatrixMode::ModelView,
        }
    }

    /// Currently selected slot
    pub fn mode(&self) -> MatrixMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: MatrixMode) {
        self.mode = mode;
    }

    pub fn model_view(&self) -> &Mat4 {
        &self.model_view
    }

    pub fn projection(&self) -> &Mat4 {
        &self.projection
    }

    fn current_mut(&mut self) -> &mut Mat4 {
        match self.mode {
            MatrixMode::ModelView => &mut self.model_view,
            MatrixMode::Projection => &mut self.projection,
        }
    }

    /// Replace the current matrix
    pub fn load(&mut self, matrix: Mat4) {
        *self.current_mut() = matrix;
    }

    pub fn load_identity(&mut self) {
        self.load(Mat4::IDENTITY);
    }

    /// Right-multiply `delta` onto the current matrix
    pub fn compose(&mut self, delta: Mat4) {
        let current = self.current_mut();
        *current = *current * delta;
    }

    pub fn translate(&mut self, x: f32, y: f32, z: f32) {
        self.compose(Mat4::from_translation(Vec3::new(x, y, z)));
    }

    pub fn scale(&mut self, x: f32, y: f32, z: f32) {
        self.compose(Mat4::from_scale(Vec3::new(x, y, z)));
    }

    /// Rotate by `angle` radians about `axis`
    ///
    /// The axis is normalized first; a zero-length axis leaves the matrix as is.
    pub fn rotate(&mut self, angle: f32, axis: Vec3) {
        let axis = axis.normalize_or_zero();
        if axis == Vec3::ZERO {
            return;
        }
        self.compose(Mat4::from_axis_angle(axis, angle));
    }

    /// Compose a symmetric perspective projection (`fovy` in degrees)
    pub fn perspective(&mut self, fovy: f32, aspect: f32, near: f32, far: f32) -> Result<()> {
        if near <= 0.0 || far <= 0.0 || near == far || aspect == 0.0 {
            return Err(GlError::InvalidValue);
        }
        self.compose(Mat4::perspective_rh_gl(fovy.to_radians(), aspect, near, far));
        Ok(())
    }

    /// Compose a viewing transform looking from `eye` towards `center`
    pub fn look_at(&mut self, eye: Vec3, center: Vec3, up: Vec3) {
        self.compose(Mat4::look_at_rh(eye, center, up));
    }

    /// Compose a parallel projection
    pub fn ortho(
        &mut self,
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    ) -> Result<()> {
        if left == right || bottom == top || near == far {
            return Err(GlError::InvalidValue);
        }
        self.compose(Mat4::orthographic_rh_gl(left, right, bottom, top, near, far));
        Ok(())
    }

    /// Compose an off-axis perspective projection
    pub fn frustum(
        &mut self,
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    ) -> Result<()> {
        if near <= 0.0 || far <= 0.0 || left == right || bottom == top || near == far {
            return Err(GlError::InvalidValue);
        }

        let (rl, tb, fne) = (right - left, top - bottom, far - near);
        let delta = Mat4::from_cols(
            Vec4::new(2.0 * near / rl, 0.0, 0.0, 0.0),
            Vec4::new(0.0, 2.0 * near / tb, 0.0, 0.0),
            Vec4::new((right + left) / rl, (top + bottom) / tb, -(far + near) / fne, -1.0),
            Vec4::new(0.0, 0.0, -2.0 * far * near / fne, 0.0),
        );
        self.compose(delta);
        Ok(())
    }
}

impl Default for MatrixStack {
    fn default() -> Self {
        Self::new()
    }
}
