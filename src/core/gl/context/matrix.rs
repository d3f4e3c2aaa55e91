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

//! Matrix operations
//!
//! Every operation applies to the slot picked by `matrix_mode` and fails with
//! `InvalidOperation` inside a primitive group.

use glam::{Mat4, Vec3};

use super::super::enums::MatrixMode;
use super::super::matrix::MatrixStack;
use super::Context;
use crate::core::error::Result;

impl Context {
    /// Select the slot later matrix operations apply to
    ///
    /// # Arguments
    ///
    /// * `mode` - `MODELVIEW` or `PROJECTION`
    pub fn matrix_mode(&mut self, mode: u32) {
        let result = self.ensure_idle().and_then(|()| {
            let mode = MatrixMode::try_from(mode)?;
            self.matrices.set_mode(mode);
            Ok(())
        });
        self.record(result);
    }

    /// Replace the current matrix with identity
    pub fn load_identity(&mut self) {
        self.with_matrices(|m| {
            m.load_identity();
            Ok(())
        });
    }

    /// Replace the current matrix with 16 column-major values
    pub fn load_matrix(&mut self, values: &[f32; 16]) {
        let matrix = Mat4::from_cols_array(values);
        self.with_matrices(|m| {
            m.load(matrix);
            Ok(())
        });
    }

    /// Right-multiply the current matrix by 16 column-major values
    pub fn mult_matrix(&mut self, values: &[f32; 16]) {
        let matrix = Mat4::from_cols_array(values);
        self.with_matrices(|m| {
            m.compose(matrix);
            Ok(())
        });
    }

    pub fn translate(&mut self, x: f32, y: f32, z: f32) {
        self.with_matrices(|m| {
            m.translate(x, y, z);
            Ok(())
        });
    }

    pub fn scale(&mut self, x: f32, y: f32, z: f32) {
        self.with_matrices(|m| {
            m.scale(x, y, z);
            Ok(())
        });
    }

    /// Rotate by `angle` radians about the axis (x, y, z)
    ///
    /// Unlike desktop `glRotatef` the angle is in radians, while
    /// [`perspective`](Self::perspective) takes its field of view in degrees.
    /// A zero axis leaves the matrix unchanged.
    pub fn rotate(&mut self, angle: f32, x: f32, y: f32, z: f32) {
        self.with_matrices(|m| {
            m.rotate(angle, Vec3::new(x, y, z));
            Ok(())
        });
    }

    /// Compose a perspective projection onto the current matrix
    ///
    /// # Arguments
    ///
    /// * `fovy` - Vertical field of view in degrees
    /// * `aspect` - Width over height
    /// * `near`, `far` - Positive distances to the clip planes
    ///
    /// Non-positive or equal planes, or a zero aspect, record `InvalidValue`.
    pub fn perspective(&mut self, fovy: f32, aspect: f32, near: f32, far: f32) {
        self.with_matrices(|m| m.perspective(fovy, aspect, near, far));
    }

    /// Compose a viewing transform from eye position, target and up vector
    #[allow(clippy::too_many_arguments)]
    pub fn look_at(
        &mut self,
        eye_x: f32,
        eye_y: f32,
        eye_z: f32,
        center_x: f32,
        center_y: f32,
        center_z: f32,
        up_x: f32,
        up_y: f32,
        up_z: f32,
    ) {
        let eye = Vec3::new(eye_x, eye_y, eye_z);
        let center = Vec3::new(center_x, center_y, center_z);
        let up = Vec3::new(up_x, up_y, up_z);
        self.with_matrices(|m| {
            m.look_at(eye, center, up);
            Ok(())
        });
    }

    pub fn ortho(&mut self, left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) {
        self.with_matrices(|m| m.ortho(left, right, bottom, top, near, far));
    }

    pub fn frustum(&mut self, left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) {
        self.with_matrices(|m| m.frustum(left, right, bottom, top, near, far));
    }

    /// Current model-view matrix
    pub fn model_view_matrix(&self) -> Mat4 {
        *self.matrices.model_view()
    }

    /// Current projection matrix
    pub fn projection_matrix(&self) -> Mat4 {
        *self.matrices.projection()
    }

    fn with_matrices(&mut self, op: impl FnOnce(&mut MatrixStack) -> Result<()>) {
        let result = self.ensure_idle().and_then(|()| op(&mut self.matrices));
        self.record(result);
    }
}
