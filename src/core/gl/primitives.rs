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

//! Vertex and primitive type definitions
//!
//! A [`Vertex`] is what the application submits: an object-space position plus
//! the color and texture coordinate latched at submission time. The transform
//! stage turns it into a [`WindowVertex`], and the assembler groups window
//! vertices into [`Primitive`]s for the rasterizer.

use glam::{Vec2, Vec3, Vec4};

/// A submitted vertex
///
/// # Examples
///
/// ```
/// use glam::{Vec2, Vec3, Vec4};
/// use softgl::Vertex;
///
/// let v = Vertex::new(Vec3::new(0.0, 1.0, 0.0), Vec4::ONE, Vec2::ZERO);
/// assert_eq!(v.position.y, 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// Object-space position
    pub position: Vec3,
    /// RGBA color, components in [0, 1]
    pub color: Vec4,
    /// Texture coordinate (u, v)
    pub tex_coord: Vec2,
}

impl Vertex {
    pub fn new(position: Vec3, color: Vec4, tex_coord: Vec2) -> Self {
        Self {
            position,
            color,
            tex_coord,
        }
    }
}

/// A vertex after the transform stage
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowVertex {
    /// Window-space position: x, y in pixels (origin top-left), z is NDC depth
    pub position: Vec3,
    /// Clip-space w
    ///
    /// This is the eye-space distance for a perspective projection and 1.0 for
    /// affine ones. Attributes are divided by it for perspective-correct
    /// interpolation.
    pub w: f32,
    pub color: Vec4,
    pub tex_coord: Vec2,
    /// Facing of the polygon this vertex starts; always true for other vertices
    pub front_facing: bool,
}

impl WindowVertex {
    /// Reciprocal of `w`, used as the interpolation weight of this vertex
    #[inline(always)]
    pub fn inv_w(&self) -> f32 {
        1.0 / self.w
    }
}

/// A drawable unit produced by primitive assembly
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    Point(WindowVertex),
    Line([WindowVertex; 2]),
    Triangle {
        vertices: [WindowVertex; 3],
        front_facing: bool,
    },
}
