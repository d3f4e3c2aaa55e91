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

//! Primitive assembler
//!
//! Implements the begin/end vertex-submission protocol as an explicit two-state
//! machine:
//!
//! ```text
//!          begin(mode)
//!   Idle ──────────────> Accumulating { mode, vertices }
//!    ^                           │
//!    └────────── end ────────────┘
//! ```
//!
//! Color and texture coordinate are latched: they apply to every vertex
//! submitted after they are set, never retroactively.
//!
//! After the transform stage, [`assemble`] groups the window vertices into
//! primitives. Incomplete trailing groups are dropped.

use glam::{Vec2, Vec3, Vec4};

use super::enums::DrawMode;
use super::primitives::{Primitive, Vertex, WindowVertex};
use crate::core::error::{GlError, Result};

/// Submission state
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AssemblyState {
    /// No primitive group is open
    #[default]
    Idle,
    /// A group is open and collecting vertices
    Accumulating {
        mode: DrawMode,
        vertices: Vec<Vertex>,
    },
}

/// Begin/end state machine plus latched vertex attributes
#[derive(Debug, Clone)]
pub struct Assembler {
    state: AssemblyState,
    color: Vec4,
    tex_coord: Vec2,
}

impl Assembler {
    /// Idle assembler with white color and (0, 0) texture coordinate latched
    pub fn new() -> Self {
        Self {
            state: AssemblyState::Idle,
            color: Vec4::ONE,
            tex_coord: Vec2::ZERO,
        }
    }

    /// Whether a primitive group is open
    #[inline(always)]
    pub fn is_open(&self) -> bool {
        matches!(self.state, AssemblyState::Accumulating { .. })
    }

    pub fn state(&self) -> &AssemblyState {
        &self.state
    }

    pub fn color(&self) -> Vec4 {
        self.color
    }

    pub fn tex_coord(&self) -> Vec2 {
        self.tex_coord
    }

    /// Latch a color, clamping each component to [0, 1]
    pub fn set_color(&mut self, color: Vec4) {
        self.color = color.clamp(Vec4::ZERO, Vec4::ONE);
    }

    pub fn set_tex_coord(&mut self, tex_coord: Vec2) {
        self.tex_coord = tex_coord;
    }

    /// Open a primitive group
    pub fn begin(&mut self, mode: DrawMode) -> Result<()> {
        if self.is_open() {
            return Err(GlError::InvalidOperation);
        }
        log::debug!("begin({:?})", mode);
        self.state = AssemblyState::Accumulating {
            mode,
            vertices: Vec::new(),
        };
        Ok(())
    }

    /// Append a vertex carrying the latched attributes
    pub fn push_vertex(&mut self, position: Vec3) -> Result<()> {
        match &mut self.state {
            AssemblyState::Accumulating { vertices, .. } => {
                vertices.push(Vertex::new(position, self.color, self.tex_coord));
                Ok(())
            }
            AssemblyState::Idle => Err(GlError::InvalidOperation),
        }
    }

    /// Close the open group, handing back its mode and vertices
    pub fn end(&mut self) -> Result<(DrawMode, Vec<Vertex>)> {
        match std::mem::take(&mut self.state) {
            AssemblyState::Accumulating { mode, vertices } => {
                log::debug!("end({:?}): {} vertices", mode, vertices.len());
                Ok((mode, vertices))
            }
            AssemblyState::Idle => Err(GlError::InvalidOperation),
        }
    }
}

impl Default for Assembler {
    fn default() -> Self {
        Self::new()
    }
}

/// Group transformed vertices into primitives
///
/// Quads are split along the 0-2 diagonal into triangles [0, 1, 2] and
/// [2, 3, 0]; both halves carry the facing computed for the quad.
pub fn assemble(mode: DrawMode, vertices: &[WindowVertex]) -> Vec<Primitive> {
    let stride = mode.vertices_per_primitive();
    let chunks = vertices.chunks_exact(stride);
    if !chunks.remainder().is_empty() {
        log::warn!(
            "Dropping {} trailing vertices of incomplete {:?} primitive",
            chunks.remainder().len(),
            mode
        );
    }

    let mut primitives = Vec::with_capacity(vertices.len() / stride * 2);
    for chunk in chunks {
        match mode {
            DrawMode::Points => primitives.push(Primitive::Point(chunk[0])),
            DrawMode::Lines => primitives.push(Primitive::Line([chunk[0], chunk[1]])),
            DrawMode::Triangles => primitives.push(Primitive::Triangle {
                vertices: [chunk[0], chunk[1], chunk[2]],
                front_facing: chunk[0].front_facing,
            }),
            DrawMode::Quads => {
                let front_facing = chunk[0].front_facing;
                primitives.push(Primitive::Triangle {
                    vertices: [chunk[0], chunk[1], chunk[2]],
                    front_facing,
                });
                primitives.push(Primitive::Triangle {
                    vertices: [chunk[2], chunk[3], chunk[0]],
                    front_facing,
                });
            }
        }
    }
    primitives
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window_vertex(x: f32, y: f32) -> WindowVertex {
        WindowVertex {
            position: Vec3::new(x, y, 0.0),
            w: 1.0,
            color: Vec4::ONE,
            tex_coord: Vec2::ZERO,
            front_facing: true,
        }
    }

    #[test]
    fn test_begin_end_cycle() {
        let mut asm = Assembler::new();
        assert!(!asm.is_open());
        asm.begin(DrawMode::Triangles).unwrap();
        assert!(asm.is_open());
        let (mode, vertices) = asm.end().unwrap();
        assert_eq!(mode, DrawMode::Triangles);
        assert!(vertices.is_empty());
        assert_eq!(*asm.state(), AssemblyState::Idle);
    }

    #[test]
    fn test_begin_twice_fails_and_keeps_group() {
        let mut asm = Assembler::new();
        asm.begin(DrawMode::Lines).unwrap();
        asm.push_vertex(Vec3::ZERO).unwrap();
        assert_eq!(asm.begin(DrawMode::Points), Err(GlError::InvalidOperation));

        let (mode, vertices) = asm.end().unwrap();
        assert_eq!(mode, DrawMode::Lines);
        assert_eq!(vertices.len(), 1);
    }

    #[test]
    fn test_end_without_begin_fails() {
        let mut asm = Assembler::new();
        assert_eq!(asm.end(), Err(GlError::InvalidOperation));
    }

    #[test]
    fn test_vertex_outside_group_fails() {
        let mut asm = Assembler::new();
        assert_eq!(asm.push_vertex(Vec3::ONE), Err(GlError::InvalidOperation));
    }

    #[test]
    fn test_attributes_are_latched() {
        let mut asm = Assembler::new();
        asm.begin(DrawMode::Points).unwrap();
        asm.push_vertex(Vec3::ZERO).unwrap();
        asm.set_color(Vec4::new(1.0, 0.0, 0.0, 1.0));
        asm.set_tex_coord(Vec2::new(0.5, 0.25));
        asm.push_vertex(Vec3::X).unwrap();
        asm.push_vertex(Vec3::Y).unwrap();
        let (_, vertices) = asm.end().unwrap();

        assert_eq!(vertices[0].color, Vec4::ONE);
        assert_eq!(vertices[0].tex_coord, Vec2::ZERO);
        assert_eq!(vertices[1].color, Vec4::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(vertices[2].color, Vec4::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(vertices[2].tex_coord, Vec2::new(0.5, 0.25));
    }

    #[test]
    fn test_color_is_clamped() {
        let mut asm = Assembler::new();
        asm.set_color(Vec4::new(2.0, -1.0, 0.5, 1.5));
        assert_eq!(asm.color(), Vec4::new(1.0, 0.0, 0.5, 1.0));
    }

    #[test]
    fn test_assemble_lines_drops_trailing_vertex() {
        let vertices: Vec<_> = (0..5).map(|i| window_vertex(i as f32, 0.0)).collect();
        let primitives = assemble(DrawMode::Lines, &vertices);
        assert_eq!(primitives.len(), 2);
        assert_eq!(primitives[1], Primitive::Line([vertices[2], vertices[3]]));
    }

    #[test]
    fn test_assemble_triangles_drops_remainder() {
        let vertices: Vec<_> = (0..8).map(|i| window_vertex(i as f32, 0.0)).collect();
        assert_eq!(assemble(DrawMode::Triangles, &vertices).len(), 2);
        assert!(assemble(DrawMode::Triangles, &vertices[..2]).is_empty());
    }

    #[test]
    fn test_assemble_points() {
        let vertices: Vec<_> = (0..3).map(|i| window_vertex(i as f32, 0.0)).collect();
        let primitives = assemble(DrawMode::Points, &vertices);
        assert_eq!(primitives.len(), 3);
        assert_eq!(primitives[2], Primitive::Point(vertices[2]));
    }

    #[test]
    fn test_assemble_quad_split_and_facing_propagation() {
        let mut vertices: Vec<_> = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]
            .iter()
            .map(|&(x, y)| window_vertex(x, y))
            .collect();
        vertices[0].front_facing = false;

        let primitives = assemble(DrawMode::Quads, &vertices);
        assert_eq!(
            primitives,
            vec![
                Primitive::Triangle {
                    vertices: [vertices[0], vertices[1], vertices[2]],
                    front_facing: false,
                },
                Primitive::Triangle {
                    vertices: [vertices[2], vertices[3], vertices[0]],
                    front_facing: false,
                },
            ]
        );
    }
}
