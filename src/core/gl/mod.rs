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

//! Fixed-function GL pipeline
//!
//! This module implements an OpenGL 1.x style immediate-mode pipeline in
//! software. The application drives a [`Context`]:
//!
//! - Configure capabilities (depth test, face culling, texturing)
//! - Set up the model-view and projection matrices
//! - Submit vertices between `begin` and `end`
//! - Read the rendered pixels back
//!
//! # Pipeline
//!
//! ```text
//! begin ─> vertex* ─> end
//!                      │
//!                      ├─ transform   (model-view, projection, divide, viewport)
//!                      ├─ assemble    (points, lines, triangles, quads)
//!                      └─ rasterize   (cull, interpolate, depth test, texture)
//!                                          │
//!                                          v
//!                                     framebuffer
//! ```
//!
//! # Coordinate System
//!
//! Window coordinates have their origin at the top-left corner of the
//! framebuffer, X to the right and Y downwards. NDC (-1, 1) maps to pixel
//! (0, 0).

mod assembler;
pub mod consts;
mod context;
mod enums;
mod framebuffer;
mod matrix;
mod primitives;
mod render;
mod texture;
mod transform;
#[cfg(test)]
mod tests;

// Public re-exports
pub use assembler::{assemble, Assembler, AssemblyState};
pub use context::{Context, PixelSink, PixelSource};
pub use enums::*;
pub use framebuffer::Framebuffer;
pub use matrix::MatrixStack;
pub use primitives::*;
pub use render::{interpolate, Attributes, Rasterizer};
pub use texture::{Texture, TextureStore};
pub use transform::{is_front_facing, transform_vertices, TransformParams};
