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

//! softgl: a software OpenGL 1.x style renderer
//!
//! This crate renders points, lines, triangles and quads into an in-memory
//! RGBA float framebuffer, driven through a fixed-function immediate-mode
//! API.
//!
//! # Architecture
//!
//! - [`core::gl`]: context, transform, assembly and rasterization
//! - [`core::config`]: [`ContextConfig`], loadable from TOML
//! - [`core::error`]: [`GlError`] and [`ConfigError`]
//!
//! # Example
//!
//! ```
//! use softgl::{gl, Context, PixelSink};
//!
//! let mut ctx = Context::new(8, 8);
//! ctx.enable(gl::DEPTH_TEST);
//!
//! ctx.matrix_mode(gl::PROJECTION);
//! ctx.perspective(60.0, 1.0, 0.1, 100.0);
//! ctx.matrix_mode(gl::MODELVIEW);
//! ctx.translate(0.0, 0.0, -3.0);
//!
//! ctx.begin(gl::TRIANGLES);
//! ctx.color3f(1.0, 0.0, 0.0);
//! ctx.vertex3f(-1.0, -1.0, 0.0);
//! ctx.color3f(0.0, 1.0, 0.0);
//! ctx.vertex3f(1.0, -1.0, 0.0);
//! ctx.color3f(0.0, 0.0, 1.0);
//! ctx.vertex3f(0.0, 1.0, 0.0);
//! ctx.end();
//!
//! let mut pixels = vec![0u8; 8 * 8 * 4];
//! ctx.read_pixels(0, 0, 8, 8, gl::RGBA, gl::UNSIGNED_BYTE, PixelSink::Bytes(&mut pixels));
//! assert_eq!(ctx.get_error(), None);
//! ```
//!
//! # Error Handling
//!
//! GL operations never return errors. Like OpenGL, a failing call records a
//! [`GlError`] that [`Context::get_error`] hands back later. Configuration
//! loading returns `Result<_, ConfigError>`.

pub mod core;

// Re-export commonly used types
pub use crate::core::config::ContextConfig;
pub use crate::core::error::{ConfigError, GlError, Result};
pub use crate::core::gl::consts as gl;
pub use crate::core::gl::{
    interpolate, Attributes, Context, DrawMode, Framebuffer, PixelSink, PixelSource, Primitive,
    Rasterizer, Texture, Vertex, WindowVertex,
};
