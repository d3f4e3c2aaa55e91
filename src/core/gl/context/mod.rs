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

//! GL context
//!
//! The [`Context`] owns every piece of pipeline state. Its operations are
//! spread over sub-modules by concern:
//!
//! - [`capability`]: enable/disable, clear values, clear
//! - [`matrix`]: matrix mode and transform composition
//! - [`immediate`]: begin/end, vertex and attribute submission
//! - [`texture`]: texture handles, binding and upload
//! - [`pixels`]: pixel read-back and the pixel transfer types
//!
//! # Errors
//!
//! No operation returns an error to the caller. A failing call leaves the
//! state exactly as it was and records the error in a single slot, replacing
//! whatever was stored before. [`Context::get_error`] takes it out.

mod capability;
mod immediate;
mod matrix;
mod pixels;
mod texture;

pub use pixels::{PixelSink, PixelSource};

use super::assembler::Assembler;
use super::enums::Capabilities;
use super::framebuffer::Framebuffer;
use super::matrix::MatrixStack;
use super::texture::TextureStore;
use crate::core::config::ContextConfig;
use crate::core::error::{GlError, Result};

/// Software GL rendering context
///
/// # Examples
///
/// ```
/// use softgl::{gl, Context, PixelSink};
///
/// let mut ctx = Context::new(4, 4);
/// ctx.clear_color(1.0, 0.0, 0.0, 1.0);
/// ctx.clear(gl::COLOR_BUFFER_BIT);
///
/// let mut pixels = vec![0u8; 4 * 4 * 4];
/// ctx.read_pixels(0, 0, 4, 4, gl::RGBA, gl::UNSIGNED_BYTE, PixelSink::Bytes(&mut pixels));
///
/// assert_eq!(ctx.get_error(), None);
/// assert!(pixels.chunks(4).all(|p| p == [255, 0, 0, 255]));
/// ```
pub struct Context {
    /// Color and depth buffers
    pub(crate) framebuffer: Framebuffer,

    /// Model-view and projection slots
    pub(crate) matrices: MatrixStack,

    /// Begin/end state machine and latched attributes
    pub(crate) assembler: Assembler,

    /// Allocated textures
    pub(crate) textures: TextureStore,

    /// Handle bound to TEXTURE_2D (0 = none)
    pub(crate) bound_texture: u32,

    /// Enabled capabilities
    pub(crate) capabilities: Capabilities,

    /// Color buffer clear value
    pub(crate) clear_color: [f32; 4],

    /// Depth buffer clear value
    pub(crate) clear_depth: f32,

    /// Most recent unconsumed error
    error: Option<GlError>,
}

impl Context {
    /// Create a context with a `width`×`height` color buffer and a depth buffer
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_config(&ContextConfig::new(width, height))
    }

    /// Create a context from a [`ContextConfig`]
    ///
    /// The buffers start out holding the configured clear values.
    pub fn with_config(config: &ContextConfig) -> Self {
        let mut framebuffer = Framebuffer::new(
            config.width as usize,
            config.height as usize,
            config.depth_buffer,
        );
        framebuffer.fill_color(config.clear_color);
        framebuffer.fill_depth(config.clear_depth);

        log::debug!(
            "Created {}x{} context (depth buffer: {})",
            config.width,
            config.height,
            config.depth_buffer
        );

        Self {
            framebuffer,
            matrices: MatrixStack::new(),
            assembler: Assembler::new(),
            textures: TextureStore::new(),
            bound_texture: 0,
            capabilities: Capabilities::empty(),
            clear_color: config.clear_color,
            clear_depth: config.clear_depth,
            error: None,
        }
    }

    /// Framebuffer width in pixels
    pub fn width(&self) -> u32 {
        self.framebuffer.width() as u32
    }

    /// Framebuffer height in pixels
    pub fn height(&self) -> u32 {
        self.framebuffer.height() as u32
    }

    /// Read-only view of the color and depth buffers
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    /// Return and clear the pending error
    ///
    /// While a primitive group is open this always returns `None` and leaves
    /// the pending error in place.
    pub fn get_error(&mut self) -> Option<GlError> {
        if self.assembler.is_open() {
            return None;
        }
        self.error.take()
    }

    /// Fail with `InvalidOperation` while a primitive group is open
    #[inline(always)]
    pub(crate) fn ensure_idle(&self) -> Result<()> {
        if self.assembler.is_open() {
            Err(GlError::InvalidOperation)
        } else {
            Ok(())
        }
    }

    /// Store the error of a failed step, passing successful values through
    pub(crate) fn record<T>(&mut self, result: Result<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                log::debug!("GL error recorded: {}", err);
                self.error = Some(err);
                None
            }
        }
    }
}
