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

//! Pixel transfer
//!
//! Caller buffers cross the API as [`PixelSink`] (read-back) and
//! [`PixelSource`] (texture upload). The variant has to agree with the type
//! enumerant passed alongside: `Bytes` pairs with `BYTE`/`UNSIGNED_BYTE`,
//! `Floats` with `FLOAT`.

use super::super::enums::{PixelFormat, PixelType};
use super::Context;
use crate::core::error::{GlError, Result};

/// Destination of `read_pixels`
#[derive(Debug)]
pub enum PixelSink<'a> {
    /// Components scaled by 255 and rounded
    Bytes(&'a mut [u8]),
    /// Components as stored
    Floats(&'a mut [f32]),
}

impl PixelSink<'_> {
    fn len(&self) -> usize {
        match self {
            PixelSink::Bytes(out) => out.len(),
            PixelSink::Floats(out) => out.len(),
        }
    }

    fn matches(&self, ty: PixelType) -> bool {
        match self {
            PixelSink::Bytes(_) => ty.is_byte(),
            PixelSink::Floats(_) => !ty.is_byte(),
        }
    }
}

/// Source of `tex_image_2d`
#[derive(Debug, Clone, Copy)]
pub enum PixelSource<'a> {
    /// Components in 0-255, normalized by 1/255
    Bytes(&'a [u8]),
    /// Components taken as-is
    Floats(&'a [f32]),
}

impl PixelSource<'_> {
    pub(crate) fn len(&self) -> usize {
        match self {
            PixelSource::Bytes(data) => data.len(),
            PixelSource::Floats(data) => data.len(),
        }
    }

    pub(crate) fn matches(&self, ty: PixelType) -> bool {
        match self {
            PixelSource::Bytes(_) => ty.is_byte(),
            PixelSource::Floats(_) => !ty.is_byte(),
        }
    }

    /// First `count` components as floats
    pub(crate) fn to_floats(self, count: usize) -> Vec<f32> {
        match self {
            PixelSource::Bytes(data) => data[..count].iter().map(|&b| b as f32 / 255.0).collect(),
            PixelSource::Floats(data) => data[..count].to_vec(),
        }
    }
}

#[inline(always)]
fn to_byte(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl Context {
    /// Copy a rectangle of the color or depth buffer into `sink`
    ///
    /// # Arguments
    ///
    /// * `x`, `y` - Top-left corner; rows count downwards from the top of the
    ///   framebuffer
    /// * `width`, `height` - Rectangle size in pixels
    /// * `format` - `RGBA` (4 components) or `DEPTH_COMPONENT` (1 component)
    /// * `ty` - `BYTE`, `UNSIGNED_BYTE` or `FLOAT`
    /// * `sink` - Output, row-major with `width` pixels per row
    ///
    /// Parts of the rectangle outside the framebuffer leave the matching
    /// output untouched.
    ///
    /// # Errors
    ///
    /// Recorded, in checking order: `InvalidOperation` inside a group,
    /// `InvalidEnum` for the format or type, `InvalidValue` for a negative
    /// size, `InvalidOperation` when the sink does not match the type,
    /// `InvalidValue` for a short sink, `InvalidOperation` for depth reads
    /// without a depth buffer.
    #[allow(clippy::too_many_arguments)]
    pub fn read_pixels(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        format: u32,
        ty: u32,
        sink: PixelSink<'_>,
    ) {
        let result = self.copy_pixels(x, y, width, height, format, ty, sink);
        self.record(result);
    }

    #[allow(clippy::too_many_arguments)]
    fn copy_pixels(
        &self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        format: u32,
        ty: u32,
        sink: PixelSink<'_>,
    ) -> Result<()> {
        self.ensure_idle()?;
        let format = PixelFormat::try_from(format)?;
        let ty = PixelType::try_from(ty)?;
        if width < 0 || height < 0 {
            return Err(GlError::InvalidValue);
        }
        if !sink.matches(ty) {
            return Err(GlError::InvalidOperation);
        }

        let (w, h) = (width as usize, height as usize);
        let needed = w
            .checked_mul(h)
            .and_then(|n| n.checked_mul(format.components()))
            .ok_or(GlError::InvalidValue)?;
        if sink.len() < needed {
            return Err(GlError::InvalidValue);
        }

        log::trace!("read_pixels({}, {}, {}x{}, {:?}, {:?})", x, y, w, h, format, ty);

        let fb = &self.framebuffer;
        match (format, sink) {
            (PixelFormat::Rgba, PixelSink::Bytes(out)) => {
                fb.copy_color_rect(x, y, w, h, out, to_byte)
            }
            (PixelFormat::Rgba, PixelSink::Floats(out)) => {
                fb.copy_color_rect(x, y, w, h, out, |v| v)
            }
            (PixelFormat::DepthComponent, PixelSink::Bytes(out)) => {
                if !fb.copy_depth_rect(x, y, w, h, out, to_byte) {
                    return Err(GlError::InvalidOperation);
                }
            }
            (PixelFormat::DepthComponent, PixelSink::Floats(out)) => {
                if !fb.copy_depth_rect(x, y, w, h, out, |v| v) {
                    return Err(GlError::InvalidOperation);
                }
            }
        }
        Ok(())
    }
}
