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

//! Texture handles, binding and image upload

use super::super::enums::{PixelFormat, PixelType, TextureTarget};
use super::super::texture::Texture;
use super::pixels::PixelSource;
use super::Context;
use crate::core::error::{GlError, Result};

impl Context {
    /// Allocate `count` texture handles
    ///
    /// Handles are never 0 and never reused. A negative count records
    /// `InvalidValue` and returns no handles.
    pub fn gen_textures(&mut self, count: i32) -> Vec<u32> {
        let result = self.ensure_idle().and_then(|()| {
            let count = usize::try_from(count).map_err(|_| GlError::InvalidValue)?;
            Ok(self.textures.generate(count))
        });
        self.record(result).unwrap_or_default()
    }

    /// Bind `handle` to `TEXTURE_2D`; handle 0 unbinds
    pub fn bind_texture(&mut self, target: u32, handle: u32) {
        let result = self.bind(target, handle);
        self.record(result);
    }

    fn bind(&mut self, target: u32, handle: u32) -> Result<()> {
        self.ensure_idle()?;
        TextureTarget::try_from(target)?;
        if handle != 0 && !self.textures.contains(handle) {
            return Err(GlError::InvalidValue);
        }
        log::debug!("Bound texture {}", handle);
        self.bound_texture = handle;
        Ok(())
    }

    /// Handle currently bound to `TEXTURE_2D` (0 when none)
    pub fn bound_texture(&self) -> u32 {
        self.bound_texture
    }

    /// Upload an RGBA image into the bound texture
    ///
    /// # Arguments
    ///
    /// * `target` - Must be `TEXTURE_2D`
    /// * `width`, `height` - Image size in texels
    /// * `format` - Must be `RGBA`
    /// * `ty` - `BYTE`, `UNSIGNED_BYTE` or `FLOAT`, matching `data`
    /// * `data` - Row-major texels, top row first
    pub fn tex_image_2d(
        &mut self,
        target: u32,
        width: i32,
        height: i32,
        format: u32,
        ty: u32,
        data: PixelSource<'_>,
    ) {
        let result = self.upload_image(target, width, height, format, ty, data);
        self.record(result);
    }

    fn upload_image(
        &mut self,
        target: u32,
        width: i32,
        height: i32,
        format: u32,
        ty: u32,
        data: PixelSource<'_>,
    ) -> Result<()> {
        self.ensure_idle()?;
        TextureTarget::try_from(target)?;
        if PixelFormat::try_from(format)? != PixelFormat::Rgba {
            return Err(GlError::InvalidEnum);
        }
        let ty = PixelType::try_from(ty)?;
        if !data.matches(ty) {
            return Err(GlError::InvalidOperation);
        }
        if width < 0 || height < 0 {
            return Err(GlError::InvalidValue);
        }

        let (w, h) = (width as usize, height as usize);
        let count = w
            .checked_mul(h)
            .and_then(|n| n.checked_mul(4))
            .ok_or(GlError::InvalidValue)?;
        if data.len() < count {
            return Err(GlError::InvalidValue);
        }
        if self.bound_texture == 0 {
            return Err(GlError::InvalidOperation);
        }

        let texture =
            Texture::from_rgba(w, h, &data.to_floats(count)).ok_or(GlError::InvalidValue)?;
        if !self.textures.upload(self.bound_texture, texture) {
            return Err(GlError::InvalidOperation);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::core::error::GlError;
    use crate::core::gl::consts as gl;
    use crate::{Context, PixelSource};

    #[test]
    fn test_gen_textures_unique_nonzero() {
        let mut ctx = Context::new(1, 1);
        let first = ctx.gen_textures(2);
        let second = ctx.gen_textures(1);

        assert_eq!(first.len(), 2);
        assert_eq!(second.len(), 1);
        assert!(!first.contains(&0));
        assert!(!first.contains(&second[0]));
        assert_ne!(first[0], first[1]);
    }

    #[test]
    fn test_gen_textures_negative() {
        let mut ctx = Context::new(1, 1);
        assert!(ctx.gen_textures(-1).is_empty());
        assert_eq!(ctx.get_error(), Some(GlError::InvalidValue));
        assert!(ctx.gen_textures(0).is_empty());
        assert_eq!(ctx.get_error(), None);
    }

    #[test]
    fn test_bind_texture() {
        let mut ctx = Context::new(1, 1);
        let handle = ctx.gen_textures(1)[0];

        ctx.bind_texture(gl::TEXTURE_2D, handle);
        assert_eq!(ctx.bound_texture(), handle);

        ctx.bind_texture(gl::TEXTURE_2D, handle + 100);
        assert_eq!(ctx.get_error(), Some(GlError::InvalidValue));
        assert_eq!(ctx.bound_texture(), handle);

        ctx.bind_texture(gl::RGBA, handle);
        assert_eq!(ctx.get_error(), Some(GlError::InvalidEnum));

        ctx.bind_texture(gl::TEXTURE_2D, 0);
        assert_eq!(ctx.bound_texture(), 0);
        assert_eq!(ctx.get_error(), None);
    }

    #[test]
    fn test_tex_image_without_binding() {
        let mut ctx = Context::new(1, 1);
        ctx.tex_image_2d(
            gl::TEXTURE_2D,
            1,
            1,
            gl::RGBA,
            gl::UNSIGNED_BYTE,
            PixelSource::Bytes(&[255; 4]),
        );
        assert_eq!(ctx.get_error(), Some(GlError::InvalidOperation));
    }

    fn upload(ctx: &mut Context, target: u32, width: i32, format: u32, ty: u32) -> Option<GlError> {
        let texels = [0.5f32; 8];
        ctx.tex_image_2d(target, width, 1, format, ty, PixelSource::Floats(&texels));
        ctx.get_error()
    }

    #[test]
    fn test_tex_image_validation() {
        let mut ctx = Context::new(1, 1);
        let handle = ctx.gen_textures(1)[0];
        ctx.bind_texture(gl::TEXTURE_2D, handle);

        let cases = [
            (gl::DEPTH_TEST, 2, gl::RGBA, gl::FLOAT, Some(GlError::InvalidEnum)),
            (gl::TEXTURE_2D, 2, gl::DEPTH_COMPONENT, gl::FLOAT, Some(GlError::InvalidEnum)),
            (gl::TEXTURE_2D, 2, gl::RGBA, 0x1403, Some(GlError::InvalidEnum)),
            (gl::TEXTURE_2D, 2, gl::RGBA, gl::UNSIGNED_BYTE, Some(GlError::InvalidOperation)),
            (gl::TEXTURE_2D, -2, gl::RGBA, gl::FLOAT, Some(GlError::InvalidValue)),
            (gl::TEXTURE_2D, 3, gl::RGBA, gl::FLOAT, Some(GlError::InvalidValue)),
            (gl::TEXTURE_2D, 2, gl::RGBA, gl::FLOAT, None),
        ];
        for (target, width, format, ty, expected) in cases {
            assert_eq!(upload(&mut ctx, target, width, format, ty), expected);
        }
        assert_eq!(ctx.textures.get(handle).map(|t| t.width()), Some(2));
    }

    #[test]
    fn test_tex_image_size_overflow() {
        let mut ctx = Context::new(1, 1);
        let handle = ctx.gen_textures(1)[0];
        ctx.bind_texture(gl::TEXTURE_2D, handle);
        ctx.tex_image_2d(
            gl::TEXTURE_2D,
            i32::MAX,
            i32::MAX,
            gl::RGBA,
            gl::FLOAT,
            PixelSource::Floats(&[]),
        );
        assert_eq!(ctx.get_error(), Some(GlError::InvalidValue));
        assert_eq!(ctx.textures.get(handle).map(|t| t.is_empty()), Some(true));
    }

    #[test]
    fn test_byte_upload_is_normalized() {
        let mut ctx = Context::new(1, 1);
        let handle = ctx.gen_textures(1)[0];
        ctx.bind_texture(gl::TEXTURE_2D, handle);
        ctx.tex_image_2d(
            gl::TEXTURE_2D,
            1,
            1,
            gl::RGBA,
            gl::UNSIGNED_BYTE,
            PixelSource::Bytes(&[255, 0, 51, 255]),
        );
        assert_eq!(ctx.get_error(), None);

        let texture = ctx.textures.get(handle).unwrap();
        assert_eq!(texture.sample(0.5, 0.5), Some([1.0, 0.0, 0.2, 1.0]));
    }

    #[test]
    fn test_texture_ops_inside_group() {
        let mut ctx = Context::new(1, 1);
        ctx.begin(gl::POINTS);
        assert!(ctx.gen_textures(1).is_empty());
        ctx.end();
        assert_eq!(ctx.get_error(), Some(GlError::InvalidOperation));
    }
}
