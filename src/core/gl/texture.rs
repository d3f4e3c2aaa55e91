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

//! Texture store
//!
//! Textures are identified by 1-based handles handed out monotonically by
//! [`TextureStore::generate`]. Handle 0 is reserved for "no texture".
//!
//! # Sampling
//!
//! Sampling is nearest-neighbor with repeat addressing:
//!
//! ```text
//! s = floor(u × width)  mod width
//! t = floor(v × height) mod height
//! ```
//!
//! The modulo is Euclidean, so negative coordinates wrap around instead of
//! producing negative indices.

use std::collections::HashMap;

/// A 2D RGBA texture with `f32` components in [0, 1]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Texture {
    width: usize,
    height: usize,
    pixels: Vec<f32>,
}

impl Texture {
    /// Create a texture from `width * height * 4` components
    ///
    /// Returns `None` when `pixels` is too short.
    pub fn from_rgba(width: usize, height: usize, pixels: &[f32]) -> Option<Self> {
        let len = width.checked_mul(height)?.checked_mul(4)?;
        let pixels = pixels.get(..len)?;
        Some(Self {
            width,
            height,
            pixels: pixels.to_vec(),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// True until image data has been uploaded
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Texel at integer coordinates, wrapped into range
    ///
    /// Returns `None` for an empty texture.
    pub fn texel(&self, s: i64, t: i64) -> Option<[f32; 4]> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        let s = s.rem_euclid(self.width as i64) as usize;
        let t = t.rem_euclid(self.height as i64) as usize;
        let o = (t * self.width + s) * 4;
        let texel = self.pixels.get(o..o + 4)?;
        Some([texel[0], texel[1], texel[2], texel[3]])
    }

    /// Nearest-neighbor sample at normalized coordinates
    ///
    /// Returns `None` for an empty texture.
    ///
    /// # Examples
    ///
    /// ```
    /// use softgl::Texture;
    ///
    /// #[rustfmt::skip]
    /// let tex = Texture::from_rgba(2, 1, &[
    ///     1.0, 0.0, 0.0, 1.0,
    ///     0.0, 1.0, 0.0, 1.0,
    /// ]).unwrap();
    ///
    /// assert_eq!(tex.sample(0.25, 0.0), Some([1.0, 0.0, 0.0, 1.0]));
    /// assert_eq!(tex.sample(0.75, 0.0), Some([0.0, 1.0, 0.0, 1.0]));
    /// // Negative coordinates wrap like positive ones
    /// assert_eq!(tex.sample(-0.25, 0.0), Some([0.0, 1.0, 0.0, 1.0]));
    /// ```
    pub fn sample(&self, u: f32, v: f32) -> Option<[f32; 4]> {
        let s = (u * self.width as f32).floor() as i64;
        let t = (v * self.height as f32).floor() as i64;
        self.texel(s, t)
    }
}

/// Handle-indexed texture storage
#[derive(Debug)]
pub struct TextureStore {
    textures: HashMap<u32, Texture>,
    next_handle: u32,
}

impl TextureStore {
    pub fn new() -> Self {
        Self {
            textures: HashMap::new(),
            next_handle: 1,
        }
    }

    /// Allocate `count` fresh, empty textures and return their handles
    pub fn generate(&mut self, count: usize) -> Vec<u32> {
        let handles: Vec<u32> = (0..count)
            .map(|_| {
                let handle = self.next_handle;
                self.next_handle += 1;
                self.textures.insert(handle, Texture::default());
                handle
            })
            .collect();
        log::debug!("Allocated texture handles {:?}", handles);
        handles
    }

    /// Whether `handle` was allocated by this store
    pub fn contains(&self, handle: u32) -> bool {
        self.textures.contains_key(&handle)
    }

    pub fn get(&self, handle: u32) -> Option<&Texture> {
        self.textures.get(&handle)
    }

    /// Replace the image of an allocated texture
    ///
    /// Returns `false` if `handle` is unknown.
    pub fn upload(&mut self, handle: u32, texture: Texture) -> bool {
        match self.textures.get_mut(&handle) {
            Some(slot) => {
                log::debug!(
                    "Uploaded {}x{} image to texture {}",
                    texture.width,
                    texture.height,
                    handle
                );
                *slot = texture;
                true
            }
            None => false,
        }
    }
}

impl Default for TextureStore {
    fn default() -> Self {
        Self::new()
    }
}
