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

//! Color and depth buffers
//!
//! # Layout
//!
//! Both buffers are flat row-major vectors. Row 0 is the top of the image,
//! matching the Y flip applied by the viewport mapping. The color buffer holds
//! four `f32` components (RGBA, 0.0-1.0) per pixel, the depth buffer one `f32`.
//!
//! The size is fixed when the context is created and never changes.

use std::ops::Range;

/// Color buffer plus optional depth buffer
///
/// # Examples
///
/// ```
/// use softgl::Framebuffer;
///
/// let mut fb = Framebuffer::new(4, 4, true);
/// fb.fill_color([1.0, 0.0, 0.0, 1.0]);
/// assert_eq!(fb.pixel(3, 3), Some([1.0, 0.0, 0.0, 1.0]));
/// assert_eq!(fb.pixel(4, 0), None);
/// ```
#[derive(Debug, Clone)]
pub struct Framebuffer {
    width: usize,
    height: usize,
    color: Vec<f32>,
    depth: Option<Vec<f32>>,
}

impl Framebuffer {
    /// Create a framebuffer with every pixel black/opaque and every depth at 1.0
    pub fn new(width: usize, height: usize, depth_buffer: bool) -> Self {
        let size = width * height;
        let mut color = vec![0.0; size * 4];
        for pixel in color.chunks_exact_mut(4) {
            pixel[3] = 1.0;
        }

        Self {
            width,
            height,
            color,
            depth: depth_buffer.then(|| vec![1.0; size]),
        }
    }

    /// Width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether a depth buffer was allocated
    pub fn has_depth(&self) -> bool {
        self.depth.is_some()
    }

    /// Raw RGBA color storage
    pub fn color_data(&self) -> &[f32] {
        &self.color
    }

    /// Raw depth storage, if allocated
    pub fn depth_data(&self) -> Option<&[f32]> {
        self.depth.as_deref()
    }

    /// Linear pixel index, or `None` outside the buffer
    #[inline(always)]
    pub(crate) fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    /// Color at (x, y)
    pub fn pixel(&self, x: i32, y: i32) -> Option<[f32; 4]> {
        let o = self.index(x, y)? * 4;
        Some([
            self.color[o],
            self.color[o + 1],
            self.color[o + 2],
            self.color[o + 3],
        ])
    }

    /// Stored depth at (x, y)
    pub fn depth(&self, x: i32, y: i32) -> Option<f32> {
        let index = self.index(x, y)?;
        self.depth.as_ref().map(|depth| depth[index])
    }

    /// Broadcast a color to every pixel
    pub fn fill_color(&mut self, color: [f32; 4]) {
        for pixel in self.color.chunks_exact_mut(4) {
            pixel.copy_from_slice(&color);
        }
    }

    /// Broadcast a depth value to every pixel; no-op without a depth buffer
    pub fn fill_depth(&mut self, value: f32) {
        if let Some(depth) = self.depth.as_mut() {
            depth.fill(value);
        }
    }

    #[inline(always)]
    pub(crate) fn write_color(&mut self, index: usize, color: [f32; 4]) {
        let o = index * 4;
        self.color[o..o + 4].copy_from_slice(&color);
    }

    /// Depth test at `index`
    ///
    /// Fails when `depth` is greater than the stored value; otherwise stores
    /// `depth` and passes. Always passes without a depth buffer.
    #[inline(always)]
    pub(crate) fn test_and_store_depth(&mut self, index: usize, depth: f32) -> bool {
        match self.depth.as_mut() {
            Some(buffer) => {
                if depth > buffer[index] {
                    false
                } else {
                    buffer[index] = depth;
                    true
                }
            }
            None => true,
        }
    }

    /// Copy a rectangle of color components into `out`
    ///
    /// `out` is laid out row-major, `w * 4` values per row. Parts of the
    /// rectangle outside the buffer leave `out` untouched.
    pub(crate) fn copy_color_rect<T>(
        &self,
        x: i32,
        y: i32,
        w: usize,
        h: usize,
        out: &mut [T],
        convert: impl Fn(f32) -> T,
    ) {
        let cols = visible_span(x, w, self.width);
        for row in visible_span(y, h, self.height) {
            let fb_row = offset(y, row) * self.width;
            for col in cols.clone() {
                let src = (fb_row + offset(x, col)) * 4;
                let dst = (row * w + col) * 4;
                for c in 0..4 {
                    out[dst + c] = convert(self.color[src + c]);
                }
            }
        }
    }

    /// Copy a rectangle of depth values into `out`, one value per pixel
    ///
    /// Returns `false` when there is no depth buffer.
    pub(crate) fn copy_depth_rect<T>(
        &self,
        x: i32,
        y: i32,
        w: usize,
        h: usize,
        out: &mut [T],
        convert: impl Fn(f32) -> T,
    ) -> bool {
        let Some(depth) = self.depth.as_ref() else {
            return false;
        };
        let cols = visible_span(x, w, self.width);
        for row in visible_span(y, h, self.height) {
            let fb_row = offset(y, row) * self.width;
            for col in cols.clone() {
                out[row * w + col] = convert(depth[fb_row + offset(x, col)]);
            }
        }
        true
    }
}

/// Offsets `0..len` from `origin` that land inside `0..limit`
fn visible_span(origin: i32, len: usize, limit: usize) -> Range<usize> {
    let origin = i64::from(origin);
    let len = i64::try_from(len).unwrap_or(i64::MAX);
    let limit = i64::try_from(limit).unwrap_or(i64::MAX);
    let start = origin.saturating_neg().clamp(0, len);
    let end = limit.saturating_sub(origin).clamp(start, len);
    start as usize..end as usize
}

/// Buffer coordinate of an offset returned by `visible_span`
#[inline(always)]
fn offset(origin: i32, delta: usize) -> usize {
    (i64::from(origin) + delta as i64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_framebuffer_defaults() {
        let fb = Framebuffer::new(3, 2, true);
        assert_eq!(fb.color_data().len(), 3 * 2 * 4);
        assert_eq!(fb.pixel(0, 0), Some([0.0, 0.0, 0.0, 1.0]));
        assert_eq!(fb.depth(2, 1), Some(1.0));
    }

    #[test]
    fn test_no_depth_buffer() {
        let mut fb = Framebuffer::new(2, 2, false);
        assert!(!fb.has_depth());
        assert_eq!(fb.depth(0, 0), None);
        fb.fill_depth(0.25);
        assert!(fb.depth_data().is_none());
        // Depth test always passes without storage
        assert!(fb.test_and_store_depth(0, 5.0));
    }

    #[test]
    fn test_index_bounds() {
        let fb = Framebuffer::new(4, 3, false);
        assert_eq!(fb.index(0, 0), Some(0));
        assert_eq!(fb.index(3, 2), Some(11));
        assert_eq!(fb.index(4, 0), None);
        assert_eq!(fb.index(0, 3), None);
        assert_eq!(fb.index(-1, 0), None);
    }

    #[test]
    fn test_depth_test_discards_greater() {
        let mut fb = Framebuffer::new(1, 1, true);
        fb.fill_depth(0.5);
        assert!(!fb.test_and_store_depth(0, 0.75));
        assert_eq!(fb.depth(0, 0), Some(0.5));

        // Ties pass and rewrite the same value
        assert!(fb.test_and_store_depth(0, 0.5));
        assert!(fb.test_and_store_depth(0, 0.25));
        assert_eq!(fb.depth(0, 0), Some(0.25));
    }

    #[test]
    fn test_copy_color_rect_sub_window() {
        let mut fb = Framebuffer::new(4, 4, false);
        fb.write_color(fb.index(2, 1).unwrap(), [0.5, 0.25, 1.0, 1.0]);

        let mut out = vec![9.0f32; 2 * 2 * 4];
        fb.copy_color_rect(2, 1, 2, 2, &mut out, |c| c);

        assert_eq!(&out[0..4], &[0.5, 0.25, 1.0, 1.0]);
        assert_eq!(&out[4..8], &[0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_copy_color_rect_outside_is_untouched() {
        let fb = Framebuffer::new(2, 2, false);
        let mut out = vec![7u8; 2 * 4];
        fb.copy_color_rect(1, 0, 2, 1, &mut out, |c| (c * 255.0).round() as u8);

        assert_eq!(&out[0..4], &[0, 0, 0, 255]);
        assert_eq!(&out[4..8], &[7, 7, 7, 7]);
    }

    #[test]
    fn test_visible_span_clips_to_limit() {
        assert_eq!(visible_span(0, 4, 4), 0..4);
        assert_eq!(visible_span(-2, 4, 4), 2..4);
        assert_eq!(visible_span(3, 4, 4), 0..1);
        assert_eq!(visible_span(-10, 4, 4), 4..4);
        assert_eq!(visible_span(i32::MAX, 2, 4), 0..0);
        assert_eq!(visible_span(i32::MIN, usize::MAX, 4).len(), 4);
    }

    #[test]
    fn test_copy_rect_near_integer_limits() {
        let fb = Framebuffer::new(2, 2, true);
        let mut out = vec![7u8; 2 * 4];
        fb.copy_color_rect(i32::MAX, i32::MAX, 2, 1, &mut out, |c| c as u8);
        assert_eq!(out, vec![7u8; 8]);

        let mut out = vec![9.0f32; 2];
        assert!(fb.copy_depth_rect(i32::MIN, 0, 2, 1, &mut out, |d| d));
        assert_eq!(out, vec![9.0; 2]);
    }

    #[test]
    fn test_copy_depth_rect() {
        let mut fb = Framebuffer::new(2, 2, true);
        fb.fill_depth(0.5);
        let mut out = vec![0.0f32; 4];
        assert!(fb.copy_depth_rect(0, 0, 2, 2, &mut out, |d| d));
        assert_eq!(out, vec![0.5; 4]);

        let fb = Framebuffer::new(2, 2, false);
        assert!(!fb.copy_depth_rect(0, 0, 2, 2, &mut out, |d| d));
    }
}
