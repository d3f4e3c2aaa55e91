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

//! Whole-pipeline scenario tests

mod culling;

use crate::{gl, Context, PixelSink};

pub(super) const BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

pub(super) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Whole color buffer as floats, row-major from the top
pub(super) fn read_rgba(ctx: &mut Context) -> Vec<f32> {
    let (w, h) = (ctx.width() as i32, ctx.height() as i32);
    let mut out = vec![0.0; (w * h * 4) as usize];
    ctx.read_pixels(0, 0, w, h, gl::RGBA, gl::FLOAT, PixelSink::Floats(&mut out));
    out
}

/// Whole color buffer as bytes
pub(super) fn read_rgba_bytes(ctx: &mut Context) -> Vec<u8> {
    let (w, h) = (ctx.width() as i32, ctx.height() as i32);
    let mut out = vec![0; (w * h * 4) as usize];
    ctx.read_pixels(
        0,
        0,
        w,
        h,
        gl::RGBA,
        gl::UNSIGNED_BYTE,
        PixelSink::Bytes(&mut out),
    );
    out
}

/// Pixels whose color differs from `background`
pub(super) fn covered(ctx: &mut Context, background: [f32; 4]) -> Vec<(i32, i32)> {
    let width = ctx.width() as usize;
    read_rgba(ctx)
        .chunks_exact(4)
        .enumerate()
        .filter(|(_, p)| *p != background)
        .map(|(i, _)| ((i % width) as i32, (i / width) as i32))
        .collect()
}
