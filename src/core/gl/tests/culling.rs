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

//! Backface culling

use super::{covered, init_logging, BLACK};
use crate::{gl, Context};

/// Counter-clockwise as seen from the eye at the origin
const FRONT: [[f32; 3]; 3] = [[-0.5, -0.5, -0.5], [0.5, -0.5, -0.5], [0.0, 0.5, -0.5]];

/// Same triangle wound the other way
const BACK: [[f32; 3]; 3] = [[-0.5, -0.5, -0.5], [0.0, 0.5, -0.5], [0.5, -0.5, -0.5]];

fn draw(ctx: &mut Context, mode: u32, vertices: &[[f32; 3]]) {
    ctx.begin(mode);
    for &[x, y, z] in vertices {
        ctx.vertex3f(x, y, z);
    }
    ctx.end();
}

#[test]
fn test_back_facing_triangle_is_culled() {
    init_logging();
    let mut ctx = Context::new(8, 8);
    ctx.enable(gl::CULL_FACE);
    draw(&mut ctx, gl::TRIANGLES, &BACK);

    assert_eq!(ctx.get_error(), None);
    assert!(covered(&mut ctx, BLACK).is_empty());
}

#[test]
fn test_back_facing_triangle_drawn_without_culling() {
    let mut culled_off = Context::new(8, 8);
    draw(&mut culled_off, gl::TRIANGLES, &BACK);

    let mut front = Context::new(8, 8);
    front.enable(gl::CULL_FACE);
    draw(&mut front, gl::TRIANGLES, &FRONT);

    let back_pixels = covered(&mut culled_off, BLACK);
    assert!(!back_pixels.is_empty());
    assert_eq!(back_pixels, covered(&mut front, BLACK));
}

#[test]
fn test_each_triangle_faces_independently() {
    let mut ctx = Context::new(8, 8);
    ctx.enable(gl::CULL_FACE);

    let mut both: Vec<[f32; 3]> = BACK.to_vec();
    both.extend(FRONT.iter().map(|&[x, y, z]| [x, y + 0.5, z]));
    draw(&mut ctx, gl::TRIANGLES, &both);

    let mut reference = Context::new(8, 8);
    let shifted: Vec<[f32; 3]> = FRONT.iter().map(|&[x, y, z]| [x, y + 0.5, z]).collect();
    draw(&mut reference, gl::TRIANGLES, &shifted);

    assert_eq!(covered(&mut ctx, BLACK), covered(&mut reference, BLACK));
}

#[test]
fn test_quad_facing_applies_to_both_halves() {
    let quad_back = [
        [-0.5, -0.5, -0.5],
        [-0.5, 0.5, -0.5],
        [0.5, 0.5, -0.5],
        [0.5, -0.5, -0.5],
    ];
    let mut ctx = Context::new(8, 8);
    ctx.enable(gl::CULL_FACE);
    draw(&mut ctx, gl::QUADS, &quad_back);
    assert!(covered(&mut ctx, BLACK).is_empty());

    ctx.disable(gl::CULL_FACE);
    draw(&mut ctx, gl::QUADS, &quad_back);
    assert_eq!(covered(&mut ctx, BLACK).len(), 25);
}

#[test]
fn test_lines_and_points_are_never_culled() {
    let mut ctx = Context::new(8, 8);
    ctx.enable(gl::CULL_FACE);
    draw(&mut ctx, gl::POINTS, &[[0.0, 0.0, -0.5]]);
    draw(&mut ctx, gl::LINES, &[[-0.75, -0.75, -0.5], [-0.75, 0.75, -0.5]]);

    assert!(covered(&mut ctx, BLACK).contains(&(4, 4)));
    assert!(covered(&mut ctx, BLACK).contains(&(1, 4)));
}
