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

//! Line rasterization

use super::super::primitives::WindowVertex;
use super::interpolate::interpolate;
use super::rasterizer::Rasterizer;

/// Part of a segment left after clipping
#[derive(Debug, Clone, Copy, PartialEq)]
struct ClippedSegment {
    /// Parameters of the visible part along the full segment
    t: (f64, f64),
    start: (f64, f64),
    end: (f64, f64),
}

/// Clip the segment `p0 -> p1` to the box `min..=max`
///
/// Liang-Barsky clipping. A clipped end is snapped onto the boundary it was
/// clipped against, so huge coordinates cannot drift past the box. Returns
/// `None` when the segment misses the box.
fn clip_segment(
    p0: (f64, f64),
    p1: (f64, f64),
    min: (f64, f64),
    max: (f64, f64),
) -> Option<ClippedSegment> {
    let (dx, dy) = (p1.0 - p0.0, p1.1 - p0.1);
    let planes = [
        (-dx, p0.0 - min.0),
        (dx, max.0 - p0.0),
        (-dy, p0.1 - min.1),
        (dy, max.1 - p0.1),
    ];

    let (mut t_in, mut t_out) = (0.0f64, 1.0f64);
    let (mut enter, mut exit) = (None, None);
    for (plane, (p, q)) in planes.into_iter().enumerate() {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t_in {
                t_in = r;
                enter = Some(plane);
            }
        } else if r < t_out {
            t_out = r;
            exit = Some(plane);
        }
        if t_in > t_out {
            return None;
        }
    }

    let point = |t: f64, plane: Option<usize>| {
        let (mut x, mut y) = if t == 0.0 {
            p0
        } else if t == 1.0 {
            p1
        } else {
            (p0.0 + dx * t, p0.1 + dy * t)
        };
        match plane {
            Some(0) => x = min.0,
            Some(1) => x = max.0,
            Some(2) => y = min.1,
            Some(3) => y = max.1,
            _ => {}
        }
        (x.clamp(min.0, max.0), y.clamp(min.1, max.1))
    };

    Some(ClippedSegment {
        t: (t_in, t_out),
        start: point(t_in, enter),
        end: point(t_out, exit),
    })
}

impl Rasterizer<'_> {
    /// Rasterize a line segment
    ///
    /// Walks from the floored start point to the ceiled end point with
    /// Bresenham's algorithm. At each step the progress along the major axis
    /// (the one with the larger span) becomes the interpolation weight between
    /// the two endpoints.
    ///
    /// The segment is first clipped to the framebuffer grown by one pixel on
    /// every side, so the walk never leaves that box. Lines with both
    /// endpoints inside the viewport are not affected by the clip.
    ///
    /// # References
    ///
    /// - [Bresenham's Line Algorithm](https://en.wikipedia.org/wiki/Bresenham%27s_line_algorithm)
    /// - [Liang-Barsky Algorithm](https://en.wikipedia.org/wiki/Liang%E2%80%93Barsky_algorithm)
    pub fn draw_line(&mut self, v0: &WindowVertex, v1: &WindowVertex) {
        let (width, height) = self.bounds();
        let (min, max) = ((-1.0, -1.0), (width + 1.0, height + 1.0));
        let p0 = (v0.position.x as f64, v0.position.y as f64);
        let p1 = (v1.position.x as f64, v1.position.y as f64);

        let Some(clipped) = clip_segment(p0, p1, min, max) else {
            log::trace!("Skipping line outside the framebuffer");
            return;
        };
        let ClippedSegment {
            t: (t_in, t_out),
            start,
            end,
        } = clipped;

        let x0 = start.0.floor() as i64;
        let y0 = start.1.floor() as i64;
        let x1 = end.0.ceil() as i64;
        let y1 = end.1.ceil() as i64;

        log::trace!("Rasterizing line: ({}, {}) -> ({}, {})", x0, y0, x1, y1);

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        let x_major = dx > -dy;
        let total = dx.max(-dy) as f64;
        let endpoints = [*v0, *v1];

        let mut x = x0;
        let mut y = y0;

        loop {
            let remaining = (if x_major { x1 - x } else { y1 - y }).abs() as f64;
            let progress = if total > 0.0 { 1.0 - remaining / total } else { 0.0 };
            // Position along the unclipped segment
            let t = (t_in + (t_out - t_in) * progress) as f32;
            let attributes = interpolate(&endpoints, &[1.0 - t, t]);
            if let (Ok(px), Ok(py)) = (i32::try_from(x), i32::try_from(y)) {
                self.shade_fragment(px, py, &attributes);
            }

            if x == x1 && y == y1 {
                break;
            }

            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }
}
