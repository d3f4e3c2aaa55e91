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

//! Rasterization
//!
//! - [`rasterizer`]: the [`Rasterizer`], per-primitive dispatch and fragment
//!   processing (depth test, texturing, color write)
//! - [`interpolate`]: perspective-correct attribute interpolation
//! - [`line`]: Bresenham line walk
//! - [`triangle`]: bounding-box barycentric triangle fill

mod interpolate;
mod line;
mod rasterizer;
mod triangle;

pub use interpolate::{interpolate, Attributes};
pub use rasterizer::Rasterizer;
