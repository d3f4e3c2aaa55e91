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

//! Typed GL enumerants
//!
//! Every closed set of numeric arguments is decoded into one of these types at
//! the API boundary. Decoding an unknown value fails with
//! [`GlError::InvalidEnum`]; the clear mask is the exception and fails with
//! [`GlError::InvalidValue`].

use bitflags::bitflags;

use super::consts;
use crate::core::error::GlError;

/// Primitive type requested by `begin`
///
/// # Examples
///
/// ```
/// use softgl::{gl, DrawMode, GlError};
///
/// assert_eq!(DrawMode::try_from(gl::QUADS), Ok(DrawMode::Quads));
/// assert_eq!(DrawMode::try_from(0x0005), Err(GlError::InvalidEnum));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawMode {
    /// One point per vertex
    Points,
    /// Independent segments from vertex pairs
    Lines,
    /// Independent triangles from vertex triples
    Triangles,
    /// Independent quads from groups of four, split into two triangles
    Quads,
}

impl DrawMode {
    /// Number of vertices consumed by one primitive of this mode
    pub fn vertices_per_primitive(self) -> usize {
        match self {
            DrawMode::Points => 1,
            DrawMode::Lines => 2,
            DrawMode::Triangles => 3,
            DrawMode::Quads => 4,
        }
    }

    /// True for modes whose primitives have a facing
    pub fn is_polygon(self) -> bool {
        matches!(self, DrawMode::Triangles | DrawMode::Quads)
    }
}

impl TryFrom<u32> for DrawMode {
    type Error = GlError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            consts::POINTS => Ok(DrawMode::Points),
            consts::LINES => Ok(DrawMode::Lines),
            consts::TRIANGLES => Ok(DrawMode::Triangles),
            consts::QUADS => Ok(DrawMode::Quads),
            _ => Err(GlError::InvalidEnum),
        }
    }
}

impl From<DrawMode> for u32 {
    fn from(mode: DrawMode) -> u32 {
        match mode {
            DrawMode::Points => consts::POINTS,
            DrawMode::Lines => consts::LINES,
            DrawMode::Triangles => consts::TRIANGLES,
            DrawMode::Quads => consts::QUADS,
        }
    }
}

/// Matrix slot selected by `matrix_mode`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixMode {
    ModelView,
    Projection,
}

impl TryFrom<u32> for MatrixMode {
    type Error = GlError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            consts::MODELVIEW => Ok(MatrixMode::ModelView),
            consts::PROJECTION => Ok(MatrixMode::Projection),
            _ => Err(GlError::InvalidEnum),
        }
    }
}

/// Pipeline feature toggled by `enable`/`disable`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    DepthTest,
    CullFace,
    Texture2D,
}

impl Capability {
    pub(crate) fn flag(self) -> Capabilities {
        match self {
            Capability::DepthTest => Capabilities::DEPTH_TEST,
            Capability::CullFace => Capabilities::CULL_FACE,
            Capability::Texture2D => Capabilities::TEXTURE_2D,
        }
    }
}

impl TryFrom<u32> for Capability {
    type Error = GlError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            consts::DEPTH_TEST => Ok(Capability::DepthTest),
            consts::CULL_FACE => Ok(Capability::CullFace),
            consts::TEXTURE_2D => Ok(Capability::Texture2D),
            _ => Err(GlError::InvalidEnum),
        }
    }
}

/// Texture binding target
///
/// Only 2D textures exist, but the target is still validated like any other
/// enumerant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureTarget {
    Texture2D,
}

impl TryFrom<u32> for TextureTarget {
    type Error = GlError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            consts::TEXTURE_2D => Ok(TextureTarget::Texture2D),
            _ => Err(GlError::InvalidEnum),
        }
    }
}

/// Layout of pixels transferred by `read_pixels` and `tex_image_2d`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// Four color components per pixel
    Rgba,
    /// One depth value per pixel
    DepthComponent,
}

impl PixelFormat {
    /// Components per pixel
    pub fn components(self) -> usize {
        match self {
            PixelFormat::Rgba => 4,
            PixelFormat::DepthComponent => 1,
        }
    }
}

impl TryFrom<u32> for PixelFormat {
    type Error = GlError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            consts::RGBA => Ok(PixelFormat::Rgba),
            consts::DEPTH_COMPONENT => Ok(PixelFormat::DepthComponent),
            _ => Err(GlError::InvalidEnum),
        }
    }
}

/// Component type of transferred pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelType {
    /// Signed byte components (same 0-255 scaling as unsigned)
    Byte,
    /// Unsigned byte components scaled to 0-255
    UnsignedByte,
    /// Unscaled float components
    Float,
}

impl PixelType {
    /// True for the byte-oriented types
    pub fn is_byte(self) -> bool {
        matches!(self, PixelType::Byte | PixelType::UnsignedByte)
    }
}

impl TryFrom<u32> for PixelType {
    type Error = GlError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            consts::BYTE => Ok(PixelType::Byte),
            consts::UNSIGNED_BYTE => Ok(PixelType::UnsignedByte),
            consts::FLOAT => Ok(PixelType::Float),
            _ => Err(GlError::InvalidEnum),
        }
    }
}

bitflags! {
    /// Buffers selected by `clear`
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ClearMask: u32 {
        const DEPTH = consts::DEPTH_BUFFER_BIT;
        const COLOR = consts::COLOR_BUFFER_BIT;
    }
}

impl TryFrom<u32> for ClearMask {
    type Error = GlError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        ClearMask::from_bits(value).ok_or(GlError::InvalidValue)
    }
}

bitflags! {
    /// Set of enabled capabilities
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Capabilities: u8 {
        const DEPTH_TEST = 1 << 0;
        const CULL_FACE = 1 << 1;
        const TEXTURE_2D = 1 << 2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_mode_decoding() {
        assert_eq!(DrawMode::try_from(consts::POINTS), Ok(DrawMode::Points));
        assert_eq!(DrawMode::try_from(consts::LINES), Ok(DrawMode::Lines));
        assert_eq!(
            DrawMode::try_from(consts::TRIANGLES),
            Ok(DrawMode::Triangles)
        );
        assert_eq!(DrawMode::try_from(consts::QUADS), Ok(DrawMode::Quads));
        // LINE_LOOP is a real GL mode but not one this pipeline draws
        assert_eq!(DrawMode::try_from(0x0002), Err(GlError::InvalidEnum));
    }

    #[test]
    fn test_draw_mode_numeric_identity() {
        for code in [consts::POINTS, consts::LINES, consts::TRIANGLES, consts::QUADS] {
            let mode = DrawMode::try_from(code).unwrap();
            assert_eq!(u32::from(mode), code);
        }
    }

    #[test]
    fn test_vertices_per_primitive() {
        assert_eq!(DrawMode::Points.vertices_per_primitive(), 1);
        assert_eq!(DrawMode::Lines.vertices_per_primitive(), 2);
        assert_eq!(DrawMode::Triangles.vertices_per_primitive(), 3);
        assert_eq!(DrawMode::Quads.vertices_per_primitive(), 4);
    }

    #[test]
    fn test_capability_decoding() {
        assert_eq!(
            Capability::try_from(consts::DEPTH_TEST),
            Ok(Capability::DepthTest)
        );
        assert_eq!(
            Capability::try_from(consts::CULL_FACE),
            Ok(Capability::CullFace)
        );
        assert_eq!(
            Capability::try_from(consts::TEXTURE_2D),
            Ok(Capability::Texture2D)
        );
        assert_eq!(Capability::try_from(0x0B50), Err(GlError::InvalidEnum));
    }

    #[test]
    fn test_pixel_enums() {
        assert_eq!(PixelFormat::try_from(consts::RGBA), Ok(PixelFormat::Rgba));
        assert_eq!(PixelFormat::Rgba.components(), 4);
        assert_eq!(PixelFormat::DepthComponent.components(), 1);
        assert_eq!(PixelFormat::try_from(0x1907), Err(GlError::InvalidEnum));

        assert!(PixelType::try_from(consts::BYTE).unwrap().is_byte());
        assert!(PixelType::try_from(consts::UNSIGNED_BYTE).unwrap().is_byte());
        assert!(!PixelType::try_from(consts::FLOAT).unwrap().is_byte());
        assert_eq!(PixelType::try_from(0x1405), Err(GlError::InvalidEnum));
    }

    #[test]
    fn test_clear_mask() {
        assert_eq!(
            ClearMask::try_from(consts::COLOR_BUFFER_BIT | consts::DEPTH_BUFFER_BIT),
            Ok(ClearMask::COLOR | ClearMask::DEPTH)
        );
        assert_eq!(ClearMask::try_from(0), Ok(ClearMask::empty()));
        assert_eq!(
            ClearMask::try_from(consts::COLOR_BUFFER_BIT | 0x0400),
            Err(GlError::InvalidValue)
        );
    }
}
