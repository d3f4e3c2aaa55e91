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

//! Context configuration
//!
//! Everything that is fixed for the lifetime of a [`crate::Context`]: the
//! framebuffer size, whether a depth buffer is allocated, and the initial
//! clear values.
//!
//! # Example
//!
//! ```
//! use softgl::ContextConfig;
//!
//! let config = ContextConfig::from_toml_str(
//!     r#"
//!     width = 320
//!     height = 240
//!     depth_buffer = false
//!     "#,
//! )?;
//! assert_eq!(config.width, 320);
//! assert!(!config.depth_buffer);
//! assert_eq!(config.clear_color, [0.0, 0.0, 0.0, 1.0]);
//! # Ok::<(), softgl::ConfigError>(())
//! ```

use serde::Deserialize;

use super::error::ConfigError;

/// Settings used to create a [`crate::Context`]
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContextConfig {
    /// Framebuffer width in pixels
    pub width: u32,

    /// Framebuffer height in pixels
    pub height: u32,

    /// Allocate a depth buffer alongside the color buffer
    pub depth_buffer: bool,

    /// Initial color buffer clear value (RGBA)
    pub clear_color: [f32; 4],

    /// Initial depth buffer clear value
    pub clear_depth: f32,
}

impl ContextConfig {
    /// Default framebuffer width
    pub const DEFAULT_WIDTH: u32 = 640;

    /// Default framebuffer height
    pub const DEFAULT_HEIGHT: u32 = 480;

    /// Create a config for a `width`×`height` framebuffer with default settings
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Parse a config from a TOML document
    ///
    /// Missing keys fall back to their defaults; unknown keys are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML and
    /// [`ConfigError::InvalidValue`] when a clear value is outside [0, 1].
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        log::debug!(
            "Loaded context config: {}x{} depth_buffer={}",
            config.width,
            config.height,
            config.depth_buffer
        );
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.clear_color.iter().any(|c| !(0.0..=1.0).contains(c)) {
            return Err(ConfigError::InvalidValue {
                field: "clear_color",
                reason: "components must lie in [0, 1]",
            });
        }
        if !(0.0..=1.0).contains(&self.clear_depth) {
            return Err(ConfigError::InvalidValue {
                field: "clear_depth",
                reason: "must lie in [0, 1]",
            });
        }
        Ok(())
    }
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
            depth_buffer: true,
            clear_color: [0.0, 0.0, 0.0, 1.0],
            clear_depth: 1.0,
        }
    }
}
