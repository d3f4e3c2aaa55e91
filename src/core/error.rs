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

//! Error types
//!
//! GL errors are never thrown at the caller. Every operation is implemented as a
//! fallible step returning [`Result<T>`], and the public wrapper records the
//! failure in the context's single error slot where [`crate::Context::get_error`]
//! can pick it up later.

use thiserror::Error;

use super::gl::consts;

/// Result alias used by all fallible pipeline steps
pub type Result<T> = std::result::Result<T, GlError>;

/// A recorded GL error
///
/// The three kinds are mutually exclusive. The absence of an error is modelled
/// as `None` rather than as a fourth variant.
///
/// # Examples
///
/// ```
/// use softgl::{gl, GlError};
///
/// assert_eq!(GlError::InvalidEnum.code(), gl::INVALID_ENUM);
/// assert_eq!(GlError::from_code(0x0502), Some(GlError::InvalidOperation));
/// assert_eq!(GlError::from_code(gl::NO_ERROR), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GlError {
    /// An enumerated argument is not a member of the set the call accepts
    #[error("invalid enum")]
    InvalidEnum,

    /// A numeric argument is outside its domain
    #[error("invalid value")]
    InvalidValue,

    /// The call is not allowed in the current context state
    #[error("invalid operation")]
    InvalidOperation,
}

impl GlError {
    /// Numeric GL error code
    pub fn code(self) -> u32 {
        match self {
            GlError::InvalidEnum => consts::INVALID_ENUM,
            GlError::InvalidValue => consts::INVALID_VALUE,
            GlError::InvalidOperation => consts::INVALID_OPERATION,
        }
    }

    /// Map a numeric error code back to an error
    ///
    /// Returns `None` for `NO_ERROR` and for unknown codes.
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            consts::INVALID_ENUM => Some(GlError::InvalidEnum),
            consts::INVALID_VALUE => Some(GlError::InvalidValue),
            consts::INVALID_OPERATION => Some(GlError::InvalidOperation),
            _ => None,
        }
    }
}

/// Errors raised while building a [`crate::ContextConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The TOML document could not be parsed
    #[error("failed to parse context config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A field holds a value outside its domain
    #[error("invalid config value for `{field}`: {reason}")]
    InvalidValue {
        field: &'static str,
        reason: &'static str,
    },
}
