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

//! Capability toggles, clear values and buffer clears

use super::super::enums::{Capability, ClearMask};
use super::Context;
use crate::core::error::Result;

impl Context {
    /// Enable a capability (`DEPTH_TEST`, `CULL_FACE` or `TEXTURE_2D`)
    pub fn enable(&mut self, cap: u32) {
        let result = self.set_capability(cap, true);
        self.record(result);
    }

    /// Disable a capability
    pub fn disable(&mut self, cap: u32) {
        let result = self.set_capability(cap, false);
        self.record(result);
    }

    /// Whether a capability is enabled
    ///
    /// An unknown capability records `InvalidEnum` and reports `false`.
    pub fn is_enabled(&mut self, cap: u32) -> bool {
        let result = Capability::try_from(cap).map(|cap| self.capabilities.contains(cap.flag()));
        self.record(result).unwrap_or(false)
    }

    fn set_capability(&mut self, cap: u32, enabled: bool) -> Result<()> {
        self.ensure_idle()?;
        let cap = Capability::try_from(cap)?;
        log::debug!("{} {:?}", if enabled { "enable" } else { "disable" }, cap);
        self.capabilities.set(cap.flag(), enabled);
        Ok(())
    }

    /// Set the color used by `clear(COLOR_BUFFER_BIT)`; components are clamped
    pub fn clear_color(&mut self, r: f32, g: f32, b: f32, a: f32) {
        let result = self.ensure_idle().map(|()| {
            self.clear_color = [r, g, b, a].map(|c| c.clamp(0.0, 1.0));
        });
        self.record(result);
    }

    /// Set the depth used by `clear(DEPTH_BUFFER_BIT)`; clamped to [0, 1]
    pub fn clear_depth(&mut self, depth: f32) {
        let result = self.ensure_idle().map(|()| {
            self.clear_depth = depth.clamp(0.0, 1.0);
        });
        self.record(result);
    }

    /// Clear the buffers selected by `mask`
    ///
    /// `mask` may combine `COLOR_BUFFER_BIT` and `DEPTH_BUFFER_BIT`; any other
    /// bit records `InvalidValue`. Clearing depth without a depth buffer does
    /// nothing.
    pub fn clear(&mut self, mask: u32) {
        let result = self.clear_buffers(mask);
        self.record(result);
    }

    fn clear_buffers(&mut self, mask: u32) -> Result<()> {
        self.ensure_idle()?;
        let mask = ClearMask::try_from(mask)?;

        if mask.contains(ClearMask::COLOR) {
            self.framebuffer.fill_color(self.clear_color);
        }
        if mask.contains(ClearMask::DEPTH) {
            self.framebuffer.fill_depth(self.clear_depth);
        }
        Ok(())
    }
}
