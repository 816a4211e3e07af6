/*
 *   Copyright (c) 2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

use std::sync::OnceLock;

/// Memoized outcome of the first call to [enable_ansi_support].
static ANSI_SUPPORT_GLOBAL: OnceLock<bool> = OnceLock::new();

/// Ask the console to interpret escape sequences. Call this once at startup, before
/// printing any styled text.
///
/// - On Windows this turns on virtual terminal processing for the console.
/// - Everywhere else terminals already do this, so it is a no-op.
///
/// Only the first call does any work, the rest return immediately. If the console
/// refuses, that is logged and otherwise ignored: sequences are still built the same
/// way, they just may show up as raw text.
pub fn enable_ansi_support() {
    ANSI_SUPPORT_GLOBAL.get_or_init(|| {
        let enabled = platform::try_enable();
        if enabled {
            tracing::debug!("ANSI escape sequence support is enabled");
        } else {
            tracing::debug!("Could not enable ANSI escape sequence support, ignoring");
        }
        enabled
    });
}

/// - `None` if [enable_ansi_support] has not been called yet.
/// - `Some(true)` if the console accepted escape sequences.
/// - `Some(false)` if it refused.
#[must_use]
pub fn ansi_support_status() -> Option<bool> { ANSI_SUPPORT_GLOBAL.get().copied() }

#[cfg(windows)]
mod platform {
    /// Crossterm sets `ENABLE_VIRTUAL_TERMINAL_PROCESSING` on the console output handle,
    /// and reports whether that worked.
    pub fn try_enable() -> bool { crossterm::ansi_support::supports_ansi() }
}

#[cfg(not(windows))]
mod platform {
    pub fn try_enable() -> bool { true }
}
