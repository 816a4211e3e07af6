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

//! # Table of contents
//!
//! <!-- TOC -->
//!
//! - [Introduction](#introduction)
//! - [Color modes](#color-modes)
//! - [How a sequence is laid out](#how-a-sequence-is-laid-out)
//! - [Errors](#errors)
//! - [Windows](#windows)
//!
//! <!-- /TOC -->
//!
//! # Introduction
//!
//! Rust crate to build the ANSI escape sequence (SGR, "set graphics rendition") that
//! applies a text color, a background color and text styles (bold, dim, italic,
//! underline, blink, reverse, strikethrough) to whatever is printed after it. Print
//! [RESET] afterwards to go back to the terminal's default styling.
//!
//! This is not a terminal capability library. There is no cursor movement, no screen
//! clearing and no color support detection here.
//!
//! ```rust
//! use r3bl_ansi_sequence::*;
//!
//! enable_ansi_support();
//!
//! let sequence = StylingRequest::new()
//!     .text("yellow")
//!     .bg("blue")
//!     .color_mode(ColorMode::Basic)
//!     .bold()
//!     .underline()
//!     .build()
//!     .unwrap();
//! assert_eq!(sequence.as_str(), "\x1b[4;1;44;33m");
//! println!("{sequence}Bold + underline yellow on blue{RESET}");
//! ```
//!
//! # Color modes
//!
//! | [ColorMode]              | Text name    | Accepts                                  | Renders as        |
//! | ------------------------ | ------------ | ---------------------------------------- | ----------------- |
//! | [ColorMode::Basic]       | `8/16`       | one of the 16 [BasicColor] names         | `31`, `41`, ...   |
//! | [ColorMode::Indexed]     | `256`        | `#RRGGBB`, or `(r, g, b)` with `use_rgb` | `38;5;N`, `48;5;N` |
//! | [ColorMode::TrueColor]   | `true_color` | `#RRGGBB`, or `(r, g, b)` with `use_rgb` | `38;2;R;G;B`, ... |
//!
//! In [ColorMode::Indexed] the color is mapped onto the 6x6x6 color cube of the 256
//! color palette, see [Ansi256Color].
//!
//! The text and background channels can use different modes by setting
//! [StylingRequest::channel_modes] instead of [StylingRequest::color_mode]. The
//! `use_rgb` switch is shared by both channels.
//!
//! # How a sequence is laid out
//!
//! `ESC [` then the style codes, then the background color code, then the text color
//! code, joined by `;`, then `m`. Styles are checked in a fixed order (bold, dim,
//! italic, underline, blink, reverse, strike) and each one is placed in front of the
//! ones checked before it. A request with no colors and no styles renders `ESC [ m`.
//!
//! # Errors
//!
//! Invalid requests are reported as a [SequenceError], which is also a
//! [miette::Diagnostic]. See [build] for details.
//!
//! # Windows
//!
//! Older Windows consoles need virtual terminal processing to be turned on before they
//! interpret escape sequences. Call [enable_ansi_support] once at startup. It does
//! nothing on other platforms, and building sequences does not depend on it.

// Enforce strict error handling in production library code only. Tests and examples are
// allowed to use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules.
pub mod ansi_escape_codes;
pub mod color;
pub mod color_mode;
pub mod enable_ansi_support;
pub mod hex_color_parser;
pub mod palette;
pub mod sequence_builder;
pub mod sequence_error;
pub mod text_style;

// Re-export.
pub use ansi_escape_codes::*;
pub use color::*;
pub use color_mode::*;
pub use enable_ansi_support::*;
pub use hex_color_parser::*;
pub use palette::*;
pub use sequence_builder::*;
pub use sequence_error::*;
pub use text_style::*;

pub mod sizing {
    use smallvec::SmallVec;

    use crate::{ColorMode, SgrCode};

    /// Enough for a palette name or a `#RRGGBB` hex string without spilling to the heap.
    pub const DEFAULT_STRING_STORAGE_SIZE: usize = 16;

    /// Enough for styles + background + text color in 256 color mode.
    pub const SEQUENCE_STORAGE_SIZE: usize = 48;

    /// Every style plus both colors.
    pub const MAX_SGR_CODES: usize = 9;
    pub type InlineVecSgrCodes = SmallVec<[SgrCode; MAX_SGR_CODES]>;

    pub type InlineVecColorModes = SmallVec<[ColorMode; 2]>;
}
