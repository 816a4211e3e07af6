/*
 *   Copyright (c) 2023-2025 R3BL LLC
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

//! More info:
//! - <https://commons.wikimedia.org/wiki/File:Xterm_256color_chart.svg>
//! - <https://www.ditig.com/256-colors-cheat-sheet>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#8-bit>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#24-bit>

use std::fmt::{Display, Formatter, Result};

use smallstr::SmallString;

use crate::{BasicColor, sizing::DEFAULT_STRING_STORAGE_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RgbColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl From<(u8, u8, u8)> for RgbColor {
    fn from((red, green, blue): (u8, u8, u8)) -> Self { Self { red, green, blue } }
}

impl RgbColor {
    /// `#RRGGBB` only, see [crate::hex_color_parser::parse_hex_color_exact].
    #[must_use]
    pub fn try_from_hex_color(input: &str) -> Option<RgbColor> {
        crate::hex_color_parser::parse_hex_color_exact(input)
    }

    #[must_use]
    pub fn as_ansi256(&self) -> Ansi256Color { Ansi256Color::from(*self) }
}

/// Index into the 256 color palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ansi256Color {
    pub index: u8,
}

/// Indices 16..=231 of the palette are a 6x6x6 color cube. Each channel is bucketed into
/// one of 6 levels by integer division by 51, so `(0, 0, 0)` is 16 and
/// `(255, 255, 255)` is 231.
impl From<RgbColor> for Ansi256Color {
    fn from(RgbColor { red, green, blue }: RgbColor) -> Self {
        let level = |it: u8| it / 51;
        Ansi256Color {
            index: 16 + 36 * level(red) + 6 * level(green) + level(blue),
        }
    }
}

pub type InlineString = SmallString<[u8; DEFAULT_STRING_STORAGE_SIZE]>;

/// A color as the caller wrote it. Whether it is acceptable depends on the
/// [crate::ColorMode] of its channel and on the request's `use_rgb` flag, not on which
/// variant it is. The RGB components are kept as [i32] so that out of range input can be
/// reported instead of wrapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorSpec {
    Named(InlineString),
    Hex(InlineString),
    Rgb(i32, i32, i32),
}

/// A leading `#` makes a hex spec, anything else is a name. The text is kept exactly as
/// given, whitespace included, so that it is validated and reported as written.
impl From<&str> for ColorSpec {
    fn from(value: &str) -> Self {
        if value.starts_with('#') {
            ColorSpec::Hex(value.into())
        } else {
            ColorSpec::Named(value.into())
        }
    }
}

impl From<(u8, u8, u8)> for ColorSpec {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        ColorSpec::Rgb(red.into(), green.into(), blue.into())
    }
}

impl From<(i32, i32, i32)> for ColorSpec {
    fn from((red, green, blue): (i32, i32, i32)) -> Self {
        ColorSpec::Rgb(red, green, blue)
    }
}

impl From<RgbColor> for ColorSpec {
    fn from(RgbColor { red, green, blue }: RgbColor) -> Self {
        ColorSpec::from((red, green, blue))
    }
}

impl From<BasicColor> for ColorSpec {
    fn from(color: BasicColor) -> Self { ColorSpec::Named(color.as_ref().into()) }
}

impl Display for ColorSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            ColorSpec::Named(name) => write!(f, "{name}"),
            ColorSpec::Hex(hex) => write!(f, "{hex}"),
            ColorSpec::Rgb(red, green, blue) => write!(f, "({red}, {green}, {blue})"),
        }
    }
}
