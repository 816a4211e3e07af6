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

//! The 16 color palette used by [crate::ColorMode::Basic]: 8 standard colors and their 8
//! bright variants. The codes are fixed by the terminal protocol, foreground codes are
//! 30..=37 and 90..=97, background codes are the same plus 10.
//!
//! More info: <https://en.wikipedia.org/wiki/ANSI_escape_code#3-bit_and_4-bit>

use std::{io::Write, str::FromStr as _};

use strum::IntoEnumIterator as _;
use strum_macros::{AsRefStr, EnumCount, EnumIter, EnumString};

use crate::{Sequence, SgrCode};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumCount, EnumIter, EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum BasicColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

#[rustfmt::skip]
pub const TEXT_COLOR_PALETTE: [(BasicColor, u8); 16] = [
    (BasicColor::Black, 30),        (BasicColor::Red, 31),
    (BasicColor::Green, 32),        (BasicColor::Yellow, 33),
    (BasicColor::Blue, 34),         (BasicColor::Magenta, 35),
    (BasicColor::Cyan, 36),         (BasicColor::White, 37),
    (BasicColor::BrightBlack, 90),  (BasicColor::BrightRed, 91),
    (BasicColor::BrightGreen, 92),  (BasicColor::BrightYellow, 93),
    (BasicColor::BrightBlue, 94),   (BasicColor::BrightMagenta, 95),
    (BasicColor::BrightCyan, 96),   (BasicColor::BrightWhite, 97),
];

#[rustfmt::skip]
pub const BG_COLOR_PALETTE: [(BasicColor, u8); 16] = [
    (BasicColor::Black, 40),         (BasicColor::Red, 41),
    (BasicColor::Green, 42),         (BasicColor::Yellow, 43),
    (BasicColor::Blue, 44),          (BasicColor::Magenta, 45),
    (BasicColor::Cyan, 46),          (BasicColor::White, 47),
    (BasicColor::BrightBlack, 100),  (BasicColor::BrightRed, 101),
    (BasicColor::BrightGreen, 102),  (BasicColor::BrightYellow, 103),
    (BasicColor::BrightBlue, 104),   (BasicColor::BrightMagenta, 105),
    (BasicColor::BrightCyan, 106),   (BasicColor::BrightWhite, 107),
];

impl BasicColor {
    /// Exact, case sensitive match against the snake case names, eg: `bright_red`.
    #[must_use]
    pub fn try_from_name(name: &str) -> Option<BasicColor> { BasicColor::from_str(name).ok() }

    /// Position in [TEXT_COLOR_PALETTE] and [BG_COLOR_PALETTE].
    #[must_use]
    pub fn palette_index(self) -> usize { self as usize }

    #[must_use]
    pub fn fg_code(self) -> u8 { TEXT_COLOR_PALETTE[self.palette_index()].1 }

    #[must_use]
    pub fn bg_code(self) -> u8 { BG_COLOR_PALETTE[self.palette_index()].1 }
}

/// One line per palette name, in palette order, each painted in its own foreground
/// color and followed by [crate::RESET].
pub fn palette_lines() -> impl Iterator<Item = String> {
    BasicColor::iter().map(|color| {
        Sequence::from(SgrCode::ForegroundBasic(color)).paint(color.as_ref())
    })
}

/// Same as [palette_lines], with every name drawn over the `bg` background.
pub fn palette_lines_on(bg: BasicColor) -> impl Iterator<Item = String> {
    BasicColor::iter().map(move |color| {
        let sequence = Sequence::from_codes(&[
            SgrCode::BackgroundBasic(bg),
            SgrCode::ForegroundBasic(color),
        ]);
        sequence.paint(&format!("{} on {}", color.as_ref(), bg.as_ref()))
    })
}

/// Writes [palette_lines] to `writer`, one per line.
///
/// # Errors
///
/// Returns any error from writing to `writer`.
pub fn print_palette(writer: &mut impl Write) -> std::io::Result<()> {
    for line in palette_lines() {
        writeln!(writer, "{line}")?;
    }
    Ok(())
}
