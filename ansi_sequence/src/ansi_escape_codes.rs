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
//! - <https://doc.rust-lang.org/reference/tokens.html#ascii-escapes>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>

use std::fmt::{Display, Formatter, Result, Write as _};

use smallstr::SmallString;

use crate::{BasicColor, sizing::SEQUENCE_STORAGE_SIZE};

pub const CSI: &str = "\x1b[";
pub const SGR: &str = "m";

/// Restores the terminal's default styling. Print this after any text that was styled
/// with a [Sequence].
pub const RESET: &str = "\x1b[0m";

/// One parameter of an SGR (set graphics rendition) command. The [Display] impl renders
/// just the parameter, eg: `38;5;150`, without the [CSI] prefix or the [SGR] suffix, so
/// that several of them can be joined with `;` into a single [Sequence].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SgrCode {
    Reset,
    Bold,
    Dim,
    Italic,
    Underline,
    Blink,
    Reverse,
    Strikethrough,
    ForegroundBasic(BasicColor),
    BackgroundBasic(BasicColor),
    ForegroundAnsi256(u8),
    BackgroundAnsi256(u8),
    ForegroundRGB(u8, u8, u8),
    BackgroundRGB(u8, u8, u8),
}

impl Display for SgrCode {
    /// More info:
    /// - <https://notes.burke.libbey.me/ansi-escape-codes/>
    /// - <https://www.asciitable.com/>
    /// - <https://commons.wikimedia.org/wiki/File:Xterm_256color_chart.svg>
    /// - <https://en.wikipedia.org/wiki/ANSI_escape_code>
    #[rustfmt::skip]
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match *self {
            SgrCode::Reset                    => write!(f, "0"),
            SgrCode::Bold                     => write!(f, "1"),
            SgrCode::Dim                      => write!(f, "2"),
            SgrCode::Italic                   => write!(f, "3"),
            SgrCode::Underline                => write!(f, "4"),
            SgrCode::Blink                    => write!(f, "5"),
            SgrCode::Reverse                  => write!(f, "7"),
            SgrCode::Strikethrough            => write!(f, "9"),
            SgrCode::ForegroundBasic(color)   => write!(f, "{}", color.fg_code()),
            SgrCode::BackgroundBasic(color)   => write!(f, "{}", color.bg_code()),
            SgrCode::ForegroundAnsi256(index) => write!(f, "38;5;{index}"),
            SgrCode::BackgroundAnsi256(index) => write!(f, "48;5;{index}"),
            SgrCode::ForegroundRGB(r, g, b)   => write!(f, "38;2;{r};{g};{b}"),
            SgrCode::BackgroundRGB(r, g, b)   => write!(f, "48;2;{r};{g};{b}"),
        }
    }
}

/// A complete escape sequence: `ESC [ code (; code)* m`. With no codes at all this is
/// `ESC [ m`, which terminals treat the same as [RESET].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sequence(SmallString<[u8; SEQUENCE_STORAGE_SIZE]>);

impl Sequence {
    #[must_use]
    pub fn from_codes(codes: &[SgrCode]) -> Self {
        let mut acc = SmallString::<[u8; SEQUENCE_STORAGE_SIZE]>::new();
        acc.push_str(CSI);
        for (index, code) in codes.iter().enumerate() {
            if index > 0 {
                acc.push(';');
            }
            // Writing to a SmallString can't fail.
            _ = write!(acc, "{code}");
        }
        acc.push_str(SGR);
        Self(acc)
    }

    #[must_use]
    pub fn as_str(&self) -> &str { self.0.as_str() }

    /// Returns `self`, then `text`, then [RESET].
    #[must_use]
    pub fn paint(&self, text: &str) -> String { format!("{self}{text}{RESET}") }

    /// Just the codes between [CSI] and [SGR], eg: `40;31`.
    #[must_use]
    pub fn codes(&self) -> &str {
        let it = self.as_str();
        &it[CSI.len()..it.len() - SGR.len()]
    }
}

impl Display for Sequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "{}", self.0) }
}

impl AsRef<str> for Sequence {
    fn as_ref(&self) -> &str { self.as_str() }
}

impl PartialEq<&str> for Sequence {
    fn eq(&self, other: &&str) -> bool { self.as_str() == *other }
}

impl From<SgrCode> for Sequence {
    fn from(code: SgrCode) -> Self { Sequence::from_codes(&[code]) }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case(SgrCode::Reset, "\x1b[0m")]
    #[test_case(SgrCode::Bold, "\x1b[1m")]
    #[test_case(SgrCode::Dim, "\x1b[2m")]
    #[test_case(SgrCode::Italic, "\x1b[3m")]
    #[test_case(SgrCode::Underline, "\x1b[4m")]
    #[test_case(SgrCode::Blink, "\x1b[5m")]
    #[test_case(SgrCode::Reverse, "\x1b[7m")]
    #[test_case(SgrCode::Strikethrough, "\x1b[9m")]
    #[test_case(SgrCode::ForegroundBasic(BasicColor::Yellow), "\x1b[33m")]
    #[test_case(SgrCode::BackgroundBasic(BasicColor::BrightWhite), "\x1b[107m")]
    #[test_case(SgrCode::ForegroundAnsi256(150), "\x1b[38;5;150m")]
    #[test_case(SgrCode::BackgroundAnsi256(150), "\x1b[48;5;150m")]
    #[test_case(SgrCode::ForegroundRGB(175, 215, 135), "\x1b[38;2;175;215;135m")]
    #[test_case(SgrCode::BackgroundRGB(175, 215, 135), "\x1b[48;2;175;215;135m")]
    fn test_single_code(sgr_code: SgrCode, expected: &str) {
        assert_eq!(Sequence::from(sgr_code).as_str(), expected);
    }

    #[test]
    fn test_reset_matches_reset_code() {
        assert_eq!(Sequence::from(SgrCode::Reset).as_str(), RESET);
    }

    #[test]
    fn test_empty() {
        let it = Sequence::from_codes(&[]);
        assert_eq!(it.as_str(), "\x1b[m");
        assert_eq!(it.codes(), "");
    }

    #[test]
    fn test_joined_codes() {
        let it = Sequence::from_codes(&[
            SgrCode::Underline,
            SgrCode::Bold,
            SgrCode::BackgroundRGB(1, 2, 3),
            SgrCode::ForegroundAnsi256(16),
        ]);
        assert_eq!(it.as_str(), "\x1b[4;1;48;2;1;2;3;38;5;16m");
        assert_eq!(it.codes(), "4;1;48;2;1;2;3;38;5;16");
    }

    #[test]
    fn test_paint() {
        let it = Sequence::from(SgrCode::ForegroundBasic(BasicColor::Red));
        assert_eq!(it.paint("hi"), "\x1b[31mhi\x1b[0m");
    }
}
