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

use strum_macros::{AsRefStr, EnumCount, EnumIter};

use crate::SgrCode;

/// Text attributes that can be combined with a color. The declaration order is the
/// order in which [crate::build] checks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumCount, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum TextStyle {
    Bold,
    Dim,
    Italic,
    Underline,
    Blink,
    Reverse,
    Strike,
}

impl TextStyle {
    #[rustfmt::skip]
    #[must_use]
    pub fn sgr_code(self) -> SgrCode {
        match self {
            TextStyle::Bold      => SgrCode::Bold,
            TextStyle::Dim       => SgrCode::Dim,
            TextStyle::Italic    => SgrCode::Italic,
            TextStyle::Underline => SgrCode::Underline,
            TextStyle::Blink     => SgrCode::Blink,
            TextStyle::Reverse   => SgrCode::Reverse,
            TextStyle::Strike    => SgrCode::Strikethrough,
        }
    }
}

/// Independent on / off switches, one per [TextStyle].
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StyleFlags {
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
    pub underline: bool,
    pub blink: bool,
    pub reverse: bool,
    pub strike: bool,
}

impl StyleFlags {
    #[rustfmt::skip]
    #[must_use]
    pub fn is_set(&self, style: TextStyle) -> bool {
        match style {
            TextStyle::Bold      => self.bold,
            TextStyle::Dim       => self.dim,
            TextStyle::Italic    => self.italic,
            TextStyle::Underline => self.underline,
            TextStyle::Blink     => self.blink,
            TextStyle::Reverse   => self.reverse,
            TextStyle::Strike    => self.strike,
        }
    }

    #[rustfmt::skip]
    pub fn set(&mut self, style: TextStyle, value: bool) {
        match style {
            TextStyle::Bold      => self.bold = value,
            TextStyle::Dim       => self.dim = value,
            TextStyle::Italic    => self.italic = value,
            TextStyle::Underline => self.underline = value,
            TextStyle::Blink     => self.blink = value,
            TextStyle::Reverse   => self.reverse = value,
            TextStyle::Strike    => self.strike = value,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool { *self == StyleFlags::default() }
}

impl FromIterator<TextStyle> for StyleFlags {
    fn from_iter<I: IntoIterator<Item = TextStyle>>(iter: I) -> Self {
        let mut acc = StyleFlags::default();
        for style in iter {
            acc.set(style, true);
        }
        acc
    }
}
