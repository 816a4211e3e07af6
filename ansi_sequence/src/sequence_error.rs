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

//! Every way a [`crate::StylingRequest`] can be rejected. None of these are transient:
//! building the same request again always fails the same way.

use std::fmt::{Display, Formatter};

use crate::ColorMode;

pub type SequenceResult<T> = Result<T, SequenceError>;

/// Which half of the request a color belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Text,
    Background,
}

impl Display for Channel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Channel::Text => write!(f, "text"),
            Channel::Background => write!(f, "background"),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, miette::Diagnostic)]
pub enum SequenceError {
    #[error("🎨 No color mode given")]
    #[diagnostic(
        code(r3bl_ansi_sequence::no_color_mode),
        help("Set a shared color mode, or one color mode per channel (text, background)")
    )]
    NoColorMode,

    #[error("📋 Per channel color mode list is invalid: {needed} needed, {given} given")]
    #[diagnostic(
        code(r3bl_ansi_sequence::invalid_channel_modes),
        help("The list holds the text mode first, then the background mode")
    )]
    InvalidChannelModes { given: usize, needed: usize },

    #[error("🔍 Invalid 8/16 {channel} color: '{value}'")]
    #[diagnostic(
        code(r3bl_ansi_sequence::unknown_basic_color),
        help(
            "Use one of: black, red, green, yellow, blue, magenta, cyan, white, or their \
             bright_ variants"
        )
    )]
    UnknownBasicColor { channel: Channel, value: String },

    #[error("#️⃣ Invalid hex {channel} color for {mode} mode: '{value}'")]
    #[diagnostic(
        code(r3bl_ansi_sequence::invalid_hex_color),
        help("Hex colors are a '#' followed by exactly 6 hex digits, eg: #FF0000")
    )]
    InvalidHexColor {
        channel: Channel,
        mode: ColorMode,
        value: String,
    },

    #[error("🔢 {channel} color for {mode} mode is not an RGB triplet: '{value}'")]
    #[diagnostic(
        code(r3bl_ansi_sequence::not_rgb_triplet),
        help("With RGB enabled, colors must be 3 integers, eg: (255, 0, 0)")
    )]
    NotRgbTriplet {
        channel: Channel,
        mode: ColorMode,
        value: String,
    },

    #[error("❓ Invalid color mode: '{value}'")]
    #[diagnostic(
        code(r3bl_ansi_sequence::unsupported_color_mode),
        help("Color modes are: 8/16, 256, true_color")
    )]
    UnsupportedColorMode { value: String },

    #[error("📏 {channel} color {component} component out of range: {value}")]
    #[diagnostic(
        code(r3bl_ansi_sequence::channel_out_of_range),
        help("Each of red, green and blue must be between 0 and 255")
    )]
    ChannelOutOfRange {
        channel: Channel,
        component: &'static str,
        value: i32,
    },
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_error_messages_carry_context() {
        let error = SequenceError::InvalidHexColor {
            channel: Channel::Background,
            mode: ColorMode::TrueColor,
            value: "#12".into(),
        };
        assert_eq!(
            error.to_string(),
            "#️⃣ Invalid hex background color for true_color mode: '#12'"
        );

        let error = SequenceError::ChannelOutOfRange {
            channel: Channel::Text,
            component: "green",
            value: 300,
        };
        assert_eq!(
            error.to_string(),
            "📏 text color green component out of range: 300"
        );
    }

    #[test]
    fn test_diagnostic_code() {
        use miette::Diagnostic as _;
        let code = SequenceError::NoColorMode.code().map(|it| it.to_string());
        assert_eq!(code.as_deref(), Some("r3bl_ansi_sequence::no_color_mode"));
    }
}
