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

use strum::IntoEnumIterator as _;

use crate::{BasicColor,
            Channel,
            ColorMode,
            ColorSpec,
            RgbColor,
            Sequence,
            SequenceError,
            SequenceResult,
            SgrCode,
            StyleFlags,
            TextStyle,
            resolve_channel_modes,
            sizing::{InlineVecColorModes, InlineVecSgrCodes}};

/// Everything that goes into one escape sequence. Build it with the chaining methods
/// and turn it into a [Sequence] with [StylingRequest::build] (or [build]).
///
/// # Example usage:
///
/// ```rust
/// use r3bl_ansi_sequence::*;
///
/// let it = StylingRequest::new()
///     .text("red")
///     .bg("black")
///     .color_mode(ColorMode::Basic)
///     .build()
///     .unwrap();
/// assert_eq!(it.as_str(), "\x1b[40;31m");
///
/// // Mix modes per channel: 256 color text on a truecolor background.
/// let it = StylingRequest::new()
///     .text("#FF0000")
///     .bg("#0000FF")
///     .channel_modes([ColorMode::Indexed, ColorMode::TrueColor])
///     .bold()
///     .build()
///     .unwrap();
/// println!("{}", it.paint("Red on blue"));
/// ```
///
/// There is a single `use_rgb` switch for both channels, so a request can't have hex
/// text on an RGB background (or the other way around).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StylingRequest {
    pub text_color: Option<ColorSpec>,
    pub bg_color: Option<ColorSpec>,
    /// When set, colors in [ColorMode::Indexed] and [ColorMode::TrueColor] must be
    /// [ColorSpec::Rgb], otherwise they must be [ColorSpec::Hex].
    pub use_rgb: bool,
    /// Applies to both channels, and wins over `channel_modes`.
    pub color_mode: Option<ColorMode>,
    /// Text mode, then background mode.
    pub channel_modes: Option<InlineVecColorModes>,
    pub styles: StyleFlags,
}

mod styling_request_impl {
    use super::{ColorMode, ColorSpec, InlineVecColorModes, StylingRequest, TextStyle};

    impl StylingRequest {
        #[must_use]
        pub fn new() -> Self { Self::default() }

        #[must_use]
        pub fn text(mut self, color: impl Into<ColorSpec>) -> Self {
            self.text_color = Some(color.into());
            self
        }

        #[must_use]
        pub fn bg(mut self, color: impl Into<ColorSpec>) -> Self {
            self.bg_color = Some(color.into());
            self
        }

        #[must_use]
        pub fn color_mode(mut self, mode: ColorMode) -> Self {
            self.color_mode = Some(mode);
            self
        }

        #[must_use]
        pub fn channel_modes(mut self, modes: impl IntoIterator<Item = ColorMode>) -> Self {
            self.channel_modes = Some(modes.into_iter().collect::<InlineVecColorModes>());
            self
        }

        #[must_use]
        pub fn use_rgb(mut self, value: bool) -> Self {
            self.use_rgb = value;
            self
        }

        #[must_use]
        pub fn style(mut self, style: TextStyle) -> Self {
            self.styles.set(style, true);
            self
        }

        #[must_use]
        pub fn bold(self) -> Self { self.style(TextStyle::Bold) }

        #[must_use]
        pub fn dim(self) -> Self { self.style(TextStyle::Dim) }

        #[must_use]
        pub fn italic(self) -> Self { self.style(TextStyle::Italic) }

        #[must_use]
        pub fn underline(self) -> Self { self.style(TextStyle::Underline) }

        #[must_use]
        pub fn blink(self) -> Self { self.style(TextStyle::Blink) }

        #[must_use]
        pub fn reverse(self) -> Self { self.style(TextStyle::Reverse) }

        #[must_use]
        pub fn strike(self) -> Self { self.style(TextStyle::Strike) }

        /// See [super::build].
        ///
        /// # Errors
        ///
        /// See [super::build].
        pub fn build(&self) -> super::SequenceResult<super::Sequence> { super::build(self) }
    }
}

/// Turns a [StylingRequest] into a [Sequence]. This is a pure function, the same
/// request always produces the same bytes (or the same error).
///
/// The codes are laid out as: styles, then background color, then text color. Styles
/// are checked in [TextStyle] declaration order and each one lands in front of the ones
/// before it, so `bold + underline` renders as `4;1`.
///
/// # Errors
///
/// Returns a [SequenceError] if no color mode can be resolved, if the per channel mode
/// list is too short, or if a color does not fit the mode of its channel.
pub fn build(request: &StylingRequest) -> SequenceResult<Sequence> {
    let result = try_build(request);
    match &result {
        Ok(sequence) => tracing::trace!(codes = sequence.codes(), "built sequence"),
        Err(error) => tracing::debug!(%error, ?request, "rejected styling request"),
    }
    result
}

fn try_build(request: &StylingRequest) -> SequenceResult<Sequence> {
    let modes = resolve_channel_modes(
        request.color_mode,
        request.channel_modes.as_deref(),
        request.bg_color.is_some(),
    )?;

    let fg_code = match &request.text_color {
        Some(spec) => Some(color_to_sgr_code(spec, Channel::Text, modes.text, request.use_rgb)?),
        None => None,
    };

    let bg_code = match (&request.bg_color, modes.bg) {
        (Some(spec), Some(mode)) => {
            Some(color_to_sgr_code(spec, Channel::Background, mode, request.use_rgb)?)
        }
        _ => None,
    };

    let mut codes: InlineVecSgrCodes = TextStyle::iter()
        .rev()
        .filter(|style| request.styles.is_set(*style))
        .map(TextStyle::sgr_code)
        .collect();
    codes.extend(bg_code);
    codes.extend(fg_code);

    Ok(Sequence::from_codes(&codes))
}

/// The color must fit `mode`: a palette name for [ColorMode::Basic], otherwise hex or
/// RGB depending on `use_rgb`.
fn color_to_sgr_code(
    spec: &ColorSpec,
    channel: Channel,
    mode: ColorMode,
    use_rgb: bool,
) -> SequenceResult<SgrCode> {
    if mode == ColorMode::Basic {
        let color = match spec {
            ColorSpec::Named(name) => BasicColor::try_from_name(name),
            ColorSpec::Hex(_) | ColorSpec::Rgb(..) => None,
        }
        .ok_or_else(|| SequenceError::UnknownBasicColor {
            channel,
            value: spec.to_string(),
        })?;
        return Ok(match channel {
            Channel::Text => SgrCode::ForegroundBasic(color),
            Channel::Background => SgrCode::BackgroundBasic(color),
        });
    }

    let rgb = color_to_rgb(spec, channel, mode, use_rgb)?;
    let RgbColor { red, green, blue } = rgb;
    let index = rgb.as_ansi256().index;

    #[rustfmt::skip]
    let it = match (mode, channel) {
        (ColorMode::Indexed, Channel::Text)       => SgrCode::ForegroundAnsi256(index),
        (ColorMode::Indexed, Channel::Background) => SgrCode::BackgroundAnsi256(index),
        (_, Channel::Text)                        => SgrCode::ForegroundRGB(red, green, blue),
        (_, Channel::Background)                  => SgrCode::BackgroundRGB(red, green, blue),
    };
    Ok(it)
}

fn color_to_rgb(
    spec: &ColorSpec,
    channel: Channel,
    mode: ColorMode,
    use_rgb: bool,
) -> SequenceResult<RgbColor> {
    if use_rgb {
        let ColorSpec::Rgb(red, green, blue) = *spec else {
            return Err(SequenceError::NotRgbTriplet {
                channel,
                mode,
                value: spec.to_string(),
            });
        };
        return Ok(RgbColor {
            red: component_to_u8(channel, "red", red)?,
            green: component_to_u8(channel, "green", green)?,
            blue: component_to_u8(channel, "blue", blue)?,
        });
    }

    match spec {
        ColorSpec::Hex(hex) => RgbColor::try_from_hex_color(hex),
        ColorSpec::Named(_) | ColorSpec::Rgb(..) => None,
    }
    .ok_or_else(|| SequenceError::InvalidHexColor {
        channel,
        mode,
        value: spec.to_string(),
    })
}

/// Out of range values are rejected, never clamped.
fn component_to_u8(
    channel: Channel,
    component: &'static str,
    value: i32,
) -> SequenceResult<u8> {
    u8::try_from(value).map_err(|_| SequenceError::ChannelOutOfRange {
        channel,
        component,
        value,
    })
}
