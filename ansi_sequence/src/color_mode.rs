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

//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#3-bit_and_4-bit>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#8-bit>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#24-bit>

use std::str::FromStr as _;

use strum_macros::{AsRefStr, Display, EnumCount, EnumIter, EnumString};

use crate::{SequenceError, SequenceResult};

/// How a color is encoded in the escape sequence. The [Display] output is the textual
/// name that [ColorMode::try_parse] accepts.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    AsRefStr,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
)]
pub enum ColorMode {
    /// The 16 named colors, see [crate::BasicColor].
    #[strum(to_string = "8/16", serialize = "basic")]
    Basic,
    /// The 256 color palette, addressed by index.
    #[strum(to_string = "256", serialize = "indexed")]
    Indexed,
    /// 24 bit RGB.
    #[strum(to_string = "true_color", serialize = "truecolor")]
    TrueColor,
}

impl ColorMode {
    /// Parse one of `8/16`, `256`, `true_color` (or the aliases `basic`, `indexed`,
    /// `truecolor`).
    ///
    /// # Errors
    ///
    /// Returns [SequenceError::UnsupportedColorMode] if `value` is none of these.
    pub fn try_parse(value: &str) -> SequenceResult<ColorMode> {
        ColorMode::from_str(value).map_err(|_| SequenceError::UnsupportedColorMode {
            value: value.to_string(),
        })
    }
}

/// The color mode of each channel, once resolved from a [crate::StylingRequest].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelModes {
    pub text: ColorMode,
    /// Only resolved when a background color is present.
    pub bg: Option<ColorMode>,
}

/// The shared mode wins over the per channel list. The per channel list holds the text
/// mode first, then the background mode. The background entry is only looked at when
/// `has_bg_color` is true, so a one entry list is fine for text only requests.
///
/// # Errors
///
/// - [SequenceError::NoColorMode] if neither `shared` nor `per_channel` is given.
/// - [SequenceError::InvalidChannelModes] if `per_channel` is missing a needed entry.
pub fn resolve_channel_modes(
    shared: Option<ColorMode>,
    per_channel: Option<&[ColorMode]>,
    has_bg_color: bool,
) -> SequenceResult<ChannelModes> {
    match (shared, per_channel) {
        (Some(mode), _) => Ok(ChannelModes {
            text: mode,
            bg: Some(mode),
        }),
        (None, None) => Err(SequenceError::NoColorMode),
        (None, Some(list)) => {
            let needed = if has_bg_color { 2 } else { 1 };
            let invalid = || SequenceError::InvalidChannelModes {
                given: list.len(),
                needed,
            };
            let text = *list.first().ok_or_else(invalid)?;
            let bg = if has_bg_color {
                Some(*list.get(1).ok_or_else(invalid)?)
            } else {
                None
            };
            Ok(ChannelModes { text, bg })
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::{EnumCount as _, IntoEnumIterator as _};
    use test_case::test_case;

    use super::*;

    #[test_case("8/16", ColorMode::Basic)]
    #[test_case("basic", ColorMode::Basic)]
    #[test_case("256", ColorMode::Indexed)]
    #[test_case("indexed", ColorMode::Indexed)]
    #[test_case("true_color", ColorMode::TrueColor)]
    #[test_case("truecolor", ColorMode::TrueColor)]
    fn test_try_parse(input: &str, expected: ColorMode) {
        assert_eq!(ColorMode::try_parse(input), Ok(expected));
    }

    #[test]
    fn test_try_parse_unsupported() {
        assert_eq!(
            ColorMode::try_parse("16m"),
            Err(SequenceError::UnsupportedColorMode {
                value: "16m".into()
            })
        );
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        assert_eq!(ColorMode::COUNT, 3);
        for mode in ColorMode::iter() {
            assert_eq!(ColorMode::try_parse(&mode.to_string()), Ok(mode));
        }
    }

    #[test]
    fn test_shared_mode_applies_to_both_channels() {
        let it = resolve_channel_modes(Some(ColorMode::Indexed), None, false);
        assert_eq!(
            it,
            Ok(ChannelModes {
                text: ColorMode::Indexed,
                bg: Some(ColorMode::Indexed)
            })
        );
    }

    #[test]
    fn test_shared_mode_wins_over_per_channel() {
        let list = [ColorMode::Basic, ColorMode::Basic];
        let it = resolve_channel_modes(Some(ColorMode::TrueColor), Some(&list[..]), true);
        assert_eq!(it.map(|it| it.text), Ok(ColorMode::TrueColor));
    }

    #[test]
    fn test_no_mode() {
        assert_eq!(
            resolve_channel_modes(None, None, true),
            Err(SequenceError::NoColorMode)
        );
    }

    #[test]
    fn test_per_channel_bg_only_resolved_when_bg_present() {
        let list = [ColorMode::Basic, ColorMode::TrueColor];
        assert_eq!(
            resolve_channel_modes(None, Some(&list[..]), false),
            Ok(ChannelModes {
                text: ColorMode::Basic,
                bg: None
            })
        );
        assert_eq!(
            resolve_channel_modes(None, Some(&list[..]), true),
            Ok(ChannelModes {
                text: ColorMode::Basic,
                bg: Some(ColorMode::TrueColor)
            })
        );
    }

    #[test]
    fn test_per_channel_too_short() {
        assert_eq!(
            resolve_channel_modes(None, Some(&[ColorMode::Basic][..]), true),
            Err(SequenceError::InvalidChannelModes {
                given: 1,
                needed: 2
            })
        );
        let empty: [ColorMode; 0] = [];
        assert_eq!(
            resolve_channel_modes(None, Some(&empty[..]), false),
            Err(SequenceError::InvalidChannelModes {
                given: 0,
                needed: 1
            })
        );
    }
}
