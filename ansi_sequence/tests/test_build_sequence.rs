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

use pretty_assertions::assert_eq;
use r3bl_ansi_sequence::{BG_COLOR_PALETTE,
                         Channel,
                         ColorMode,
                         RESET,
                         SequenceError,
                         StylingRequest,
                         TEXT_COLOR_PALETTE,
                         build};
use test_case::test_case;

fn basic() -> StylingRequest { StylingRequest::new().color_mode(ColorMode::Basic) }

#[test_case("black", 30)]
#[test_case("red", 31)]
#[test_case("green", 32)]
#[test_case("yellow", 33)]
#[test_case("blue", 34)]
#[test_case("magenta", 35)]
#[test_case("cyan", 36)]
#[test_case("white", 37)]
#[test_case("bright_black", 90)]
#[test_case("bright_red", 91)]
#[test_case("bright_green", 92)]
#[test_case("bright_yellow", 93)]
#[test_case("bright_blue", 94)]
#[test_case("bright_magenta", 95)]
#[test_case("bright_cyan", 96)]
#[test_case("bright_white", 97)]
fn test_basic_text_codes(name: &str, code: u8) {
    let sequence = build(&basic().text(name)).unwrap();
    assert_eq!(sequence.as_str(), format!("\x1b[{code}m"));
}

#[test]
fn test_basic_background_codes() {
    for (color, code) in BG_COLOR_PALETTE {
        let sequence = build(&basic().bg(color)).unwrap();
        assert_eq!(sequence.codes().parse::<u8>(), Ok(code));
        assert!(sequence.as_str().ends_with('m'));
        assert!(!sequence.codes().starts_with(';'));
    }
}

#[test]
fn test_palette_tables_are_exposed() {
    assert_eq!(TEXT_COLOR_PALETTE.len(), 16);
    assert_eq!(BG_COLOR_PALETTE.len(), 16);
    assert_eq!(TEXT_COLOR_PALETTE[8].1, 90);
    assert_eq!(BG_COLOR_PALETTE[15].1, 107);
    assert_eq!(RESET, "\x1b[0m");
}

#[test]
fn test_hex_and_rgb_produce_the_same_sequence() {
    let hex = StylingRequest::new()
        .text("#FF0000")
        .color_mode(ColorMode::TrueColor)
        .build()
        .unwrap();
    let rgb = StylingRequest::new()
        .text((255u8, 0u8, 0u8))
        .color_mode(ColorMode::TrueColor)
        .use_rgb(true)
        .build()
        .unwrap();
    assert_eq!(hex, rgb);
    assert_eq!(hex.as_str(), "\x1b[38;2;255;0;0m");
}

#[test]
fn test_indexed_cube_corners() {
    let white = StylingRequest::new()
        .text("#FFFFFF")
        .color_mode(ColorMode::Indexed)
        .build()
        .unwrap();
    let black = StylingRequest::new()
        .text("#000000")
        .color_mode(ColorMode::Indexed)
        .build()
        .unwrap();
    assert_eq!(white.as_str(), "\x1b[38;5;231m");
    assert_eq!(black.as_str(), "\x1b[38;5;16m");
}

#[test]
fn test_background_before_text() {
    let it = basic().text("red").bg("black").build().unwrap();
    assert_eq!(it.as_str(), "\x1b[40;31m");
}

#[test]
fn test_styles_prepend_in_fixed_order() {
    let it = basic().text("yellow").underline().bold().build().unwrap();
    assert_eq!(it.as_str(), "\x1b[4;1;33m");

    let it = basic()
        .text("yellow")
        .bg("blue")
        .blink()
        .underline()
        .bold()
        .build()
        .unwrap();
    assert_eq!(it.as_str(), "\x1b[5;4;1;44;33m");
}

#[test]
fn test_empty_request() {
    assert_eq!(basic().build().unwrap().as_str(), "\x1b[m");
}

#[test]
fn test_missing_mode() {
    let it = StylingRequest::new().text("red").bg("black").build();
    assert_eq!(it, Err(SequenceError::NoColorMode));
}

#[test]
fn test_mode_mismatch() {
    let it = StylingRequest::new()
        .text("red")
        .color_mode(ColorMode::TrueColor)
        .build();
    assert!(matches!(
        it,
        Err(SequenceError::InvalidHexColor {
            channel: Channel::Text,
            ..
        })
    ));

    let it = basic().text("#FF0000").build();
    assert!(matches!(
        it,
        Err(SequenceError::UnknownBasicColor {
            channel: Channel::Text,
            ..
        })
    ));

    let it = basic().use_rgb(true).bg((1u8, 2u8, 3u8)).build();
    assert!(matches!(
        it,
        Err(SequenceError::UnknownBasicColor {
            channel: Channel::Background,
            ..
        })
    ));
}

#[test_case(" red "; "padded")]
#[test_case("red\n"; "trailing newline")]
#[test_case("red "; "trailing space")]
fn test_names_are_not_trimmed(name: &str) {
    assert_eq!(
        build(&basic().text(name)),
        Err(SequenceError::UnknownBasicColor {
            channel: Channel::Text,
            value: name.into(),
        })
    );
}

#[test_case("#FF0000 "; "hex trailing space")]
#[test_case(" #FF0000"; "hex leading space")]
#[test_case("#FF0000\t"; "hex trailing tab")]
fn test_hex_must_be_exact(hex: &str) {
    let it = StylingRequest::new()
        .bg(hex)
        .color_mode(ColorMode::TrueColor)
        .build();
    assert_eq!(
        it,
        Err(SequenceError::InvalidHexColor {
            channel: Channel::Background,
            mode: ColorMode::TrueColor,
            value: hex.into(),
        })
    );
}

#[test]
fn test_build_twice_is_byte_identical() {
    let request = StylingRequest::new()
        .text((0u8, 0u8, 0u8))
        .bg((173u8, 216u8, 230u8))
        .color_mode(ColorMode::TrueColor)
        .use_rgb(true)
        .strike()
        .dim();
    let first = request.build().unwrap();
    let second = request.build().unwrap();
    assert_eq!(first.as_str().as_bytes(), second.as_str().as_bytes());
    assert_eq!(first.as_str(), "\x1b[9;2;48;2;173;216;230;38;2;0;0;0m");
}

#[test]
fn test_build_from_many_threads() {
    let request = basic().text("bright_cyan").italic();
    let expected = request.build().unwrap();
    std::thread::scope(|scope| {
        let handles = (0..4)
            .map(|_| scope.spawn(|| request.build().unwrap()))
            .collect::<Vec<_>>();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
