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

//! This module contains a parser that parses a hex color string into a [RgbColor] struct.
//! The hex color string must be in the format `#RRGGBB`, eg: `#FF0000` for red. Upper
//! and lower case digits are both accepted.

use nom::{IResult,
          bytes::complete::{tag, take_while_m_n},
          combinator::{all_consuming, map_res},
          sequence::tuple};

use crate::RgbColor;

/// Parse function that generates an [RgbColor] struct from a hex color string. Input
/// after the 6th hex digit is returned as the remainder.
///
/// # Errors
///
/// Returns a [nom::Err] if `input` does not start with `#` and 6 hex digits.
pub fn parse_hex_color(input: &str) -> IResult<&str, RgbColor> {
    let (input, _) = tag("#")(input)?;
    let (input, (red, green, blue)) = tuple((
        helper_fns::parse_hex_seg,
        helper_fns::parse_hex_seg,
        helper_fns::parse_hex_seg,
    ))(input)?;
    Ok((input, RgbColor { red, green, blue }))
}

/// Same as [parse_hex_color], but there must be nothing left over, so `#FF00001` and
/// `#FF0000 ` are both rejected.
pub fn parse_hex_color_exact(input: &str) -> Option<RgbColor> {
    match all_consuming(parse_hex_color)(input) {
        Ok((_, color)) => Some(color),
        Err(_) => None,
    }
}

/// Helper functions to match and parse hex digits.
mod helper_fns {
    use super::{IResult, map_res, take_while_m_n};

    /// This function is used by [map_res] and it returns a [Result], not [IResult].
    pub fn parse_str_to_hex_num(input: &str) -> Result<u8, std::num::ParseIntError> {
        u8::from_str_radix(input, 16)
    }

    /// This function is used by [take_while_m_n] and as long as it returns `true` items
    /// will be taken from the input.
    pub fn match_is_hex_digit(c: char) -> bool { c.is_ascii_hexdigit() }

    pub fn parse_hex_seg(input: &str) -> IResult<&str, u8> {
        map_res(
            take_while_m_n(2, 2, match_is_hex_digit),
            parse_str_to_hex_num,
        )(input)
    }
}
