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

use r3bl_ansi_sequence::{BasicColor,
                         ColorMode,
                         RESET,
                         StylingRequest,
                         TextStyle,
                         enable_ansi_support,
                         palette_lines,
                         palette_lines_on};
use strum::IntoEnumIterator as _;

fn main() -> miette::Result<()> {
    enable_ansi_support();

    // 8/16 colors.
    {
        println!("=== 8/16 Colors (Text Only) ===");
        palette_lines().for_each(|line| println!("{line}"));

        println!("\n=== 8/16 Colors (Text + Background) ===");
        palette_lines_on(BasicColor::BrightBlack).for_each(|line| println!("{line}"));
    }

    // 256 colors.
    {
        println!("\n=== 256 Colors (Hex) ===");
        let it = StylingRequest::new().color_mode(ColorMode::Indexed);
        print_styled(&it.clone().text("#FF0000"), "Red (256)")?;
        print_styled(&it.text("#00FF00").bg("#0000FF"), "Green on Blue (256)")?;

        println!("\n=== 256 Colors (RGB Tuple) ===");
        let it = StylingRequest::new()
            .color_mode(ColorMode::Indexed)
            .use_rgb(true);
        print_styled(&it.clone().text((255u8, 255u8, 0u8)), "Yellow (256 RGB)")?;
        print_styled(
            &it.text((0u8, 255u8, 255u8)).bg((255u8, 0u8, 255u8)),
            "Cyan on Magenta (256 RGB)",
        )?;
    }

    // Truecolor.
    {
        println!("\n=== True Color (Hex) ===");
        let it = StylingRequest::new().color_mode(ColorMode::TrueColor);
        print_styled(&it.clone().text("#FFA500"), "Orange (true_color)")?;
        print_styled(
            &it.text("#FFFFFF").bg("#800000"),
            "White on Maroon (true_color)",
        )?;

        println!("\n=== True Color (RGB Tuple) ===");
        let it = StylingRequest::new()
            .color_mode(ColorMode::TrueColor)
            .use_rgb(true);
        print_styled(&it.clone().text((255u8, 105u8, 180u8)), "Pink (true_color RGB)")?;
        print_styled(
            &it.text((0u8, 0u8, 0u8)).bg((173u8, 216u8, 230u8)),
            "Black on LightBlue (true_color RGB)",
        )?;
    }

    // Mixed color modes.
    {
        println!("\n=== Mixed Color Modes ===");
        print_styled(
            &StylingRequest::new()
                .text("#FF0000")
                .bg("bright_green")
                .channel_modes([ColorMode::Indexed, ColorMode::Basic]),
            "Red (256) on bright_green (8/16)",
        )?;
        print_styled(
            &StylingRequest::new()
                .text("cyan")
                .bg("#FF00FF")
                .channel_modes([ColorMode::Basic, ColorMode::TrueColor]),
            "Cyan (8/16) on Magenta (true_color)",
        )?;
    }

    // Text styles.
    {
        println!("\n=== Text Styles ===");
        for style in TextStyle::iter() {
            let it = StylingRequest::new()
                .text("yellow")
                .color_mode(ColorMode::Basic)
                .style(style);
            print_styled(&it, &format!("{} Yellow", style.as_ref()))?;
        }
        print_styled(
            &StylingRequest::new()
                .text("yellow")
                .bg("blue")
                .color_mode(ColorMode::Basic)
                .bold()
                .underline()
                .blink(),
            "Bold+Underline+Blink Yellow on Blue",
        )?;
    }

    // Errors are miette diagnostics.
    {
        println!("\n=== Errors ===");
        let result = StylingRequest::new().text("orange").color_mode(ColorMode::Basic).build();
        if let Err(error) = result {
            println!("{:?}", miette::Report::new(error));
        }
    }

    Ok(())
}

fn print_styled(request: &StylingRequest, text: &str) -> miette::Result<()> {
    let sequence = request.build()?;
    println!("{sequence}{text}{RESET}");
    Ok(())
}
