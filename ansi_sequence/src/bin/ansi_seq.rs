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

//! Print some text styled with an escape sequence built from the command line, eg:
//!
//! ```text
//! ansi_seq --mode 8/16 --fg yellow --bg blue --bold --underline "Hello"
//! ansi_seq --mode 256 --fg '#FF0000' "Red (256)"
//! ansi_seq --mode true_color --rgb --fg 255,105,180 "Pink"
//! ansi_seq --text-mode 8/16 --bg-mode true_color --fg cyan --bg '#FF00FF' "Mixed"
//! ansi_seq --mode 8/16 --fg red --escaped
//! ansi_seq --palette
//! ```

use std::io::Write as _;

use clap::Parser;
use miette::IntoDiagnostic as _;
use r3bl_ansi_sequence::{BasicColor,
                         ColorMode,
                         ColorSpec,
                         StylingRequest,
                         enable_ansi_support,
                         palette_lines_on,
                         print_palette};
use tracing_core::LevelFilter;

#[allow(clippy::struct_excessive_bools)]
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Text to print with the sequence applied
    #[arg(default_value = "Hello, world!")]
    text: String,

    /// Color mode for both channels: 8/16, 256, true_color
    #[arg(long, short = 'm', value_parser = ColorMode::try_parse)]
    mode: Option<ColorMode>,

    /// Color mode for the text channel (ignored if --mode is set)
    #[arg(long, value_parser = ColorMode::try_parse)]
    text_mode: Option<ColorMode>,

    /// Color mode for the background channel (ignored if --mode is set)
    #[arg(long, value_parser = ColorMode::try_parse, requires = "text_mode")]
    bg_mode: Option<ColorMode>,

    /// Text color: a palette name, #RRGGBB, or r,g,b (with --rgb)
    #[arg(long)]
    fg: Option<String>,

    /// Background color: a palette name, #RRGGBB, or r,g,b (with --rgb)
    #[arg(long)]
    bg: Option<String>,

    /// Colors in 256 and true_color modes are r,g,b triplets instead of hex
    #[arg(long)]
    rgb: bool,

    #[arg(long)]
    bold: bool,
    #[arg(long)]
    dim: bool,
    #[arg(long)]
    italic: bool,
    #[arg(long)]
    underline: bool,
    #[arg(long)]
    blink: bool,
    #[arg(long)]
    reverse: bool,
    #[arg(long)]
    strike: bool,

    /// Print the sequence itself, escaped, instead of styled text
    #[arg(long, short = 'e')]
    escaped: bool,

    /// Print every 8/16 palette color, optionally on top of --palette-bg
    #[arg(long)]
    palette: bool,

    /// Background for --palette, a palette name
    #[arg(long, requires = "palette")]
    palette_bg: Option<String>,

    /// Log level for diagnostics written to stderr
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,
}

impl Cli {
    fn to_request(&self) -> StylingRequest {
        let mut request = StylingRequest {
            text_color: parse_color_arg(self.fg.as_deref(), self.rgb),
            bg_color: parse_color_arg(self.bg.as_deref(), self.rgb),
            use_rgb: self.rgb,
            color_mode: self.mode,
            ..StylingRequest::default()
        };

        if let Some(text_mode) = self.text_mode {
            request = request.channel_modes(std::iter::once(text_mode).chain(self.bg_mode));
        }

        request.styles.bold = self.bold;
        request.styles.dim = self.dim;
        request.styles.italic = self.italic;
        request.styles.underline = self.underline;
        request.styles.blink = self.blink;
        request.styles.reverse = self.reverse;
        request.styles.strike = self.strike;

        request
    }
}

/// An empty (or blank) argument means no color. With `--rgb`, three comma separated
/// integers (eg: `255, 0, 0`) make an RGB spec. Anything else goes to the library as
/// written, so a rejected value is reported the way the user typed it.
fn parse_color_arg(arg: Option<&str>, rgb: bool) -> Option<ColorSpec> {
    let arg = arg?.trim();
    if arg.is_empty() {
        return None;
    }
    match try_parse_rgb_triplet(arg) {
        Some(triplet) if rgb => Some(ColorSpec::from(triplet)),
        _ => Some(ColorSpec::from(arg)),
    }
}

fn try_parse_rgb_triplet(arg: &str) -> Option<(i32, i32, i32)> {
    let mut iter = arg.split(',').map(|it| it.trim().parse::<i32>());
    match (iter.next(), iter.next(), iter.next(), iter.next()) {
        (Some(Ok(red)), Some(Ok(green)), Some(Ok(blue)), None) => Some((red, green, blue)),
        _ => None,
    }
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(cli.log_level)
        .init();
    tracing::debug!(?cli, "parsed command line");

    enable_ansi_support();

    let mut stdout = std::io::stdout().lock();

    if cli.palette {
        match cli.palette_bg.as_deref() {
            None => print_palette(&mut stdout).into_diagnostic()?,
            Some(name) => {
                let bg = BasicColor::try_from_name(name)
                    .ok_or_else(|| miette::miette!("Invalid 8/16 color: {name}"))?;
                for line in palette_lines_on(bg) {
                    writeln!(stdout, "{line}").into_diagnostic()?;
                }
            }
        }
        return Ok(());
    }

    let sequence = cli.to_request().build()?;

    if cli.escaped {
        writeln!(stdout, "{:?}", sequence.as_str()).into_diagnostic()?;
    } else {
        writeln!(stdout, "{}", sequence.paint(&cli.text)).into_diagnostic()?;
    }

    Ok(())
}
