use std::path::PathBuf;

use askyart::{AsciiConfig, ResizeRequest};
use clap::Parser;

/// Turn an image into ASCII art, optionally colored with 24-bit escapes.
#[derive(Parser, Debug)]
#[command(name = "askyart", version, about, long_about = None)]
pub struct Cli {
    /// The file to be processed.
    pub file: PathBuf,

    /// Destination file.
    pub destination: PathBuf,

    /// Render plain glyphs from the grayscale image, without color.
    #[arg(long, default_value_t = false)]
    pub grayscale: bool,

    /// Scale factor applied to both dimensions.
    #[arg(long, value_parser = parse_scale)]
    pub scale: Option<f32>,

    /// Resize by width, preserving aspect ratio.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: Option<u32>,

    /// Resize by height, preserving aspect ratio. Wins over --width.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: Option<u32>,

    /// Print the image size and channel count, then exit without rendering.
    #[arg(long, default_value_t = false)]
    pub info: bool,

    /// Print the generated art to the terminal after writing it.
    #[arg(long, default_value_t = false)]
    pub show: bool,
}

/// Parse and validate scale (>= 0)
fn parse_scale(s: &str) -> Result<f32, String> {
    let scale: f32 = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
    if !scale.is_finite() || scale < 0.0 {
        return Err(format!("Scale must be 0 or greater, got {}", scale));
    }
    Ok(scale)
}

impl Cli {
    /// Build the conversion config from the parsed flags
    pub fn to_config(&self) -> AsciiConfig {
        AsciiConfig {
            grayscale: self.grayscale,
            resize: ResizeRequest {
                scale: self.scale,
                width: self.width,
                height: self.height,
            },
            ..AsciiConfig::default()
        }
    }
}
