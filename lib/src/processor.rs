use crate::ascii::{GlyphRenderer, PixelGrid, RenderMode};
use crate::config::AsciiConfig;
use crate::error::{AsciiError, Result};
use crate::resize::{TargetSize, plan};
use image::imageops::{self, FilterType};
use image::{DynamicImage, GenericImageView, ImageBuffer, Pixel};
use log::info;
use std::fmt;
use std::io::Write;

/// Dimensions and channel count of a decoded image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub channels: u8,
}

impl fmt::Display for ImageInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Image size: {}x{}", self.width, self.height)?;
        write!(f, "Channels: {}", self.channels)
    }
}

/// Report an image's size and channel count without touching its pixels
pub fn image_info(img: &DynamicImage) -> ImageInfo {
    let (width, height) = img.dimensions();
    ImageInfo {
        width,
        height,
        channels: img.color().channel_count(),
    }
}

/// Rendered output of one image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiArt {
    pub width: u32,
    pub height: u32,
    pub mode: RenderMode,
    pub lines: Vec<String>,
}

impl AsciiArt {
    /// Write every line followed by `\n`
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        for line in &self.lines {
            writer.write_all(line.as_bytes())?;
            writer.write_all(b"\n")?;
        }
        Ok(())
    }
}

impl fmt::Display for AsciiArt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Resize to the planned size unless the image already has it
///
/// # Returns
/// A tuple of (resized_image, was_resized)
fn resize_to_target<P>(
    input: ImageBuffer<P, Vec<u8>>,
    target: TargetSize,
    filter: FilterType,
) -> (ImageBuffer<P, Vec<u8>>, bool)
where
    P: Pixel<Subpixel = u8> + 'static,
{
    if input.dimensions() == (target.width, target.height) {
        return (input, false);
    }
    let resized = imageops::resize(&input, target.width, target.height, filter);
    (resized, true)
}

fn render_grid(grid: &PixelGrid<'_>, mode: RenderMode, config: &AsciiConfig) -> Result<Vec<String>> {
    let renderer = GlyphRenderer::new(config.palette.clone());
    if config.parallel {
        renderer.render_parallel(grid, mode)
    } else {
        Ok(renderer.render(grid, mode)?.collect())
    }
}

/// Processes a decoded image and converts it to ASCII art
///
/// 1. Validate the configuration
/// 2. Plan the target size from the source dimensions
/// 3. Convert to 8-bit gray or RGB, dropping any alpha
/// 4. Resize with the configured filter
/// 5. Render one line per row
///
/// # Errors
/// Invalid configuration, a source with a zero dimension, or a target over
/// the glyph budget.
pub fn process_image(input: &DynamicImage, config: &AsciiConfig) -> Result<AsciiArt> {
    config.validate().map_err(AsciiError::InvalidConfig)?;

    let (src_width, src_height) = input.dimensions();
    let target = plan(src_width, src_height, &config.resize)?;

    let (mode, lines, was_resized) = if config.grayscale {
        let (gray, was_resized) = resize_to_target(input.to_luma8(), target, config.filter);
        let mode = RenderMode::Grayscale;
        (mode, render_grid(&PixelGrid::from(&gray), mode, config)?, was_resized)
    } else {
        let (rgb, was_resized) = resize_to_target(input.to_rgb8(), target, config.filter);
        let mode = RenderMode::Color;
        (mode, render_grid(&PixelGrid::from(&rgb), mode, config)?, was_resized)
    };

    if was_resized {
        info!("New size: {}x{}", target.width, target.height);
    }

    Ok(AsciiArt {
        width: target.width,
        height: target.height,
        mode,
        lines,
    })
}
