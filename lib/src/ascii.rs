use crate::error::{AsciiError, Result};
use crate::lut::{Palette, rgb_brightness};
use image::{DynamicImage, GrayImage, RgbImage};
use rayon::prelude::*;
use std::fmt::Write as _;
use std::io::Write;

/// How each pixel is emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// One glyph per pixel, brightness from the single channel
    Grayscale,
    /// 24-bit foreground escape followed by the glyph
    Color,
}

impl RenderMode {
    /// Pick the mode for a channel count
    ///
    /// # Errors
    /// [`AsciiError::UnsupportedChannelLayout`] for anything but 1 or 3.
    pub fn from_channels(channels: u8) -> Result<Self> {
        match channels {
            1 => Ok(Self::Grayscale),
            3 => Ok(Self::Color),
            _ => Err(AsciiError::UnsupportedChannelLayout { channels }),
        }
    }

    pub fn channels(self) -> u8 {
        match self {
            Self::Grayscale => 1,
            Self::Color => 3,
        }
    }
}

/// Borrowed row-major view over 8-bit pixel data
#[derive(Debug, Clone, Copy)]
pub struct PixelGrid<'a> {
    data: &'a [u8],
    width: u32,
    height: u32,
    channels: u8,
}

impl<'a> PixelGrid<'a> {
    /// Wrap a raw buffer
    ///
    /// The channel count is not checked here; rendering rejects layouts it
    /// cannot handle.
    ///
    /// # Errors
    /// [`AsciiError::InvalidPixelBuffer`] if `data` is not exactly
    /// `width * height * channels` bytes long.
    pub fn new(data: &'a [u8], width: u32, height: u32, channels: u8) -> Result<Self> {
        let expected = width as usize * height as usize * channels as usize;
        if data.len() != expected {
            return Err(AsciiError::InvalidPixelBuffer {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            channels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    fn row(&self, y: u32) -> &'a [u8] {
        let stride = self.width as usize * self.channels as usize;
        let start = y as usize * stride;
        &self.data[start..start + stride]
    }
}

impl<'a> From<&'a GrayImage> for PixelGrid<'a> {
    fn from(img: &'a GrayImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            data: img.as_raw(),
            width,
            height,
            channels: 1,
        }
    }
}

impl<'a> From<&'a RgbImage> for PixelGrid<'a> {
    fn from(img: &'a RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            data: img.as_raw(),
            width,
            height,
            channels: 3,
        }
    }
}

impl<'a> TryFrom<&'a DynamicImage> for PixelGrid<'a> {
    type Error = AsciiError;

    fn try_from(img: &'a DynamicImage) -> Result<Self> {
        match img {
            DynamicImage::ImageLuma8(gray) => Ok(gray.into()),
            DynamicImage::ImageRgb8(rgb) => Ok(rgb.into()),
            other => Err(AsciiError::UnsupportedChannelLayout {
                channels: other.color().channel_count(),
            }),
        }
    }
}

/// Turns pixel grids into lines of glyphs
#[derive(Debug, Clone, Default)]
pub struct GlyphRenderer {
    palette: Palette,
}

impl GlyphRenderer {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Render a grid lazily, one line per row
    ///
    /// Lines carry no trailing newline. No color reset is emitted after the
    /// last pixel, so in color mode the final color stays active in the
    /// terminal.
    ///
    /// # Errors
    /// Fails before producing any line if the grid's channel count is
    /// unsupported or does not match `mode`.
    pub fn render<'r, 'a>(&'r self, grid: &PixelGrid<'a>, mode: RenderMode) -> Result<Lines<'r, 'a>> {
        check_mode(grid, mode)?;
        Ok(Lines {
            renderer: self,
            grid: *grid,
            mode,
            next_row: 0,
        })
    }

    /// Render all rows on the rayon pool, preserving row order
    pub fn render_parallel(&self, grid: &PixelGrid<'_>, mode: RenderMode) -> Result<Vec<String>> {
        check_mode(grid, mode)?;
        Ok((0..grid.height())
            .into_par_iter()
            .map(|y| self.render_row(grid.row(y), mode))
            .collect())
    }

    /// Stream a grid into `writer`, each row followed by `\n`
    pub fn write_to<W: Write>(&self, grid: &PixelGrid<'_>, mode: RenderMode, writer: &mut W) -> Result<()> {
        for line in self.render(grid, mode)? {
            writer.write_all(line.as_bytes())?;
            writer.write_all(b"\n")?;
        }
        Ok(())
    }

    fn render_row(&self, row: &[u8], mode: RenderMode) -> String {
        match mode {
            RenderMode::Grayscale => row.iter().map(|&v| self.palette.glyph(v as f32)).collect(),
            RenderMode::Color => {
                // "\x1b[38;2;255;255;255m" plus the glyph
                let mut line = String::with_capacity(row.len() / 3 * 20);
                for px in row.chunks_exact(3) {
                    let (r, g, b) = (px[0], px[1], px[2]);
                    let glyph = self.palette.glyph(rgb_brightness(r, g, b));
                    // fmt::Write into a String never returns Err
                    let _ = write!(line, "\x1b[38;2;{};{};{}m{}", r, g, b, glyph);
                }
                line
            }
        }
    }
}

fn check_mode(grid: &PixelGrid<'_>, mode: RenderMode) -> Result<()> {
    let expected = RenderMode::from_channels(grid.channels())?;
    if expected != mode {
        return Err(AsciiError::ModeMismatch {
            mode,
            channels: grid.channels(),
        });
    }
    Ok(())
}

/// Lazy iterator over rendered rows, top to bottom
pub struct Lines<'r, 'a> {
    renderer: &'r GlyphRenderer,
    grid: PixelGrid<'a>,
    mode: RenderMode,
    next_row: u32,
}

impl Iterator for Lines<'_, '_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.next_row >= self.grid.height() {
            return None;
        }
        let row = self.grid.row(self.next_row);
        self.next_row += 1;
        Some(self.renderer.render_row(row, self.mode))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.grid.height() - self.next_row) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Lines<'_, '_> {}
