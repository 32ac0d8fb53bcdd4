//! Glyph palette and brightness quantization
//!
//! The palette runs from the densest glyph to the sparsest one, so dark pixels
//! pick heavy characters and bright pixels pick light ones.

use crate::error::{AsciiError, Result};

/// Default 70-glyph ramp, densest (`$`) to sparsest (`'`)
pub const STANDARD_GLYPHS: &str =
    "$@B%8&WM#*oahkbdpqwmZO0QLCJUYXzcvunxrjft/\\|()1{}[]?-_+=~<>i!lI;:,\"^`.'";

/// Number of glyphs in [`STANDARD_GLYPHS`]
pub const STANDARD_LEN: usize = 70;

/// Immutable ordered set of glyphs used to represent brightness levels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    glyphs: Box<[char]>,
}

impl Palette {
    /// Build a palette from a string ordered densest to sparsest
    ///
    /// # Errors
    /// Returns [`AsciiError::EmptyPalette`] if `glyphs` has no characters.
    pub fn new(glyphs: &str) -> Result<Self> {
        let glyphs: Box<[char]> = glyphs.chars().collect();
        if glyphs.is_empty() {
            return Err(AsciiError::EmptyPalette);
        }
        Ok(Self { glyphs })
    }

    /// The built-in 70-glyph ramp
    pub fn standard() -> Self {
        Self {
            glyphs: STANDARD_GLYPHS.chars().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    /// Map a brightness value [0.0, 255.0] to a palette index
    ///
    /// `floor(brightness / 255 * len)`, clamped to `len - 1`. Without the clamp
    /// full white lands exactly on `len`.
    pub fn index(&self, brightness: f32) -> usize {
        let last = self.glyphs.len() - 1;
        let scaled = (brightness.clamp(0.0, 255.0) / 255.0) * self.glyphs.len() as f32;
        (scaled.floor() as usize).min(last)
    }

    /// Glyph for a brightness value
    pub fn glyph(&self, brightness: f32) -> char {
        self.glyphs[self.index(brightness)]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::standard()
    }
}

/// Unweighted mean of the three channels
///
/// Not a luma model: red, green and blue count equally.
pub fn rgb_brightness(r: u8, g: u8, b: u8) -> f32 {
    (r as f32 + g as f32 + b as f32) / 3.0
}
