use crate::lut::Palette;
use crate::resize::ResizeRequest;
use image::imageops::FilterType;

/// Configuration for ASCII art conversion
#[derive(Debug, Clone)]
pub struct AsciiConfig {
    /// Render glyphs only, without color escapes
    pub grayscale: bool, // default false

    /// Output size options
    pub resize: ResizeRequest, // default: 80 columns

    /// Resampling filter used when resizing
    pub filter: FilterType, // default Triangle (bilinear)

    /// Render rows on the rayon pool
    pub parallel: bool, // default true

    /// Glyph ramp, densest to sparsest
    pub palette: Palette, // default: 70-glyph standard ramp
}

impl Default for AsciiConfig {
    fn default() -> Self {
        Self {
            grayscale: false,
            resize: ResizeRequest::default(),
            filter: FilterType::Triangle,
            parallel: true,
            palette: Palette::standard(),
        }
    }
}

impl AsciiConfig {
    /// Validates the configuration parameters
    pub fn validate(&self) -> Result<(), String> {
        if let Some(scale) = self.resize.scale {
            if !scale.is_finite() || scale < 0.0 {
                return Err(format!("scale must be a finite value >= 0, got {}", scale));
            }
        }
        if self.resize.width == Some(0) {
            return Err("width must be greater than 0".to_string());
        }
        if self.resize.height == Some(0) {
            return Err("height must be greater than 0".to_string());
        }
        Ok(())
    }
}
