//! Askyart - image to ASCII art converter
//!
//! Every pixel of a (resized) image becomes one glyph picked by brightness from
//! a 70-character ramp. In color mode each glyph is prefixed with a 24-bit
//! foreground escape carrying the pixel's RGB value.
//!
//! # Example
//! ```no_run
//! use askyart::{process_image, AsciiConfig};
//! use image;
//!
//! let input = image::open("photo.jpg").unwrap();
//! let config = AsciiConfig::default();
//! let art = process_image(&input, &config).unwrap();
//! print!("{}", art);
//! ```

pub mod ascii;
pub mod config;
pub mod error;
pub mod lut;
pub mod processor;
pub mod resize;

// Re-export main types for convenience
pub use ascii::{GlyphRenderer, Lines, PixelGrid, RenderMode};
pub use config::AsciiConfig;
pub use error::{AsciiError, Result};
pub use lut::Palette;
pub use processor::{AsciiArt, ImageInfo, image_info, process_image};
pub use resize::{ResizeDirective, ResizeRequest, TargetSize, plan};
