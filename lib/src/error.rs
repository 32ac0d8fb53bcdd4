use crate::ascii::RenderMode;
use thiserror::Error;

/// Errors raised while planning or rendering ASCII art
#[derive(Error, Debug)]
pub enum AsciiError {
    /// Source image has a zero dimension
    #[error("degenerate image: {width}x{height}")]
    DegenerateImage { width: u32, height: u32 },

    /// Planned output exceeds the glyph budget
    #[error("target size {width}x{height} is too large")]
    TargetTooLarge { width: u64, height: u64 },

    /// Pixel data is neither single-channel nor RGB
    #[error("cannot process image with {channels} channels, expected 1 or 3")]
    UnsupportedChannelLayout { channels: u8 },

    /// Requested render mode does not fit the pixel layout
    #[error("{mode:?} rendering needs {} channel(s), got {channels}", .mode.channels())]
    ModeMismatch { mode: RenderMode, channels: u8 },

    /// Raw buffer length disagrees with the declared dimensions
    #[error("pixel buffer holds {actual} bytes, expected {expected}")]
    InvalidPixelBuffer { expected: usize, actual: usize },

    #[error("glyph palette must contain at least one character")]
    EmptyPalette,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AsciiError>;
