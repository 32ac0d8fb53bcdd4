//! Target size planning
//!
//! Works out the output grid size from the source dimensions and whichever
//! resize option the caller asked for. Aspect ratios always come from the
//! source image.

use crate::error::{AsciiError, Result};
use log::debug;

/// Width used when no resize option is given
pub const DEFAULT_WIDTH: u32 = 80;

/// Largest target accepted, in glyphs (4096x4096)
pub const MAX_TARGET_PIXELS: u64 = 1 << 24;

/// Raw resize options, as collected from the command line
///
/// More than one option may be set; [`ResizeRequest::directive`] picks the one
/// that wins. Non-positive sizes and negative scales count as unset.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ResizeRequest {
    pub scale: Option<f32>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// The single resize rule that applies to a run
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResizeDirective {
    Height(u32),
    Width(u32),
    Scale(f32),
    Default,
}

/// Output dimensions in glyphs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetSize {
    pub width: u32,
    pub height: u32,
}

impl ResizeRequest {
    pub fn height(height: u32) -> Self {
        Self {
            height: Some(height),
            ..Self::default()
        }
    }

    pub fn width(width: u32) -> Self {
        Self {
            width: Some(width),
            ..Self::default()
        }
    }

    pub fn scale(scale: f32) -> Self {
        Self {
            scale: Some(scale),
            ..Self::default()
        }
    }

    /// Resolve the options by precedence: height, width, scale, default
    pub fn directive(&self) -> ResizeDirective {
        if let Some(h) = self.height.filter(|&h| h > 0) {
            ResizeDirective::Height(h)
        } else if let Some(w) = self.width.filter(|&w| w > 0) {
            ResizeDirective::Width(w)
        } else if let Some(s) = self.scale.filter(|&s| s >= 0.0) {
            ResizeDirective::Scale(s)
        } else {
            ResizeDirective::Default
        }
    }
}

/// Compute target dimensions for a source image
///
/// # Arguments
/// * `source_width` - Source width in pixels
/// * `source_height` - Source height in pixels
/// * `request` - Resize options
///
/// # Returns
/// The target size, truncated to whole pixels and never smaller than 1x1
///
/// # Errors
/// [`AsciiError::DegenerateImage`] if either source dimension is zero,
/// [`AsciiError::TargetTooLarge`] if the target exceeds [`MAX_TARGET_PIXELS`].
pub fn plan(source_width: u32, source_height: u32, request: &ResizeRequest) -> Result<TargetSize> {
    if source_width == 0 || source_height == 0 {
        return Err(AsciiError::DegenerateImage {
            width: source_width,
            height: source_height,
        });
    }

    let sw = source_width as f64;
    let sh = source_height as f64;
    let aspect_width = sw / sh;
    let aspect_height = sh / sw;

    let directive = request.directive();
    let (width, height) = match directive {
        ResizeDirective::Height(h) => (h as f64 * aspect_width, h as f64),
        ResizeDirective::Width(w) => (w as f64, w as f64 * aspect_height),
        ResizeDirective::Scale(s) => (sw * s as f64, sh * s as f64),
        // Height follows the width/height ratio here, as the tool always has
        ResizeDirective::Default => (DEFAULT_WIDTH as f64, DEFAULT_WIDTH as f64 * aspect_width),
    };

    if width.max(1.0) * height.max(1.0) > MAX_TARGET_PIXELS as f64 {
        // float to int casts saturate
        return Err(AsciiError::TargetTooLarge {
            width: width as u64,
            height: height as u64,
        });
    }

    let target = TargetSize {
        width: to_pixels(width),
        height: to_pixels(height),
    };
    debug!(
        "planned {}x{} -> {}x{} ({:?})",
        source_width, source_height, target.width, target.height, directive
    );
    Ok(target)
}

fn to_pixels(value: f64) -> u32 {
    (value as u32).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive_precedence() {
        let all = ResizeRequest {
            scale: Some(2.0),
            width: Some(40),
            height: Some(20),
        };
        assert_eq!(all.directive(), ResizeDirective::Height(20));

        let no_height = ResizeRequest {
            height: None,
            ..all
        };
        assert_eq!(no_height.directive(), ResizeDirective::Width(40));

        assert_eq!(ResizeRequest::scale(0.5).directive(), ResizeDirective::Scale(0.5));
        assert_eq!(ResizeRequest::default().directive(), ResizeDirective::Default);
    }

    #[test]
    fn test_unset_sentinels() {
        let request = ResizeRequest {
            scale: Some(-1.0),
            width: Some(0),
            height: Some(0),
        };
        assert_eq!(request.directive(), ResizeDirective::Default);
    }

    #[test]
    fn test_plan_by_height() {
        let target = plan(200, 100, &ResizeRequest::height(50)).unwrap();
        assert_eq!(target, TargetSize { width: 100, height: 50 });
    }

    #[test]
    fn test_plan_by_height_keeps_aspect() {
        for &(sw, sh) in &[(640, 480), (1920, 1080), (333, 777), (1, 500), (500, 1)] {
            for &h in &[1, 7, 24, 100] {
                let target = plan(sw, sh, &ResizeRequest::height(h)).unwrap();
                assert_eq!(target.height, h);
                let expected = h as f64 * sw as f64 / sh as f64;
                assert!(
                    (target.width as f64 - expected).abs() <= 1.0,
                    "{}x{} at height {} gave width {}",
                    sw,
                    sh,
                    h,
                    target.width
                );
            }
        }
    }

    #[test]
    fn test_plan_height_wins_over_width() {
        let request = ResizeRequest {
            width: Some(10),
            height: Some(30),
            scale: None,
        };
        let target = plan(100, 100, &request).unwrap();
        assert_eq!(target, TargetSize { width: 30, height: 30 });
    }

    #[test]
    fn test_plan_by_width() {
        let target = plan(1920, 1080, &ResizeRequest::width(160)).unwrap();
        assert_eq!(target, TargetSize { width: 160, height: 90 });
    }

    #[test]
    fn test_plan_by_scale() {
        let target = plan(640, 480, &ResizeRequest::scale(0.25)).unwrap();
        assert_eq!(target, TargetSize { width: 160, height: 120 });
    }

    #[test]
    fn test_plan_zero_scale_stays_positive() {
        let target = plan(640, 480, &ResizeRequest::scale(0.0)).unwrap();
        assert_eq!(target, TargetSize { width: 1, height: 1 });
    }

    #[test]
    fn test_plan_default() {
        // 80 wide, height uses the width/height ratio
        let target = plan(400, 200, &ResizeRequest::default()).unwrap();
        assert_eq!(target, TargetSize { width: 80, height: 160 });

        let square = plan(123, 123, &ResizeRequest::default()).unwrap();
        assert_eq!(square, TargetSize { width: 80, height: 80 });
    }

    #[test]
    fn test_plan_truncates() {
        // 10 * 3 / 7 = 4.28
        let target = plan(3, 7, &ResizeRequest::height(10)).unwrap();
        assert_eq!(target.width, 4);
    }

    #[test]
    fn test_plan_height_too_large() {
        assert!(matches!(
            plan(1000, 1, &ResizeRequest::height(10_000_000)),
            Err(AsciiError::TargetTooLarge {
                width: 10_000_000_000,
                height: 10_000_000
            })
        ));
    }

    #[test]
    fn test_plan_scale_too_large() {
        assert!(matches!(
            plan(100, 100, &ResizeRequest::scale(1e9)),
            Err(AsciiError::TargetTooLarge { .. })
        ));
        assert!(matches!(
            plan(1, 1, &ResizeRequest::scale(1e10)),
            Err(AsciiError::TargetTooLarge { .. })
        ));
        assert!(matches!(
            plan(1, 1, &ResizeRequest::scale(f32::INFINITY)),
            Err(AsciiError::TargetTooLarge { width: u64::MAX, .. })
        ));
    }

    #[test]
    fn test_plan_at_pixel_budget() {
        let target = plan(4096, 4096, &ResizeRequest::scale(1.0)).unwrap();
        assert_eq!(target, TargetSize { width: 4096, height: 4096 });
        assert!(plan(4097, 4096, &ResizeRequest::scale(1.0)).is_err());
    }

    #[test]
    fn test_plan_degenerate() {
        assert!(matches!(
            plan(100, 0, &ResizeRequest::default()),
            Err(AsciiError::DegenerateImage { width: 100, height: 0 })
        ));
        assert!(matches!(
            plan(0, 100, &ResizeRequest::height(10)),
            Err(AsciiError::DegenerateImage { .. })
        ));
    }
}
