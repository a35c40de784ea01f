//! Result of a successful photo capture.

use std::fmt;

use super::resolution::Resolution;

/// The product of a successful photo capture.
///
/// Carries the resolution and per-frame weight that were current when
/// the photo was taken. The weight is the value stored at capture time,
/// not a recomputation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaptureResult {
    resolution: Resolution,
    frame_weight_mb: f64,
}

impl CaptureResult {
    pub(crate) fn new(resolution: Resolution, frame_weight_mb: f64) -> Self {
        Self {
            resolution,
            frame_weight_mb,
        }
    }

    /// Returns the resolution the photo was taken at.
    #[inline]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Returns the image weight in megabytes.
    #[inline]
    pub fn frame_weight_mb(&self) -> f64 {
        self.frame_weight_mb
    }
}

impl fmt::Display for CaptureResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Photo captured at {} ({} MB)",
            self.resolution, self.frame_weight_mb
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_resolution_and_weight() {
        let res: Resolution = "1920x1080".parse().unwrap();
        let photo = CaptureResult::new(res, 62.208);
        assert_eq!(photo.to_string(), "Photo captured at 1920x1080 (62.208 MB)");
    }
}
