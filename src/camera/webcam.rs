//! The webcam entity.
//!
//! Holds the validated resolution and frame rate, the power flag that
//! gates photo capture, and the derived per-frame image weight. The
//! weight is recomputed on every resolution or frame-rate change and is
//! never written directly by callers.

use std::str::FromStr;

use thiserror::Error;

use super::resolution::Resolution;
use super::snapshot::CaptureResult;

/// Errors that can occur during webcam operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CameraError {
    #[error("invalid format: {0}")]
    InvalidFormat(String),
    #[error("webcam is powered off, cannot capture a photo")]
    NotPoweredOn,
}

/// A model of a webcam.
///
/// Created powered off with its frame weight already computed. All
/// mutation goes through the explicit setters and power toggles; failed
/// validation leaves the previous state untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Webcam {
    resolution: Resolution,
    frame_rate: u32,
    is_on: bool,
    frame_weight_mb: f64,
}

impl Webcam {
    /// Creates a webcam from a resolution string and a frame rate.
    ///
    /// The resolution must match `"<width>x<height>"` (e.g.
    /// `"1920x1080"`) and the frame rate must be non-negative; otherwise
    /// construction fails with [`CameraError::InvalidFormat`].
    pub fn new(resolution: &str, frame_rate: i32) -> Result<Self, CameraError> {
        let resolution = Resolution::from_str(resolution)?;
        let frame_rate = validate_frame_rate(frame_rate)?;
        let mut camera = Self {
            resolution,
            frame_rate,
            is_on: false,
            frame_weight_mb: 0.0,
        };
        camera.recompute_frame_weight();
        tracing::debug!(
            resolution = %camera.resolution,
            frame_rate = camera.frame_rate,
            frame_weight_mb = camera.frame_weight_mb,
            "Webcam created"
        );
        Ok(camera)
    }

    /// Replaces the resolution and recomputes the frame weight.
    ///
    /// On a format error the previous resolution and weight are kept.
    pub fn set_resolution(&mut self, resolution: &str) -> Result<(), CameraError> {
        let parsed = Resolution::from_str(resolution)?;
        self.resolution = parsed;
        self.recompute_frame_weight();
        tracing::debug!(
            resolution = %self.resolution,
            frame_weight_mb = self.frame_weight_mb,
            "Resolution changed"
        );
        Ok(())
    }

    /// Returns the current resolution in `"WxH"` form.
    pub fn resolution(&self) -> String {
        self.resolution.to_string()
    }

    /// Replaces the frame rate and recomputes the frame weight.
    ///
    /// Negative frame rates are rejected and the previous state is kept.
    pub fn set_frame_rate(&mut self, frame_rate: i32) -> Result<(), CameraError> {
        self.frame_rate = validate_frame_rate(frame_rate)?;
        self.recompute_frame_weight();
        tracing::debug!(
            frame_rate = self.frame_rate,
            frame_weight_mb = self.frame_weight_mb,
            "Frame rate changed"
        );
        Ok(())
    }

    /// Returns the current frame rate in frames per second.
    #[inline]
    pub fn frame_rate(&self) -> u32 {
        self.frame_rate
    }

    /// Returns the derived per-frame image weight in megabytes.
    #[inline]
    pub fn frame_weight_mb(&self) -> f64 {
        self.frame_weight_mb
    }

    /// Returns true if the webcam is powered on.
    #[inline]
    pub fn is_on(&self) -> bool {
        self.is_on
    }

    /// Powers the webcam on. Idempotent.
    pub fn power_on(&mut self) {
        self.is_on = true;
        tracing::info!("Webcam powered on");
    }

    /// Powers the webcam off. Idempotent.
    pub fn power_off(&mut self) {
        self.is_on = false;
        tracing::info!("Webcam powered off");
    }

    /// Takes a photo at the current settings.
    ///
    /// Fails with [`CameraError::NotPoweredOn`] while the webcam is off.
    /// The returned weight is the stored value from the last recompute.
    pub fn capture_photo(&self) -> Result<CaptureResult, CameraError> {
        if !self.is_on {
            return Err(CameraError::NotPoweredOn);
        }
        tracing::info!(resolution = %self.resolution, "Photo captured");
        Ok(CaptureResult::new(self.resolution, self.frame_weight_mb))
    }

    /// Changes the resolution, then captures a photo.
    ///
    /// Surfaces the first failure: a bad resolution string aborts before
    /// capture is attempted and leaves the resolution unchanged. If the
    /// resolution was accepted but the webcam is off, the new resolution
    /// stays in place and the capture error is returned.
    pub fn change_resolution_and_capture(
        &mut self,
        resolution: &str,
    ) -> Result<CaptureResult, CameraError> {
        self.set_resolution(resolution)?;
        self.capture_photo()
    }

    /// Estimates the data used by a call of `seconds` duration, in MB.
    ///
    /// No bounds check is applied to `seconds`; a negative duration
    /// yields a negative estimate.
    pub fn estimate_data_usage(&self, seconds: i32) -> f64 {
        self.frame_weight_mb * f64::from(seconds)
    }

    /// Formats a diagnostic snapshot of the full state.
    pub fn describe_state(&self) -> String {
        format!(
            "state: {}, resolution: {}, fps: {}, frame weight: {} MB",
            if self.is_on { "on" } else { "off" },
            self.resolution,
            self.frame_rate,
            self.frame_weight_mb
        )
    }

    fn recompute_frame_weight(&mut self) {
        self.frame_weight_mb =
            self.resolution.pixel_count() as f64 * f64::from(self.frame_rate) / 1_000_000.0;
    }
}

fn validate_frame_rate(frame_rate: i32) -> Result<u32, CameraError> {
    u32::try_from(frame_rate).map_err(|_| {
        CameraError::InvalidFormat(format!(
            "frame rate must be non-negative, got {frame_rate}"
        ))
    })
}
