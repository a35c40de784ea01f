//! The webcam model.
//!
//! This module provides the webcam entity itself along with the value
//! types it produces and consumes: a parsed resolution and the result
//! of a successful photo capture.

mod resolution;
mod snapshot;
mod webcam;

pub use resolution::Resolution;
pub use snapshot::CaptureResult;
pub use webcam::{CameraError, Webcam};
