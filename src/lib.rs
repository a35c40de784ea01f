//! Webcam Simulation Library
//!
//! An educational model of a webcam: a validated resolution and frame
//! rate, a power flag that gates photo capture, and a derived per-frame
//! image weight used to estimate video-call data usage.
//!
//! # Design Principles
//!
//! - **Validate at the boundary**: resolution strings and frame rates
//!   are checked on every write; a failed write leaves state untouched
//! - **Derived state stays consistent**: the frame weight is recomputed
//!   on every accepted change, never written by callers
//! - **Errors are values**: construction and setters return `Result`,
//!   giving callers a forced decision point instead of a panic
//!
//! # Example
//!
//! ```
//! use webcam_sim::Webcam;
//!
//! let mut camera = Webcam::new("1920x1080", 30)?;
//! assert_eq!(camera.frame_weight_mb(), 62.208);
//!
//! // Capture is gated by the power state.
//! assert!(camera.capture_photo().is_err());
//! camera.power_on();
//! let photo = camera.capture_photo()?;
//! assert_eq!(photo.resolution().to_string(), "1920x1080");
//!
//! // A five-minute call at these settings:
//! assert!((camera.estimate_data_usage(300) - 18662.4).abs() < 1e-9);
//! # Ok::<(), webcam_sim::CameraError>(())
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod camera;
pub mod config;

// Re-export commonly used types at crate root
pub use camera::{CameraError, CaptureResult, Resolution, Webcam};
pub use config::{ConfigError, DemoConfig};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
