//! Resolution value type and its `"WxH"` string form.

use std::fmt;
use std::str::FromStr;

use super::webcam::CameraError;

/// A frame resolution in pixels.
///
/// The public API accepts and renders resolutions as `"<width>x<height>"`
/// strings (e.g. `"1920x1080"`). Only strings matching `\d+x\d+` parse;
/// anything else is rejected with [`CameraError::InvalidFormat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    width: u32,
    height: u32,
}

impl Resolution {
    /// Returns the frame width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the frame height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the total number of pixels (width * height).
    #[inline]
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

impl FromStr for Resolution {
    type Err = CameraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            CameraError::InvalidFormat(format!(
                "resolution {s:?} does not match \"<width>x<height>\""
            ))
        };

        let (w, h) = s.split_once('x').ok_or_else(invalid)?;
        if w.is_empty()
            || h.is_empty()
            || !w.bytes().all(|b| b.is_ascii_digit())
            || !h.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        // Digit runs that overflow u32 are rejected the same way as
        // malformed strings.
        let width = w.parse().map_err(|_| invalid())?;
        let height = h.parse().map_err(|_| invalid())?;
        Ok(Self { width, height })
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
