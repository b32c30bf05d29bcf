//! Display reader.
//!
//! The pipeline reads pixels through the [`DisplaySource`] trait. The real
//! implementation, [`XcapDisplay`], captures the primary monitor; tests plug
//! in synthetic sources.
//!
//! ## Platform Support
//!
//! - **Linux (X11/Wayland), macOS, Windows**: via the `xcap` crate, behind the
//!   default `capture` feature
//! - **Built without `capture`**: every capture fails with
//!   `CaptureUnavailable`

mod capture;

pub use capture::XcapDisplay;

use crate::error::Result;
use crate::raster::RasterBuffer;

/// Something that can produce one frame of the primary display
pub trait DisplaySource {
    /// Copy the current contents of the primary display.
    ///
    /// Fails with [`Error::CaptureUnavailable`](crate::Error::CaptureUnavailable)
    /// when no display or graphics surface is accessible.
    fn capture_primary(&self) -> Result<RasterBuffer>;

    /// Short label used in log output
    fn name(&self) -> &str {
        "display"
    }
}

impl<D: DisplaySource + ?Sized> DisplaySource for &D {
    fn capture_primary(&self) -> Result<RasterBuffer> {
        (**self).capture_primary()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
