//! Primary display capture using the `xcap` crate.

use crate::error::Result;
use crate::raster::RasterBuffer;

use super::DisplaySource;

/// Captures the primary monitor of the local machine
#[derive(Debug, Clone, Copy, Default)]
pub struct XcapDisplay;

impl XcapDisplay {
    pub fn new() -> Self {
        Self
    }
}

impl DisplaySource for XcapDisplay {
    fn capture_primary(&self) -> Result<RasterBuffer> {
        capture_primary_monitor()
    }

    fn name(&self) -> &str {
        "primary display"
    }
}

/// Pick the monitor flagged primary, or the first one when none is flagged.
///
/// Returns the chosen item and whether it was actually flagged primary.
#[cfg_attr(not(feature = "capture"), allow(dead_code))]
fn pick_primary<T>(candidates: Vec<T>, is_primary: impl Fn(&T) -> bool) -> Option<(T, bool)> {
    let index = candidates.iter().position(&is_primary);
    let flagged = index.is_some();
    candidates
        .into_iter()
        .nth(index.unwrap_or(0))
        .map(|item| (item, flagged))
}

// ============================================================================
// xcap Implementation
// ============================================================================

#[cfg(feature = "capture")]
mod xcap_impl {
    use super::*;
    use crate::error::Error;
    use crate::raster::PixelLayout;
    use xcap::Monitor;

    pub fn capture_primary_monitor() -> Result<RasterBuffer> {
        let monitors = Monitor::all()
            .map_err(|e| Error::capture(format!("failed to enumerate displays: {}", e)))?;
        tracing::debug!("Found {} display(s)", monitors.len());

        let (monitor, flagged) = pick_primary(monitors, |m| m.is_primary().unwrap_or(false))
            .ok_or_else(|| Error::capture("no displays found"))?;

        let name = monitor.name().unwrap_or_else(|_| "unnamed".to_string());
        if !flagged {
            tracing::warn!(
                "No display is flagged primary, using first display '{}'",
                name
            );
        }

        let image = monitor
            .capture_image()
            .map_err(|e| Error::capture(format!("failed to read display '{}': {}", name, e)))?;
        let (width, height) = image.dimensions();

        if let (Ok(w), Ok(h)) = (monitor.width(), monitor.height()) {
            if (w, h) != (width, height) {
                tracing::debug!(
                    "Display '{}' reports {}x{} but captured frame is {}x{}",
                    name,
                    w,
                    h,
                    width,
                    height
                );
            }
        }

        tracing::debug!("Captured display '{}' at {}x{}", name, width, height);
        RasterBuffer::new(width, height, PixelLayout::Rgba8, image.into_raw())
    }
}

// ============================================================================
// Stub (built without the `capture` feature)
// ============================================================================

#[cfg(not(feature = "capture"))]
mod stub_impl {
    use super::*;
    use crate::error::Error;

    pub fn capture_primary_monitor() -> Result<RasterBuffer> {
        Err(Error::capture("built without screen capture support"))
    }
}

#[cfg(feature = "capture")]
use xcap_impl::capture_primary_monitor;

#[cfg(not(feature = "capture"))]
use stub_impl::capture_primary_monitor;
