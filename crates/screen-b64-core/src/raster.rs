//! In-memory frame data produced by the display reader.

use crate::error::{Error, Result};

/// Sample layout of a [`RasterBuffer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelLayout {
    /// 8-bit red, green, blue
    Rgb8,
    /// 8-bit red, green, blue, alpha
    Rgba8,
}

impl PixelLayout {
    /// Bytes per pixel
    pub fn channels(&self) -> usize {
        match self {
            Self::Rgb8 => 3,
            Self::Rgba8 => 4,
        }
    }

    /// Whether the layout carries an alpha channel
    pub fn has_alpha(&self) -> bool {
        matches!(self, Self::Rgba8)
    }
}

/// One captured frame, row-major, top-left origin.
///
/// Constructed only through [`RasterBuffer::new`], which guarantees the
/// sample count matches `width * height * channels`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterBuffer {
    width: u32,
    height: u32,
    layout: PixelLayout,
    samples: Vec<u8>,
}

impl RasterBuffer {
    /// Wrap raw samples, rejecting empty or inconsistently sized frames.
    pub fn new(width: u32, height: u32, layout: PixelLayout, samples: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::capture(format!(
                "display reported an empty frame ({}x{})",
                width, height
            )));
        }

        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|px| px.checked_mul(layout.channels()))
            .ok_or_else(|| Error::capture(format!("frame too large ({}x{})", width, height)))?;

        if samples.len() != expected {
            return Err(Error::capture(format!(
                "frame buffer size mismatch: expected {} bytes for {}x{} {:?}, got {}",
                expected,
                width,
                height,
                layout,
                samples.len()
            )));
        }

        Ok(Self {
            width,
            height,
            layout,
            samples,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn layout(&self) -> PixelLayout {
        self.layout
    }

    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// Consume the buffer, returning its raw samples
    pub fn into_samples(self) -> Vec<u8> {
        self.samples
    }
}
