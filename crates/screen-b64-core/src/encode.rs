//! PNG encoding of captured frames.

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::config::PngSettings;
use crate::error::Result;
use crate::raster::{PixelLayout, RasterBuffer};

/// PNG bytes for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    bytes: Vec<u8>,
    width: u32,
    height: u32,
}

impl EncodedImage {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

/// Encode a frame as PNG, consuming it.
///
/// RGBA frames keep their alpha channel; RGB frames are written without one.
pub fn encode_png(raster: RasterBuffer, settings: &PngSettings) -> Result<EncodedImage> {
    let (width, height) = (raster.width(), raster.height());
    let color = match raster.layout() {
        PixelLayout::Rgb8 => ExtendedColorType::Rgb8,
        PixelLayout::Rgba8 => ExtendedColorType::Rgba8,
    };

    // Screen content usually deflates to well under a quarter of its raw size
    let mut bytes = Vec::with_capacity(raster.samples().len() / 4);
    let encoder = PngEncoder::new_with_quality(
        &mut bytes,
        settings.compression.into(),
        settings.filter.into(),
    );
    encoder.write_image(raster.samples(), width, height, color)?;

    Ok(EncodedImage {
        bytes,
        width,
        height,
    })
}
