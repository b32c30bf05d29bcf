//! Capture → encode → transcode → write, in that order, exactly once.

use std::io::Write;
use std::time::Instant;

use tracing::{debug, debug_span, info};

use crate::config::PngSettings;
use crate::display::DisplaySource;
use crate::encode::encode_png;
use crate::error::Result;
use crate::output::write_line;
use crate::transcode::{to_base64, Base64Text};

/// What a successful run produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSummary {
    /// Frame width in pixels
    pub width: u32,
    /// Frame height in pixels
    pub height: u32,
    /// Size of the PNG in bytes
    pub png_len: usize,
    /// Length of the Base64 text, excluding the newline
    pub base64_len: usize,
}

/// Single-shot screen capture pipeline
pub struct Pipeline<D> {
    source: D,
    settings: PngSettings,
}

impl<D: DisplaySource> Pipeline<D> {
    /// Create a pipeline with default PNG settings
    pub fn new(source: D) -> Self {
        Self {
            source,
            settings: PngSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: PngSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn settings(&self) -> &PngSettings {
        &self.settings
    }

    /// Run the capture, encode and transcode stages.
    pub fn capture(&self) -> Result<(Base64Text, FrameSummary)> {
        let raster = {
            let _span = debug_span!("capture", source = self.source.name()).entered();
            let started = Instant::now();
            let raster = self.source.capture_primary()?;
            debug!(
                width = raster.width(),
                height = raster.height(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "frame captured"
            );
            raster
        };

        let png = {
            let _span = debug_span!("encode").entered();
            let started = Instant::now();
            let png = encode_png(raster, &self.settings)?;
            debug!(
                bytes = png.len(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "PNG encoded"
            );
            png
        };

        let text = {
            let _span = debug_span!("transcode").entered();
            to_base64(&png)
        };

        let summary = FrameSummary {
            width: png.width(),
            height: png.height(),
            png_len: png.len(),
            base64_len: text.len(),
        };
        Ok((text, summary))
    }

    /// Run every stage, writing the Base64 line to `out`.
    ///
    /// `out` is not touched unless capture and encoding both succeed.
    pub fn run<W: Write>(&self, out: W) -> Result<FrameSummary> {
        let (text, summary) = self.capture()?;

        {
            let _span = debug_span!("output").entered();
            write_line(out, &text)?;
        }

        info!(
            "Wrote {}x{} frame ({} PNG bytes, {} Base64 chars)",
            summary.width, summary.height, summary.png_len, summary.base64_len
        );
        Ok(summary)
    }
}
