//! # screen-b64-core
//!
//! Core library for capturing the primary display as a Base64-encoded PNG.
//!
//! A run is four stages, each consuming the previous stage's output:
//!
//! 1. [`display`] - read the primary display into a [`RasterBuffer`]
//! 2. [`encode`] - encode the raster as PNG ([`EncodedImage`])
//! 3. [`transcode`] - Base64-encode the PNG bytes ([`Base64Text`])
//! 4. [`output`] - write the text and a newline, then flush
//!
//! [`Pipeline`] wires the stages together.
//!
//! ## Modules
//!
//! - [`config`] - PNG encoder settings
//! - [`error`] - Error types and Result alias
//! - [`raster`] - Frame data model
//!
//! ## Example
//!
//! ```no_run
//! use screen_b64_core::{Pipeline, XcapDisplay};
//!
//! let stdout = std::io::stdout();
//! let summary = Pipeline::new(XcapDisplay::new())
//!     .run(stdout.lock())
//!     .expect("capture failed");
//! eprintln!("{}x{}", summary.width, summary.height);
//! ```

pub mod config;
pub mod display;
pub mod encode;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod raster;
pub mod transcode;

// Error types
pub use error::{Error, Result, Stage};

// Configuration
pub use config::{Compression, Filter, PngSettings};

// Stages
pub use display::{DisplaySource, XcapDisplay};
pub use encode::{encode_png, EncodedImage};
pub use output::write_line;
pub use raster::{PixelLayout, RasterBuffer};
pub use transcode::{encode_bytes, to_base64, Base64Text};

// Pipeline
pub use pipeline::{FrameSummary, Pipeline};
