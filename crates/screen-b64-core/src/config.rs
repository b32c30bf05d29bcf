//! Encoder configuration
//!
//! There is no configuration file or command-line surface. These are the
//! built-in defaults; library callers may override them through
//! [`Pipeline::with_settings`](crate::Pipeline::with_settings).

use image::codecs::png::{CompressionType, FilterType};

/// PNG compression effort
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Compression {
    Fast,
    #[default]
    Default,
    Best,
}

impl From<Compression> for CompressionType {
    fn from(value: Compression) -> Self {
        match value {
            Compression::Fast => CompressionType::Fast,
            Compression::Default => CompressionType::Default,
            Compression::Best => CompressionType::Best,
        }
    }
}

/// PNG scanline filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Filter {
    NoFilter,
    Sub,
    Up,
    Avg,
    Paeth,
    /// Pick the best filter per scanline
    #[default]
    Adaptive,
}

impl From<Filter> for FilterType {
    fn from(value: Filter) -> Self {
        match value {
            Filter::NoFilter => FilterType::NoFilter,
            Filter::Sub => FilterType::Sub,
            Filter::Up => FilterType::Up,
            Filter::Avg => FilterType::Avg,
            Filter::Paeth => FilterType::Paeth,
            Filter::Adaptive => FilterType::Adaptive,
        }
    }
}

/// Settings handed to the PNG encoder
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PngSettings {
    pub compression: Compression,
    pub filter: Filter,
}

impl PngSettings {
    /// Fastest settings, useful when output size does not matter
    pub fn fast() -> Self {
        Self {
            compression: Compression::Fast,
            filter: Filter::NoFilter,
        }
    }
}
