//! Base64 transport encoding.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::encode::EncodedImage;

/// Standard (RFC 4648) padded Base64 text, without line breaks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Base64Text(String);

impl Base64Text {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Decode back to the original bytes.
    ///
    /// Text produced by [`to_base64`] always decodes.
    pub fn decode(&self) -> Result<Vec<u8>, base64::DecodeError> {
        STANDARD.decode(&self.0)
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Base64Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Encode raw bytes with the standard alphabet and `=` padding
pub fn encode_bytes(bytes: &[u8]) -> Base64Text {
    Base64Text(STANDARD.encode(bytes))
}

/// Encode PNG bytes for text transport
pub fn to_base64(image: &EncodedImage) -> Base64Text {
    encode_bytes(image.as_bytes())
}
