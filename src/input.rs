//! Text input for the segmentation API
//!
//! Segmentation is a single synchronous pass over an in-memory string, so
//! input is either owned text or raw bytes that have yet to prove they are
//! UTF-8. Bytes are validated up front and rejected with
//! [`Error::InvalidEncoding`]; the driver never substitutes replacement
//! characters.

use crate::error::{Error, Result};

/// Text to segment, decoded or not yet decoded.
pub enum Input {
    /// Text, valid UTF-8 by construction
    Text(String),
    /// Raw bytes, validated before classification
    Bytes(Vec<u8>),
}

impl Input {
    /// Input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Input from undecoded bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Decode to text, reporting the byte offset of the first sequence
    /// that is not well-formed UTF-8.
    pub(crate) fn into_text(self) -> Result<String> {
        match self {
            Input::Text(text) => Ok(text),
            Input::Bytes(bytes) => String::from_utf8(bytes).map_err(|e| Error::InvalidEncoding {
                offset: e.utf8_error().valid_up_to(),
            }),
        }
    }
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Inputs can be whole documents; report size, not content.
        match self {
            Input::Text(text) => write!(f, "Input::Text({} bytes)", text.len()),
            Input::Bytes(bytes) => write!(f, "Input::Bytes({} bytes, undecoded)", bytes.len()),
        }
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Text(text)
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::Text(text.to_owned())
    }
}

impl From<Vec<u8>> for Input {
    fn from(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }
}
