//! Camera snapshot abstraction.
//!
//! The game only needs one base64 image payload per tick. `FrameSource`
//! hides where it comes from, so the session loop can run against a real
//! camera bridge, a directory of images, or a scripted test source.

mod directory;

pub use directory::DirectoryFrames;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::error::Result;

/// One snapshot, encoded as a `data:` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    payload: String,
}

impl Frame {
    /// Wrap an already encoded payload (data URL or bare base64).
    pub fn from_payload(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
        }
    }

    pub fn from_image_bytes(bytes: &[u8], mime: &str) -> Self {
        Self {
            payload: format!("data:{};base64,{}", mime, STANDARD.encode(bytes)),
        }
    }

    /// Payload trimmed of whitespace, as sent to the classifier.
    pub fn payload(&self) -> &str {
        self.payload.trim()
    }

    pub fn is_empty(&self) -> bool {
        self.payload().is_empty()
    }
}

/// Something that can take a snapshot on demand.
pub trait FrameSource: Send {
    fn capture(&mut self) -> Result<Frame>;
}

impl<F: FrameSource + ?Sized> FrameSource for Box<F> {
    fn capture(&mut self) -> Result<Frame> {
        (**self).capture()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_image_bytes_encodes_data_url() {
        let frame = Frame::from_image_bytes(b"abc", "image/png");
        assert_eq!(frame.payload(), "data:image/png;base64,YWJj");
    }

    #[test]
    fn test_payload_is_trimmed() {
        let frame = Frame::from_payload("  data:image/jpeg;base64,AAAA\n");
        assert_eq!(frame.payload(), "data:image/jpeg;base64,AAAA");
        assert!(Frame::from_payload(" \n ").is_empty());
    }
}
