use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::capture::{Frame, FrameSource};
use crate::error::{Error, Result};

/// Replays image files from a directory in name order, wrapping around.
///
/// Stands in for a webcam when running the game from a terminal.
#[derive(Debug, Clone)]
pub struct DirectoryFrames {
    files: Vec<PathBuf>,
    next: usize,
}

impl DirectoryFrames {
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let mut files: Vec<PathBuf> = fs::read_dir(dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_file() && mime_for(path).is_some())
            .collect();
        files.sort();

        if files.is_empty() {
            return Err(Error::Capture(format!(
                "no image files in {}",
                dir.display()
            )));
        }

        debug!("Loaded {} frame files from {}", files.len(), dir.display());
        Ok(Self { files, next: 0 })
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl FrameSource for DirectoryFrames {
    fn capture(&mut self) -> Result<Frame> {
        let path = &self.files[self.next];
        self.next = (self.next + 1) % self.files.len();
        Frame::from_file(path)
    }
}

impl Frame {
    /// Read and encode one image file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Frame> {
        let path = path.as_ref();
        let bytes = fs::read(path)
            .map_err(|e| Error::Capture(format!("{}: {}", path.display(), e)))?;
        if bytes.is_empty() {
            return Err(Error::Capture(format!("{} is empty", path.display())));
        }

        let mime = mime_for(path).unwrap_or("application/octet-stream");
        Ok(Frame::from_image_bytes(&bytes, mime))
    }
}

/// Image MIME type from the file extension
fn mime_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "webp" => Some("image/webp"),
        "gif" => Some("image/gif"),
        _ => None,
    }
}
