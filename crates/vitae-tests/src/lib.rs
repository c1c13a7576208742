//! Behavior tests spanning the vitae crates.

#[cfg(test)]
mod editor;
#[cfg(test)]
mod export;
#[cfg(test)]
mod render;

use std::io;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use vitae::RenderedView;
use vitae_export::{
    Bitmap, ExportError, ExportResult, Notice, Notifier, RasterOptions, Rasterizer, Sink,
};

/// A notifier that remembers every notice.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier(Arc<Mutex<Vec<Notice>>>);

impl RecordingNotifier {
    /// The notices received so far.
    pub fn notices(&self) -> Vec<Notice> {
        self.0.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.0.lock().unwrap().push(notice);
    }
}

/// A sink that keeps saved files in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink(Arc<Mutex<Vec<(String, Vec<u8>)>>>);

impl MemorySink {
    /// The files saved so far.
    pub fn files(&self) -> Vec<(String, Vec<u8>)> {
        self.0.lock().unwrap().clone()
    }
}

#[async_trait]
impl Sink for MemorySink {
    async fn save(&self, file_name: &str, data: Vec<u8>) -> io::Result<()> {
        self.0.lock().unwrap().push((file_name.to_string(), data));
        Ok(())
    }
}

/// A sink that refuses every file.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadOnlySink;

#[async_trait]
impl Sink for ReadOnlySink {
    async fn save(&self, _: &str, _: Vec<u8>) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"))
    }
}

/// A rasterizer that always fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrokenRasterizer;

impl Rasterizer for BrokenRasterizer {
    fn rasterize(&self, _: &RenderedView, _: &RasterOptions) -> ExportResult<Bitmap> {
        Err(ExportError::Rasterization("out of paint".to_string()))
    }
}

/// A rasterizer that draws a flat bitmap of a fixed size, ignoring the view.
#[derive(Debug, Clone, Copy)]
pub struct FlatRasterizer {
    /// The width of the bitmap.
    pub width: u32,
    /// The height of the bitmap.
    pub height: u32,
}

impl Rasterizer for FlatRasterizer {
    fn rasterize(&self, _: &RenderedView, options: &RasterOptions) -> ExportResult<Bitmap> {
        Bitmap::filled(self.width, self.height, options.background)
            .ok_or_else(|| ExportError::Rasterization("empty bitmap".to_string()))
    }
}
