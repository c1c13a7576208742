//! Error handling.
//!
//! Exporting can fail before anything is drawn (there is no render target), while
//! rasterizing, while writing the PDF or while saving the file. All of these are
//! reported with an [`ExportError`].

use std::io;

use thiserror::Error;

/// A wrapper type for export results.
pub type ExportResult<T> = Result<T, ExportError>;

/// An error that occurred while exporting a view.
#[derive(Debug, Error)]
pub enum ExportError {
    /// There was no rendered view to export.
    #[error("there is no rendered view to export")]
    MissingRenderTarget,
    /// The view could not be rasterized.
    #[error("failed to rasterize the view: {0}")]
    Rasterization(String),
    /// The bitmap could not be written as a PDF.
    #[error("failed to encode the PDF: {0}")]
    Encoding(String),
    /// The finished file could not be saved.
    #[error("failed to save the PDF: {0}")]
    Save(#[from] io::Error),
}
