//! Telling the user how an export went.

use std::fmt;

/// A user-facing message about an export.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Notice {
    /// There was nothing to export, because no template was chosen.
    MissingRenderTarget,
    /// The export failed. The details are only logged.
    ExportFailed,
    /// The file was saved.
    Exported {
        /// The name of the saved file.
        file_name: String,
    },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::MissingRenderTarget => {
                f.write_str("Nothing to export yet. Choose a template first.")
            }
            Notice::ExportFailed => f.write_str("Failed to generate the PDF. Please try again."),
            Notice::Exported { file_name } => write!(f, "Saved {file_name}."),
        }
    }
}

/// Something that shows notices to the user.
pub trait Notifier: Send + Sync {
    /// Show a notice.
    fn notify(&self, notice: Notice);
}

/// A notifier that writes notices to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: Notice) {
        match notice {
            Notice::Exported { .. } => tracing::info!("{notice}"),
            Notice::MissingRenderTarget | Notice::ExportFailed => tracing::warn!("{notice}"),
        }
    }
}
