//! The export pipeline.
//!
//! An [`Exporter`] takes the current render target, rasterizes it, wraps the bitmap
//! into a PDF and hands the file to a [`Sink`]. The CPU-bound part runs on a
//! blocking task. Every outcome is reported to a [`Notifier`]; failures are logged
//! with their cause, while the user only gets a generic notice.

use std::sync::Arc;

use vitae::{Editor, RenderedView};

use crate::error::{ExportError, ExportResult};
use crate::file_name::export_file_name;
use crate::notice::{LogNotifier, Notice, Notifier};
use crate::pdf::encode_pdf;
use crate::raster::{Rasterizer, ResvgRasterizer};
use crate::settings::ExportSettings;
use crate::sink::Sink;

/// Exports rendered views as PDF files.
#[derive(Clone)]
pub struct Exporter {
    settings: ExportSettings,
    rasterizer: Arc<dyn Rasterizer>,
    sink: Arc<dyn Sink>,
    notifier: Arc<dyn Notifier>,
}

impl Exporter {
    /// Create an exporter that saves into `sink`, with the default settings,
    /// the resvg rasterizer and notices written to the log.
    pub fn new(sink: impl Sink + 'static) -> Self {
        Self {
            settings: ExportSettings::default(),
            rasterizer: Arc::new(ResvgRasterizer::default()),
            sink: Arc::new(sink),
            notifier: Arc::new(LogNotifier),
        }
    }

    /// Use different settings.
    pub fn with_settings(mut self, settings: ExportSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Use a different rasterizer.
    pub fn with_rasterizer(mut self, rasterizer: impl Rasterizer + 'static) -> Self {
        self.rasterizer = Arc::new(rasterizer);
        self
    }

    /// Send notices somewhere else.
    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Arc::new(notifier);
        self
    }

    /// The settings in use.
    pub fn settings(&self) -> &ExportSettings {
        &self.settings
    }

    /// Export the render target of an editing session.
    pub async fn export_editor(&self, editor: &Editor) -> ExportResult<String> {
        let target = editor.render_target();
        self.export(target.as_ref(), &editor.document().personal().name).await
    }

    /// Export a render target of a résumé owned by `owner`.
    ///
    /// Returns the name of the saved file. Without a render target, nothing is
    /// rasterized, encoded or saved.
    pub async fn export(&self, target: Option<&RenderedView>, owner: &str) -> ExportResult<String> {
        let Some(view) = target else {
            self.notifier.notify(Notice::MissingRenderTarget);
            return Err(ExportError::MissingRenderTarget);
        };

        let file_name = export_file_name(owner);
        tracing::debug!(file_name = %file_name, template = view.template().id, "exporting");

        let view = view.clone();
        let rasterizer = self.rasterizer.clone();
        let raster_options = self.settings.raster_options();
        let encode_options = self.settings.encode_options(owner);

        let encoded = tokio::task::spawn_blocking(move || {
            let bitmap = rasterizer.rasterize(&view, &raster_options)?;
            encode_pdf(&bitmap, &encode_options)
        })
        .await
        .unwrap_or_else(|err| Err(ExportError::Rasterization(err.to_string())));

        let result = match encoded {
            Ok(pdf) => self
                .sink
                .save(&file_name, pdf)
                .await
                .map_err(ExportError::from),
            Err(err) => Err(err),
        };

        match result {
            Ok(()) => {
                tracing::info!(file_name = %file_name, "exported résumé");
                self.notifier.notify(Notice::Exported {
                    file_name: file_name.clone(),
                });
                Ok(file_name)
            }
            Err(err) => {
                tracing::error!(%err, file_name = %file_name, "export failed");
                self.notifier.notify(Notice::ExportFailed);
                Err(err)
            }
        }
    }
}

impl std::fmt::Debug for Exporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Exporter")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}
