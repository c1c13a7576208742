/*!
Export rendered résumés as image-based PDF files.

The pipeline has three steps:

1. a [`Rasterizer`] turns a [`RenderedView`](vitae::RenderedView) into an opaque
   [`Bitmap`], by default at twice the view resolution on a white background;
2. [`encode_pdf`] embeds the bitmap as a full-page image into a PDF whose pages are
   210 mm wide and as tall as the aspect ratio of the bitmap requires;
3. a [`Sink`] saves the file as `<Name>_Resume.pdf`.

[`Exporter`] runs all three and reports the outcome through a [`Notifier`].

```no_run
use vitae::Editor;
use vitae_export::{DirectorySink, Exporter};

# async fn run() -> vitae_export::ExportResult<()> {
let mut editor = Editor::new();
editor.choose_template("classic");

let exporter = Exporter::new(DirectorySink::new("out"));
let file_name = exporter.export_editor(&editor).await?;
assert_eq!(file_name, "John_Doe_Resume.pdf");
# Ok(())
# }
```
*/

#![deny(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod file_name;
mod notice;
mod page;
mod pdf;
mod pipeline;
mod raster;
mod settings;
mod sink;

pub use error::{ExportError, ExportResult};
pub use file_name::export_file_name;
pub use notice::{LogNotifier, Notice, Notifier};
pub use page::{Orientation, PageGeometry, A4_ASPECT};
pub use pdf::encode_pdf;
pub use pipeline::Exporter;
pub use raster::{Bitmap, Rasterizer, ResvgRasterizer};
pub use settings::{EncodeOptions, ExportSettings, Pagination, RasterOptions};
pub use sink::{DirectorySink, Sink};
