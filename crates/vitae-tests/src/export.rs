use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use vitae::scene::Item;
use vitae::{Editor, RenderedView, ResumeDocument, Rgb};
use vitae_export::{
    export_file_name, Bitmap, DirectorySink, ExportError, ExportSettings, Exporter, Notice,
    Orientation, PageGeometry, Pagination, RasterOptions, Rasterizer, ResvgRasterizer,
};

use crate::{BrokenRasterizer, FlatRasterizer, MemorySink, ReadOnlySink, RecordingNotifier};

fn quick_settings() -> ExportSettings {
    ExportSettings {
        scale: 0.25,
        ..ExportSettings::default()
    }
}

fn editing(name: &str, template: &str) -> Editor {
    let mut editor = Editor::new();
    editor.set_name(name);
    editor.choose_template(template);
    editor
}

#[tokio::test]
async fn saves_under_the_owner_name() {
    let sink = MemorySink::default();
    let notifier = RecordingNotifier::default();
    let exporter = Exporter::new(sink.clone())
        .with_settings(quick_settings())
        .with_notifier(notifier.clone());

    let file_name = exporter
        .export_editor(&editing("Jane Q. Public", "modern"))
        .await
        .unwrap();

    assert_eq!(file_name, "Jane_Q._Public_Resume.pdf");
    let files = sink.files();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].0, "Jane_Q._Public_Resume.pdf");
    assert!(files[0].1.starts_with(b"%PDF-"));
    assert_eq!(
        notifier.notices(),
        vec![Notice::Exported {
            file_name: "Jane_Q._Public_Resume.pdf".to_string()
        }]
    );
}

#[tokio::test]
async fn writes_into_a_directory() {
    let dir = tempfile::tempdir().unwrap();
    let exporter = Exporter::new(DirectorySink::new(dir.path())).with_settings(quick_settings());

    exporter
        .export_editor(&editing("Ada Lovelace", "classic"))
        .await
        .unwrap();

    let pdf = std::fs::read(dir.path().join("Ada_Lovelace_Resume.pdf")).unwrap();
    assert!(pdf.starts_with(b"%PDF-"));
}

#[tokio::test]
async fn names_with_slashes_still_save_into_the_directory() {
    let dir = tempfile::tempdir().unwrap();
    let notifier = RecordingNotifier::default();
    let exporter = Exporter::new(DirectorySink::new(dir.path()))
        .with_settings(quick_settings())
        .with_notifier(notifier.clone());

    let file_name = exporter
        .export_editor(&editing("Anne-Marie O/Neil", "modern"))
        .await
        .unwrap();

    assert_eq!(file_name, "Anne-Marie_O_Neil_Resume.pdf");
    assert!(dir.path().join(&file_name).is_file());
    assert_eq!(notifier.notices(), vec![Notice::Exported { file_name }]);
}

#[tokio::test]
async fn missing_render_target_saves_nothing() {
    let sink = MemorySink::default();
    let notifier = RecordingNotifier::default();
    let exporter = Exporter::new(sink.clone())
        .with_rasterizer(BrokenRasterizer)
        .with_notifier(notifier.clone());

    // Still picking a template.
    let editor = Editor::new();
    let result = exporter.export_editor(&editor).await;

    assert!(matches!(result, Err(ExportError::MissingRenderTarget)));
    assert_eq!(notifier.notices(), vec![Notice::MissingRenderTarget]);
    assert!(sink.files().is_empty());
}

#[tokio::test]
async fn rasterization_failure_is_reported_generically() {
    let sink = MemorySink::default();
    let notifier = RecordingNotifier::default();
    let exporter = Exporter::new(sink.clone())
        .with_rasterizer(BrokenRasterizer)
        .with_notifier(notifier.clone());

    let result = exporter.export_editor(&editing("Jane", "minimal")).await;

    assert!(matches!(result, Err(ExportError::Rasterization(_))));
    assert_eq!(notifier.notices(), vec![Notice::ExportFailed]);
    assert!(sink.files().is_empty());
}

#[tokio::test]
async fn encoding_failure_is_reported_generically() {
    let sink = MemorySink::default();
    let notifier = RecordingNotifier::default();
    let exporter = Exporter::new(sink.clone())
        .with_rasterizer(FlatRasterizer {
            width: 10,
            height: 10,
        })
        .with_settings(ExportSettings {
            page_width_mm: -1.0,
            ..ExportSettings::default()
        })
        .with_notifier(notifier.clone());

    let result = exporter.export_editor(&editing("Jane", "minimal")).await;

    assert!(matches!(result, Err(ExportError::Encoding(_))));
    assert_eq!(notifier.notices(), vec![Notice::ExportFailed]);
    assert!(sink.files().is_empty());
}

#[tokio::test]
async fn save_failure_is_reported_generically() {
    let notifier = RecordingNotifier::default();
    let exporter = Exporter::new(ReadOnlySink)
        .with_rasterizer(FlatRasterizer {
            width: 10,
            height: 10,
        })
        .with_notifier(notifier.clone());

    let result = exporter.export_editor(&editing("Jane", "minimal")).await;

    assert!(matches!(result, Err(ExportError::Save(_))));
    assert_eq!(notifier.notices(), vec![Notice::ExportFailed]);
}

#[tokio::test]
async fn concurrent_exports_both_save() {
    let sink = MemorySink::default();
    let exporter = Exporter::new(sink.clone()).with_rasterizer(FlatRasterizer {
        width: 20,
        height: 30,
    });
    let editor = editing("Jane", "modern");

    let (a, b) = tokio::join!(exporter.export_editor(&editor), exporter.export_editor(&editor));
    assert_eq!(a.unwrap(), b.unwrap());
    assert_eq!(sink.files().len(), 2);
}

#[tokio::test]
async fn paginated_exports_have_a4_pages() {
    let sink = MemorySink::default();
    let exporter = Exporter::new(sink.clone())
        .with_rasterizer(FlatRasterizer {
            width: 100,
            height: 300,
        })
        .with_settings(ExportSettings {
            pagination: Pagination::A4Pages,
            ..ExportSettings::default()
        });

    exporter
        .export_editor(&editing("Jane", "modern"))
        .await
        .unwrap();

    let pdf = &sink.files()[0].1;
    let images = pdf
        .windows(b"/Subtype /Image".len())
        .filter(|window| *window == b"/Subtype /Image")
        .count();
    // 100 pixels wide makes 141 pixel strips, so 300 pixels need three pages.
    assert_eq!(images, 3);
}

#[test]
fn orientation_follows_the_bitmap() {
    let tall = Bitmap::filled(100, 141, Rgb::white()).unwrap();
    let wide = Bitmap::filled(141, 100, Rgb::white()).unwrap();

    assert_eq!(PageGeometry::for_bitmap(&tall, 210.0).orientation, Orientation::Portrait);
    assert_eq!(PageGeometry::for_bitmap(&wide, 210.0).orientation, Orientation::Landscape);
}

#[test]
fn file_names_collapse_whitespace() {
    assert_eq!(export_file_name("Jane Q. Public"), "Jane_Q._Public_Resume.pdf");
    assert_eq!(export_file_name("Jane   Public"), "Jane_Public_Resume.pdf");
}

#[test]
fn rasterizing_at_scale_two_doubles_the_size() {
    let view = RenderedView::from_document(&ResumeDocument::sample(), "minimal");
    let bitmap = ResvgRasterizer::default()
        .rasterize(&view, &RasterOptions::default())
        .unwrap();

    assert_eq!(bitmap.width() as f32, view.width() * 2.0);
    assert_eq!(bitmap.height() as f32, view.height() * 2.0);

    let image =
        image::RgbImage::from_raw(bitmap.width(), bitmap.height(), bitmap.data().to_vec())
            .unwrap();
    let white = image::Rgb([255, 255, 255]);
    assert_eq!(*image.get_pixel(0, 0), white);
    assert_eq!(*image.get_pixel(image.width() - 1, image.height() - 1), white);

    let page = PageGeometry::for_bitmap(&bitmap, 210.0);
    assert_eq!(page.orientation, Orientation::Portrait);
    float_cmp::assert_approx_eq!(f32, page.height_mm, 297.0, epsilon = 0.5);
}

#[test]
fn background_is_opaque_regardless_of_theme() {
    let view = RenderedView::from_document(&ResumeDocument::sample(), "creative");
    let options = RasterOptions {
        scale: 0.5,
        background: Rgb::from_hex(0x00ff00),
        allow_cross_origin: false,
    };
    let bitmap = ResvgRasterizer::default().rasterize(&view, &options).unwrap();

    // The right edge of the creative template is not covered by any block.
    assert_eq!(
        bitmap.pixel(bitmap.width() - 1, bitmap.height() - 1),
        Some(Rgb::from_hex(0x00ff00))
    );
}

fn red_png() -> Vec<u8> {
    let image = image::RgbImage::from_pixel(8, 8, image::Rgb([255, 0, 0]));
    let mut png = std::io::Cursor::new(vec![]);
    image.write_to(&mut png, image::ImageFormat::Png).unwrap();
    png.into_inner()
}

/// Rasterize the creative template with a portrait and sample the middle of it.
fn portrait_pixel(href: &str, allow_cross_origin: bool) -> Rgb {
    let mut editor = Editor::new();
    editor.set_photo(href);
    editor.choose_template("creative");
    let view = editor.render_target().unwrap();

    let frame = view
        .scene()
        .items
        .iter()
        .find_map(|item| match item {
            Item::Picture { frame, .. } => Some(*frame),
            _ => None,
        })
        .unwrap();

    let options = RasterOptions {
        scale: 0.5,
        allow_cross_origin,
        ..RasterOptions::default()
    };
    let bitmap = ResvgRasterizer::default().rasterize(&view, &options).unwrap();
    let x = (frame.x + frame.width / 2.0) * options.scale;
    let y = (frame.y + frame.height / 2.0) * options.scale;
    bitmap.pixel(x as u32, y as u32).unwrap()
}

#[test]
fn inline_portraits_are_always_drawn() {
    let href = format!("data:image/png;base64,{}", STANDARD.encode(red_png()));
    assert_eq!(portrait_pixel(&href, true), Rgb::new(255, 0, 0));
    assert_eq!(portrait_pixel(&href, false), Rgb::new(255, 0, 0));
}

#[test]
fn external_portraits_require_cross_origin_assets() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("portrait.png");
    std::fs::write(&path, red_png()).unwrap();
    let href = path.to_str().unwrap();

    assert_eq!(portrait_pixel(href, true), Rgb::new(255, 0, 0));
    // Without the portrait the sidebar background shows through.
    assert_eq!(portrait_pixel(href, false), Rgb::from_hex(0xdb2777));
}
