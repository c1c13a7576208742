//! Writing bitmaps as PDF files.
//!
//! Every page holds exactly one image XObject that covers the whole page. Image data
//! is stored losslessly as 8-bit RGB samples and deflated; content streams are
//! deflated as well.

use std::borrow::Cow;
use std::hash::Hash;

use base64::Engine;
use pdf_writer::{Content, Filter, Finish, Name, Pdf, Rect, Ref, TextStr};
use siphasher::sip128::{Hasher128, SipHasher13};

use crate::error::{ExportError, ExportResult};
use crate::page::{a4_strip_height, PageGeometry};
use crate::raster::Bitmap;
use crate::settings::{EncodeOptions, Pagination};

const IMAGE_NAME: Name<'static> = Name(b"Im0");
const MAX_COMPRESSION_LEVEL: u8 = 10;

/// Encode a bitmap as a PDF file.
pub fn encode_pdf(bitmap: &Bitmap, options: &EncodeOptions) -> ExportResult<Vec<u8>> {
    if !(options.page_width_mm.is_finite() && options.page_width_mm > 0.0) {
        return Err(ExportError::Encoding(format!(
            "invalid page width {} mm",
            options.page_width_mm
        )));
    }

    let level = options.compression_level.min(MAX_COMPRESSION_LEVEL);
    let pages = paginate(bitmap, options)?;

    let mut alloc = Ref::new(1);
    let catalog_id = alloc.bump();
    let page_tree_id = alloc.bump();
    let page_ids: Vec<(Ref, Ref, Ref)> = pages
        .iter()
        .map(|_| (alloc.bump(), alloc.bump(), alloc.bump()))
        .collect();

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(page_tree_id);
    pdf.pages(page_tree_id)
        .kids(page_ids.iter().map(|(page_id, _, _)| *page_id))
        .count(pages.len() as i32);

    for (image, &(page_id, image_id, content_id)) in pages.iter().zip(&page_ids) {
        let geometry = PageGeometry::for_bitmap(image, options.page_width_mm);
        let (width, height) = (geometry.width_pt(), geometry.height_pt());

        let mut page = pdf.page(page_id);
        page.media_box(Rect::new(0.0, 0.0, width, height));
        page.parent(page_tree_id);
        page.contents(content_id);
        page.resources().x_objects().pair(IMAGE_NAME, image_id);
        page.finish();

        let samples = deflate(image.data(), level);
        let mut image_x_object = pdf.image_xobject(image_id, &samples);
        image_x_object.filter(Filter::FlateDecode);
        image_x_object.width(image.width() as i32);
        image_x_object.height(image.height() as i32);
        image_x_object.color_space().device_rgb();
        image_x_object.bits_per_component(8);
        image_x_object.finish();

        let mut content = Content::new();
        content.save_state();
        content.transform([width, 0.0, 0.0, height, 0.0, 0.0]);
        content.x_object(IMAGE_NAME);
        content.restore_state();
        let content = deflate(&content.finish(), level);
        pdf.stream(content_id, &content).filter(Filter::FlateDecode);

        tracing::trace!(
            width = image.width(),
            height = image.height(),
            orientation = ?geometry.orientation,
            "wrote page"
        );
    }

    if let Some(title) = &options.title {
        pdf.document_info(alloc.bump())
            .title(TextStr(title))
            .creator(TextStr("vitae"));
    }

    let instance_id = hash_base64(pdf.as_bytes());
    let document_id = match &options.title {
        Some(title) => hash_base64(&("vitae", title)),
        None => instance_id.clone(),
    };
    pdf.set_file_id((
        document_id.as_bytes().to_vec(),
        instance_id.as_bytes().to_vec(),
    ));

    Ok(pdf.finish())
}

fn paginate<'a>(
    bitmap: &'a Bitmap,
    options: &EncodeOptions,
) -> ExportResult<Vec<Cow<'a, Bitmap>>> {
    match options.pagination {
        Pagination::SinglePage => Ok(vec![Cow::Borrowed(bitmap)]),
        Pagination::A4Pages => {
            let strip_height = a4_strip_height(bitmap);
            let count = bitmap.height().div_ceil(strip_height);

            (0..count)
                .map(|index| {
                    bitmap
                        .strip(index * strip_height, strip_height, options.background)
                        .map(Cow::Owned)
                        .ok_or_else(|| ExportError::Encoding("empty page".to_string()))
                })
                .collect()
        }
    }
}

fn deflate(data: &[u8], level: u8) -> Vec<u8> {
    miniz_oxide::deflate::compress_to_vec_zlib(data, level)
}

/// Create a base64-encoded 128-bit SipHash of the value.
fn hash_base64<T: Hash + ?Sized>(value: &T) -> String {
    let mut state = SipHasher13::new();
    value.hash(&mut state);
    base64::engine::general_purpose::STANDARD.encode(state.finish128().as_u128().to_be_bytes())
}
