//! The template renderer.
//!
//! [`render`] is the pure part: it maps a document and a template identifier to a
//! [`View`]. [`RenderedView`] adds the layout pass and the SVG serialization on top,
//! and is what gets shown as the live preview and handed to the export pipeline.

use std::sync::Arc;

use crate::layout::{self, Content};
use crate::model::ResumeDocument;
use crate::scene::Scene;
use crate::svg;
use crate::template::TemplateVariant;
use crate::view::{View, CANVAS_MIN_HEIGHT, CANVAS_WIDTH};

/// Render a document with the template named `template_id`.
///
/// Unknown identifiers fall back to the first template of the catalog.
pub fn render(doc: &ResumeDocument, template_id: &str) -> View {
    render_with(doc, TemplateVariant::resolve(template_id))
}

/// Render a document with a specific catalog variant.
pub fn render_with(doc: &ResumeDocument, variant: &'static TemplateVariant) -> View {
    let content = Content::select(doc);

    View {
        template: variant,
        width: CANVAS_WIDTH,
        min_height: CANVAS_MIN_HEIGHT,
        root: layout::compose(variant, &content),
    }
}

#[derive(Debug)]
struct Repr {
    view: View,
    scene: Scene,
    svg: String,
}

/// A view that has been laid out and serialized.
///
/// This type is cheap to clone and can be sent to other threads.
#[derive(Debug, Clone)]
pub struct RenderedView(Arc<Repr>);

impl RenderedView {
    /// Lay out and serialize a view.
    pub fn new(view: View) -> Self {
        let scene = Scene::layout(&view);
        let svg = svg::to_svg(&scene);

        tracing::debug!(
            template = view.template.id,
            width = scene.width,
            height = scene.height,
            items = scene.items.len(),
            "laid out view"
        );

        Self(Arc::new(Repr { view, scene, svg }))
    }

    /// Render a document and lay it out.
    pub fn from_document(doc: &ResumeDocument, template_id: &str) -> Self {
        Self::new(render(doc, template_id))
    }

    /// The template the view was rendered with.
    pub fn template(&self) -> &'static TemplateVariant {
        self.0.view.template
    }

    /// The view tree.
    pub fn view(&self) -> &View {
        &self.0.view
    }

    /// The positioned scene.
    pub fn scene(&self) -> &Scene {
        &self.0.scene
    }

    /// The SVG document.
    pub fn svg(&self) -> &str {
        &self.0.svg
    }

    /// The canvas width in pixels.
    pub fn width(&self) -> f32 {
        self.0.scene.width
    }

    /// The canvas height in pixels.
    pub fn height(&self) -> f32 {
        self.0.scene.height
    }
}
