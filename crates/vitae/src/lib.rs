/*!
Résumé documents with interchangeable templates.

vitae keeps one canonical résumé ([`ResumeDocument`]) and renders it with any of the
six variants of the template [`CATALOG`]. Every variant consumes exactly the same
content; they only differ in how it is arranged, in typography and in colors.

The crate is organized in three layers:

- the data model ([`model`] and [`section`]), with copy-on-write sections so that
  snapshots are cheap;
- the [`Editor`], a session that owns the document, applies field-level edits and
  tracks whether a template is being picked or the document is being edited;
- the renderer ([`render`]), which turns a document into a [`View`] tree, lays it out
  on an A4-wide canvas ([`scene`]) and serializes the result as SVG ([`svg`]).

Exporting a rendered view to PDF is done by the `vitae-export` crate.

# Example

```
use vitae::{Editor, ExperienceEntry, ExperienceField};

let mut editor = Editor::new();
editor.set_name("Jane Q. Public");
editor.add_entry::<ExperienceEntry>();
editor.update_entry::<ExperienceEntry>(1, ExperienceField::Role, "Staff Engineer");

editor.choose_template("modern");
let preview = editor.render_target().unwrap();
assert!(preview.svg().contains("Jane Q. Public"));
assert!(preview.svg().contains("Staff Engineer"));
```
*/

#![deny(missing_docs)]
#![forbid(unsafe_code)]

pub mod color;
pub mod editor;
pub mod field_path;
pub mod layout;
pub mod model;
pub mod render;
pub mod scene;
pub mod section;
pub mod svg;
pub mod template;
pub mod view;

pub use color::Rgb;
pub use editor::{Editor, ViewState};
pub use field_path::{FieldPath, FieldPathError, PersonalField};
pub use model::{
    DocumentError, EducationEntry, ExperienceEntry, PersonalInfo, ProjectEntry,
    ResumeDocument, SkillEntry,
};
pub use render::{render, render_with, RenderedView};
pub use section::{
    EducationField, ExperienceField, ProjectField, Section, SectionEntry, SkillField,
};
pub use template::{TemplateVariant, CATALOG};
pub use view::View;
