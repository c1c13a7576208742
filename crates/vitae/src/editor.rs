//! The form editor session.
//!
//! An [`Editor`] exclusively owns the [`ResumeDocument`] being edited, together with
//! the [`ViewState`] that says whether a template is being picked or the document
//! is being edited with one.
//!
//! Mutations never fail. Operations that would break an invariant of the document
//! (removing the last entry of a section) or that address an entry that does not
//! exist are rejected and return `false`. All writes are copy-on-write at section
//! level, so a [`snapshot`](Editor::snapshot) taken earlier keeps observing the
//! document as it was.

use crate::field_path::{FieldPath, PersonalField};
use crate::model::{
    EducationEntry, ExperienceEntry, PersonalInfo, ProjectEntry, ResumeDocument, SkillEntry,
};
use crate::render::{render_with, RenderedView};
use crate::section::{Section, SectionEntry};
use crate::template::TemplateVariant;

/// What the session is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    /// The template selection grid.
    #[default]
    SelectingTemplate,
    /// The form next to the live preview of a template.
    Editing {
        /// The template the preview is rendered with.
        template: &'static TemplateVariant,
    },
}

/// An editing session over one résumé.
#[derive(Debug, Clone, Default)]
pub struct Editor {
    document: ResumeDocument,
    state: ViewState,
}

impl Editor {
    /// Start a session with the placeholder sample content.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session over an existing document.
    pub fn with_document(document: ResumeDocument) -> Self {
        Self {
            document,
            state: ViewState::SelectingTemplate,
        }
    }

    /// The current document.
    pub fn document(&self) -> &ResumeDocument {
        &self.document
    }

    /// A snapshot of the current document.
    ///
    /// This is cheap: the snapshot shares every section with the session until the
    /// session writes to it.
    pub fn snapshot(&self) -> ResumeDocument {
        self.document.clone()
    }

    /// End the session and return the document.
    pub fn into_document(self) -> ResumeDocument {
        self.document
    }

    /// The current view state.
    pub fn state(&self) -> ViewState {
        self.state
    }

    /// The template being edited with, if any.
    pub fn template(&self) -> Option<&'static TemplateVariant> {
        match self.state {
            ViewState::SelectingTemplate => None,
            ViewState::Editing { template } => Some(template),
        }
    }

    /// Pick a template and switch to edit mode.
    ///
    /// Unknown identifiers fall back to the first template of the catalog.
    pub fn choose_template(&mut self, id: &str) -> &'static TemplateVariant {
        let template = TemplateVariant::resolve(id);
        self.state = ViewState::Editing { template };
        tracing::debug!(template = template.id, "editing");
        template
    }

    /// Leave edit mode and go back to the template selection.
    pub fn back_to_templates(&mut self) {
        self.state = ViewState::SelectingTemplate;
    }

    /// Render the live preview.
    ///
    /// Returns `None` while a template is being picked, since there is nothing to
    /// export then.
    pub fn render_target(&self) -> Option<RenderedView> {
        self.template()
            .map(|template| RenderedView::new(render_with(&self.document, template)))
    }

    /// Set the owner's name.
    pub fn set_name(&mut self, value: impl Into<String>) -> bool {
        self.set_personal(PersonalField::Name, value.into())
    }

    /// Set the e-mail address.
    pub fn set_email(&mut self, value: impl Into<String>) -> bool {
        self.set_personal(PersonalField::Email, value.into())
    }

    /// Set the phone number.
    pub fn set_phone(&mut self, value: impl Into<String>) -> bool {
        self.set_personal(PersonalField::Phone, value.into())
    }

    /// Set the location.
    pub fn set_location(&mut self, value: impl Into<String>) -> bool {
        self.set_personal(PersonalField::Location, value.into())
    }

    /// Set the summary paragraph.
    pub fn set_summary(&mut self, value: impl Into<String>) -> bool {
        self.set_personal(PersonalField::Summary, value.into())
    }

    /// Set the portrait. An empty value removes it.
    pub fn set_photo(&mut self, value: impl Into<String>) -> bool {
        self.set_personal(PersonalField::Photo, value.into())
    }

    fn set_personal(&mut self, field: PersonalField, value: String) -> bool {
        let personal: &mut PersonalInfo = self.document.personal_mut();
        match field {
            PersonalField::Name => personal.name = value,
            PersonalField::Email => personal.email = value,
            PersonalField::Phone => personal.phone = value,
            PersonalField::Location => personal.location = value,
            PersonalField::Summary => personal.summary = value,
            PersonalField::Photo => personal.photo = Some(value).filter(|v| !v.is_empty()),
        }

        true
    }

    /// Append a blank entry to the section holding `E`.
    pub fn add_entry<E: SectionEntry>(&mut self) -> bool {
        self.document.entries_mut::<E>().push(E::default());
        true
    }

    /// Replace one field of the entry at `index`.
    ///
    /// Does nothing if there is no entry at `index`.
    pub fn update_entry<E: SectionEntry>(
        &mut self,
        index: usize,
        field: E::Field,
        value: impl Into<String>,
    ) -> bool {
        if index >= self.document.entries::<E>().len() {
            tracing::warn!(section = %E::SECTION, index, "no entry to update");
            return false;
        }

        self.document.entries_mut::<E>()[index].set(field, value.into());
        true
    }

    /// Remove the entry at `index`.
    ///
    /// Does nothing if there is no entry at `index` or if it is the only entry of
    /// its section.
    pub fn remove_entry<E: SectionEntry>(&mut self, index: usize) -> bool {
        let len = self.document.entries::<E>().len();
        if len <= 1 {
            tracing::warn!(section = %E::SECTION, "refusing to remove the last entry");
            return false;
        }

        if index >= len {
            tracing::warn!(section = %E::SECTION, index, "no entry to remove");
            return false;
        }

        self.document.entries_mut::<E>().remove(index);
        true
    }

    /// Append a blank entry to a section.
    pub fn add_to(&mut self, section: Section) -> bool {
        match section {
            Section::Education => self.add_entry::<EducationEntry>(),
            Section::Experience => self.add_entry::<ExperienceEntry>(),
            Section::Skills => self.add_entry::<SkillEntry>(),
            Section::Projects => self.add_entry::<ProjectEntry>(),
        }
    }

    /// Replace a field, named by its key, of the entry at `index` of a section.
    ///
    /// Does nothing if there is no entry at `index` or if entries of the section
    /// have no such field.
    pub fn update_in(&mut self, section: Section, index: usize, field: &str, value: &str) -> bool {
        match section {
            Section::Education => self.update_named::<EducationEntry>(index, field, value),
            Section::Experience => self.update_named::<ExperienceEntry>(index, field, value),
            Section::Skills => self.update_named::<SkillEntry>(index, field, value),
            Section::Projects => self.update_named::<ProjectEntry>(index, field, value),
        }
    }

    /// Remove the entry at `index` of a section.
    pub fn remove_from(&mut self, section: Section, index: usize) -> bool {
        match section {
            Section::Education => self.remove_entry::<EducationEntry>(index),
            Section::Experience => self.remove_entry::<ExperienceEntry>(index),
            Section::Skills => self.remove_entry::<SkillEntry>(index),
            Section::Projects => self.remove_entry::<ProjectEntry>(index),
        }
    }

    /// Write `value` to the field at `path`.
    pub fn apply(&mut self, path: &FieldPath, value: &str) -> bool {
        match *path {
            FieldPath::Personal(field) => self.set_personal(field, value.to_string()),
            FieldPath::Entry {
                section,
                index,
                field,
            } => self.update_in(section, index, field, value),
        }
    }

    fn update_named<E: SectionEntry>(&mut self, index: usize, field: &str, value: &str) -> bool {
        match field.parse::<E::Field>() {
            Ok(field) => self.update_entry::<E>(index, field, value),
            Err(_) => {
                tracing::warn!(section = %E::SECTION, field, "unknown field");
                false
            }
        }
    }
}
