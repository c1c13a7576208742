//! The four repeatable sections of a résumé and their fields.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::model::{EducationEntry, ExperienceEntry, ProjectEntry, ResumeDocument, SkillEntry};

/// A repeatable collection of a résumé.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Education entries.
    Education,
    /// Work experience entries.
    Experience,
    /// Skills.
    Skills,
    /// Projects.
    Projects,
}

impl Section {
    /// All sections, in the order they appear in the form.
    pub const ALL: [Section; 4] = [
        Section::Education,
        Section::Experience,
        Section::Skills,
        Section::Projects,
    ];

    /// The key used in JSON documents and field paths.
    pub fn key(self) -> &'static str {
        match self {
            Section::Education => "education",
            Section::Experience => "experience",
            Section::Skills => "skills",
            Section::Projects => "projects",
        }
    }

    /// The heading templates print above the section.
    pub fn title(self) -> &'static str {
        match self {
            Section::Education => "Education",
            Section::Experience => "Experience",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Section {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.key() == s)
            .ok_or(())
    }
}

mod private {
    pub trait Sealed {}

    impl Sealed for crate::model::EducationEntry {}
    impl Sealed for crate::model::ExperienceEntry {}
    impl Sealed for crate::model::SkillEntry {}
    impl Sealed for crate::model::ProjectEntry {}
}

/// An entry of one of the repeatable sections.
///
/// This trait is sealed; it is implemented for [`EducationEntry`], [`ExperienceEntry`],
/// [`SkillEntry`] and [`ProjectEntry`].
pub trait SectionEntry: private::Sealed + Clone + Default + fmt::Debug {
    /// The editable fields of the entry.
    type Field: Copy + fmt::Debug + FromStr + 'static;

    /// The section the entry belongs to.
    const SECTION: Section;

    /// The primary field. Entries whose primary field is empty are not rendered.
    fn primary(&self) -> &str;

    /// Read a field.
    fn get(&self, field: Self::Field) -> &str;

    /// Replace a field.
    fn set(&mut self, field: Self::Field, value: String);

    /// Whether the entry is shown when rendering.
    fn is_visible(&self) -> bool {
        !self.primary().is_empty()
    }

    #[doc(hidden)]
    fn slot(doc: &ResumeDocument) -> &Arc<Vec<Self>>;

    #[doc(hidden)]
    fn slot_mut(doc: &mut ResumeDocument) -> &mut Arc<Vec<Self>>;
}

macro_rules! fields {
    ($(#[$attr:meta])* $name:ident { $($(#[$vattr:meta])* $variant:ident => $key:literal),+ $(,)? }) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vattr])* $variant),+
        }

        impl $name {
            /// All fields, in form order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The key of the field in JSON documents and field paths.
            pub fn key(self) -> &'static str {
                match self {
                    $($name::$variant => $key),+
                }
            }
        }

        impl FromStr for $name {
            type Err = ();

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($key => Ok($name::$variant),)+
                    _ => Err(()),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.key())
            }
        }
    };
}

fields!(
    /// A field of an [`EducationEntry`].
    EducationField {
        /// The degree.
        Degree => "degree",
        /// The institution.
        Institution => "institution",
        /// The year range.
        Year => "year",
        /// The grade point average.
        Gpa => "gpa",
    }
);

fields!(
    /// A field of an [`ExperienceEntry`].
    ExperienceField {
        /// The job title.
        Role => "role",
        /// The employer.
        Company => "company",
        /// The duration.
        Duration => "duration",
        /// The multi-line description.
        Description => "description",
    }
);

fields!(
    /// The only field of a [`SkillEntry`].
    SkillField {
        /// The skill text.
        Name => "name",
    }
);

fields!(
    /// A field of a [`ProjectEntry`].
    ProjectField {
        /// The project name.
        Name => "name",
        /// The description.
        Description => "description",
        /// The comma-separated technologies.
        Technologies => "technologies",
    }
);

impl SectionEntry for EducationEntry {
    type Field = EducationField;
    const SECTION: Section = Section::Education;

    fn primary(&self) -> &str {
        &self.degree
    }

    fn get(&self, field: EducationField) -> &str {
        match field {
            EducationField::Degree => &self.degree,
            EducationField::Institution => &self.institution,
            EducationField::Year => &self.year,
            EducationField::Gpa => self.gpa.as_deref().unwrap_or(""),
        }
    }

    fn set(&mut self, field: EducationField, value: String) {
        match field {
            EducationField::Degree => self.degree = value,
            EducationField::Institution => self.institution = value,
            EducationField::Year => self.year = value,
            EducationField::Gpa => self.gpa = Some(value).filter(|v| !v.is_empty()),
        }
    }

    fn slot(doc: &ResumeDocument) -> &Arc<Vec<Self>> {
        &doc.education
    }

    fn slot_mut(doc: &mut ResumeDocument) -> &mut Arc<Vec<Self>> {
        &mut doc.education
    }
}

impl SectionEntry for ExperienceEntry {
    type Field = ExperienceField;
    const SECTION: Section = Section::Experience;

    fn primary(&self) -> &str {
        &self.role
    }

    fn get(&self, field: ExperienceField) -> &str {
        match field {
            ExperienceField::Role => &self.role,
            ExperienceField::Company => &self.company,
            ExperienceField::Duration => &self.duration,
            ExperienceField::Description => &self.description,
        }
    }

    fn set(&mut self, field: ExperienceField, value: String) {
        match field {
            ExperienceField::Role => self.role = value,
            ExperienceField::Company => self.company = value,
            ExperienceField::Duration => self.duration = value,
            ExperienceField::Description => self.description = value,
        }
    }

    fn slot(doc: &ResumeDocument) -> &Arc<Vec<Self>> {
        &doc.experience
    }

    fn slot_mut(doc: &mut ResumeDocument) -> &mut Arc<Vec<Self>> {
        &mut doc.experience
    }
}

impl SectionEntry for SkillEntry {
    type Field = SkillField;
    const SECTION: Section = Section::Skills;

    fn primary(&self) -> &str {
        &self.0
    }

    fn get(&self, _: SkillField) -> &str {
        &self.0
    }

    fn set(&mut self, _: SkillField, value: String) {
        self.0 = value;
    }

    fn slot(doc: &ResumeDocument) -> &Arc<Vec<Self>> {
        &doc.skills
    }

    fn slot_mut(doc: &mut ResumeDocument) -> &mut Arc<Vec<Self>> {
        &mut doc.skills
    }
}

impl SectionEntry for ProjectEntry {
    type Field = ProjectField;
    const SECTION: Section = Section::Projects;

    fn primary(&self) -> &str {
        &self.name
    }

    fn get(&self, field: ProjectField) -> &str {
        match field {
            ProjectField::Name => &self.name,
            ProjectField::Description => &self.description,
            ProjectField::Technologies => &self.technologies,
        }
    }

    fn set(&mut self, field: ProjectField, value: String) {
        match field {
            ProjectField::Name => self.name = value,
            ProjectField::Description => self.description = value,
            ProjectField::Technologies => self.technologies = value,
        }
    }

    fn slot(doc: &ResumeDocument) -> &Arc<Vec<Self>> {
        &doc.projects
    }

    fn slot_mut(doc: &mut ResumeDocument) -> &mut Arc<Vec<Self>> {
        &mut doc.projects
    }
}
