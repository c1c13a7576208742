//! Addressing single fields of a document with strings.
//!
//! A [`FieldPath`] is either a personal field (`name`, `personal.email`) or a field
//! of one entry of a repeatable section (`education[0].degree`, `skills[2]`). Skills
//! only have one field, so it can be left out.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::section::{EducationField, ExperienceField, ProjectField, Section, SkillField};

/// A field of the [`PersonalInfo`](crate::model::PersonalInfo).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersonalField {
    /// The full name.
    Name,
    /// The e-mail address.
    Email,
    /// The phone number.
    Phone,
    /// The location.
    Location,
    /// The summary paragraph.
    Summary,
    /// The portrait.
    Photo,
}

impl PersonalField {
    /// All fields, in form order.
    pub const ALL: &'static [PersonalField] = &[
        PersonalField::Name,
        PersonalField::Email,
        PersonalField::Phone,
        PersonalField::Location,
        PersonalField::Summary,
        PersonalField::Photo,
    ];

    /// The key of the field in JSON documents and field paths.
    pub fn key(self) -> &'static str {
        match self {
            PersonalField::Name => "name",
            PersonalField::Email => "email",
            PersonalField::Phone => "phone",
            PersonalField::Location => "location",
            PersonalField::Summary => "summary",
            PersonalField::Photo => "photo",
        }
    }
}

impl FromStr for PersonalField {
    type Err = FieldPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PersonalField::ALL
            .iter()
            .copied()
            .find(|field| field.key() == s)
            .ok_or_else(|| FieldPathError::UnknownPersonalField(s.to_string()))
    }
}

/// An error that occurred while parsing a [`FieldPath`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldPathError {
    /// The path was empty.
    #[error("empty field path")]
    Empty,
    /// The personal info has no such field.
    #[error("unknown personal field `{0}`")]
    UnknownPersonalField(String),
    /// There is no such section.
    #[error("unknown section `{0}`")]
    UnknownSection(String),
    /// The index was missing or not a number.
    #[error("invalid entry index in `{0}`")]
    InvalidIndex(String),
    /// An entry path without a field, for a section with more than one field.
    #[error("missing field name after `{section}[{index}]`")]
    MissingField {
        /// The section.
        section: Section,
        /// The entry index.
        index: usize,
    },
    /// Entries of the section have no such field.
    #[error("unknown field `{field}` in section `{section}`")]
    UnknownField {
        /// The section.
        section: Section,
        /// The field name.
        field: String,
    },
}

/// The location of a single editable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldPath {
    /// A personal field.
    Personal(PersonalField),
    /// A field of one entry.
    Entry {
        /// The section of the entry.
        section: Section,
        /// The index of the entry in its section.
        index: usize,
        /// The field key, as understood by the field enum of the section.
        field: &'static str,
    },
}

impl FromStr for FieldPath {
    type Err = FieldPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(FieldPathError::Empty);
        }

        let Some(open) = s.find('[') else {
            let field = s
                .strip_prefix("personal.")
                .or_else(|| s.strip_prefix("personalInfo."))
                .unwrap_or(s);
            return Ok(FieldPath::Personal(field.parse()?));
        };

        let section: Section = s[..open]
            .parse()
            .map_err(|_| FieldPathError::UnknownSection(s[..open].to_string()))?;

        let rest = &s[open + 1..];
        let (index, rest) = rest
            .split_once(']')
            .ok_or_else(|| FieldPathError::InvalidIndex(s.to_string()))?;
        let index: usize = index
            .trim()
            .parse()
            .map_err(|_| FieldPathError::InvalidIndex(s.to_string()))?;

        let field = match rest.strip_prefix('.') {
            Some(field) => field,
            None if rest.is_empty() && section == Section::Skills => SkillField::Name.key(),
            None if rest.is_empty() => {
                return Err(FieldPathError::MissingField { section, index })
            }
            None => return Err(FieldPathError::InvalidIndex(s.to_string())),
        };

        let field = field_key(section, field).ok_or_else(|| FieldPathError::UnknownField {
            section,
            field: field.to_string(),
        })?;

        Ok(FieldPath::Entry {
            section,
            index,
            field,
        })
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldPath::Personal(field) => write!(f, "personal.{}", field.key()),
            FieldPath::Entry {
                section,
                index,
                field,
            } => write!(f, "{section}[{index}].{field}"),
        }
    }
}

fn field_key(section: Section, field: &str) -> Option<&'static str> {
    match section {
        Section::Education => field.parse::<EducationField>().ok().map(EducationField::key),
        Section::Experience => field.parse::<ExperienceField>().ok().map(ExperienceField::key),
        Section::Skills => field.parse::<SkillField>().ok().map(SkillField::key),
        Section::Projects => field.parse::<ProjectField>().ok().map(ProjectField::key),
    }
}
