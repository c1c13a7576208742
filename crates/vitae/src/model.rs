//! The résumé data model.
//!
//! A [`ResumeDocument`] owns one [`PersonalInfo`] and four ordered collections
//! (education, experience, skills and projects). Every part is stored behind an
//! [`Arc`], which makes cloning a document cheap: a clone is a snapshot that shares
//! all sections with the original until one of them is written to. Writes go through
//! [`Arc::make_mut`], so only the touched section is copied, and only if a snapshot
//! still refers to it.
//!
//! Each collection always holds at least one entry. Documents created through
//! [`ResumeDocument::sample`], [`ResumeDocument::blank`] or loaded from JSON uphold
//! this, and the [`Editor`](crate::editor::Editor) never removes the last entry.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::section::{Section, SectionEntry};

/// Contact details and the free-text summary of the document owner.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    /// Full name of the document owner.
    pub name: String,
    /// E-mail address.
    pub email: String,
    /// Phone number.
    pub phone: String,
    /// City, region or any other location text.
    pub location: String,
    /// Professional summary paragraph.
    pub summary: String,
    /// Path or URL of a portrait image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

/// One education entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    /// Degree or qualification. Entries with an empty degree are not rendered.
    pub degree: String,
    /// School or university.
    pub institution: String,
    /// Free-text year or year range.
    pub year: String,
    /// Grade point average, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
}

/// One work experience entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    /// Job title. Entries with an empty role are not rendered.
    pub role: String,
    /// Employer.
    pub company: String,
    /// Free-text duration.
    pub duration: String,
    /// Multi-line description. Every non-blank line is rendered as a bullet.
    pub description: String,
}

impl ExperienceEntry {
    /// The bullet points of the description, in order.
    pub fn bullets(&self) -> impl Iterator<Item = &str> {
        self.description
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
    }
}

/// One skill.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillEntry(pub String);

impl SkillEntry {
    /// The skill text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SkillEntry {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// One project entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectEntry {
    /// Project name. Entries with an empty name are not rendered.
    pub name: String,
    /// What the project is about.
    pub description: String,
    /// Comma-separated list of technologies.
    pub technologies: String,
}

impl ProjectEntry {
    /// The technologies, split on commas, with blank items removed.
    pub fn technologies(&self) -> impl Iterator<Item = &str> {
        self.technologies
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
    }
}

/// An error that occurred while loading or storing a document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The JSON could not be parsed or written.
    #[error("invalid résumé document: {0}")]
    Json(#[from] serde_json::Error),
}

/// A complete résumé.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "DocumentRepr")]
pub struct ResumeDocument {
    pub(crate) personal: Arc<PersonalInfo>,
    pub(crate) education: Arc<Vec<EducationEntry>>,
    pub(crate) experience: Arc<Vec<ExperienceEntry>>,
    pub(crate) skills: Arc<Vec<SkillEntry>>,
    pub(crate) projects: Arc<Vec<ProjectEntry>>,
}

impl Default for ResumeDocument {
    fn default() -> Self {
        Self::sample()
    }
}

impl ResumeDocument {
    /// Create a document from its parts.
    ///
    /// Empty collections are padded with a single blank entry.
    pub fn new(
        personal: PersonalInfo,
        education: Vec<EducationEntry>,
        experience: Vec<ExperienceEntry>,
        skills: Vec<SkillEntry>,
        projects: Vec<ProjectEntry>,
    ) -> Self {
        Self {
            personal: Arc::new(personal),
            education: Arc::new(non_empty(education)),
            experience: Arc::new(non_empty(experience)),
            skills: Arc::new(non_empty(skills)),
            projects: Arc::new(non_empty(projects)),
        }
    }

    /// A document with empty personal info and one blank entry per collection.
    pub fn blank() -> Self {
        Self::new(PersonalInfo::default(), vec![], vec![], vec![], vec![])
    }

    /// The placeholder content a new session starts with.
    pub fn sample() -> Self {
        let personal = PersonalInfo {
            name: "John Doe".to_string(),
            email: "john.doe@email.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            location: "San Francisco, CA".to_string(),
            summary: "Experienced software developer with a passion for creating \
                      innovative solutions and leading cross-functional teams."
                .to_string(),
            photo: None,
        };

        let education = vec![EducationEntry {
            degree: "Bachelor of Science in Computer Science".to_string(),
            institution: "University of Technology".to_string(),
            year: "2016 - 2020".to_string(),
            gpa: Some("3.8".to_string()),
        }];

        let experience = vec![ExperienceEntry {
            role: "Senior Software Developer".to_string(),
            company: "Tech Solutions Inc.".to_string(),
            duration: "2020 - Present".to_string(),
            description: "Led development of scalable web applications\n\
                          Mentored junior developers and conducted code reviews\n\
                          Improved application performance by 40%"
                .to_string(),
        }];

        let skills = ["JavaScript", "React", "Node.js", "Python", "SQL", "Git"]
            .into_iter()
            .map(SkillEntry::from)
            .collect();

        let projects = vec![ProjectEntry {
            name: "E-commerce Platform".to_string(),
            description: "Full-stack web application with payment integration".to_string(),
            technologies: "React, Node.js, MongoDB, Stripe".to_string(),
        }];

        Self::new(personal, education, experience, skills, projects)
    }

    /// Load a document from JSON.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Store the document as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The personal info.
    pub fn personal(&self) -> &PersonalInfo {
        &self.personal
    }

    /// The education entries, in display order.
    pub fn education(&self) -> &[EducationEntry] {
        &self.education
    }

    /// The experience entries, in display order.
    pub fn experience(&self) -> &[ExperienceEntry] {
        &self.experience
    }

    /// The skills, in display order, including empty ones.
    pub fn skills(&self) -> &[SkillEntry] {
        &self.skills
    }

    /// The project entries, in display order.
    pub fn projects(&self) -> &[ProjectEntry] {
        &self.projects
    }

    /// The entries of the section that holds `E`.
    pub fn entries<E: SectionEntry>(&self) -> &[E] {
        E::slot(self).as_slice()
    }

    /// The number of entries in a section.
    pub fn section_len(&self, section: Section) -> usize {
        match section {
            Section::Education => self.education.len(),
            Section::Experience => self.experience.len(),
            Section::Skills => self.skills.len(),
            Section::Projects => self.projects.len(),
        }
    }

    pub(crate) fn personal_mut(&mut self) -> &mut PersonalInfo {
        Arc::make_mut(&mut self.personal)
    }

    pub(crate) fn entries_mut<E: SectionEntry>(&mut self) -> &mut Vec<E> {
        Arc::make_mut(E::slot_mut(self))
    }

    /// Whether two documents share the storage of the section holding `E`.
    pub fn shares_section<E: SectionEntry>(&self, other: &ResumeDocument) -> bool {
        Arc::ptr_eq(E::slot(self), E::slot(other))
    }
}

fn non_empty<T: Default>(mut entries: Vec<T>) -> Vec<T> {
    if entries.is_empty() {
        entries.push(T::default());
    }

    entries
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct DocumentRepr {
    #[serde(alias = "personalInfo")]
    personal: PersonalInfo,
    education: Vec<EducationEntry>,
    experience: Vec<ExperienceEntry>,
    skills: Vec<SkillEntry>,
    projects: Vec<ProjectEntry>,
}

impl From<DocumentRepr> for ResumeDocument {
    fn from(repr: DocumentRepr) -> Self {
        Self::new(
            repr.personal,
            repr.education,
            repr.experience,
            repr.skills,
            repr.projects,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_document_has_one_entry_per_section() {
        let doc = ResumeDocument::blank();
        assert_eq!(doc.education().len(), 1);
        assert_eq!(doc.experience().len(), 1);
        assert_eq!(doc.skills().len(), 1);
        assert_eq!(doc.projects().len(), 1);
        assert_eq!(doc.education()[0], EducationEntry::default());
    }

    #[test]
    fn loading_pads_missing_sections() {
        let doc = ResumeDocument::from_json(
            r#"{ "personal": { "name": "Ada" }, "skills": ["Rust"], "projects": [] }"#,
        )
        .unwrap();

        assert_eq!(doc.personal().name, "Ada");
        assert_eq!(doc.skills(), &[SkillEntry::from("Rust")]);
        assert_eq!(doc.projects().len(), 1);
        assert_eq!(doc.education().len(), 1);
    }

    #[test]
    fn json_round_trip_keeps_content() {
        let doc = ResumeDocument::sample();
        let json = doc.to_json().unwrap();
        assert_eq!(ResumeDocument::from_json(&json).unwrap(), doc);
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(ResumeDocument::from_json("{ not json").is_err());
    }

    #[test]
    fn bullets_skip_blank_lines() {
        let entry = ExperienceEntry {
            description: "First\n\n  Second  \n".to_string(),
            ..Default::default()
        };
        assert_eq!(entry.bullets().collect::<Vec<_>>(), vec!["First", "Second"]);
    }

    #[test]
    fn technologies_are_split_on_commas() {
        let entry = ProjectEntry {
            technologies: "Rust, , tokio,serde".to_string(),
            ..Default::default()
        };
        assert_eq!(
            entry.technologies().collect::<Vec<_>>(),
            vec!["Rust", "tokio", "serde"]
        );
    }
}
