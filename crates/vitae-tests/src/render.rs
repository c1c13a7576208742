use vitae::section::SectionEntry;
use vitae::view::Role;
use vitae::{
    render, EducationEntry, EducationField, Editor, ExperienceEntry, ExperienceField,
    ProjectEntry, ProjectField, RenderedView, ResumeDocument, Section, SkillEntry, SkillField,
    CATALOG,
};

#[test]
fn blank_document_renders_no_entries() {
    let doc = ResumeDocument::blank();

    for variant in &CATALOG {
        let view = render(&doc, variant.id);
        assert_eq!(view.entries(Section::Education), 0, "{}", variant.id);
        assert_eq!(view.entries(Section::Experience), 0, "{}", variant.id);
        assert_eq!(view.entries(Section::Projects), 0, "{}", variant.id);
        assert!(view.skill_tags().is_empty(), "{}", variant.id);

        for section in Section::ALL {
            assert!(!view.has_section(section), "{} {section}", variant.id);
        }
    }
}

fn add_one<E: SectionEntry>(field: E::Field, value: &str) -> Editor {
    let mut editor = Editor::with_document(ResumeDocument::blank());
    assert!(editor.add_entry::<E>());
    assert!(editor.update_entry::<E>(1, field, value));
    editor
}

#[test]
fn one_non_empty_entry_renders_one_block() {
    let editors = [
        (Section::Education, add_one::<EducationEntry>(EducationField::Degree, "MSc")),
        (Section::Experience, add_one::<ExperienceEntry>(ExperienceField::Role, "CTO")),
        (Section::Projects, add_one::<ProjectEntry>(ProjectField::Name, "vitae")),
    ];

    for variant in &CATALOG {
        for (section, editor) in &editors {
            let view = render(editor.document(), variant.id);
            assert_eq!(view.entries(*section), 1, "{} {section}", variant.id);
            assert!(view.has_section(*section), "{} {section}", variant.id);
        }

        let editor = add_one::<SkillEntry>(SkillField::Name, "Rust");
        assert_eq!(render(editor.document(), variant.id).skill_tags(), vec!["Rust"]);
    }
}

#[test]
fn empty_skills_are_skipped() {
    let doc = ResumeDocument::new(
        Default::default(),
        vec![],
        vec![],
        ["JavaScript", "", "React"].into_iter().map(SkillEntry::from).collect(),
        vec![],
    );

    for variant in &CATALOG {
        let view = render(&doc, variant.id);
        assert_eq!(view.skill_tags(), vec!["JavaScript", "React"], "{}", variant.id);
    }
}

#[test]
fn experience_descriptions_become_bullets() {
    let mut editor = Editor::with_document(ResumeDocument::blank());
    editor.update_entry::<ExperienceEntry>(0, ExperienceField::Role, "Engineer");
    editor.update_entry::<ExperienceEntry>(
        0,
        ExperienceField::Description,
        "Shipped things\n\n   \n  Fixed things  ",
    );

    for variant in &CATALOG {
        let view = render(editor.document(), variant.id);
        let texts = view.texts();
        assert!(texts.contains(&"Shipped things"), "{}", variant.id);
        assert!(texts.contains(&"Fixed things"), "{}", variant.id);
        assert!(!texts.contains(&""), "{}", variant.id);
    }
}

#[test]
fn project_technologies_are_split() {
    let mut editor = Editor::with_document(ResumeDocument::blank());
    editor.update_entry::<ProjectEntry>(0, ProjectField::Name, "vitae");
    editor.update_entry::<ProjectEntry>(0, ProjectField::Technologies, "Rust, resvg,, pdf-writer ");

    let view = render(editor.document(), "modern");
    let texts = view.texts();
    for technology in ["Rust", "resvg", "pdf-writer"] {
        assert!(texts.contains(&technology), "{technology}");
    }
}

#[test]
fn unknown_template_renders_like_modern() {
    let doc = ResumeDocument::sample();
    let fallback = RenderedView::from_document(&doc, "not-a-template");
    let modern = RenderedView::from_document(&doc, "modern");

    assert_eq!(fallback.template().id, "modern");
    assert_eq!(fallback.view(), modern.view());
    assert_eq!(fallback.svg(), modern.svg());
}

#[test]
fn rendering_is_deterministic() {
    let doc = ResumeDocument::sample();
    for variant in &CATALOG {
        let a = RenderedView::from_document(&doc, variant.id);
        let b = RenderedView::from_document(&doc.clone(), variant.id);
        assert_eq!(a.view(), b.view(), "{}", variant.id);
        assert_eq!(a.svg(), b.svg(), "{}", variant.id);
    }
}

#[test]
fn templates_differ_only_in_presentation() {
    let doc = ResumeDocument::sample();
    let views: Vec<_> = CATALOG.iter().map(|variant| render(&doc, variant.id)).collect();

    for view in &views {
        assert_eq!(view.count(Role::Header), 1);
        assert_eq!(view.skill_tags(), views[0].skill_tags());
        for section in Section::ALL {
            assert_eq!(view.entries(section), views[0].entries(section));
        }
    }

    for (i, a) in views.iter().enumerate() {
        for b in &views[i + 1..] {
            assert_ne!(a.root, b.root, "{} and {}", a.template.id, b.template.id);
        }
    }
}

#[test]
fn catalog_matches_the_published_variants() {
    let expected = [
        ("modern", "#2563eb"),
        ("classic", "#1f2937"),
        ("creative", "#db2777"),
        ("minimal", "#111827"),
        ("professional", "#0f766e"),
        ("executive", "#7c2d12"),
    ];

    assert_eq!(CATALOG.len(), expected.len());
    for (variant, (id, accent)) in CATALOG.iter().zip(expected) {
        assert_eq!(variant.id, id);
        assert_eq!(variant.accent_color.to_string(), accent);
        assert!(!variant.name.is_empty());
        assert!(!variant.description.is_empty());
        assert!(!variant.preview_text.is_empty());
    }
}

#[test]
fn portrait_is_shown_by_sidebar_templates_only() {
    let mut editor = Editor::new();
    editor.set_photo("portrait.png");

    for variant in &CATALOG {
        let view = render(editor.document(), variant.id);
        let expected: &[&str] = match variant.id {
            "creative" | "professional" => &["portrait.png"],
            _ => &[],
        };
        assert_eq!(view.pictures(), expected, "{}", variant.id);
    }

    editor.set_photo("");
    for variant in &CATALOG {
        assert!(render(editor.document(), variant.id).pictures().is_empty());
    }
}
