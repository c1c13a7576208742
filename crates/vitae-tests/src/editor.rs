use vitae::{
    EducationEntry, EducationField, Editor, ExperienceEntry, ExperienceField, FieldPath,
    ProjectEntry, ProjectField, ResumeDocument, Section, SkillEntry, SkillField, ViewState,
};

#[test]
fn removing_the_last_entry_changes_nothing() {
    let mut editor = Editor::with_document(ResumeDocument::blank());
    let before = editor.snapshot();

    for section in Section::ALL {
        assert!(!editor.remove_from(section, 0), "{section}");
        assert_eq!(editor.document().section_len(section), 1, "{section}");
    }
    assert_eq!(editor.document(), &before);
}

#[test]
fn out_of_bounds_removal_changes_nothing() {
    let mut editor = Editor::new();
    editor.add_entry::<EducationEntry>();

    assert!(!editor.remove_entry::<EducationEntry>(2));
    assert_eq!(editor.document().education().len(), 2);
    assert!(editor.remove_entry::<EducationEntry>(1));
    assert_eq!(editor.document().education().len(), 1);
}

#[test]
fn updates_read_back_and_leave_siblings_alone() {
    let mut editor = Editor::new();
    editor.add_entry::<EducationEntry>();
    editor.add_entry::<ExperienceEntry>();
    editor.add_entry::<SkillEntry>();
    editor.add_entry::<ProjectEntry>();
    let before = editor.snapshot();

    editor.update_entry::<EducationEntry>(1, EducationField::Gpa, "4.0");
    editor.update_entry::<ExperienceEntry>(0, ExperienceField::Company, "Initech");
    editor.update_entry::<SkillEntry>(6, SkillField::Name, "Rust");
    editor.update_entry::<ProjectEntry>(1, ProjectField::Description, "A résumé builder");

    let doc = editor.document();
    assert_eq!(doc.education()[1].gpa.as_deref(), Some("4.0"));
    assert_eq!(doc.education()[0], before.education()[0]);
    assert_eq!(doc.experience()[0].company, "Initech");
    assert_eq!(doc.experience()[1], before.experience()[1]);
    assert_eq!(doc.skills()[6].as_str(), "Rust");
    assert_eq!(&doc.skills()[..6], &before.skills()[..6]);
    assert_eq!(doc.projects()[1].description, "A résumé builder");
    assert_eq!(doc.projects()[0], before.projects()[0]);
}

#[test]
fn out_of_bounds_update_is_a_no_op() {
    let mut editor = Editor::new();
    let before = editor.snapshot();

    assert!(!editor.update_entry::<ProjectEntry>(1, ProjectField::Name, "Ghost"));
    assert!(!editor.update_in(Section::Education, 5, "degree", "PhD"));
    assert_eq!(editor.document(), &before);
}

#[test]
fn snapshots_survive_every_kind_of_edit() {
    let mut editor = Editor::new();
    let snapshot = editor.snapshot();
    let copy = ResumeDocument::sample();

    editor.set_name("Someone Else");
    editor.set_email("someone@example.com");
    editor.set_summary("");
    editor.add_entry::<ExperienceEntry>();
    editor.update_entry::<ExperienceEntry>(1, ExperienceField::Role, "Founder");
    editor.remove_entry::<ExperienceEntry>(0);
    editor.add_to(Section::Skills);
    editor.update_in(Section::Skills, 6, "name", "Go");
    editor.apply(&"projects[0].name".parse::<FieldPath>().unwrap(), "Renamed");

    assert_eq!(snapshot, copy);
    assert_ne!(editor.document(), &snapshot);
}

#[test]
fn untouched_sections_are_shared_with_snapshots() {
    let mut editor = Editor::new();
    let snapshot = editor.snapshot();

    editor.update_entry::<SkillEntry>(0, SkillField::Name, "TypeScript");

    let doc = editor.document();
    assert!(!doc.shares_section::<SkillEntry>(&snapshot));
    assert!(doc.shares_section::<EducationEntry>(&snapshot));
    assert!(doc.shares_section::<ExperienceEntry>(&snapshot));
    assert!(doc.shares_section::<ProjectEntry>(&snapshot));
}

#[test]
fn view_states_are_exclusive() {
    let mut editor = Editor::new();
    assert_eq!(editor.state(), ViewState::SelectingTemplate);
    assert!(editor.render_target().is_none());

    let template = editor.choose_template("executive");
    assert_eq!(editor.state(), ViewState::Editing { template });
    assert_eq!(editor.render_target().unwrap().template().id, "executive");

    editor.back_to_templates();
    assert_eq!(editor.state(), ViewState::SelectingTemplate);
    assert!(editor.render_target().is_none());
}

#[test]
fn edits_show_up_in_the_next_render() {
    let mut editor = Editor::new();
    editor.choose_template("creative");
    let before = editor.render_target().unwrap();

    editor.update_entry::<SkillEntry>(0, SkillField::Name, "Haskell");
    let after = editor.render_target().unwrap();

    assert_eq!(before.view().skill_tags()[0], "JavaScript");
    assert_eq!(after.view().skill_tags()[0], "Haskell");
}
