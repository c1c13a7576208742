//! Command implementations.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use vitae::{Editor, FieldPath, ResumeDocument, CATALOG};
use vitae_export::{DirectorySink, ExportSettings, Exporter, Pagination};

use crate::cli::{DocumentArgs, ExportArgs, RenderArgs};

pub fn run_templates() -> Result<()> {
    let mut stdout = io::stdout().lock();
    for variant in &CATALOG {
        writeln!(
            stdout,
            "{:<14} {:<14} {}  {}",
            variant.id, variant.name, variant.accent_color, variant.description
        )?;
    }
    Ok(())
}

pub fn run_sample(output: Option<&Path>) -> Result<()> {
    let json = ResumeDocument::sample().to_json()?;
    write_output(output, &json)
}

pub fn run_render(args: &RenderArgs) -> Result<()> {
    let editor = open_editor(&args.document)?;
    let Some(target) = editor.render_target() else {
        bail!("no template selected");
    };

    tracing::info!(
        template = target.template().id,
        width = target.width(),
        height = target.height(),
        "rendered"
    );
    write_output(args.output.as_deref(), target.svg())
}

pub async fn run_export(args: &ExportArgs) -> Result<()> {
    let editor = open_editor(&args.document)?;

    let settings = ExportSettings {
        scale: args.scale,
        allow_cross_origin: !args.no_external_assets,
        pagination: if args.paginate {
            Pagination::A4Pages
        } else {
            Pagination::SinglePage
        },
        metadata: !args.no_metadata,
        ..ExportSettings::default()
    };

    let sink = DirectorySink::new(&args.out_dir);
    let exporter = Exporter::new(sink.clone()).with_settings(settings);
    let file_name = exporter
        .export_editor(&editor)
        .await
        .context("export failed")?;

    println!("{}", sink.path_for(&file_name)?.display());
    Ok(())
}

/// Load the document, apply the `--set` edits and enter edit mode.
fn open_editor(args: &DocumentArgs) -> Result<Editor> {
    let document = match &args.input {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            ResumeDocument::from_json(&json)
                .with_context(|| format!("failed to load {}", path.display()))?
        }
        None => ResumeDocument::sample(),
    };

    let mut editor = Editor::with_document(document);
    for (path, value) in &args.set {
        apply(&mut editor, path, value)?;
    }

    editor.choose_template(&args.template);
    Ok(editor)
}

/// Apply one edit. A path one past the end of its section appends a blank entry
/// first; paths further out are rejected.
fn apply(editor: &mut Editor, path: &FieldPath, value: &str) -> Result<()> {
    if let FieldPath::Entry { section, index, .. } = *path {
        let len = editor.document().section_len(section);
        if index > len {
            bail!("cannot set `{path}`: {section} only has {len} entries");
        }
        if index == len {
            editor.add_to(section);
        }
    }

    if editor.apply(path, value) {
        tracing::debug!(%path, value, "applied edit");
    }
    Ok(())
}

fn write_output(output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => fs::write(path, content)
            .with_context(|| format!("failed to write {}", path.display())),
        None => {
            io::stdout().lock().write_all(content.as_bytes())?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use vitae::Section;

    use super::*;
    use crate::cli::parse_assignment;

    fn document_args(set: &[&str]) -> DocumentArgs {
        DocumentArgs {
            input: None,
            template: "minimal".to_string(),
            set: set.iter().map(|s| parse_assignment(s).unwrap()).collect(),
        }
    }

    #[test]
    fn edits_one_past_the_end_append_an_entry() {
        let editor = open_editor(&document_args(&[
            "education[1].degree=PhD",
            "education[2].degree=Postdoc",
        ]))
        .unwrap();
        let education = editor.document().education();

        assert_eq!(editor.document().section_len(Section::Education), 3);
        assert_eq!(education[1].degree, "PhD");
        assert_eq!(education[2].degree, "Postdoc");
    }

    #[test]
    fn edits_further_past_the_end_are_rejected() {
        let error = open_editor(&document_args(&["education[2].degree=PhD"])).unwrap_err();
        assert!(error.to_string().contains("education[2].degree"));

        let huge = format!("skills[{}]=x", usize::MAX);
        assert!(open_editor(&document_args(&[huge.as_str()])).is_err());
    }

    #[test]
    fn render_writes_svg() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("preview.svg");
        let args = RenderArgs {
            document: document_args(&["name=Jane Q. Public"]),
            output: Some(output.clone()),
        };

        run_render(&args).unwrap();
        let svg = fs::read_to_string(output).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("Jane Q. Public"));
    }

    #[test]
    fn loads_documents_from_json() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("resume.json");
        run_sample(Some(&input)).unwrap();

        let args = DocumentArgs {
            input: Some(input),
            ..document_args(&[])
        };
        let editor = open_editor(&args).unwrap();
        assert_eq!(editor.document(), &ResumeDocument::sample());
        assert_eq!(editor.template().map(|t| t.id), Some("minimal"));
    }
}
