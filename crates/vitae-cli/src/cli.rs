//! Command line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use vitae::FieldPath;

#[derive(Parser)]
#[command(
    name = "vitae",
    version,
    about = "Build résumés from one document and six templates",
    long_about = "Build résumés from one document and six templates.\n\n\
                  Documents are JSON files; fields can be edited with --set PATH=VALUE, \
                  for example --set name='Jane Q. Public' or --set 'education[0].degree=MSc'."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Log output format.
    #[arg(long = "log-format", value_enum, default_value = "pretty", global = true)]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the available templates.
    Templates,

    /// Write the sample document as JSON.
    Sample {
        /// The output file (default: standard output).
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Render a document to SVG.
    Render(RenderArgs),

    /// Export a document as a PDF.
    Export(ExportArgs),
}

#[derive(Args)]
pub struct DocumentArgs {
    /// The document to load (default: the sample document).
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// The template to render with.
    #[arg(short, long, value_name = "ID", default_value = "modern")]
    pub template: String,

    /// Replace a field before rendering. Can be repeated.
    #[arg(long = "set", value_name = "PATH=VALUE", value_parser = parse_assignment)]
    pub set: Vec<(FieldPath, String)>,
}

#[derive(Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub document: DocumentArgs,

    /// The SVG file to write (default: standard output).
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub document: DocumentArgs,

    /// The directory the PDF is saved into.
    #[arg(long = "out-dir", value_name = "DIR", default_value = ".")]
    pub out_dir: PathBuf,

    /// The rasterization scale.
    #[arg(long, value_name = "N", default_value_t = 2.0)]
    pub scale: f32,

    /// Split the résumé into A4 pages instead of one tall page.
    #[arg(long)]
    pub paginate: bool,

    /// Do not load external images such as the portrait.
    #[arg(long = "no-external-assets")]
    pub no_external_assets: bool,

    /// Do not write a document title into the PDF.
    #[arg(long = "no-metadata")]
    pub no_metadata: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

/// Parse a `PATH=VALUE` assignment.
pub fn parse_assignment(s: &str) -> Result<(FieldPath, String), String> {
    let (path, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected PATH=VALUE, got `{s}`"))?;
    let path = path.parse::<FieldPath>().map_err(|err| err.to_string())?;
    Ok((path, value.to_string()))
}

#[cfg(test)]
mod tests {
    use vitae::{PersonalField, Section};

    use super::*;

    #[test]
    fn assignments() {
        assert_eq!(
            parse_assignment("name=Jane Q. Public"),
            Ok((
                FieldPath::Personal(PersonalField::Name),
                "Jane Q. Public".to_string()
            ))
        );
        assert_eq!(
            parse_assignment("skills[1]=a=b"),
            Ok((
                FieldPath::Entry {
                    section: Section::Skills,
                    index: 1,
                    field: "name"
                },
                "a=b".to_string()
            ))
        );
        assert!(parse_assignment("name").is_err());
        assert!(parse_assignment("height=2m").is_err());
    }

    #[test]
    fn export_arguments() {
        let cli = Cli::try_parse_from([
            "vitae",
            "export",
            "-t",
            "classic",
            "--set",
            "name=Ada",
            "--paginate",
            "--out-dir",
            "out",
        ])
        .unwrap();

        match cli.command {
            Command::Export(args) => {
                assert_eq!(args.document.template, "classic");
                assert_eq!(args.document.set.len(), 1);
                assert!(args.paginate);
                assert_eq!(args.out_dir, PathBuf::from("out"));
                assert_eq!(args.scale, 2.0);
            }
            _ => panic!("expected the export command"),
        }
    }
}
