//! @ai:module:intent CLI entry point for the VehicleProperty table generator
//! @ai:module:layer presentation
//! @ai:module:public_api main
//! @ai:module:depends_on config, extractor, generator, output

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use vhalgen_codegen::{
    extractor, generator, output, AnnotationKind, Error, GenConfig, OutputFormat,
};

#[derive(Parser)]
#[command(name = "vhalgen")]
#[command(author, version, about = "Generate VehicleProperty annotation mapping tables")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Regenerate the four mapping tables from VehicleProperty.aidl
    Generate {
        /// Build tree root (defaults to $ANDROID_BUILD_TOP)
        #[arg(long)]
        root: Option<PathBuf>,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: Format,
    },

    /// Verify the generated tables are current, without writing
    Check {
        /// Build tree root (defaults to $ANDROID_BUILD_TOP)
        #[arg(long)]
        root: Option<PathBuf>,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: Format,
    },

    /// Extract the annotation table for one kind and print it
    Extract {
        /// Annotation kind to extract
        #[arg(value_enum)]
        kind: Kind,

        /// Build tree root (defaults to $ANDROID_BUILD_TOP)
        #[arg(long)]
        root: Option<PathBuf>,

        /// Output format
        #[arg(long, short, value_enum, default_value = "json-pretty")]
        format: Format,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
    JsonPretty,
}

impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
            Format::JsonPretty => OutputFormat::JsonPretty,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Kind {
    ChangeMode,
    Access,
}

impl From<Kind> for AnnotationKind {
    fn from(k: Kind) -> Self {
        match k {
            Kind::ChangeMode => AnnotationKind::ChangeMode,
            Kind::Access => AnnotationKind::Access,
        }
    }
}

/// @ai:intent Map an error to the process exit code
fn failure_code(e: &Error) -> ExitCode {
    match e {
        // A property without its annotation is a source defect, not an
        // operational failure.
        Error::MissingAnnotation { .. } => ExitCode::from(1),
        _ => ExitCode::from(2),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { root, format } => {
            let result = GenConfig::resolve(root).and_then(|config| generator::generate(&config));

            match result {
                Ok(report) => {
                    println!("{}", output::format_report(&report, format.into()));
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    failure_code(&e)
                }
            }
        }

        Commands::Check { root, format } => {
            let result = GenConfig::resolve(root).and_then(|config| generator::check(&config));

            match result {
                Ok(report) => {
                    println!("{}", output::format_report(&report, format.into()));

                    if report.passed() {
                        ExitCode::SUCCESS
                    } else {
                        ExitCode::from(1)
                    }
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    failure_code(&e)
                }
            }
        }

        Commands::Extract { kind, root, format } => {
            let result = GenConfig::resolve(root)
                .and_then(|config| extractor::extract_file(&config.source_file(), kind.into()));

            match result {
                Ok(table) => {
                    println!("{}", output::format_table(&table, format.into()));
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    failure_code(&e)
                }
            }
        }
    }
}
