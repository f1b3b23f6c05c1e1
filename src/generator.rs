//! @ai:module:intent Orchestrate extraction and emission for every generation target
//! @ai:module:layer application
//! @ai:module:public_api generate, check, GenerationReport, TargetReport, TargetStatus
//! @ai:module:depends_on annotation, config, emitter, extractor, error
//! @ai:module:stateless true

use crate::annotation::AnnotationKind;
use crate::config::GenConfig;
use crate::emitter::{self, TargetSyntax};
use crate::error::{Error, Result};
use crate::extractor;
use serde::Serialize;
use std::path::PathBuf;

/// @ai:intent Outcome for one generation target
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TargetStatus {
    Written,
    UpToDate,
    Stale,
    Missing,
}

/// @ai:intent Report entry for one generation target
#[derive(Debug, Clone, Serialize)]
pub struct TargetReport {
    pub kind: AnnotationKind,
    pub syntax: TargetSyntax,
    pub path: PathBuf,
    pub entries: usize,
    pub status: TargetStatus,
}

/// @ai:intent Result of a full generation or check run
#[derive(Debug, Clone, Serialize, Default)]
pub struct GenerationReport {
    pub source: PathBuf,
    pub targets: Vec<TargetReport>,
}

impl GenerationReport {
    /// @ai:intent Check whether every target was written or already current
    pub fn passed(&self) -> bool {
        self.targets
            .iter()
            .all(|t| matches!(t.status, TargetStatus::Written | TargetStatus::UpToDate))
    }

    /// @ai:intent Number of targets that are stale or missing on disk
    pub fn outdated(&self) -> usize {
        self.targets
            .iter()
            .filter(|t| matches!(t.status, TargetStatus::Stale | TargetStatus::Missing))
            .count()
    }
}

/// @ai:intent Generate all four mapping tables from the source file
/// @ai:pre config.source_file() exists and every property carries both annotations
/// @ai:post each output file holds freshly rendered content
/// @ai:effects fs:read, fs:write
pub fn generate(config: &GenConfig) -> Result<GenerationReport> {
    run(config, true)
}

/// @ai:intent Verify the generated files are current, without writing
/// @ai:effects fs:read
pub fn check(config: &GenConfig) -> Result<GenerationReport> {
    run(config, false)
}

/// @ai:intent Read the source once, extract once per kind, emit both syntaxes
/// @ai:effects fs:read, fs:write
fn run(config: &GenConfig, write: bool) -> Result<GenerationReport> {
    let source = config.source_file();
    let content = std::fs::read_to_string(&source).map_err(|e| Error::FileRead {
        path: source.clone(),
        source: e,
    })?;

    // One scan per annotation kind, shared by both syntax emissions. Every
    // kind is extracted before any file is touched, so a missing annotation
    // aborts the run without producing output.
    let mut tables = Vec::new();
    for kind in AnnotationKind::all() {
        tables.push(extractor::extract_source(&content, kind)?);
    }

    let mut report = GenerationReport {
        source,
        targets: Vec::new(),
    };

    for table in &tables {
        for syntax in [TargetSyntax::Cpp, TargetSyntax::Java] {
            let path = config.output_path(table.kind, syntax);
            let rendered = emitter::render(table, syntax);

            let status = if write {
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(&path, &rendered)?;
                TargetStatus::Written
            } else {
                match std::fs::read_to_string(&path) {
                    Ok(existing) if existing == rendered => TargetStatus::UpToDate,
                    Ok(_) => TargetStatus::Stale,
                    Err(_) => TargetStatus::Missing,
                }
            };

            report.targets.push(TargetReport {
                kind: table.kind,
                syntax,
                path,
                entries: table.len(),
                status,
            });
        }
    }

    Ok(report)
}
