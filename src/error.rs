//! @ai:module:intent Define error types for the annotation generator
//! @ai:module:layer domain
//! @ai:module:public_api Error, Result
//! @ai:module:stateless true

use crate::annotation::AnnotationKind;
use std::path::PathBuf;
use thiserror::Error;

/// @ai:intent Unified error type for all generator operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No @{kind} annotation for property: {property}")]
    MissingAnnotation {
        kind: AnnotationKind,
        property: String,
    },

    #[error("Environment variable {0} is not set")]
    MissingEnvVar(&'static str),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
