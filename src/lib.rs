//! @ai:module:intent Code generator library for VehicleProperty annotation mapping tables
//! @ai:module:layer infrastructure
//! @ai:module:public_api annotation, config, emitter, extractor, generator, output, error
//! @ai:module:stateless true
//!
//! # vhalgen
//!
//! A build-time generator that scans the `@change_mode` and `@access`
//! annotations in the doc comments of `VehicleProperty.aidl` and emits the
//! C++ and Java mapping tables consumed by the vehicle HAL.
//!
//! ## Example
//!
//! ```rust,no_run
//! use vhalgen_codegen::{config::GenConfig, generator, output, output::OutputFormat};
//!
//! // Resolve paths from $ANDROID_BUILD_TOP and regenerate all four tables
//! let config = GenConfig::resolve(None).unwrap();
//! let report = generator::generate(&config).unwrap();
//! println!("{}", output::format_report(&report, OutputFormat::Text));
//! ```

pub mod annotation;
pub mod config;
pub mod emitter;
pub mod error;
pub mod extractor;
pub mod generator;
pub mod output;

pub use annotation::{AnnotationKind, PropertyAnnotation, PropertyTable};
pub use config::{GenConfig, ROOT_ENV_VAR};
pub use emitter::{render, TargetSyntax};
pub use error::{Error, Result};
pub use extractor::{extract_file, extract_source};
pub use generator::{check, generate, GenerationReport, TargetReport, TargetStatus};
pub use output::{format_report, format_table, OutputFormat};
