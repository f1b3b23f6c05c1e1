//! @ai:module:intent Extract property annotation tables from VehicleProperty.aidl source text
//! @ai:module:layer application
//! @ai:module:public_api extract_file, extract_source
//! @ai:module:depends_on annotation, error
//! @ai:module:stateless true

use crate::annotation::{AnnotationKind, PropertyAnnotation, PropertyTable};
use crate::error::{Error, Result};
use regex::Regex;
use std::path::Path;

/// Property excluded from every generated table.
const SENTINEL_PROPERTY: &str = "INVALID";

/// @ai:intent Line patterns used by the scanner
///
/// This is a best-effort line scanner over the AIDL text, not a grammar
/// parser. It assumes one `enum VehicleProperty` block exists and that each
/// doc comment directly precedes the declarations it documents.
struct LinePatterns {
    enum_start: Regex,
    enum_end: Regex,
    comment_open: Regex,
    comment_close: Regex,
    annotation: Regex,
    declaration: Regex,
}

impl LinePatterns {
    /// @ai:intent Compile the patterns for one annotation kind
    /// @ai:effects pure
    fn for_kind(kind: AnnotationKind) -> Self {
        Self {
            enum_start: Regex::new(r"^\s*enum VehicleProperty \{").expect("Invalid regex"),
            enum_end: Regex::new(r"^\s*\};").expect("Invalid regex"),
            comment_open: Regex::new(r"^\s*/\*\*").expect("Invalid regex"),
            comment_close: Regex::new(r"\*/").expect("Invalid regex"),
            annotation: Regex::new(&format!(r"\* @{} (\S+)", kind.tag())).expect("Invalid regex"),
            declaration: Regex::new(r"^\s*(\w+)\s*=(.*)").expect("Invalid regex"),
        }
    }
}

/// @ai:intent Scanner state threaded through the line pass
#[derive(Debug, Default)]
struct ScanState {
    /// Inside the `enum VehicleProperty { ... };` region.
    processing: bool,
    /// Inside a `/** ... */` doc comment; only meaningful while processing.
    in_comment: bool,
    /// Most recent annotation value seen; carries over across declarations
    /// until the next annotation or enum start.
    pending: Option<String>,
}

/// @ai:intent Extract the annotation table for one kind from a source file
/// @ai:pre path exists and is readable
/// @ai:effects fs:read
pub fn extract_file(path: &Path, kind: AnnotationKind) -> Result<PropertyTable> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    extract_source(&content, kind)
}

/// @ai:intent Run the line scanner over source text for one annotation kind
/// @ai:post entries are in declaration order; the sentinel never appears
/// @ai:effects pure
pub fn extract_source(content: &str, kind: AnnotationKind) -> Result<PropertyTable> {
    let patterns = LinePatterns::for_kind(kind);
    let mut state = ScanState::default();
    let mut table = PropertyTable::new(kind);

    for (line_idx, line) in content.lines().enumerate() {
        let line_number = line_idx + 1;

        if patterns.enum_start.is_match(line) {
            state.processing = true;
            state.pending = None;
        } else if patterns.enum_end.is_match(line) {
            state.processing = false;
        }

        if !state.processing {
            continue;
        }

        if patterns.comment_open.is_match(line) {
            state.in_comment = true;
        }

        if state.in_comment {
            if let Some(captures) = patterns.annotation.captures(line) {
                // Last match before the declaration wins.
                state.pending = Some(captures.get(1).unwrap().as_str().to_string());
            }

            if patterns.comment_close.is_match(line) {
                state.in_comment = false;
            }
        } else if let Some(captures) = patterns.declaration.captures(line) {
            let property = captures.get(1).unwrap().as_str();

            if property == SENTINEL_PROPERTY {
                continue;
            }

            // One annotation covers every declaration under its comment, so
            // the pending value is kept after use.
            let value = match &state.pending {
                Some(value) => value.clone(),
                None => {
                    return Err(Error::MissingAnnotation {
                        kind,
                        property: property.to_string(),
                    })
                }
            };

            table.push(PropertyAnnotation {
                property: property.to_string(),
                value,
                line: line_number,
            });
        }
    }

    Ok(table)
}
