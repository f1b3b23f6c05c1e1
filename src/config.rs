//! @ai:module:intent Resolve source and output paths for a generation run
//! @ai:module:layer infrastructure
//! @ai:module:public_api GenConfig, ROOT_ENV_VAR
//! @ai:module:depends_on annotation, emitter, error
//! @ai:module:stateless true

use crate::annotation::AnnotationKind;
use crate::emitter::TargetSyntax;
use crate::error::{Error, Result};
use std::path::PathBuf;

/// Environment variable naming the build tree root.
pub const ROOT_ENV_VAR: &str = "ANDROID_BUILD_TOP";

const PROP_AIDL_FILE_PATH: &str = "hardware/interfaces/automotive/vehicle/aidl/android/hardware/automotive/vehicle/VehicleProperty.aidl";
const CPP_OUTPUT_DIR: &str = "hardware/interfaces/automotive/vehicle/aidl/generated_lib/cpp";
const JAVA_OUTPUT_DIR: &str = "hardware/interfaces/automotive/vehicle/aidl/generated_lib/java";

/// @ai:intent Resolved paths for a generation run
#[derive(Debug, Clone)]
pub struct GenConfig {
    pub root: PathBuf,
}

impl GenConfig {
    /// @ai:intent Resolve the build root from an override or the environment
    /// @ai:pre root_override is Some, or ROOT_ENV_VAR is set and non-empty
    /// @ai:effects env
    pub fn resolve(root_override: Option<PathBuf>) -> Result<Self> {
        let root = match root_override {
            Some(root) => root,
            None => {
                let value =
                    std::env::var(ROOT_ENV_VAR).map_err(|_| Error::MissingEnvVar(ROOT_ENV_VAR))?;

                // An empty value would silently resolve every path against
                // the current directory.
                if value.is_empty() {
                    return Err(Error::MissingEnvVar(ROOT_ENV_VAR));
                }

                PathBuf::from(value)
            }
        };

        Ok(Self { root })
    }

    /// @ai:intent Path of the VehicleProperty.aidl source file
    /// @ai:effects pure
    pub fn source_file(&self) -> PathBuf {
        self.root.join(PROP_AIDL_FILE_PATH)
    }

    /// @ai:intent Output path for one (kind, syntax) combination
    /// @ai:effects pure
    pub fn output_path(&self, kind: AnnotationKind, syntax: TargetSyntax) -> PathBuf {
        let dir = match syntax {
            TargetSyntax::Cpp => CPP_OUTPUT_DIR,
            TargetSyntax::Java => JAVA_OUTPUT_DIR,
        };

        self.root
            .join(dir)
            .join(format!("{}.{}", kind.table_name(), syntax.extension()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_resolve_with_override() {
        let config = GenConfig::resolve(Some(PathBuf::from("/build/top"))).unwrap();
        assert_eq!(config.root, Path::new("/build/top"));
    }

    #[test]
    fn test_source_file_is_root_relative() {
        let config = GenConfig::resolve(Some(PathBuf::from("/build/top"))).unwrap();
        assert_eq!(
            config.source_file(),
            Path::new("/build/top/hardware/interfaces/automotive/vehicle/aidl/android/hardware/automotive/vehicle/VehicleProperty.aidl")
        );
    }

    #[test]
    fn test_output_paths() {
        let config = GenConfig::resolve(Some(PathBuf::from("/build/top"))).unwrap();

        assert_eq!(
            config.output_path(AnnotationKind::ChangeMode, TargetSyntax::Cpp),
            Path::new("/build/top/hardware/interfaces/automotive/vehicle/aidl/generated_lib/cpp/ChangeModeForVehicleProperty.h")
        );
        assert_eq!(
            config.output_path(AnnotationKind::Access, TargetSyntax::Java),
            Path::new("/build/top/hardware/interfaces/automotive/vehicle/aidl/generated_lib/java/AccessForVehicleProperty.java")
        );
    }

    #[test]
    fn test_resolve_from_environment() {
        // Set and unset in one test so the two cases cannot race each other.
        std::env::set_var(ROOT_ENV_VAR, "/env/top");
        let config = GenConfig::resolve(None).unwrap();
        assert_eq!(config.root, Path::new("/env/top"));

        std::env::set_var(ROOT_ENV_VAR, "");
        assert!(matches!(
            GenConfig::resolve(None),
            Err(Error::MissingEnvVar(ROOT_ENV_VAR))
        ));

        std::env::remove_var(ROOT_ENV_VAR);
        assert!(matches!(
            GenConfig::resolve(None),
            Err(Error::MissingEnvVar(ROOT_ENV_VAR))
        ));
    }
}
