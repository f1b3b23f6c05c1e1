//! @ai:module:intent Render extracted annotation tables into C++ and Java sources
//! @ai:module:layer application
//! @ai:module:public_api TargetSyntax, render
//! @ai:module:depends_on annotation
//! @ai:module:stateless true

use crate::annotation::{AnnotationKind, PropertyTable};
use serde::{Deserialize, Serialize};

const TAB: &str = "    ";

/// Every generated file starts with this banner.
const LICENSE: &str = r#"/*
 * Copyright (C) 2022 The Android Open Source Project
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *      http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

/**
 * DO NOT EDIT MANUALLY!!!
 *
 * Generated by vhalgen.
 */

"#;

/// @ai:intent Target syntax for a generated mapping table
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TargetSyntax {
    Cpp,
    Java,
}

impl TargetSyntax {
    /// @ai:intent Get the output file extension for this syntax
    /// @ai:effects pure
    pub fn extension(&self) -> &'static str {
        match self {
            TargetSyntax::Cpp => "h",
            TargetSyntax::Java => "java",
        }
    }

    /// @ai:intent Translate a dotted annotation value for this syntax
    /// @ai:example Cpp: "VehiclePropertyAccess.READ" -> "VehiclePropertyAccess::READ"
    /// @ai:example Java: "VehiclePropertyAccess.READ" -> "VehiclePropertyAccess.READ"
    /// @ai:effects pure
    pub fn translate_value(&self, value: &str) -> String {
        match self {
            TargetSyntax::Cpp => value.replace('.', "::"),
            TargetSyntax::Java => value.to_string(),
        }
    }

    /// @ai:intent Format one mapping entry, including its trailing separator
    /// @ai:effects pure
    fn format_entry(&self, property: &str, value: &str) -> String {
        match self {
            TargetSyntax::Cpp => {
                format!("{TAB}{TAB}{{VehicleProperty::{property}, {value}}},")
            }
            TargetSyntax::Java => {
                format!("{TAB}{TAB}Map.entry(VehicleProperty.{property}, {value}),")
            }
        }
    }

    /// @ai:intent Build the boilerplate preceding the entries
    /// @ai:effects pure
    fn header(&self, kind: AnnotationKind) -> String {
        let table = kind.table_name();

        match self {
            TargetSyntax::Cpp => {
                let value_type = kind.value_type();
                format!(
                    "#ifndef android_hardware_automotive_vehicle_aidl_generated_lib_{table}_H_
#define android_hardware_automotive_vehicle_aidl_generated_lib_{table}_H_

#include <aidl/android/hardware/automotive/vehicle/VehicleProperty.h>
#include <aidl/android/hardware/automotive/vehicle/{value_type}.h>

#include <unordered_map>

namespace aidl {{
namespace android {{
namespace hardware {{
namespace automotive {{
namespace vehicle {{

std::unordered_map<VehicleProperty, {value_type}> {table} = {{
"
                )
            }
            TargetSyntax::Java => format!(
                "package android.hardware.automotive.vehicle;

import java.util.Map;

public final class {table} {{

    public static final Map<Integer, Integer> values = Map.ofEntries(
"
            ),
        }
    }

    /// @ai:intent Build the boilerplate following the entries
    /// @ai:effects pure
    fn footer(&self, kind: AnnotationKind) -> String {
        match self {
            TargetSyntax::Cpp => {
                let table = kind.table_name();
                format!(
                    "
}};

}}  // namespace vehicle
}}  // namespace automotive
}}  // namespace hardware
}}  // namespace android
}}  // aidl

#endif  // android_hardware_automotive_vehicle_aidl_generated_lib_{table}_H_
"
                )
            }
            TargetSyntax::Java => "
    );

}
"
            .to_string(),
        }
    }
}

/// @ai:intent Render the complete generated source for one table
/// @ai:post Cpp output keeps the trailing separator on the last entry, Java must not
/// @ai:effects pure
pub fn render(table: &PropertyTable, syntax: TargetSyntax) -> String {
    let entries: Vec<String> = table
        .entries
        .iter()
        .map(|entry| syntax.format_entry(&entry.property, &syntax.translate_value(&entry.value)))
        .collect();

    let mut body = entries.join("\n");

    // Java rejects a trailing comma before the closing parenthesis.
    if syntax == TargetSyntax::Java && body.ends_with(',') {
        body.pop();
    }

    format!(
        "{}{}{}{}",
        LICENSE,
        syntax.header(table.kind),
        body,
        syntax.footer(table.kind)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::PropertyAnnotation;

    fn sample_table(kind: AnnotationKind) -> PropertyTable {
        let mut table = PropertyTable::new(kind);
        table.push(PropertyAnnotation {
            property: "INFO_VIN".to_string(),
            value: "VehiclePropertyAccess.READ".to_string(),
            line: 3,
        });
        table.push(PropertyAnnotation {
            property: "HVAC_FAN_SPEED".to_string(),
            value: "VehiclePropertyAccess.READ_WRITE".to_string(),
            line: 7,
        });
        table
    }

    #[test]
    fn test_cpp_entry_uses_scope_separator() {
        let rendered = render(&sample_table(AnnotationKind::Access), TargetSyntax::Cpp);

        assert!(rendered
            .contains("        {VehicleProperty::INFO_VIN, VehiclePropertyAccess::READ},"));
        assert!(!rendered.contains("VehiclePropertyAccess.READ"));
    }

    #[test]
    fn test_java_entry_keeps_dotted_value() {
        let rendered = render(&sample_table(AnnotationKind::Access), TargetSyntax::Java);

        assert!(rendered
            .contains("        Map.entry(VehicleProperty.INFO_VIN, VehiclePropertyAccess.READ),"));
        assert!(!rendered.contains("::"));
    }

    #[test]
    fn test_cpp_keeps_trailing_separator_on_last_entry() {
        let rendered = render(&sample_table(AnnotationKind::Access), TargetSyntax::Cpp);

        assert!(rendered.contains("VehiclePropertyAccess::READ_WRITE},\n};"));
    }

    #[test]
    fn test_java_strips_trailing_separator_on_last_entry() {
        let rendered = render(&sample_table(AnnotationKind::Access), TargetSyntax::Java);

        assert!(rendered.contains("VehiclePropertyAccess.READ_WRITE)\n    );"));
        assert!(!rendered.contains("),\n    );"));
    }

    #[test]
    fn test_banner_and_boilerplate() {
        let cpp = render(&sample_table(AnnotationKind::ChangeMode), TargetSyntax::Cpp);

        assert!(cpp.starts_with("/*\n * Copyright (C) 2022"));
        assert!(cpp.contains("DO NOT EDIT MANUALLY!!!"));
        assert!(cpp.contains(
            "#ifndef android_hardware_automotive_vehicle_aidl_generated_lib_ChangeModeForVehicleProperty_H_"
        ));
        assert!(cpp.contains(
            "std::unordered_map<VehicleProperty, VehiclePropertyChangeMode> ChangeModeForVehicleProperty = {"
        ));
        assert!(cpp.ends_with(
            "#endif  // android_hardware_automotive_vehicle_aidl_generated_lib_ChangeModeForVehicleProperty_H_\n"
        ));

        let java = render(&sample_table(AnnotationKind::ChangeMode), TargetSyntax::Java);

        assert!(java.contains("package android.hardware.automotive.vehicle;"));
        assert!(java.contains("public final class ChangeModeForVehicleProperty {"));
        assert!(java.ends_with("    );\n\n}\n"));
    }

    #[test]
    fn test_entries_render_in_table_order() {
        let rendered = render(&sample_table(AnnotationKind::Access), TargetSyntax::Java);
        let vin = rendered.find("INFO_VIN").unwrap();
        let fan = rendered.find("HVAC_FAN_SPEED").unwrap();

        assert!(vin < fan);
    }
}
