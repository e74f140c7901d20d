//! Text templates for the generated Detox/jest stubs.
//!
//! Interpolated values are inserted verbatim. Quotes inside a step are not
//! escaped.

use feature_parser::ScenarioFields;

/// Author credited in the file header.
pub const AUTHOR: &str = "Gabriel Chicote";

/// Module the generated import pulls `describe` from.
pub const IMPORT_SOURCE: &str = "jest-circus";

/// File header: authorship comment and default import.
pub fn header() -> String {
    format!(
        "/*\n * Author: {AUTHOR}\n */\n\
         \n// Add corresponding imports. Example:\nimport {{ describe }} from '{IMPORT_SOURCE}';\n\
         \n"
    )
}

/// Opening `describe` for a user story plus the default lifecycle hooks.
pub fn feature_description(feature: &str, user_story: &str) -> String {
    let mut out = format!("describe( '{user_story} - {feature}', () => {{\n\n");
    out.push_str("\tbeforeAll( () => {\n\t\tawait device.launchApp();\n\t} );\n\n");
    out.push_str("\tbeforeEach( () => {\n\t\tawait device.reloadReactNative();\n\t} );\n\n");
    out
}

/// Nested `describe` with an empty test for one scenario.
pub fn scenario(fields: &ScenarioFields) -> String {
    let ScenarioFields {
        scenario,
        given,
        when,
        then,
    } = fields;

    // Trailing spaces after `{` and `);` are part of the format.
    format!(
        "\n\tdescribe( '{scenario}', () => {{ \n\
         \n\
         \t\tconst given = '{given}'\n\
         \t\tconst when = '{when}'\n\
         \t\tconst then = '{then}'\n\
         \n\
         \t\ttest( `${{given}}, ${{when}} ${{then}}`, async () => {{ \n\
         \t\t\t// TODO\n\
         \t\t}})\n\
         \n\
         \t}} ); \n\
         \t"
    )
}

/// Closes the outermost `describe`.
pub fn closing() -> &'static str {
    "\n});\n"
}
