//! Rendering of interface modules and the barrel module

use crate::naming::{is_valid_identifier, to_identifier, to_slug};
use crate::synth::{Field, InterfaceModel};

const HEADER_NOTICE: [&str; 3] = [
    " * NOTE: This class is auto generated by OpenAPI Generator (https://openapi-generator.tech).",
    " * https://openapi-generator.tech",
    " * Do not edit the class manually.",
];

const MISSING_DESCRIPTION: &str = "No description";

const FIELD_DOC_PREFIX: &str = "     * ";

/// Render the full source text of one interface module
pub fn render_interface(model: &InterfaceModel) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("// @ts-nocheck".to_string());
    lines.push("/**".to_string());
    if let Some(description) = model.description.as_deref() {
        lines.extend(doc_lines(description, " * "));
    }
    lines.extend(HEADER_NOTICE.iter().map(|line| line.to_string()));
    lines.push(" */".to_string());
    lines.push(String::new());

    if !model.imports.is_empty() {
        lines.extend(model.imports.iter().map(|name| render_import(name)));
        lines.push(String::new());
    }

    lines.push(format!("export interface {} {{", model.identifier));
    for field in &model.fields {
        lines.push(render_field(field, &model.identifier));
    }
    lines.push("}".to_string());

    let mut content = lines.join("\n");
    content.push('\n');
    content
}

/// Render the import statement for a referenced type
pub fn render_import(type_name: &str) -> String {
    format!(
        "import {{ {} }} from './{}';",
        to_identifier(Some(type_name)),
        to_slug(Some(type_name))
    )
}

fn render_field(field: &Field, owner: &str) -> String {
    let description = field.description.as_deref().unwrap_or(MISSING_DESCRIPTION);
    let optional = if field.required { "" } else { "?" };

    format!(
        "    /**\n{}\n     * @type {{{}}}\n     * @memberof {}\n     */\n    {}{}: {};",
        doc_lines(description, FIELD_DOC_PREFIX).join("\n"),
        escape_doc(&field.type_expr.render()),
        owner,
        render_property_name(&field.name),
        optional,
        field.type_expr.render_identifier()
    )
}

/// Doc comment lines for free text, one per source line, with `*/` neutralized
fn doc_lines(text: &str, prefix: &str) -> Vec<String> {
    let mut lines: Vec<String> = text
        .lines()
        .map(|line| {
            let line = escape_doc(line.trim_end());
            if line.is_empty() {
                prefix.trim_end().to_string()
            } else {
                format!("{prefix}{line}")
            }
        })
        .collect();

    if lines.is_empty() {
        lines.push(prefix.trim_end().to_string());
    }
    lines
}

fn escape_doc(text: &str) -> String {
    text.replace("*/", "*\\/")
}

fn render_property_name(name: &str) -> String {
    if is_valid_identifier(name) {
        name.to_string()
    } else {
        format!("'{}'", name.replace('\\', "\\\\").replace('\'', "\\'"))
    }
}

/// Render the barrel module re-exporting every module slug
pub fn render_barrel<S: AsRef<str>>(modules: &[S]) -> String {
    let mut content = String::new();
    for module in modules {
        content.push_str(&format!("export * from './{}';\n", module.as_ref()));
    }
    content
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Schema;
    use crate::synth::Synthesizer;
    use serde_json::json;

    fn synthesize(type_name: &str, value: serde_json::Value) -> InterfaceModel {
        let schema = Schema::from_value(value).unwrap();
        Synthesizer::new().synthesize(type_name, &schema).unwrap()
    }

    #[test]
    fn test_render_interface() {
        let model = synthesize(
            "Item",
            json!({
                "type": "object",
                "description": "A catalog item",
                "properties": {
                    "id": { "type": "integer", "description": "Identifier" },
                    "tag": { "$ref": "#/definitions/Tag" }
                },
                "required": ["id"]
            }),
        );

        let expected = "\
// @ts-nocheck
/**
 * A catalog item
 * NOTE: This class is auto generated by OpenAPI Generator (https://openapi-generator.tech).
 * https://openapi-generator.tech
 * Do not edit the class manually.
 */

import { Tag } from './tag';

export interface Item {
    /**
     * Identifier
     * @type {number}
     * @memberof Item
     */
    id: number;
    /**
     * No description
     * @type {Tag}
     * @memberof Item
     */
    tag?: Tag;
}
";
        assert_eq!(render_interface(&model), expected);
    }

    #[test]
    fn test_render_interface_without_imports_or_fields() {
        let model = synthesize("Empty", json!({ "type": "object" }));

        let expected = "\
// @ts-nocheck
/**
 * NOTE: This class is auto generated by OpenAPI Generator (https://openapi-generator.tech).
 * https://openapi-generator.tech
 * Do not edit the class manually.
 */

export interface Empty {
}
";
        assert_eq!(render_interface(&model), expected);
    }

    #[test]
    fn test_render_converts_identifiers() {
        let model = synthesize(
            "order_summary",
            json!({
                "type": "object",
                "properties": {
                    "lines": { "type": "array", "items": { "$ref": "#/definitions/Order_Line" } },
                    "content-type": { "type": "string" }
                }
            }),
        );

        let content = render_interface(&model);
        assert!(content.contains("import { OrderLine } from './order-line';"));
        assert!(content.contains("export interface orderSummary {"));
        assert!(content.contains("     * @type {Array<Order_Line>}"));
        assert!(content.contains("    lines?: Array<OrderLine>;"));
        assert!(content.contains("    'content-type'?: string;"));
        assert!(content.contains("     * @memberof orderSummary"));
    }

    #[test]
    fn test_render_escapes_comment_terminators() {
        let model = synthesize(
            "Note",
            json!({
                "type": "object",
                "description": "Closes early */ otherwise",
                "properties": {
                    "d": { "type": "string", "description": "ends */ here" }
                }
            }),
        );

        let content = render_interface(&model);
        assert!(content.contains(" * Closes early *\\/ otherwise\n"));
        assert!(content.contains("     * ends *\\/ here\n"));
        assert_eq!(content.matches("*/").count(), 2);
    }

    #[test]
    fn test_render_multiline_descriptions() {
        let model = synthesize(
            "Note",
            json!({
                "type": "object",
                "description": "First line\nSecond line",
                "properties": {
                    "d": { "type": "string", "description": "One\r\n\nThree" }
                }
            }),
        );

        let content = render_interface(&model);
        assert!(content.contains("/**\n * First line\n * Second line\n * NOTE:"));
        assert!(content.contains("    /**\n     * One\n     *\n     * Three\n     * @type {string}"));
    }

    #[test]
    fn test_render_import() {
        assert_eq!(
            render_import("UserProfile"),
            "import { UserProfile } from './user-profile';"
        );
    }

    #[test]
    fn test_render_barrel() {
        assert_eq!(
            render_barrel(&["a", "b-c"]),
            "export * from './a';\nexport * from './b-c';\n"
        );
        assert_eq!(render_barrel::<&str>(&[]), "");
    }
}
