//! Prompt Builder: deterministic assembly of extraction prompts.
//!
//! A prompt is a fixed template with caller text substituted verbatim, a
//! format-instruction block generated from the record's `RecordSchema`, and
//! the shared JSON-only directive at the end.

use crate::llm_client::prompts::JSON_ONLY_DIRECTIVE;
use crate::structured::schema::{FieldKind, RecordSchema};

/// Placeholder that every extraction template must contain.
pub const FORMAT_INSTRUCTIONS_KEY: &str = "format_instructions";

/// Builds the full prompt for `schema` from `template` and the caller inputs.
///
/// `inputs` maps placeholder names (without braces) to caller text.
pub fn build_prompt(template: &str, inputs: &[(&str, &str)], schema: &RecordSchema) -> String {
    let instructions = format_instructions(schema);

    let mut vars: Vec<(&str, &str)> = Vec::with_capacity(inputs.len() + 1);
    vars.extend_from_slice(inputs);
    vars.push((FORMAT_INSTRUCTIONS_KEY, instructions.as_str()));

    let mut prompt = render_template(template, &vars);
    prompt.push_str("\n\n");
    prompt.push_str(JSON_ONLY_DIRECTIVE);
    prompt
}

/// Describes the exact field names, types and constraints of `schema`,
/// followed by an example of the expected JSON shape.
pub fn format_instructions(schema: &RecordSchema) -> String {
    let mut out = format!(
        "The output MUST be a single JSON object ({}) with exactly these fields:\n",
        schema.title
    );

    for field in schema.fields {
        let mut constraints = vec![field.kind.type_name().to_string()];
        match field.kind {
            FieldKind::Score { min, max } => {
                constraints.push(format!("between {min} and {max} inclusive"));
            }
            FieldKind::Enum(allowed) => {
                let options: Vec<String> = allowed.iter().map(|a| format!("\"{a}\"")).collect();
                constraints.push(format!("one of {}", options.join(", ")));
            }
            FieldKind::StringList | FieldKind::Text => {}
        }
        constraints.push(if field.required { "required" } else { "optional" }.to_string());

        out.push_str(&format!(
            "- \"{}\" ({}): {}\n",
            field.name,
            constraints.join(", "),
            field.description
        ));
    }

    out.push_str("\nExample of the expected shape:\n");
    out.push_str(&example_shape(schema));
    out
}

/// Hand-rendered so the example keeps the schema's field order.
fn example_shape(schema: &RecordSchema) -> String {
    let lines: Vec<String> = schema
        .fields
        .iter()
        .map(|field| {
            let example = match field.kind {
                FieldKind::Score { min, max } => format!("{}", min + (max - min) * 0.75),
                FieldKind::StringList => "[\"...\"]".to_string(),
                FieldKind::Enum(allowed) => {
                    format!("\"{}\"", allowed.first().copied().unwrap_or_default())
                }
                FieldKind::Text => "\"...\"".to_string(),
            };
            format!("  \"{}\": {}", field.name, example)
        })
        .collect();

    format!("{{\n{}\n}}", lines.join(",\n"))
}

/// Substitutes `{name}` placeholders in a single left-to-right pass.
///
/// Substituted text is never rescanned, so caller input containing `{...}`
/// is embedded as-is. Unknown placeholders are left untouched.
pub fn render_template(template: &str, vars: &[(&str, &str)]) -> String {
    let extra: usize = vars.iter().map(|(_, value)| value.len()).sum();
    let mut out = String::with_capacity(template.len() + extra);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let substitution = after.find('}').and_then(|close| {
            let name = &after[..close];
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (close, *value))
        });

        match substitution {
            Some((close, value)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
