use ds_core::{Param, UNKNOWN};
use tree_sitter::Node;

use crate::error::ParseError;
use crate::visitor::SourceContext;

/// Flatten a function node's parameter list into documentable entries,
/// in declaration order. Destructured patterns contribute a placeholder
/// followed by their fields, depth-first.
pub(crate) fn classify_all(
    function_node: Node<'_>,
    ctx: &SourceContext<'_>,
) -> Result<Vec<Param>, ParseError> {
    let mut out = Vec::new();
    if let Some(list) = function_node.child_by_field_name("parameters") {
        let mut cursor = list.walk();
        for entry in list.named_children(&mut cursor) {
            if entry.kind() == "comment" {
                continue;
            }
            classify(entry, ctx, &mut out)?;
        }
    } else if let Some(single) = function_node.child_by_field_name("parameter") {
        // paren-less arrow parameter: `x => x`
        classify(single, ctx, &mut out)?;
    }
    Ok(out)
}

/// One raw parameter entry. The grammar wraps each formal parameter in a
/// `required_parameter`/`optional_parameter` node carrying the pattern
/// and an optional default; unwrap before dispatching on the pattern.
fn classify(
    entry: Node<'_>,
    ctx: &SourceContext<'_>,
    out: &mut Vec<Param>,
) -> Result<(), ParseError> {
    let (pattern, default) = match entry.kind() {
        "required_parameter" | "optional_parameter" => {
            let pattern = entry
                .child_by_field_name("pattern")
                .ok_or_else(|| unsupported(entry))?;
            (pattern, entry.child_by_field_name("value"))
        }
        _ => (entry, None),
    };
    classify_pattern(pattern, default, None, ctx, out)
}

/// Closed dispatch over the recognized pattern shapes. Anything else is
/// rejected rather than mis-documented.
fn classify_pattern(
    pattern: Node<'_>,
    default: Option<Node<'_>>,
    parent: Option<&str>,
    ctx: &SourceContext<'_>,
    out: &mut Vec<Param>,
) -> Result<(), ParseError> {
    match pattern.kind() {
        "identifier" | "shorthand_property_identifier_pattern" => {
            let name = ctx.node_text(pattern).to_string();
            out.push(match default {
                Some(value) => {
                    let (type_name, default_value) = infer_default(value, ctx);
                    Param {
                        type_name: Some(type_name),
                        default_value: Some(default_value),
                        parent: parent.map(str::to_string),
                        ..Param::named(name)
                    }
                }
                None => Param {
                    parent: parent.map(str::to_string),
                    ..Param::named(name)
                },
            });
            Ok(())
        }

        // `{ a: b = 1 }` — the bound name sits on the left, the default
        // on the right.
        "assignment_pattern" => {
            let left = pattern
                .child_by_field_name("left")
                .ok_or_else(|| unsupported(pattern))?;
            let right = pattern.child_by_field_name("right");
            classify_pattern(left, right, parent, ctx, out)
        }

        "rest_pattern" => {
            let name = pattern
                .named_child(0)
                .filter(|inner| inner.kind() == "identifier")
                .map(|inner| ctx.node_text(inner).to_string())
                .ok_or_else(|| unsupported(pattern))?;
            out.push(Param {
                type_name: Some("array".to_string()),
                parent: parent.map(str::to_string),
                ..Param::named(name)
            });
            Ok(())
        }

        "object_pattern" => destructure(pattern, parent, ctx, out),

        _ => Err(unsupported(pattern)),
    }
}

/// Destructuring flattens into a synthetic placeholder for the whole
/// pattern, then one entry per field with `parent` set to the
/// placeholder's name.
fn destructure(
    pattern: Node<'_>,
    parent: Option<&str>,
    ctx: &SourceContext<'_>,
    out: &mut Vec<Param>,
) -> Result<(), ParseError> {
    out.push(Param {
        type_name: Some("object".to_string()),
        parent: parent.map(str::to_string),
        ..Param::named(UNKNOWN)
    });

    let mut cursor = pattern.walk();
    for prop in pattern.named_children(&mut cursor) {
        match prop.kind() {
            "shorthand_property_identifier_pattern" => {
                classify_pattern(prop, None, Some(UNKNOWN), ctx, out)?;
            }
            // `{ a = 1 }`
            "object_assignment_pattern" => {
                let left = prop
                    .child_by_field_name("left")
                    .ok_or_else(|| unsupported(prop))?;
                let right = prop.child_by_field_name("right");
                classify_pattern(left, right, Some(UNKNOWN), ctx, out)?;
            }
            // `{ a: b }`, possibly nested
            "pair_pattern" => {
                let value = prop
                    .child_by_field_name("value")
                    .ok_or_else(|| unsupported(prop))?;
                classify_pattern(value, None, Some(UNKNOWN), ctx, out)?;
            }
            // `{ ...rest }` gathers the remaining fields
            "rest_pattern" => {
                classify_pattern(prop, None, Some(UNKNOWN), ctx, out)?;
            }
            "comment" => {}
            _ => return Err(unsupported(prop)),
        }
    }
    Ok(())
}

/// Infer a documented type and a rendered default from the default
/// value's literal kind. Non-literal defaults (calls, identifiers,
/// member accesses) cannot be evaluated, so both degrade to the sentinel.
/// `new` expressions are flattened to an empty object regardless of the
/// constructed type.
fn infer_default(value: Node<'_>, ctx: &SourceContext<'_>) -> (String, String) {
    let (type_name, default_value) = match value.kind() {
        "string" => ("string", unquote(ctx.node_text(value))),
        "number" => ("number", ctx.node_text(value).to_string()),
        "true" | "false" => ("boolean", ctx.node_text(value).to_string()),
        "null" => ("null", "null".to_string()),
        "object" => ("object", "{}".to_string()),
        "array" => ("array", "[]".to_string()),
        "arrow_function" | "function_expression" | "function" | "generator_function" => {
            ("function", ctx.node_text(value).to_string())
        }
        "new_expression" => ("object", "{}".to_string()),
        _ => (UNKNOWN, UNKNOWN.to_string()),
    };
    (type_name.to_string(), default_value)
}

fn unquote(text: &str) -> String {
    text.trim_matches(|c| c == '\'' || c == '"' || c == '`')
        .to_string()
}

fn unsupported(node: Node<'_>) -> ParseError {
    ParseError::UnsupportedParam {
        kind: node.kind().to_string(),
    }
}
