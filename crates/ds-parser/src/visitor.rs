use ds_core::{Declaration, DeclarationKind, Location, Param, Returns, UNKNOWN};
use tree_sitter::Node;

use crate::error::ParseError;
use crate::params;

/// Source text shared by the lowering helpers.
pub(crate) struct SourceContext<'a> {
    pub source: &'a str,
}

impl SourceContext<'_> {
    /// Extract the text of a tree-sitter node from source.
    pub fn node_text(&self, node: Node<'_>) -> &str {
        node.utf8_text(self.source.as_bytes()).unwrap_or("")
    }
}

/// Walk the tree in document order and lower the first candidate found
/// on `line_num` or the line below it. The walk short-circuits: once a
/// node is bound, no later candidate of any kind is considered.
pub(crate) fn find_declaration(
    root: Node<'_>,
    source: &str,
    line_num: u32,
) -> Result<Option<Declaration>, ParseError> {
    let ctx = SourceContext { source };
    scan(root, &ctx, line_num)
}

fn scan(
    node: Node<'_>,
    ctx: &SourceContext<'_>,
    line_num: u32,
) -> Result<Option<Declaration>, ParseError> {
    if let Some(decl) = lower_candidate(node, ctx, line_num)? {
        tracing::debug!(
            kind = node.kind(),
            line = node.start_position().row + 1,
            name = %decl.name,
            "declaration bound"
        );
        return Ok(Some(decl));
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(decl) = scan(child, ctx, line_num)? {
            return Ok(Some(decl));
        }
    }
    Ok(None)
}

/// A declaration matches the cursor line or the line directly below it.
fn on_line(node: Node<'_>, line_num: u32) -> bool {
    let start = node.start_position().row as u32 + 1;
    start == line_num || start == line_num + 1
}

fn is_function_value(node: Node<'_>) -> bool {
    matches!(
        node.kind(),
        "arrow_function" | "function_expression" | "function" | "generator_function"
    )
}

/// The node the documentation block anchors to: the export statement when
/// one wraps the declaration (same end offset), otherwise the declaration
/// itself. Indentation aligns with `export`, not the inner keyword.
fn doc_anchor(node: Node<'_>) -> Node<'_> {
    match node.parent() {
        Some(parent)
            if parent.kind() == "export_statement" && parent.end_byte() == node.end_byte() =>
        {
            parent
        }
        _ => node,
    }
}

fn location_of(node: Node<'_>) -> Location {
    let pos = node.start_position();
    Location {
        line: (pos.row as u32).saturating_sub(1),
        column: pos.column,
    }
}

fn lower_candidate(
    node: Node<'_>,
    ctx: &SourceContext<'_>,
    line_num: u32,
) -> Result<Option<Declaration>, ParseError> {
    match node.kind() {
        "function_declaration" | "generator_function_declaration" => {
            if !on_line(node, line_num) {
                return Ok(None);
            }
            let name = node
                .child_by_field_name("name")
                .map(|n| ctx.node_text(n).to_string())
                .unwrap_or_else(|| UNKNOWN.to_string());
            let params = params::classify_all(node, ctx)?;
            Ok(Some(function_declaration(name, doc_anchor(node), params)))
        }

        "class_declaration" | "abstract_class_declaration" => {
            if !on_line(node, line_num) {
                return Ok(None);
            }
            let name = node
                .child_by_field_name("name")
                .map(|n| ctx.node_text(n).to_string())
                .unwrap_or_else(|| UNKNOWN.to_string());
            Ok(Some(Declaration {
                name,
                kind: DeclarationKind::Class,
                location: location_of(doc_anchor(node)),
                params: Vec::new(),
                returns: Returns::default(),
                extends: superclass_name(node, ctx),
                is_static: false,
                description: None,
            }))
        }

        "method_definition" => {
            if !on_line(node, line_num) {
                return Ok(None);
            }
            let name = match node.child_by_field_name("name") {
                Some(n) => ctx.node_text(n).to_string(),
                None => return Ok(None),
            };
            // Shorthand methods also appear in object literals; only the
            // ones inside a class body carry class-method semantics.
            let in_class = node
                .parent()
                .is_some_and(|parent| parent.kind() == "class_body");
            let params = params::classify_all(node, ctx)?;
            let mut decl = function_declaration(name, node, params);
            if in_class {
                decl.kind = DeclarationKind::ClassMethod;
                decl.is_static = has_static_modifier(node);
            }
            Ok(Some(decl))
        }

        "lexical_declaration" | "variable_declaration" => {
            if !on_line(node, line_num) {
                return Ok(None);
            }
            let mut cursor = node.walk();
            let declarator = node
                .children(&mut cursor)
                .find(|child| child.kind() == "variable_declarator");
            let Some(declarator) = declarator else {
                return Ok(None);
            };
            let name = match declarator.child_by_field_name("name") {
                Some(n) if n.kind() == "identifier" => ctx.node_text(n).to_string(),
                _ => return Ok(None),
            };
            let Some(value) = declarator.child_by_field_name("value") else {
                return Ok(None);
            };
            if !is_function_value(value) {
                return Ok(None);
            }
            let params = params::classify_all(value, ctx)?;
            Ok(Some(function_declaration(name, doc_anchor(node), params)))
        }

        "expression_statement" => {
            if !on_line(node, line_num) {
                return Ok(None);
            }
            let Some(assignment) = node
                .named_child(0)
                .filter(|child| child.kind() == "assignment_expression")
            else {
                return Ok(None);
            };
            let Some(left) = assignment
                .child_by_field_name("left")
                .filter(|left| left.kind() == "member_expression")
            else {
                return Ok(None);
            };
            let Some(value) = assignment
                .child_by_field_name("right")
                .filter(|right| is_function_value(*right))
            else {
                return Ok(None);
            };
            let name = match left.child_by_field_name("property") {
                Some(n) => ctx.node_text(n).to_string(),
                None => return Ok(None),
            };
            let params = params::classify_all(value, ctx)?;
            Ok(Some(function_declaration(name, node, params)))
        }

        "export_statement" => {
            if !on_line(node, line_num) {
                return Ok(None);
            }
            // `export default function () {}` / `export default () => {}`:
            // the anonymous function is an expression in the `value`
            // field, so nothing further down the tree would bind it.
            let Some(value) = node
                .child_by_field_name("value")
                .filter(|value| is_function_value(*value))
            else {
                return Ok(None);
            };
            let params = params::classify_all(value, ctx)?;
            Ok(Some(function_declaration(
                UNKNOWN.to_string(),
                node,
                params,
            )))
        }

        _ => Ok(None),
    }
}

fn function_declaration(name: String, anchor: Node<'_>, params: Vec<Param>) -> Declaration {
    Declaration {
        name,
        kind: DeclarationKind::Function,
        location: location_of(anchor),
        params,
        returns: Returns::default(),
        extends: None,
        is_static: false,
        description: None,
    }
}

fn has_static_modifier(node: Node<'_>) -> bool {
    let mut cursor = node.walk();
    let result = node.children(&mut cursor)
        .any(|child| child.kind() == "static");
    result
}

/// Name of the extended class, read from the heritage clause.
fn superclass_name(node: Node<'_>, ctx: &SourceContext<'_>) -> Option<String> {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.kind() != "class_heritage" {
            continue;
        }
        let mut clauses = child.walk();
        for clause in child.children(&mut clauses) {
            match clause.kind() {
                "extends_clause" => {
                    let mut values = clause.walk();
                    for value in clause.children(&mut values) {
                        match value.kind() {
                            "identifier" | "member_expression" | "type_identifier"
                            | "generic_type" => {
                                return Some(ctx.node_text(value).to_string());
                            }
                            _ => {}
                        }
                    }
                }
                // Some grammar revisions put the expression directly
                // under class_heritage.
                "identifier" | "member_expression" => {
                    return Some(ctx.node_text(clause).to_string());
                }
                _ => {}
            }
        }
    }
    None
}
