mod error;
mod params;
mod visitor;

pub use error::ParseError;

use ds_core::Declaration;

/// Parse `source` and bind the declaration on `line_num` or the line
/// below it, reduced to a documentable [`Declaration`].
///
/// # Arguments
/// * `source` - Full source text; re-parsed on every call.
/// * `line_num` - 1-based cursor line. A declaration matches when it
///   starts on this line or the next one.
///
/// Returns `Ok(None)` when nothing declaration-like sits in that window;
/// malformed source is an error, never a silent `None`.
pub fn extract(source: &str, line_num: u32) -> Result<Option<Declaration>, ParseError> {
    let grammar: tree_sitter::Language = tree_sitter_typescript::LANGUAGE_TSX.into();
    let mut parser = tree_sitter::Parser::new();
    parser
        .set_language(&grammar)
        .map_err(|e| ParseError::Grammar {
            reason: format!("failed to set language: {e}"),
        })?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| ParseError::InvalidSource {
            reason: "tree-sitter returned no tree".to_string(),
        })?;

    let root = tree.root_node();
    if root.has_error() {
        return Err(ParseError::InvalidSource {
            reason: syntax_diagnostic(root, source),
        });
    }

    let found = visitor::find_declaration(root, source, line_num)?;
    if found.is_none() {
        tracing::debug!(line = line_num, "no declaration near line");
    }
    Ok(found)
}

/// Describe the first error or missing node so the failure points at a
/// concrete position in the input.
fn syntax_diagnostic(node: tree_sitter::Node<'_>, source: &str) -> String {
    if node.is_error() || node.is_missing() {
        let pos = node.start_position();
        let what = if node.is_missing() {
            format!("missing {}", node.kind())
        } else {
            let text = node.utf8_text(source.as_bytes()).unwrap_or("");
            let snippet: String = text.chars().take(24).collect();
            format!("unexpected {snippet:?}")
        };
        return format!("{what} at line {}, column {}", pos.row + 1, pos.column + 1);
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.has_error() {
            return syntax_diagnostic(child, source);
        }
    }
    // has_error on the root with no flagged descendant should not happen
    "source failed to parse".to_string()
}
