use ds_core::{Declaration, DeclarationKind, Param};

const OPEN: &str = "/**";
const SPACER: &str = " *";
const CLOSE: &str = " */";

/// Placeholder text for everything the author still has to fill in.
pub(crate) const DEFAULT_DESCRIPTION: &str = "Description";
/// Placeholder type for params and returns with nothing inferred.
pub(crate) const DEFAULT_TYPE: &str = "type";

/// Render a declaration as an aligned documentation block: newline-joined,
/// no trailing newline, every line indented to the declaration's column.
///
/// Deterministic in its input and never mutates it.
pub fn render(decl: &Declaration) -> String {
    let description = decl.description.as_deref().unwrap_or(DEFAULT_DESCRIPTION);
    let title = if decl.kind == DeclarationKind::ClassMethod && decl.is_static {
        format!(" * @static {} - {}", decl.name, description)
    } else {
        format!(" * {} - {}", decl.name, description)
    };

    let mut lines = vec![OPEN.to_string(), title];
    match decl.kind {
        DeclarationKind::Class => {
            if let Some(superclass) = &decl.extends {
                lines.push(format!(" * @extends {superclass}"));
            }
        }
        DeclarationKind::Function | DeclarationKind::ClassMethod => {
            lines.push(SPACER.to_string());
            let params = render_params(&decl.params);
            let has_params = !params.is_empty();
            lines.extend(params);
            if has_params {
                lines.push(SPACER.to_string());
            }
            let keyword = if decl.returns.returns { "returns" } else { "return" };
            lines.push(format!(" * @{keyword} {{{DEFAULT_TYPE}}} {DEFAULT_DESCRIPTION}"));
        }
    }
    lines.push(CLOSE.to_string());

    let indent = " ".repeat(decl.location.column);
    lines
        .iter()
        .map(|line| format!("{indent}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One `@param` line per parameter, with the type and name columns padded
/// to the block-wide maxima so descriptions align vertically. Widths are
/// computed once over the whole set, not per line.
fn render_params(params: &[Param]) -> Vec<String> {
    let entries: Vec<(String, String)> = params
        .iter()
        .map(|p| (display_type(p), display_name(p)))
        .collect();
    let type_width = entries.iter().map(|(t, _)| t.len()).max().unwrap_or(0);
    let name_width = entries.iter().map(|(_, n)| n.len()).max().unwrap_or(0);

    entries
        .into_iter()
        .map(|(t, n)| {
            format!(
                " * @param {:<type_width$} {:<name_width$} {DEFAULT_DESCRIPTION}",
                t, n
            )
        })
        .collect()
}

/// JSDoc folds parent and default into the name: `parent.name`, then
/// `[name=value]`. A default renders even when it is `false` or `null`.
fn display_name(param: &Param) -> String {
    let mut name = match &param.parent {
        Some(parent) => format!("{parent}.{}", param.name),
        None => param.name.clone(),
    };
    if let Some(value) = &param.default_value {
        name = format!("[{name}={value}]");
    }
    name
}

fn display_type(param: &Param) -> String {
    format!("{{{}}}", param.type_name.as_deref().unwrap_or(DEFAULT_TYPE))
}
