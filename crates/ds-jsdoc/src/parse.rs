use std::sync::LazyLock;

use regex::Regex;

use crate::error::DocError;
use crate::render::DEFAULT_TYPE;

/// Content of a comment line: everything after the asterisk and at least
/// one space. Delimiter-only lines (`/**`, `*/`, bare `*`) do not match.
static RE_CONTENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\s+(.*)$").unwrap());

/// A documentation block recovered from rendered text. Shaped like a
/// declaration, but keeps the per-line descriptions a block carries and
/// a declaration does not.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocBlock {
    pub name: String,
    pub description: Option<String>,
    /// `@param` lines in block order.
    pub params: Vec<DocParam>,
    pub returns: Option<DocReturns>,
    pub extends: Option<String>,
    pub is_static: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocParam {
    pub name: String,
    pub type_name: Option<String>,
    pub default_value: Option<String>,
    pub parent: Option<String>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocReturns {
    /// Whether the block used the plural `@returns` keyword.
    pub returns: bool,
    pub type_name: String,
    pub description: String,
}

/// Parse a rendered documentation block back into its structural fields —
/// the inverse of [`crate::render`], used for round-trip verification.
///
/// The first logical line is the header (`name - description`); later
/// lines dispatch on their `@tag`. A line with no leading `@` continues
/// the previous logical line. Unknown tags are rejected, as is a block
/// with no recoverable header.
pub fn parse_doc(text: &str) -> Result<DocBlock, DocError> {
    let mut block = DocBlock::default();
    let mut has_header = false;

    for line in logical_lines(text) {
        let (tag, rest) = split_tag(&line);
        match tag {
            "header" => {
                parse_header(rest, &mut block);
                has_header = true;
            }
            // The renderer folds the static modifier into the header.
            "static" => {
                parse_header(rest, &mut block);
                block.is_static = true;
                has_header = true;
            }
            "param" => block.params.push(parse_param(rest)),
            "return" | "returns" => {
                block.returns = Some(parse_returns(rest, tag == "returns"));
            }
            "extends" => block.extends = Some(rest.to_string()),
            _ => {
                return Err(DocError::UnknownTag {
                    tag: tag.to_string(),
                })
            }
        }
    }

    if !has_header {
        return Err(DocError::MissingHeader);
    }
    Ok(block)
}

/// Strip the comment markup and merge continuation lines, yielding one
/// string per logical content line.
fn logical_lines(text: &str) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    for raw in text.lines() {
        let Some(captures) = RE_CONTENT.captures(raw.trim()) else {
            continue;
        };
        let content = captures[1].trim_end().to_string();
        if content.starts_with('@') || lines.is_empty() {
            lines.push(content);
        } else if let Some(previous) = lines.last_mut() {
            previous.push(' ');
            previous.push_str(&content);
        }
    }
    lines
}

fn split_tag(line: &str) -> (&str, &str) {
    match line.strip_prefix('@') {
        Some(tagged) => match tagged.split_once(char::is_whitespace) {
            Some((tag, rest)) => (tag, rest.trim()),
            None => (tagged, ""),
        },
        None => ("header", line),
    }
}

/// `name - description`, split on the exact separator the renderer emits
/// so hyphenated names survive the round trip.
fn parse_header(rest: &str, block: &mut DocBlock) {
    match rest.split_once(" - ") {
        Some((name, description)) => {
            block.name = name.trim().to_string();
            block.description = Some(description.trim().to_string());
        }
        None => block.name = rest.trim().to_string(),
    }
}

/// `{type} name description`, where the name may be dotted
/// (`parent.child`) and bracketed (`[name=default]`), in that nesting
/// order: brackets outside, dot inside.
fn parse_param(rest: &str) -> DocParam {
    let (type_name, rest) = take_braced_type(rest);
    let (raw_name, description) = take_name_token(rest);

    let (dotted, default_value) = match raw_name
        .strip_prefix('[')
        .and_then(|inner| inner.strip_suffix(']'))
    {
        Some(inner) => match inner.split_once('=') {
            Some((name, value)) => (name, Some(value.to_string())),
            None => (inner, None),
        },
        None => (raw_name, None),
    };

    let (parent, name) = match dotted.split_once('.') {
        Some((parent, child)) => (Some(parent.to_string()), child.to_string()),
        None => (None, dotted.to_string()),
    };

    DocParam {
        name,
        type_name,
        default_value,
        parent,
        description: description.to_string(),
    }
}

fn parse_returns(rest: &str, plural: bool) -> DocReturns {
    let (type_name, description) = take_braced_type(rest);
    DocReturns {
        returns: plural,
        type_name: type_name.unwrap_or_else(|| DEFAULT_TYPE.to_string()),
        description: description.to_string(),
    }
}

/// Unwrap a leading `{...}` type, returning it and the remainder.
fn take_braced_type(rest: &str) -> (Option<String>, &str) {
    if let Some(after) = rest.strip_prefix('{') {
        if let Some(end) = after.find('}') {
            return (Some(after[..end].to_string()), after[end + 1..].trim_start());
        }
    }
    (None, rest)
}

/// Take the name token. Bracketed names may contain spaces (a function
/// default value, say), so they run to the matching close bracket rather
/// than the next space.
fn take_name_token(rest: &str) -> (&str, &str) {
    if rest.starts_with('[') {
        let mut depth = 0usize;
        for (i, c) in rest.char_indices() {
            match c {
                '[' => depth += 1,
                ']' => {
                    depth -= 1;
                    if depth == 0 {
                        return (&rest[..=i], rest[i + 1..].trim());
                    }
                }
                _ => {}
            }
        }
    }
    match rest.split_once(char::is_whitespace) {
        Some((name, description)) => (name, description.trim()),
        None => (rest, ""),
    }
}
