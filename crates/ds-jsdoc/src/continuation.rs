use std::sync::LazyLock;

use regex::Regex;

/// The line closes a block comment (optionally one trailing space).
static RE_BLOCK_END: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*/\s?$").unwrap());

/// The line opens a block comment.
static RE_BLOCK_START: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[ \t]*/\*\*").unwrap());

/// Interior block-comment line: an asterisk not starting `*/`.
static RE_BLOCK_INTERIOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ \t]*\*($|[^/])").unwrap());

/// Line comment.
static RE_LINE_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[ \t]*//").unwrap());

/// The prefix (leading whitespace included) that continues the comment
/// open on `line` onto the next line, or `""` when nothing continues —
/// the line closed a block comment, or was never a comment at all.
///
/// A fresh `/**` opener gets one extra space so the continuation's
/// asterisk lines up under the opener's second one; interior lines and
/// `//` lines continue at their own depth, indentation preserved
/// verbatim.
///
/// Classification is lexical on the line's leading characters only. A
/// comment-like sequence inside a string literal, or a leading `*` that
/// is really multiplication, will misclassify; callers accept that in
/// exchange for never needing a syntax tree here.
pub fn continuation_prefix(line: &str) -> String {
    if RE_BLOCK_END.is_match(line) {
        return String::new();
    }

    let indent = leading_whitespace(line);
    if RE_BLOCK_START.is_match(line) {
        return format!("{indent} *");
    }
    if RE_BLOCK_INTERIOR.is_match(line) {
        return format!("{indent}*");
    }
    if RE_LINE_COMMENT.is_match(line) {
        return format!("{indent}//");
    }
    String::new()
}

fn leading_whitespace(line: &str) -> &str {
    let trimmed = line.trim_start_matches([' ', '\t']);
    &line[..line.len() - trimmed.len()]
}
