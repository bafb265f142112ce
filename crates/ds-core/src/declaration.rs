use serde::{Deserialize, Serialize};

/// Sentinel used wherever a name, type, or default value cannot be
/// resolved from the source: anonymous default exports, destructuring
/// placeholders, and non-literal default values.
pub const UNKNOWN: &str = "Unknown";

/// Kinds of declarations that can be documented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeclarationKind {
    Function,
    ClassMethod,
    Class,
}

/// Where a documentation block belongs relative to its declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// 0-indexed row the block is inserted at: one above the declaration
    /// (or its export keyword), clamped to the first line.
    pub line: u32,
    /// Indentation of the declaration, in columns.
    pub column: usize,
}

/// One documentable argument slot.
///
/// Destructured patterns flatten into a placeholder entry followed by one
/// entry per extracted field; the fields carry `parent` set to the
/// placeholder's name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    pub name: String,
    /// Inferred from the default value's literal kind, when one exists.
    pub type_name: Option<String>,
    /// Default value rendered as source-level text (`"{}"`, `"1"`, ...).
    pub default_value: Option<String>,
    /// Placeholder name of the enclosing destructuring pattern.
    pub parent: Option<String>,
}

impl Param {
    /// Positional parameter with nothing inferred.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: None,
            default_value: None,
            parent: None,
        }
    }
}

/// Selects the singular (`@return`) or plural (`@returns`) keyword when
/// the declaration is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Returns {
    pub returns: bool,
}

/// A function, method, or class found near a requested line, reduced to
/// the fields a documentation block needs.
///
/// Constructed once per extraction and never mutated by the renderer.
/// `extends` is only populated for classes, `is_static` only for class
/// methods; a class carries no params.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    pub name: String,
    pub kind: DeclarationKind,
    pub location: Location,
    /// Declaration order; destructured fields immediately follow their
    /// placeholder.
    pub params: Vec<Param>,
    pub returns: Returns,
    pub extends: Option<String>,
    pub is_static: bool,
    pub description: Option<String>,
}
