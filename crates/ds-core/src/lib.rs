mod declaration;

pub use declaration::{Declaration, DeclarationKind, Location, Param, Returns, UNKNOWN};
