/// Extraction errors.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The source text does not parse. The reason embeds the first
    /// offending position reported by the grammar.
    #[error("expects valid JavaScript. Error parsing: {reason}")]
    InvalidSource { reason: String },

    /// A parameter uses a syntactic shape the classifier does not model.
    /// Failing here beats documenting the parameter wrongly.
    #[error("unsupported parameter shape: {kind}")]
    UnsupportedParam { kind: String },

    /// The grammar could not be loaded into the parser.
    #[error("grammar unavailable: {reason}")]
    Grammar { reason: String },
}
