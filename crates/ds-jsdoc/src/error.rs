/// Documentation block parsing errors.
#[derive(Debug, thiserror::Error)]
pub enum DocError {
    /// The block uses a tag the parser does not model.
    #[error("unknown documentation tag: @{tag}")]
    UnknownTag { tag: String },

    /// No header line could be recovered from the block.
    #[error("documentation block has no header line")]
    MissingHeader,
}
