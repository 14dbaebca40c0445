use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SharedError {
    #[error("Unknown node filter '{0}'. Must be one of: all, main, sub, related")]
    UnknownFilter(String),

    #[error("Unknown node type '{0}'. Must be one of: main, sub, related")]
    UnknownNodeKind(String),

    #[error("Saved idea record has neither `_id` nor `id`")]
    MissingIdeaId,
}
