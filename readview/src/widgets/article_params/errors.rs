use thiserror::Error;

use super::model::ArticleField;

/// Errors raised while building article params from untrusted values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum ArticleParamsError {
    /// The value is not part of the field's option set.
    #[error("unknown {field} option: {value}")]
    UnknownOption { field: ArticleField, value: String },
}
