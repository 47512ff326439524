//! Error types for catalog validation and menu operations.

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised by selection and browse operations.
///
/// All variants are recoverable: the operation that produced them left the
/// session untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("unknown item: '{id}'")]
    UnknownItem { id: String },

    #[error("unknown category: '{name}'")]
    UnknownCategory { name: String },

    #[error("invalid catalog: {0}")]
    Catalog(#[from] CatalogError),
}

impl Error {
    pub(crate) fn unknown_item(id: impl Into<String>) -> Self {
        Error::UnknownItem { id: id.into() }
    }

    pub(crate) fn unknown_category(name: impl Into<String>) -> Self {
        Error::UnknownCategory { name: name.into() }
    }
}

/// Construction-time catalog failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("duplicate item id '{id}' (in '{first}' and '{second}')")]
    DuplicateItemId {
        id: String,
        first: String,
        second: String,
    },

    #[error("duplicate category name '{name}'")]
    DuplicateCategory { name: String },

    #[error("item in category '{category}' has an empty id")]
    EmptyItemId { category: String },

    #[error("item '{id}' has an empty name")]
    EmptyItemName { id: String },

    #[error("category at position {index} has an empty name")]
    EmptyCategoryName { index: usize },

    #[error("item '{id}': {field} must be a non-negative integer below 2^32, got {value}")]
    InvalidNumber {
        id: String,
        field: &'static str,
        value: i64,
    },

    #[error("included items {actual:?} do not match the expected set {expected:?}")]
    IncludedMismatch {
        expected: Vec<String>,
        actual: Vec<String>,
    },
}
