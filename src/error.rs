//! The fatal error kinds this crate can raise, as one `thiserror` enum.

use thiserror::Error;

use crate::import_parser::ImportParseError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    MalformedImport(#[from] ImportParseError),

    #[error("Field {field}: Couldn't find type {type_name} in any of the schemas.")]
    MissingFieldType { field: String, type_name: String },

    #[error("Couldn't find interface {0} in any of the schemas.")]
    MissingInterface(String),

    #[error("Couldn't find type {0} in any of the schemas.")]
    MissingUnionMember(String),

    #[error("Directive {name}: Couldn't find type {name} in any of the schemas.")]
    MissingDirective { name: String },

    #[error("failed to read source `{source_key}`: {message}")]
    SourceReadFailure { source_key: String, message: String },

    #[error("failed to parse SDL for `{source_key}`: {message}")]
    AstParseFailure { source_key: String, message: String },

    /// The (practically unreachable) case where `fmt::Write` fails while
    /// printing the assembled document.
    #[error("failed to print assembled schema: {0}")]
    PrintFailure(#[from] std::fmt::Error),
}
