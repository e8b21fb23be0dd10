//! Errors returned by directive assembly and by section re-parsing.

use thiserror::Error;

/// Error when a [`ConfigurationSnapshot`](crate::ConfigurationSnapshot) cannot be assembled.
///
/// This is the only failure mode of [`assemble`](fn@crate::assemble): no partial text is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// `working_directory` is empty or whitespace-only.
    #[error("configuration error: working directory must not be empty")]
    EmptyWorkingDirectory,
}

/// Error when reading a section back out of a rendered [`Directive`](crate::Directive).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SectionError {
    /// The `<tag>` ... `</tag>` pair was not found.
    #[error("section not found: <{0}>")]
    MissingSection(String),

    /// A `LABEL: value` line was not found inside the section.
    #[error("field not found in section: {0}")]
    MissingField(String),

    /// A field value was present but is not valid JSON.
    #[error("malformed field {field}: {message}")]
    MalformedField { field: String, message: String },
}
