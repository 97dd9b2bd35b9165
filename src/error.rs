//! Error types for message parsing

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or decoding a message
#[derive(Error, Debug)]
pub enum ParseError {
    /// The named input does not exist
    #[error("Email file not found: {}", path.display())]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input exists but could not be read
    #[error("Failed to read email file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The content could not be decoded into a MIME tree
    #[error("Malformed message ({context}): {reason}")]
    MalformedMessage { context: String, reason: String },
}

impl ParseError {
    pub(crate) fn malformed(context: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedMessage {
            context: context.into(),
            reason: reason.into(),
        }
    }

    /// Prefix the context of a malformed-message error with the input source.
    #[must_use]
    pub(crate) fn with_source_context(self, source: &str) -> Self {
        match self {
            Self::MalformedMessage { context, reason } => Self::MalformedMessage {
                context: format!("{source}: {context}"),
                reason,
            },
            other => other,
        }
    }

    #[must_use]
    pub const fn is_source_not_found(&self) -> bool {
        matches!(self, Self::SourceNotFound { .. })
    }

    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedMessage { .. })
    }
}

impl From<mailparse::MailParseError> for ParseError {
    fn from(err: mailparse::MailParseError) -> Self {
        Self::malformed("header block", err.to_string())
    }
}

/// Result type for message parsing operations
pub type Result<T> = std::result::Result<T, ParseError>;
