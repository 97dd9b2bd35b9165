// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Email Message Walker
//!
//! Parses a single RFC 5322/MIME message into its headers, a nested part
//! tree, the first textual body, the links in that body and metadata for
//! every part marked with a `Content-Disposition`.
//!
//! # Example
//!
//! ```rust
//! use eml_walk::parse_message;
//!
//! let raw = b"Subject: Hi\r\nFrom: a@x.com\r\nContent-Type: text/plain\r\n\r\n\
//!             Visit http://example.com/page?a=1 now.";
//! let message = parse_message(raw).unwrap();
//!
//! assert_eq!(message.subject, "Hi");
//! assert_eq!(message.links, vec!["http://example.com/page?a=1"]);
//! assert!(message.attachments.is_empty());
//! ```

mod decode;
mod error;
mod headers;
mod links;
mod part;
mod types;
mod walker;

pub use decode::decode;
pub use error::{ParseError, Result};
pub use headers::HeaderStore;
pub use links::{LINK_PATTERN, extract_links, is_link_char};
pub use part::{ContentType, MimePart, PartBody, Payload, Walk};
pub use types::{Attachment, ParsedMessage};
pub use walker::{WalkOutput, walk};

use std::path::Path;
use tracing::debug;

/// Decode, walk and assemble a message held in memory
pub fn parse_message(raw: &[u8]) -> Result<ParsedMessage> {
    let root = decode(raw)?;
    let output = walk(&root);

    debug!(
        "Parsed message: {} parts, {} links, {} attachments",
        output.parts_visited,
        output.links.len(),
        output.attachments.len()
    );

    Ok(assemble(root, output))
}

/// Read and parse the message stored at `path`
pub fn parse_file(path: impl AsRef<Path>) -> Result<ParsedMessage> {
    let path = path.as_ref();
    let raw = std::fs::read(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            ParseError::SourceNotFound {
                path: path.to_path_buf(),
                source,
            }
        } else {
            ParseError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    debug!("Read {} bytes from {}", raw.len(), path.display());

    parse_message(&raw).map_err(|e| e.with_source_context(&path.display().to_string()))
}

/// Build the result from a decoded tree and its walk output.
///
/// Header-derived fields come from the root part's headers.
#[must_use]
pub fn assemble(root: MimePart, output: WalkOutput) -> ParsedMessage {
    ParsedMessage::assemble(root, output)
}
