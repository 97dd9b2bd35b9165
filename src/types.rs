//! Parse result types

use crate::headers::HeaderStore;
use crate::part::MimePart;
use crate::walker::WalkOutput;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A fully parsed message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedMessage {
    /// Subject header, empty if absent
    pub subject: String,

    /// From header, empty if absent
    pub from: String,

    /// To header, empty if absent
    pub to: String,

    /// Reply-To header, empty if absent
    pub reply_to: String,

    /// Top-level Content-Type header as written, empty if absent
    pub content_type: String,

    /// Date header as written, empty if absent
    pub date: String,

    /// Top-level headers, in order, duplicates kept
    pub headers: HeaderStore,

    /// Text of the first text part, empty if there is none
    pub body: String,

    /// Attachment metadata in document order
    pub attachments: Vec<Attachment>,

    /// Links found in the body, duplicates kept
    pub links: Vec<String>,

    /// The decoded part tree
    pub root: MimePart,
}

impl ParsedMessage {
    /// Combine a decoded tree with what the walker collected from it
    #[must_use]
    pub fn assemble(root: MimePart, walk: WalkOutput) -> Self {
        let headers = root.headers.clone();
        let field = |name: &str| headers.get(name, "").to_string();

        Self {
            subject: field("Subject"),
            from: field("From"),
            to: field("To"),
            reply_to: field("Reply-To"),
            content_type: field("Content-Type"),
            date: field("Date"),
            body: walk.body,
            attachments: walk.attachments,
            links: walk.links,
            headers,
            root,
        }
    }

    /// The Date header as an RFC 2822 timestamp, if it parses
    #[must_use]
    pub fn parsed_date(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc2822(self.date.trim()).ok()
    }

    #[must_use]
    pub const fn has_attachments(&self) -> bool {
        !self.attachments.is_empty()
    }
}

/// Metadata for a part carrying a `Content-Disposition` header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// Declared filename, if any
    pub filename: Option<String>,

    /// `main/sub` content type
    pub content_type: String,

    /// Payload length as transported. For base64 parts this is the encoded
    /// length, roughly 4/3 of the decoded size plus line breaks.
    pub size: usize,
}

impl Attachment {
    #[must_use]
    pub fn from_part(part: &MimePart) -> Self {
        Self {
            filename: part.filename.clone(),
            content_type: part.content_type.essence(),
            size: part.encoded_size(),
        }
    }
}
