//! MIME part tree

use crate::headers::HeaderStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Parsed `Content-Type` value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentType {
    /// Main type, lower-cased (e.g. "text")
    pub main: String,

    /// Subtype, lower-cased (e.g. "plain")
    pub sub: String,

    /// Parameters such as `charset`, `boundary` or `name`
    pub params: BTreeMap<String, String>,
}

impl ContentType {
    /// Split a `main/sub` essence. Anything unusable falls back to `text/plain`.
    #[must_use]
    pub fn new(essence: &str, params: BTreeMap<String, String>) -> Self {
        let essence = essence.trim().to_ascii_lowercase();
        let (main, sub) = match essence.split_once('/') {
            Some((main, sub)) if !main.is_empty() && !sub.is_empty() => {
                (main.to_string(), sub.to_string())
            }
            _ => ("text".to_string(), "plain".to_string()),
        };
        Self { main, sub, params }
    }

    /// `main/sub`
    #[must_use]
    pub fn essence(&self) -> String {
        format!("{}/{}", self.main, self.sub)
    }

    #[must_use]
    pub fn is_multipart(&self) -> bool {
        self.main == "multipart"
    }

    #[must_use]
    pub fn is_text(&self) -> bool {
        self.main == "text"
    }

    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

impl Default for ContentType {
    fn default() -> Self {
        Self::new("text/plain", BTreeMap::new())
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.main, self.sub)
    }
}

/// Decoded content of a leaf part
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Payload {
    /// Transfer- and charset-decoded text of a `text/*` part
    Text(String),

    /// Transfer-decoded bytes of any other part
    Binary(Vec<u8>),

    /// A non-text part with nothing after its headers
    Empty,
}

impl Payload {
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Binary(_) | Self::Empty => None,
        }
    }

    /// Decoded length in bytes
    #[must_use]
    pub const fn len(&self) -> usize {
        match self {
            Self::Text(text) => text.len(),
            Self::Binary(bytes) => bytes.len(),
            Self::Empty => 0,
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// What a part holds: either child parts or a payload, never both
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartBody {
    /// A `multipart/*` container with at least one child
    Multipart(Vec<MimePart>),

    /// Any other part
    Leaf {
        payload: Payload,

        /// Size of the payload as transported, before transfer decoding
        encoded_size: usize,
    },
}

/// One node of the message tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MimePart {
    pub content_type: ContentType,

    /// Raw `Content-Disposition` value, if the header is present
    pub disposition: Option<String>,

    /// `filename` from the disposition, or `name` from the content type
    pub filename: Option<String>,

    pub headers: HeaderStore,

    pub body: PartBody,
}

impl MimePart {
    #[must_use]
    pub const fn is_container(&self) -> bool {
        matches!(self.body, PartBody::Multipart(_))
    }

    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        !self.is_container()
    }

    /// Child parts; empty for leaves
    #[must_use]
    pub fn children(&self) -> &[Self] {
        match &self.body {
            PartBody::Multipart(children) => children,
            PartBody::Leaf { .. } => &[],
        }
    }

    #[must_use]
    pub const fn payload(&self) -> Option<&Payload> {
        match &self.body {
            PartBody::Multipart(_) => None,
            PartBody::Leaf { payload, .. } => Some(payload),
        }
    }

    /// Transported payload size; zero for containers
    #[must_use]
    pub const fn encoded_size(&self) -> usize {
        match self.body {
            PartBody::Multipart(_) => 0,
            PartBody::Leaf { encoded_size, .. } => encoded_size,
        }
    }

    /// Depth-first, pre-order traversal starting at this part
    #[must_use]
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }

    /// Number of parts in the tree, this one included
    #[must_use]
    pub fn part_count(&self) -> usize {
        self.walk().count()
    }
}

/// Pre-order iterator returned by [`MimePart::walk`]
#[derive(Debug, Clone)]
pub struct Walk<'a> {
    stack: Vec<&'a MimePart>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a MimePart;

    fn next(&mut self) -> Option<Self::Item> {
        let part = self.stack.pop()?;
        // Reversed so the first child is popped next
        self.stack.extend(part.children().iter().rev());
        Some(part)
    }
}
