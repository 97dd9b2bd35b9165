//! Classification of MIME parts into body text, links and attachments

use crate::links::extract_links;
use crate::part::{MimePart, Payload};
use crate::types::Attachment;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Everything the walker collects from one message tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkOutput {
    /// Text of the first `text/*` leaf, empty if there is none
    pub body: String,

    /// Links found in `body`
    pub links: Vec<String>,

    /// One entry per leaf carrying a `Content-Disposition` header
    pub attachments: Vec<Attachment>,

    /// Number of parts visited, containers included
    pub parts_visited: usize,
}

/// Walk `root` depth-first in document order.
///
/// Containers only contribute their children. The first text leaf becomes
/// the body and is scanned for links; later text leaves are ignored unless
/// they carry a disposition. Any leaf with a disposition is recorded as an
/// attachment, including the body part itself.
#[must_use]
pub fn walk(root: &MimePart) -> WalkOutput {
    let mut out = WalkOutput::default();
    let mut body_captured = false;

    for part in root.walk() {
        out.parts_visited += 1;

        if part.content_type.is_multipart() {
            trace!("{}: container", part.content_type);
            continue;
        }

        if part.content_type.is_text() && !body_captured {
            let text = part
                .payload()
                .and_then(Payload::as_text)
                .unwrap_or_default();
            out.links.extend(extract_links(text));
            out.body = text.to_string();
            body_captured = true;
            trace!("{}: body ({} bytes)", part.content_type, text.len());
        }

        if part.disposition.is_some() {
            trace!("{}: attachment {:?}", part.content_type, part.filename);
            out.attachments.push(Attachment::from_part(part));
        }
    }

    out
}
