//! Structural decode of raw message bytes into a [`MimePart`] tree

use crate::error::{ParseError, Result};
use crate::headers::HeaderStore;
use crate::part::{ContentType, MimePart, PartBody, Payload};
use mailparse::{ParsedMail, body::Body};
use tracing::{debug, warn};

/// Decode a complete RFC 5322 message.
///
/// Fails with [`ParseError::MalformedMessage`] when the header block cannot be
/// parsed or a multipart container is unusable (no boundary, no closing
/// delimiter, no parts). Undecodable leaf content is tolerated.
pub fn decode(raw: &[u8]) -> Result<MimePart> {
    let parsed = mailparse::parse_mail(raw)?;
    let root = convert(&parsed, "")?;

    debug!(
        "Decoded message: {} ({} parts)",
        root.content_type,
        root.part_count()
    );

    Ok(root)
}

fn convert(mail: &ParsedMail<'_>, path: &str) -> Result<MimePart> {
    let headers = HeaderStore::from_mail_headers(&mail.headers);
    let content_type = ContentType::new(&mail.ctype.mimetype, mail.ctype.params.clone());
    let disposition = headers.first("Content-Disposition").map(str::to_string);
    let filename = attachment_filename(mail);

    let body = if content_type.is_multipart() {
        PartBody::Multipart(convert_children(mail, &content_type, path)?)
    } else {
        decode_leaf(mail, &content_type, path)
    };

    Ok(MimePart {
        content_type,
        disposition,
        filename,
        headers,
        body,
    })
}

fn convert_children(
    mail: &ParsedMail<'_>,
    content_type: &ContentType,
    path: &str,
) -> Result<Vec<MimePart>> {
    let context = describe(path);
    let boundary = content_type
        .param("boundary")
        .filter(|b| !b.is_empty())
        .ok_or_else(|| {
            ParseError::malformed(&context, format!("{content_type} without boundary"))
        })?;

    // Only this container's own bytes count
    let closing = format!("--{boundary}--");
    if !has_delimiter_line(mail.raw_bytes, closing.as_bytes()) {
        return Err(ParseError::malformed(
            &context,
            format!("unterminated multipart, missing {closing}"),
        ));
    }

    if mail.subparts.is_empty() {
        return Err(ParseError::malformed(
            &context,
            format!("{content_type} contains no parts"),
        ));
    }

    mail.subparts
        .iter()
        .enumerate()
        .map(|(idx, sub)| {
            let child = if path.is_empty() {
                (idx + 1).to_string()
            } else {
                format!("{path}.{}", idx + 1)
            };
            convert(sub, &child)
        })
        .collect()
}

fn decode_leaf(mail: &ParsedMail<'_>, content_type: &ContentType, path: &str) -> PartBody {
    let encoded = encoded_body(mail);

    let payload = if content_type.is_text() {
        let text = mail.get_body().unwrap_or_else(|e| {
            warn!("Could not decode {content_type} in {}: {e}", describe(path));
            String::from_utf8_lossy(&encoded).into_owned()
        });
        Payload::Text(text)
    } else if encoded.is_empty() {
        Payload::Empty
    } else {
        let bytes = mail.get_body_raw().unwrap_or_else(|e| {
            warn!("Could not decode {content_type} in {}: {e}", describe(path));
            encoded.clone()
        });
        Payload::Binary(bytes)
    };

    PartBody::Leaf {
        payload,
        encoded_size: encoded.len(),
    }
}

/// Body bytes exactly as transported, before any transfer decoding
fn encoded_body(mail: &ParsedMail<'_>) -> Vec<u8> {
    match mail.get_body_encoded() {
        Body::Base64(body) | Body::QuotedPrintable(body) => body.get_raw().to_vec(),
        Body::SevenBit(body) | Body::EightBit(body) => body.get_raw().to_vec(),
        Body::Binary(body) => body.get_raw().to_vec(),
    }
}

fn attachment_filename(mail: &ParsedMail<'_>) -> Option<String> {
    mail.get_content_disposition()
        .params
        .get("filename")
        .or_else(|| mail.ctype.params.get("name"))
        .cloned()
}

/// Whether `delimiter` starts some line of `raw`
fn has_delimiter_line(raw: &[u8], delimiter: &[u8]) -> bool {
    raw.split(|&b| b == b'\n')
        .any(|line| line.starts_with(delimiter))
}

fn describe(path: &str) -> String {
    if path.is_empty() {
        "message".to_string()
    } else {
        format!("part {path}")
    }
}
