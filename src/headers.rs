//! Ordered header storage with case-insensitive lookup

use serde::{Deserialize, Serialize};

/// Header fields of a message or part, in the order they appeared.
///
/// Names keep their original casing. Repeated fields (e.g. `Received`) are
/// all kept; [`HeaderStore::get`] returns the first one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderStore {
    fields: Vec<(String, String)>,
}

impl HeaderStore {
    #[must_use]
    pub const fn new(fields: Vec<(String, String)>) -> Self {
        Self { fields }
    }

    pub(crate) fn from_mail_headers(headers: &[mailparse::MailHeader]) -> Self {
        Self::new(
            headers
                .iter()
                .map(|h| (h.get_key(), h.get_value()))
                .collect(),
        )
    }

    /// First value for `name`, or `default` when the field is absent
    #[must_use]
    pub fn get<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.first(name).unwrap_or(default)
    }

    /// First value for `name`, if present
    #[must_use]
    pub fn first(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Every value for `name`, in order
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.fields
            .iter()
            .filter(move |(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.first(name).is_some()
    }

    /// All fields as (name, value) pairs
    #[must_use]
    pub fn all(&self) -> &[(String, String)] {
        &self.fields
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
