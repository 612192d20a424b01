//! Read-only view of the current form submission.
//!
//! The host's HTTP layer collects POSTed key/value pairs and hands them to
//! the field framework as a [`Submission`]. Lookups return `Option` so
//! callers match on presence instead of testing loose falsiness.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Key→value map of one form submission.
///
/// A value is *truthy* when it is present, non-empty and not `"0"`; those
/// are the states HTML checkboxes and empty inputs collapse into. Callers that
/// only care about truthy values use [`Submission::truthy`]; callers that
/// need the raw distinction use [`Submission::get`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Submission {
    values: HashMap<String, String>,
}

impl Submission {
    /// Creates an empty submission.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field value, replacing any previous value for the key.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Returns the raw submitted value for a field, if the key was posted.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Returns the submitted value only when it is truthy.
    ///
    /// Missing keys, empty strings and `"0"` are uniformly absent.
    #[must_use]
    pub fn truthy(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Some("") | Some("0") | None => None,
            Some(value) => Some(value),
        }
    }

    /// True when nothing was posted at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of posted fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Submission {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
