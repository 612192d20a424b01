//! Identifier types used throughout the Lattice core.
//!
//! Topic ids are generated by the relational store at insert time, so the
//! newtype wraps the integer row id rather than a random identifier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Unique identifier for a topic in the taxonomy tree.
///
/// Wraps the store-generated row id. `TopicId::ROOT` (zero) is the sentinel
/// parent id of top-level topics; it never identifies a real row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopicId(i64);

impl TopicId {
    /// Sentinel parent id for topics at the top of the tree.
    pub const ROOT: TopicId = TopicId(0);

    /// Creates a topic id from a raw row id.
    #[must_use]
    pub const fn from_raw(id: i64) -> Self {
        Self(id)
    }

    /// Returns the underlying row id.
    #[must_use]
    pub const fn as_raw(&self) -> i64 {
        self.0
    }

    /// True for the root sentinel.
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.0 == 0
    }

    /// Parses a topic id from a string.
    pub fn parse(s: &str) -> Result<Self, ParseIntError> {
        Ok(Self(s.parse()?))
    }
}

impl fmt::Display for TopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TopicId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl From<i64> for TopicId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}
