//! Topic rows and query filters.

use lattice_types::TopicId;
use serde::{Deserialize, Serialize};

/// One node in the topic tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub id: TopicId,
    pub name: String,
    pub description: String,
    /// `TopicId::ROOT` for top-level topics. A non-root parent is expected
    /// to reference an existing topic; that is the caller's contract and is
    /// not validated here.
    pub parent: TopicId,
    /// Soft-delete tombstone.
    pub deleted: bool,
}

/// Column a topic listing is ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopicSort {
    #[default]
    Name,
    Id,
    Parent,
}

impl TopicSort {
    /// The whitelisted column name; filters never reach the SQL string
    /// with caller-supplied identifiers.
    pub(crate) fn column(self) -> &'static str {
        match self {
            TopicSort::Name => "topic_name",
            TopicSort::Id => "topic_id",
            TopicSort::Parent => "topic_parent_id",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub(crate) fn keyword(self) -> &'static str {
        match self {
            SortDirection::Ascending => "ASC",
            SortDirection::Descending => "DESC",
        }
    }
}

/// Filters for topic listings. The default filter matches everything,
/// ordered by name ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicFilter {
    /// Exact parent-id match.
    pub parent: Option<TopicId>,
    /// Exact id match.
    pub id: Option<TopicId>,
    /// Substring match on the topic name.
    pub name_contains: Option<String>,
    pub sort: TopicSort,
    pub direction: SortDirection,
    pub limit: Option<u32>,
    /// Applied only together with `limit`.
    pub offset: Option<u32>,
}

impl TopicFilter {
    pub fn parent(mut self, parent: TopicId) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn id(mut self, id: TopicId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name_contains(mut self, fragment: impl Into<String>) -> Self {
        self.name_contains = Some(fragment.into());
        self
    }

    pub fn sort(mut self, sort: TopicSort, direction: SortDirection) -> Self {
        self.sort = sort;
        self.direction = direction;
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }
}
