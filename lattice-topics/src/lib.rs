//! Hierarchical topic taxonomy for the Lattice content-modeling core.
//!
//! Topics form a self-referencing tree used to categorize content. The
//! store provides CRUD, a filtered flat listing, a tiered listing that
//! renders each topic's ancestry as a breadcrumb path, and a cascading
//! soft delete.
//!
//! # Delete semantics
//!
//! Topics are only ever tombstoned (`topic_deleted` flag); no `DELETE`
//! statement is issued by this crate. Deleting a topic also tombstones its
//! *direct* children; grandchildren are left untouched. That one-level
//! cascade reproduces long-standing behavior that content depends on and
//! is deliberate.

mod error;
mod store;
mod tiers;
mod topic;

pub use error::{TopicResult, TopicStoreError};
pub use store::TopicStore;
pub use tiers::{MAX_TIER_DEPTH, TieredTopic, tier_topics};
pub use topic::{SortDirection, Topic, TopicFilter, TopicSort};
