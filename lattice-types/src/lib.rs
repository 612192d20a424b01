//! Shared type definitions for the Lattice content-modeling core.
//!
//! This crate defines the primitives both subsystems depend on:
//! - [`TopicId`] — identifier for a node in the topic taxonomy
//! - [`Submission`] — read-only view of the current form submission
//!
//! Domain-specific types (field-type descriptors, topic rows, filters)
//! belong to `lattice-fields` and `lattice-topics`, not here.

mod ids;
mod submission;

pub use ids::TopicId;
pub use submission::Submission;
