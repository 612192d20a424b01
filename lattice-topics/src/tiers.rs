//! Tiered flattening of the topic tree.

use crate::topic::Topic;
use lattice_types::TopicId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Maximum number of tiers the flattened view renders: the root level plus
/// four levels beneath it. Deeper topics stay in storage but are omitted
/// from the tiered listing.
pub const MAX_TIER_DEPTH: usize = 5;

/// One entry in the flattened tree: the topic id and its ancestry path
/// joined by `" > "`, e.g. `Shoes > Adidas > Crosstrainers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TieredTopic {
    pub id: TopicId,
    pub display_name: String,
}

/// Groups topics by parent id, preserving the incoming row order within
/// each group. Shared by the tiered walk and the cascade delete's
/// child scan.
pub(crate) fn children_by_parent(topics: &[Topic]) -> HashMap<TopicId, Vec<(TopicId, String)>> {
    let mut children: HashMap<TopicId, Vec<(TopicId, String)>> = HashMap::new();
    for topic in topics {
        children
            .entry(topic.parent)
            .or_default()
            .push((topic.id, topic.name.clone()));
    }
    children
}

/// Flattens topics into breadcrumb entries, depth-first from the root.
///
/// Each topic appears exactly once (it has exactly one parent); siblings
/// keep the order of the incoming rows. Returns nothing when no topic sits
/// at the root level. Subtrees hanging off a missing parent are never
/// reached, consistent with the dangling-parent contract on
/// [`Topic::parent`].
#[must_use]
pub fn tier_topics(topics: &[Topic]) -> Vec<TieredTopic> {
    let children = children_by_parent(topics);
    let Some(roots) = children.get(&TopicId::ROOT) else {
        return Vec::new();
    };

    let mut tiers = Vec::new();
    for (id, name) in roots {
        walk(&children, *id, name.clone(), 1, &mut tiers);
    }
    tiers
}

fn walk(
    children: &HashMap<TopicId, Vec<(TopicId, String)>>,
    id: TopicId,
    display_name: String,
    tier: usize,
    out: &mut Vec<TieredTopic>,
) {
    out.push(TieredTopic {
        id,
        display_name: display_name.clone(),
    });

    if tier >= MAX_TIER_DEPTH {
        return;
    }
    if let Some(kids) = children.get(&id) {
        for (kid_id, kid_name) in kids {
            walk(
                children,
                *kid_id,
                format!("{display_name} > {kid_name}"),
                tier + 1,
                out,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topic(id: i64, name: &str, parent: i64) -> Topic {
        Topic {
            id: TopicId::from_raw(id),
            name: name.to_string(),
            description: String::new(),
            parent: TopicId::from_raw(parent),
            deleted: false,
        }
    }

    #[test]
    fn empty_input_yields_no_tiers() {
        assert!(tier_topics(&[]).is_empty());
    }

    #[test]
    fn no_root_level_topics_yields_no_tiers() {
        let topics = vec![topic(2, "Adidas", 1), topic(3, "Crosstrainers", 2)];
        assert!(tier_topics(&topics).is_empty());
    }

    #[test]
    fn paths_join_ancestry_with_angle_brackets() {
        let topics = vec![
            topic(1, "Shoes", 0),
            topic(2, "Adidas", 1),
            topic(3, "Crosstrainers", 2),
        ];
        let tiers = tier_topics(&topics);
        let names: Vec<&str> = tiers.iter().map(|t| t.display_name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Shoes", "Shoes > Adidas", "Shoes > Adidas > Crosstrainers"]
        );
    }

    #[test]
    fn each_topic_is_visited_exactly_once() {
        let topics = vec![
            topic(1, "A", 0),
            topic(2, "B", 0),
            topic(3, "A1", 1),
            topic(4, "B1", 2),
        ];
        let tiers = tier_topics(&topics);
        assert_eq!(tiers.len(), 4);
        let mut ids: Vec<TopicId> = tiers.iter().map(|t| t.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn depth_cap_omits_the_sixth_tier() {
        // Chain of six: root at tier 1, leaf at tier 6.
        let topics = vec![
            topic(1, "T1", 0),
            topic(2, "T2", 1),
            topic(3, "T3", 2),
            topic(4, "T4", 3),
            topic(5, "T5", 4),
            topic(6, "T6", 5),
        ];
        let tiers = tier_topics(&topics);
        assert_eq!(tiers.len(), MAX_TIER_DEPTH);
        assert_eq!(tiers.last().unwrap().display_name, "T1 > T2 > T3 > T4 > T5");
        assert!(!tiers.iter().any(|t| t.id == TopicId::from_raw(6)));
    }

    #[test]
    fn siblings_keep_row_order_with_subtrees_inline() {
        let topics = vec![
            topic(1, "Apparel", 0),
            topic(3, "Shoes", 0),
            topic(2, "Shirts", 1),
        ];
        let tiers = tier_topics(&topics);
        let names: Vec<&str> = tiers.iter().map(|t| t.display_name.as_str()).collect();
        assert_eq!(names, vec!["Apparel", "Apparel > Shirts", "Shoes"]);
    }
}
