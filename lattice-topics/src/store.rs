//! SQLite-backed persistence for the topic tree.

use crate::error::TopicResult;
use crate::tiers::{TieredTopic, children_by_parent, tier_topics};
use crate::topic::{Topic, TopicFilter};
use lattice_types::TopicId;
use rusqlite::types::Value;
use rusqlite::{Connection, params, params_from_iter};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::debug;

/// Persistent store for the topic taxonomy backed by SQLite.
///
/// Every operation is a single synchronous request/response; the connection
/// mutex is held per statement only. The cascade delete's read-then-update
/// sequence is intentionally not wrapped in a transaction, so a child
/// inserted concurrently with a delete can escape the cascade.
pub struct TopicStore {
    conn: Arc<Mutex<Connection>>,
}

impl TopicStore {
    /// Opens (or creates) a topic store at the given path.
    pub fn open(path: impl AsRef<Path>) -> TopicResult<Self> {
        let conn = Connection::open(path)?;
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.init_schema()?;
        Ok(store)
    }

    /// Opens an in-memory topic store (for testing).
    pub fn open_in_memory() -> TopicResult<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> TopicResult<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS topics (
                topic_id INTEGER PRIMARY KEY AUTOINCREMENT,
                topic_name TEXT NOT NULL,
                topic_description TEXT NOT NULL DEFAULT '',
                topic_parent_id INTEGER NOT NULL DEFAULT 0,
                topic_deleted TEXT NOT NULL DEFAULT '0'
            );
            ",
        )?;
        debug!("topic schema ready");
        Ok(())
    }

    /// Inserts a topic and returns its generated id.
    ///
    /// Not idempotent: re-invoking creates a duplicate row, so callers
    /// de-duplicate before retrying.
    pub fn new_topic(
        &self,
        name: &str,
        description: &str,
        parent: TopicId,
    ) -> TopicResult<TopicId> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO topics (topic_name, topic_description, topic_parent_id, topic_deleted)
             VALUES (?1, ?2, ?3, '0')",
            params![name, description, parent.as_raw()],
        )?;
        Ok(TopicId::from_raw(conn.last_insert_rowid()))
    }

    /// Updates a topic's name, description and parent in place. The deleted
    /// flag is not mutable through update.
    pub fn update_topic(
        &self,
        id: TopicId,
        name: &str,
        description: &str,
        parent: TopicId,
    ) -> TopicResult<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "UPDATE topics SET topic_name = ?1, topic_description = ?2, topic_parent_id = ?3
             WHERE topic_id = ?4",
            params![name, description, parent.as_raw(), id.as_raw()],
        )?;
        Ok(())
    }

    /// Fetches a single topic by id, deleted or not. `None` means no such
    /// topic exists.
    pub fn get_topic(&self, id: TopicId) -> TopicResult<Option<Topic>> {
        let topics = self.get_topics(&TopicFilter::default().id(id), true)?;
        Ok(topics.map(|mut rows| rows.remove(0)))
    }

    /// Lists topics matching the filter, ordered and paged as requested.
    ///
    /// Returns `None` when the query matches no rows at all (the explicit
    /// empty-result signal callers branch on for "no topics"), never `Some`
    /// of an empty list.
    pub fn get_topics(
        &self,
        filter: &TopicFilter,
        include_deleted: bool,
    ) -> TopicResult<Option<Vec<Topic>>> {
        let mut sql = String::from(
            "SELECT topic_id, topic_name, topic_description, topic_parent_id, topic_deleted
             FROM topics",
        );
        let mut clauses: Vec<&str> = Vec::new();
        let mut bindings: Vec<Value> = Vec::new();

        if let Some(parent) = filter.parent {
            clauses.push("topic_parent_id = ?");
            bindings.push(Value::Integer(parent.as_raw()));
        }
        if let Some(id) = filter.id {
            clauses.push("topic_id = ?");
            bindings.push(Value::Integer(id.as_raw()));
        }
        if let Some(fragment) = &filter.name_contains {
            clauses.push("topic_name LIKE ?");
            bindings.push(Value::Text(format!("%{fragment}%")));
        }
        if !include_deleted {
            clauses.push("topic_deleted = '0'");
        }

        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }

        // Sort columns come from the whitelist enum, never from input.
        sql.push_str(" ORDER BY ");
        sql.push_str(filter.sort.column());
        sql.push(' ');
        sql.push_str(filter.direction.keyword());

        if let Some(limit) = filter.limit {
            let offset = filter.offset.unwrap_or(0);
            sql.push_str(" LIMIT ?");
            bindings.push(Value::Integer(i64::from(limit)));
            sql.push_str(" OFFSET ?");
            bindings.push(Value::Integer(i64::from(offset)));
        }

        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(bindings), |row| {
            Ok(Topic {
                id: TopicId::from_raw(row.get(0)?),
                name: row.get(1)?,
                description: row.get(2)?,
                parent: TopicId::from_raw(row.get(3)?),
                deleted: row.get::<_, String>(4)? == "1",
            })
        })?;

        let mut topics = Vec::new();
        for row in rows {
            topics.push(row?);
        }

        if topics.is_empty() {
            Ok(None)
        } else {
            Ok(Some(topics))
        }
    }

    /// Soft-deletes a topic and its direct children.
    ///
    /// No existence check is made on `id`; deleting an unknown id is a
    /// silent no-op at the root level, though the child scan still runs.
    /// The cascade stops after one level; grandchildren stay visible under
    /// their tombstoned parent. The re-query sees non-deleted rows only, so
    /// children of an already-deleted topic are never re-flagged.
    pub fn delete_topic(&self, id: TopicId) -> TopicResult<()> {
        self.mark_deleted(id)?;

        let Some(topics) = self.get_topics(&TopicFilter::default(), false)? else {
            return Ok(());
        };

        let children = children_by_parent(&topics);
        if let Some(kids) = children.get(&id) {
            for (child_id, _) in kids {
                self.mark_deleted(*child_id)?;
            }
            debug!(topic = %id, children = kids.len(), "topic soft-deleted with direct children");
        } else {
            debug!(topic = %id, "topic soft-deleted");
        }

        Ok(())
    }

    fn mark_deleted(&self, id: TopicId) -> TopicResult<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "UPDATE topics SET topic_deleted = '1' WHERE topic_id = ?1",
            params![id.as_raw()],
        )?;
        Ok(())
    }

    /// Flattens the non-deleted topics matching the filter into breadcrumb
    /// entries (see [`tier_topics`]). Re-walks the rows on every call; no
    /// caching.
    pub fn get_tiered_topics(&self, filter: &TopicFilter) -> TopicResult<Vec<TieredTopic>> {
        match self.get_topics(filter, false)? {
            Some(topics) => Ok(tier_topics(&topics)),
            None => Ok(Vec::new()),
        }
    }
}
