//! Per-guild, per-member counters of detected words, with JSON persistence.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, path::PathBuf};
use tokio::fs as tokio_fs;

const STATS_PATH_REL_HOME: &str = ".config/jarbot/stats.json";

/// All counters, keyed by the guild id's string form to match the on-disk layout.
#[derive(Default, Serialize, Deserialize)]
pub struct CounterStore {
    servers: HashMap<String, ServerCounters>,
}

#[derive(Default, Serialize, Deserialize)]
pub struct ServerCounters {
    members: HashMap<String, MemberCounter>,
    /// Running total, incremented alongside the member counts rather than recomputed from
    /// them.  `record` is the only mutation path and updates both under one borrow.
    total: u64,
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberCounter {
    pub count: u64,
    /// Display name captured when the member was first counted.  Not kept in sync with later
    /// name changes.
    pub display_name: String,
}

impl CounterStore {
    pub fn path() -> Result<PathBuf> {
        crate::store::path_rel_home(STATS_PATH_REL_HOME)
    }

    /// Load the counters from disk.  A missing, unreadable, or malformed file is not an
    /// error; counting starts over from an empty store.
    pub async fn load() -> Result<Self> {
        let path = Self::path()?;

        let store = match tokio_fs::read(&path).await {
            Ok(data) => serde_json::from_slice(&data).unwrap_or_default(),
            Err(_) => Self::default(),
        };

        Ok(store)
    }

    pub async fn save(&self) -> Result<()> {
        let path = Self::path()?;
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| anyhow!("Could not serialize counters: {}", e))?;

        crate::store::write_full(&path, contents).await
    }

    /// Create the record for a previously-unseen guild.  Returns whether a record was
    /// created, in which case the caller is expected to persist the store.
    pub fn ensure_server(&mut self, server_id: &str) -> bool {
        if self.servers.contains_key(server_id) {
            return false;
        }

        self.servers
            .insert(server_id.to_string(), ServerCounters::default());
        true
    }

    /// Add `matches` to a member's counter and to the guild total, creating either record as
    /// needed.  The display name only seeds newly created member records.
    pub fn record(&mut self, server_id: &str, member_id: &str, display_name: &str, matches: u64) {
        let server = self.servers.entry(server_id.to_string()).or_default();

        let member = server
            .members
            .entry(member_id.to_string())
            .or_insert_with(|| MemberCounter {
                count: 0,
                display_name: display_name.to_string(),
            });

        member.count += matches;
        server.total += matches;
    }

    pub fn member_count(&self, server_id: &str, member_id: &str) -> Option<u64> {
        self.servers
            .get(server_id)?
            .members
            .get(member_id)
            .map(|member| member.count)
    }

    /// Members of a guild by count descending, truncated to `limit`.  Ties keep a stable
    /// relative order within one call; no particular tie-break beyond that.
    pub fn top(&self, server_id: &str, limit: usize) -> Vec<(&String, &MemberCounter)> {
        let Some(server) = self.servers.get(server_id) else {
            return Vec::new();
        };

        let mut members: Vec<(&String, &MemberCounter)> = server.members.iter().collect();
        members.sort_by(|a, b| b.1.count.cmp(&a.1.count));
        members.truncate(limit);
        members
    }

    /// The guild's stored running total.  Zero for an unseen guild.
    pub fn total(&self, server_id: &str) -> u64 {
        self.servers
            .get(server_id)
            .map(|server| server.total)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn record_increments_member_and_total() {
        let mut store = CounterStore::default();
        store.record("1", "42", "alice", 2);
        store.record("1", "42", "alice", 3);

        assert_eq!(store.member_count("1", "42"), Some(5));
        assert_eq!(store.total("1"), 5);
    }

    #[test]
    fn totals_are_scoped_per_server() {
        let mut store = CounterStore::default();
        store.record("1", "42", "alice", 2);
        store.record("2", "42", "alice", 7);

        assert_eq!(store.total("1"), 2);
        assert_eq!(store.total("2"), 7);
        assert_eq!(store.total("3"), 0);
    }

    #[test]
    fn display_name_is_a_first_sight_snapshot() {
        let mut store = CounterStore::default();
        store.record("1", "42", "alice", 1);
        store.record("1", "42", "renamed", 1);

        let top = store.top("1", 10);
        assert_eq!(top[0].1.display_name, "alice");
    }

    #[test]
    fn ensure_server_creates_once() {
        let mut store = CounterStore::default();
        assert!(store.ensure_server("1"));
        assert!(!store.ensure_server("1"));
        assert_eq!(store.total("1"), 0);
    }

    #[test]
    fn top_sorts_descending_and_truncates() {
        let mut store = CounterStore::default();
        store.record("1", "a", "a", 5);
        store.record("1", "b", "b", 12);
        store.record("1", "c", "c", 12);

        let top = store.top("1", 2);
        assert_eq!(top.len(), 2);
        // The tied members outrank the third; their mutual order is unspecified.
        assert_eq!(top[0].1.count, 12);
        assert_eq!(top[1].1.count, 12);
    }

    #[test]
    fn stats_file_shape_parses() {
        let raw = r#"{
            "servers": {
                "1": {
                    "members": {"42": {"count": 3, "displayName": "alice"}},
                    "total": 3
                }
            }
        }"#;
        let store: CounterStore = serde_json::from_str(raw).unwrap();
        assert_eq!(store.member_count("1", "42"), Some(3));
        assert_eq!(store.total("1"), 3);
    }
}
