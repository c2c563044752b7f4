//! Expense record model
//!
//! Mirrors the hosted `expenses` table row. The sorter never mutates a
//! record; it only reorders them.

use crate::date;
use serde::{Deserialize, Serialize};

/// A single expense row as returned by the backing store.
///
/// All three timestamp fields are optional strings; the effective timestamp
/// of a record is resolved through the priority chain
/// `transaction_date` then `created_at` then `updated_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub name: String,
    pub amount: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_cash: bool,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub transaction_date: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Expense {
    /// Resolve the record's effective timestamp: the first present field in
    /// priority order, or `None` when the record carries no timestamp at all.
    pub fn effective_timestamp(&self) -> Option<&str> {
        self.transaction_date
            .as_deref()
            .or(self.created_at.as_deref())
            .or(self.updated_at.as_deref())
    }

    /// Effective timestamp as the radix sort key, in epoch milliseconds.
    ///
    /// Placement policy for degraded input: a record whose timestamp is
    /// missing or unparseable gets key 0, grouping it at the oldest end of
    /// the output (first in ascending order, last in descending order).
    /// Pre-epoch timestamps are clamped to 0 as well; the decimal-digit
    /// passes require non-negative keys.
    pub fn sort_key_ms(&self) -> i64 {
        self.effective_timestamp()
            .and_then(date::timestamp_ms)
            .map(|ms| ms.max(0))
            .unwrap_or(0)
    }
}
