use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::{lenient, Badge, EligibilityResult, EligibilityStatus};

/// Storage key used by the browser app.
pub const RECENT_CHECKS_KEY: &str = "recentChecks";
pub const MAX_RECENT_CHECKS: usize = 5;

/// A successful check, as persisted in the recent-checks list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckRecord {
    pub url: String,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub normalized_domain: String,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub eligibility_status: EligibilityStatus,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub checked_at: DateTime<Utc>,
}

impl CheckRecord {
    pub fn from_result(url: &str, result: &EligibilityResult, checked_at: DateTime<Utc>) -> Self {
        Self {
            url: url.to_string(),
            normalized_domain: result.merchant_domain(),
            eligibility_status: result.status(),
            title: result.product_info.title.clone(),
            image: result.image_url().map(str::to_string),
            checked_at,
        }
    }

    pub fn badge(&self) -> Badge {
        self.eligibility_status.badge()
    }
}

/// Most-recent-first list of checks, unique by URL and capped in length.
#[derive(Debug, Clone, PartialEq)]
pub struct RecentChecks {
    entries: Vec<CheckRecord>,
    limit: usize,
}

impl Default for RecentChecks {
    fn default() -> Self {
        Self::new(MAX_RECENT_CHECKS)
    }
}

impl RecentChecks {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            limit,
        }
    }

    /// Builds a list from previously stored entries, dropping any beyond `limit`.
    pub fn from_entries(mut entries: Vec<CheckRecord>, limit: usize) -> Self {
        entries.truncate(limit);
        Self { entries, limit }
    }

    /// Parses a stored JSON array. `None` means nothing was stored yet.
    pub fn from_stored(raw: Option<&str>, limit: usize) -> Result<Self> {
        let Some(raw) = raw else {
            return Ok(Self::new(limit));
        };
        let entries: Vec<CheckRecord> = serde_json::from_str(raw)?;
        Ok(Self::from_entries(entries, limit))
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.entries)?)
    }

    /// Moves `record` to the front, replacing any earlier check of the same URL.
    pub fn record(&mut self, record: CheckRecord) {
        self.entries.retain(|existing| existing.url != record.url);
        self.entries.insert(0, record);
        self.entries.truncate(self.limit);
    }

    pub fn entries(&self) -> &[CheckRecord] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&CheckRecord> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
