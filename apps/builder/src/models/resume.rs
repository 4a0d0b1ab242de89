use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Per-entry identity token. Process-local, used only as a list key and
/// deletion target; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

static LAST_TOKEN: AtomicI64 = AtomicI64::new(0);

impl EntryId {
    /// Issues a token from the high-resolution clock (nanoseconds since epoch).
    ///
    /// Tokens are strictly increasing within the process: a reading that is not
    /// ahead of the previous token is bumped to `previous + 1`.
    pub fn generate() -> Self {
        let now = Utc::now()
            .timestamp_nanos_opt()
            .unwrap_or_else(|| Utc::now().timestamp_micros().saturating_mul(1_000));

        let mut previous = LAST_TOKEN.load(Ordering::Relaxed);
        loop {
            let next = now.max(previous + 1);
            match LAST_TOKEN.compare_exchange_weak(previous, next, Ordering::AcqRel, Ordering::Relaxed)
            {
                Ok(_) => return EntryId(next.to_string()),
                Err(actual) => previous = actual,
            }
        }
    }
}

impl From<String> for EntryId {
    fn from(value: String) -> Self {
        EntryId(value)
    }
}

impl From<&str> for EntryId {
    fn from(value: &str) -> Self {
        EntryId(value.to_string())
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Record slices
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub title: String,
    pub summary: String,
}

/// One work-experience entry.
///
/// When `current` is true, `end_date` is ignored by preview and export but
/// remains stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub id: EntryId,
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(rename = "isCurrent")]
    pub current: bool,
    pub description: String,
}

/// One education entry. Same `current` / `end_date` rule as [`ExperienceEntry`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub id: EntryId,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(rename = "isCurrent")]
    pub current: bool,
}

/// The aggregate root: everything the preview and the exporter consume.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRecord {
    pub personal_info: PersonalInfo,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<String>,
}

/// The date range shown for an entry, honoring the `current` flag.
///
/// Returns `None` when there is no start date. The end side is `"Present"`
/// for current entries, the stored end date otherwise, possibly empty.
pub fn date_range<'a>(start: &'a str, end: &'a str, current: bool) -> Option<(&'a str, &'a str)> {
    if start.trim().is_empty() {
        return None;
    }
    let end = if current { "Present" } else { end };
    Some((start, end))
}
