//! Match records handed to result consumers

use crate::matching::MatchResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A match result stamped with the job it belongs to and when it was
/// computed. The core result stays timestamp-free; this wrapper is what the
/// CLI prints, ranks and saves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub job_id: String,
    pub matched_at: DateTime<Utc>,
    #[serde(flatten)]
    pub result: MatchResult,
}

impl MatchRecord {
    pub fn new(job_id: impl Into<String>, result: MatchResult) -> Self {
        Self {
            job_id: job_id.into(),
            matched_at: Utc::now(),
            result,
        }
    }
}

/// Order records best match first; ties fall back to the job id so ranked
/// output is stable.
pub fn rank_records(records: &mut [MatchRecord]) {
    records.sort_by(|a, b| {
        b.result
            .overall_score
            .partial_cmp(&a.result.overall_score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.job_id.cmp(&b.job_id))
    });
}
