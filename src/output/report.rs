//! Report structure wrapping an analysis result with provenance

use crate::processing::matcher::MatchResult;
use crate::session::store::SessionData;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A match result together with where it came from and when.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub result: MatchResult,
    pub resume_file: Option<String>,
    pub job_file: Option<String>,
    pub generated_at: DateTime<Utc>,
    pub app_version: String,
}

impl AnalysisReport {
    pub fn new(result: MatchResult, resume_file: Option<String>, job_file: Option<String>) -> Self {
        Self {
            result,
            resume_file,
            job_file,
            generated_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Rebuild a report from a stored session, keeping its timestamp.
    pub fn from_session(session: &SessionData) -> Self {
        Self {
            result: session.result.clone(),
            resume_file: session.resume_file.clone(),
            job_file: session.job_file.clone(),
            generated_at: session.saved_at,
            app_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
