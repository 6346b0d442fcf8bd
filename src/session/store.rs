//! Persistence of the last analysis result

use crate::error::Result;
use crate::processing::matcher::MatchResult;
use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The triple persisted between invocations, plus bookkeeping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionData {
    pub resume_text: String,
    pub job_text: String,
    pub resume_file: Option<String>,
    pub job_file: Option<String>,
    pub result: MatchResult,
    pub saved_at: DateTime<Utc>,
}

/// Saves and restores the last analysis as a JSON file.
///
/// Loading is lenient: a missing, unreadable or malformed file reads as
/// "no prior session". Saving overwrites any prior session wholesale.
pub struct SessionStore {
    path: PathBuf,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            path: Self::default_path(),
        }
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("ats-match")
            .join("session.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist an analysis, overwriting any previous session.
    pub fn save(&self, session: &SessionData) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(session)?;
        std::fs::write(&self.path, content)?;
        debug!("Session saved to {}", self.path.display());
        Ok(())
    }

    /// Load the last persisted session, or `None` if there is none.
    ///
    /// Malformed stored data is treated as "no prior session" and never
    /// propagated as a parse error.
    pub fn load(&self) -> Option<SessionData> {
        let content = std::fs::read_to_string(&self.path).ok()?;

        match serde_json::from_str(&content) {
            Ok(session) => Some(session),
            Err(e) => {
                warn!(
                    "Ignoring malformed session file {}: {}",
                    self.path.display(),
                    e
                );
                None
            }
        }
    }

    /// Remove any persisted session. Removing an absent session succeeds.
    pub fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                debug!("Session cleared at {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

impl SessionData {
    pub fn new(
        resume_text: String,
        job_text: String,
        resume_file: Option<String>,
        job_file: Option<String>,
        result: MatchResult,
    ) -> Self {
        Self {
            resume_text,
            job_text,
            resume_file,
            job_file,
            result,
            saved_at: Utc::now(),
        }
    }
}
