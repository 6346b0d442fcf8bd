//! Keyword matching and coverage scoring

use crate::config::Config;
use crate::processing::extractor::KeywordExtractor;
use serde::{Deserialize, Serialize};

/// Result of comparing a resume against a job description.
///
/// Immutable once built. `matched_keywords` and `missing_keywords` are
/// ordered by first occurrence in the job text and truncated for display;
/// `matched_count` and `total_job_keywords` carry the full cardinalities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Coverage score, 0-100. 0 when the job description has no keywords.
    pub score: u8,
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub matched_count: usize,
    pub total_job_keywords: usize,
    pub breakdown: ScoreBreakdown,
    pub improvements: Vec<String>,
}

/// Per-category sub-scores shown alongside the overall score.
///
/// Only `keywords` is computed from the texts. The other three are
/// placeholder values scaled from the overall score into fixed bands; they
/// carry no analytical signal of their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub skills: u8,
    pub experience: u8,
    pub education: u8,
    pub keywords: u8,
}

static STATIC_IMPROVEMENTS: [&str; 4] = [
    "Include more specific technical skills mentioned in the job description",
    "Quantify achievements with numbers and metrics",
    "Use action verbs to describe your experience",
    "Ensure all required qualifications are clearly mentioned",
];

/// Compares keyword sets of two texts and produces a [`MatchResult`].
pub struct KeywordMatcher {
    extractor: KeywordExtractor,
    max_display_keywords: usize,
}

impl Default for KeywordMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordMatcher {
    pub fn new() -> Self {
        Self {
            extractor: KeywordExtractor::new(),
            max_display_keywords: 10,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            extractor: KeywordExtractor::with_min_token_length(config.extraction.min_token_length),
            max_display_keywords: config.display.max_display_keywords,
        }
    }

    /// Score `resume_text` against `job_text`.
    ///
    /// Only keyword presence matters; occurrence counts do not affect the
    /// score. Keywords unique to the resume are ignored. A job description
    /// yielding no keywords scores 0 rather than failing.
    pub fn analyze(&self, resume_text: &str, job_text: &str) -> MatchResult {
        let resume_keywords = self.extractor.extract(resume_text);
        let job_keywords = self.extractor.extract(job_text);

        let mut matched_keywords = Vec::new();
        let mut missing_keywords = Vec::new();
        for word in job_keywords.keywords() {
            if resume_keywords.contains(word) {
                matched_keywords.push(word.to_string());
            } else {
                missing_keywords.push(word.to_string());
            }
        }

        let matched_count = matched_keywords.len();
        let total_job_keywords = job_keywords.len();
        let score = coverage_score(matched_count, total_job_keywords);
        let improvements = build_improvements(&missing_keywords);

        matched_keywords.truncate(self.max_display_keywords);
        missing_keywords.truncate(self.max_display_keywords);

        MatchResult {
            score,
            matched_keywords,
            missing_keywords,
            matched_count,
            total_job_keywords,
            breakdown: ScoreBreakdown::from_score(score),
            improvements,
        }
    }
}

fn coverage_score(matched: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    (matched as f64 / total as f64 * 100.0).round() as u8
}

fn build_improvements(missing: &[String]) -> Vec<String> {
    let mut improvements = Vec::with_capacity(STATIC_IMPROVEMENTS.len() + 1);

    if !missing.is_empty() {
        let top_missing: Vec<&str> = missing.iter().take(3).map(String::as_str).collect();
        improvements.push(format!(
            "Add {} to better match job requirements",
            top_missing.join(", ")
        ));
    }

    improvements.extend(STATIC_IMPROVEMENTS.iter().map(|s| s.to_string()));
    improvements
}

impl ScoreBreakdown {
    /// Derive placeholder sub-scores from the overall coverage score.
    ///
    /// `skills`, `experience` and `education` are the score projected into
    /// the 60-100, 70-100 and 80-100 bands; `keywords` is the score itself.
    pub fn from_score(score: u8) -> Self {
        Self {
            skills: scale_into_band(score, 60),
            experience: scale_into_band(score, 70),
            education: scale_into_band(score, 80),
            keywords: score,
        }
    }
}

fn scale_into_band(score: u8, floor: u8) -> u8 {
    floor + (u16::from(score) * u16::from(100 - floor) / 100) as u8
}
