//! Integration tests for ats-match

use ats_match::config::OutputFormat;
use ats_match::input::manager::InputManager;
use ats_match::output::formatter::ReportGenerator;
use ats_match::output::report::AnalysisReport;
use ats_match::processing::matcher::KeywordMatcher;
use ats_match::session::store::{SessionData, SessionStore};
use std::path::Path;
use tempfile::TempDir;

#[test]
fn test_text_extraction_from_txt() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let result = manager.extract_text(path);
    assert!(result.is_ok());

    let text = result.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("React"));
    assert!(text.contains("Node.js"));
}

#[test]
fn test_text_extraction_from_markdown() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.md");

    let result = manager.extract_text(path);
    assert!(result.is_ok());

    let text = result.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("React"));
    assert!(text.contains("Node.js"));
    // Should not contain markdown formatting
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
}

#[test]
fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    // First extraction
    let text1 = manager.extract_text(path).unwrap();
    assert_eq!(manager.cache_size(), 1);

    // Second extraction should use cache
    let text2 = manager.extract_text(path).unwrap();
    assert_eq!(text1, text2);
    assert_eq!(manager.cache_size(), 1);
}

#[test]
fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("resume.xyz");
    std::fs::write(&path, "irrelevant").unwrap();

    let result = manager.extract_text(&path);
    assert!(result.is_err());
}

#[test]
fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/nonexistent.txt");

    let result = manager.extract_text(path);
    assert!(result.is_err());
}

#[test]
fn test_end_to_end_analysis_over_fixtures() {
    let mut manager = InputManager::new();
    let resume_text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .unwrap();
    let job_text = manager
        .extract_text(Path::new("tests/fixtures/sample_job.txt"))
        .unwrap();

    let matcher = KeywordMatcher::new();
    let result = matcher.analyze(&resume_text, &job_text);

    assert!(result.score <= 100);
    assert!(result.total_job_keywords > 0);
    assert!(result.matched_keywords.iter().any(|k| k == "react"));
    assert!(result.matched_keywords.iter().any(|k| k == "javascript"));
    assert!(result.missing_keywords.iter().any(|k| k == "typescript"));

    // Same inputs, same result.
    let again = matcher.analyze(&resume_text, &job_text);
    assert_eq!(result, again);
}

#[test]
fn test_markdown_and_txt_resume_agree_on_shared_keywords() {
    let mut manager = InputManager::new();
    let txt = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .unwrap();
    let md = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.md"))
        .unwrap();

    let matcher = KeywordMatcher::new();
    let job = "React and JavaScript developer with Python and SQL knowledge";

    let from_txt = matcher.analyze(&txt, job);
    let from_md = matcher.analyze(&md, job);

    // Both renditions of the same resume cover the same job keywords.
    assert_eq!(from_txt.matched_keywords, from_md.matched_keywords);
    assert_eq!(from_txt.score, from_md.score);
}

#[test]
fn test_analysis_session_round_trip() {
    let dir = TempDir::new().unwrap();
    let store = SessionStore::with_path(dir.path().join("session.json"));

    let mut manager = InputManager::new();
    let resume_text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .unwrap();
    let job_text = manager
        .extract_text(Path::new("tests/fixtures/sample_job.txt"))
        .unwrap();

    let matcher = KeywordMatcher::new();
    let result = matcher.analyze(&resume_text, &job_text);

    let session = SessionData::new(
        resume_text.clone(),
        job_text.clone(),
        Some("tests/fixtures/sample_resume.txt".to_string()),
        Some("tests/fixtures/sample_job.txt".to_string()),
        result.clone(),
    );
    store.save(&session).unwrap();

    let restored = store.load().expect("saved session should load");
    assert_eq!(restored.resume_text, resume_text);
    assert_eq!(restored.job_text, job_text);
    assert_eq!(restored.result, result);

    store.clear().unwrap();
    assert!(store.load().is_none());
}

#[test]
fn test_exported_report_from_restored_session() {
    let dir = TempDir::new().unwrap();
    let store = SessionStore::with_path(dir.path().join("session.json"));

    let matcher = KeywordMatcher::new();
    let resume = "Python developer with SQL and React skills and cloud experience";
    let job = "Looking for a Python developer with React and AWS experience";
    let result = matcher.analyze(resume, job);

    let session = SessionData::new(resume.to_string(), job.to_string(), None, None, result);
    store.save(&session).unwrap();

    let restored = store.load().unwrap();
    let report = AnalysisReport::from_session(&restored);
    let generator = ReportGenerator::new(false, false);

    let text = generator.generate(&report, OutputFormat::Text).unwrap();
    assert!(text.starts_with("ATS Analysis Report\n\nScore: 67%\n\n"));
    assert!(text.contains("Matched Keywords: python, developer, react, experience\n"));
    assert!(text.contains("Missing Keywords: looking, aws\n"));
    assert!(text.contains("Improvements:\n1. Add looking, aws to better match job requirements"));

    let saved_path = dir.path().join("report.txt");
    generator.save_to_file(&saved_path, &text).unwrap();
    assert_eq!(std::fs::read_to_string(&saved_path).unwrap(), text);
}
