//! ats-match: keyword-based resume and job description matching tool

mod cli;
mod config;
mod error;
mod input;
mod output;
mod processing;
mod session;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction, SessionAction};
use config::Config;
use error::{AtsMatchError, Result};
use input::manager::InputManager;
use log::{error, info, warn};
use output::formatter::ReportGenerator;
use output::report::AnalysisReport;
use processing::document::{Document, DocumentType};
use processing::matcher::KeywordMatcher;
use session::store::{SessionData, SessionStore};
use std::process;

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config) {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn session_store(config: &Config) -> SessionStore {
    match &config.session.session_file {
        Some(path) => SessionStore::with_path(path.clone()),
        None => SessionStore::new(),
    }
}

fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            job,
            output,
            save,
            detailed,
            no_session,
        } => {
            info!("Starting resume/job description analysis");

            cli::validate_file_extension(&resume, &["txt", "md", "markdown"])
                .map_err(|e| AtsMatchError::InvalidInput(format!("Resume file: {}", e)))?;

            cli::validate_file_extension(&job, &["txt", "md", "markdown"])
                .map_err(|e| AtsMatchError::InvalidInput(format!("Job description file: {}", e)))?;

            let output_format = cli::parse_output_format(&output).map_err(AtsMatchError::InvalidInput)?;

            let mut input_manager = InputManager::new();
            let resume_text = input_manager.extract_text(&resume)?;
            let job_text = input_manager.extract_text(&job)?;

            let resume_doc = Document::new(
                resume_text.clone(),
                Some(resume.to_string_lossy().to_string()),
                DocumentType::Resume,
            );
            let job_doc = Document::new(
                job_text.clone(),
                Some(job.to_string_lossy().to_string()),
                DocumentType::JobDescription,
            );

            info!(
                "Resume: {} words, {} characters",
                resume_doc.metadata.word_count, resume_doc.metadata.character_count
            );
            info!(
                "Job description: {} words, {} characters",
                job_doc.metadata.word_count, job_doc.metadata.character_count
            );

            if detailed {
                println!("Resume preview:\n{}\n", resume_doc.preview(300));
                println!("Job description preview:\n{}\n", job_doc.preview(300));
            }

            let matcher = KeywordMatcher::from_config(&config);
            let result = matcher.analyze(&resume_text, &job_text);

            let report = AnalysisReport::new(
                result.clone(),
                resume_doc.file_path.clone(),
                job_doc.file_path.clone(),
            );

            let generator =
                ReportGenerator::new(config.display.color_output, detailed || config.display.detailed);
            let rendered = generator.generate(&report, output_format)?;
            println!("{}", rendered);

            if let Some(save_path) = save {
                generator.save_to_file(&save_path, &rendered)?;
                println!("Report saved to {}", save_path.display());
            }

            if !no_session {
                let store = session_store(&config);
                let session = SessionData::new(
                    resume_text,
                    job_text,
                    resume_doc.file_path,
                    job_doc.file_path,
                    result,
                );
                // Persistence is best-effort; the analysis itself already succeeded.
                if let Err(e) = store.save(&session) {
                    warn!("Could not persist session: {}", e);
                }
            }
        }

        Commands::Session { action } => match action {
            SessionAction::Show { output } => {
                let output_format =
                    cli::parse_output_format(&output).map_err(AtsMatchError::InvalidInput)?;

                let store = session_store(&config);
                match store.load() {
                    Some(session) => {
                        info!("Session last saved at {}", session.saved_at);
                        let report = AnalysisReport::from_session(&session);
                        let generator = ReportGenerator::new(
                            config.display.color_output,
                            config.display.detailed,
                        );
                        println!("{}", generator.generate(&report, output_format)?);
                    }
                    None => {
                        println!("No stored session. Run `ats-match analyze` first.");
                    }
                }
            }

            SessionAction::Clear => {
                let store = session_store(&config);
                store.clear()?;
                println!("Session cleared.");
            }
        },

        Commands::Export { output, save } => {
            let output_format =
                cli::parse_output_format(&output).map_err(AtsMatchError::InvalidInput)?;

            let store = session_store(&config);
            let session = store.load().ok_or_else(|| {
                AtsMatchError::NoSession("nothing to export; run `ats-match analyze` first".to_string())
            })?;

            let report = AnalysisReport::from_session(&session);
            let generator = ReportGenerator::new(false, config.display.detailed);
            let rendered = generator.generate(&report, output_format)?;

            match save {
                Some(save_path) => {
                    generator.save_to_file(&save_path, &rendered)?;
                    println!("Report exported to {}", save_path.display());
                }
                None => println!("{}", rendered),
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("Current configuration\n");
                println!("Minimum token length: {}", config.extraction.min_token_length);
                println!("Max displayed keywords: {}", config.display.max_display_keywords);
                println!("Default format: {:?}", config.display.format);
                println!("Color output: {}", config.display.color_output);
                match &config.session.session_file {
                    Some(path) => println!("Session file: {}", path.display()),
                    None => println!("Session file: {}", session_store(&config).path().display()),
                }
            }

            Some(ConfigAction::Reset) => {
                let default_config = Config::default();
                default_config.save()?;
                println!("Configuration reset to defaults.");
            }
        },
    }

    Ok(())
}
