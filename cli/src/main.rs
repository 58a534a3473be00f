//! CLI entrypoint for dcf-prep
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use prep_application::{
    CompleteSessionUseCase, SessionParams, SessionRequest, ShowProgressUseCase,
    StartSessionInput, StartSessionUseCase, ValidateBankUseCase,
};
use prep_domain::{AssembledSession, Severity};
use prep_infrastructure::{
    ConfigLoader, FileConfig, FileOutputFormat, JsonProgressStore, JsonQuestionBank,
};
use prep_presentation::{Cli, Command, ConsoleFormatter, OutputFormat, QuizRunner};
use std::io::{self, Write};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    // stderr keeps stdout clean for JSON output
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    check_config(&file_config)?;

    if !file_config.output.color {
        colored::control::set_override(false);
    }
    let format = cli.output.unwrap_or(match file_config.output.format {
        Some(FileOutputFormat::Json) => OutputFormat::Json,
        Some(FileOutputFormat::Text) | None => OutputFormat::Text,
    });

    let Some(command) = cli.command.clone() else {
        bail!("No command given. Run `dcf-prep --help` for usage.");
    };

    // === Dependency Injection ===
    let params = file_config.to_session_params();
    let bank_path = cli.bank.clone().unwrap_or_else(|| file_config.bank_path());
    let progress_path = cli
        .progress
        .clone()
        .or_else(|| file_config.progress_path())
        .context("No data directory available; pass --progress <PATH>")?;
    info!(
        "Bank: {}, progress: {}",
        bank_path.display(),
        progress_path.display()
    );

    let bank = Arc::new(JsonQuestionBank::new(bank_path));
    let progress = Arc::new(JsonProgressStore::new(progress_path));

    match command {
        Command::Validate => {
            let report = ValidateBankUseCase::new(bank, params.bank_policy.clone())
                .execute()
                .await?;
            match format {
                OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(&report)),
                OutputFormat::Text => println!("{}", ConsoleFormatter::format_bank_report(&report)),
            }
            if !report.passed() {
                bail!("Question bank failed validation");
            }
        }
        Command::Progress => {
            let snapshot = ShowProgressUseCase::new(progress).execute().await?;
            match format {
                OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(&snapshot)),
                OutputFormat::Text => println!("{}", ConsoleFormatter::format_progress(&snapshot)),
            }
        }
        Command::Practice { domain, count } => {
            let request = SessionRequest::Practice { domain, count };
            run_session(&cli, format, request, bank, progress, params).await?;
        }
        Command::Exam { size, count } => {
            let request = SessionRequest::Exam {
                preset: size.into(),
                count,
            };
            run_session(&cli, format, request, bank, progress, params).await?;
        }
        Command::Adaptive { count } => {
            let request = SessionRequest::Adaptive { count };
            run_session(&cli, format, request, bank, progress, params).await?;
        }
    }

    Ok(())
}

/// Log config issues; any error-level issue aborts
fn check_config(config: &FileConfig) -> Result<()> {
    let mut errors = 0;
    for issue in config.validate() {
        match issue.severity {
            Severity::Error => {
                error!("Config: {}", issue.error);
                errors += 1;
            }
            Severity::Warning => warn!("Config: {}", issue.error),
        }
    }
    if errors > 0 {
        bail!("Configuration has {} error(s)", errors);
    }
    Ok(())
}

async fn run_session(
    cli: &Cli,
    format: OutputFormat,
    request: SessionRequest,
    bank: Arc<JsonQuestionBank>,
    progress: Arc<JsonProgressStore>,
    params: SessionParams,
) -> Result<()> {
    let mut input = StartSessionInput::new(request);
    if let Some(seed) = cli.seed {
        input = input.with_seed(seed);
    }

    let start = StartSessionUseCase::new(bank, progress.clone(), params.clone());
    let session = start.execute(input).await?;

    if cli.no_interactive {
        print_session(&session, format);
        return Ok(());
    }
    if session.is_empty() {
        println!("No questions available for this session.");
        return Ok(());
    }

    // quiz prompts go to stderr when stdout carries JSON
    let stdin = io::stdin();
    let responses = match format {
        OutputFormat::Text => QuizRunner::new(stdin.lock(), io::stdout()).run(&session)?,
        OutputFormat::Json => QuizRunner::new(stdin.lock(), io::stderr()).run(&session)?,
    };

    let report = CompleteSessionUseCase::new(progress, params)
        .execute(&session, &responses)
        .await?;

    match format {
        OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(&report)),
        OutputFormat::Text => println!("{}", ConsoleFormatter::format_report(&report)),
    }
    io::stdout().flush()?;
    Ok(())
}

fn print_session(session: &AssembledSession, format: OutputFormat) {
    match format {
        OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(session)),
        OutputFormat::Text => println!("{}", ConsoleFormatter::format_session(session)),
    }
}
