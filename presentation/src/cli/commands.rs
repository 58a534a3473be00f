//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use prep_domain::{Domain, ExamPreset};
use std::path::PathBuf;

/// Output format for sessions and reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored text
    Text,
    /// JSON output
    Json,
}

/// Exam size on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExamSize {
    /// 15 questions, 20 minutes
    Mini,
    /// 30 questions, 45 minutes
    Full,
}

impl From<ExamSize> for ExamPreset {
    fn from(size: ExamSize) -> Self {
        match size {
            ExamSize::Mini => ExamPreset::Mini,
            ExamSize::Full => ExamPreset::Full,
        }
    }
}

/// Subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Practice a single domain, unseen questions first
    Practice {
        /// Domain code (BOS25, CAAN, SNP, RNRF, SDGR, HSAN)
        #[arg(short, long, value_name = "CODE")]
        domain: Domain,

        /// Number of questions
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },

    /// Timed mixed-domain exam
    Exam {
        /// Exam size preset
        #[arg(short, long, value_enum, default_value = "full")]
        size: ExamSize,

        /// Number of questions (overrides the preset size)
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },

    /// Weak domains and harder questions first
    Adaptive {
        /// Number of questions
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },

    /// Check the question bank composition and rationale format
    Validate,

    /// Show readiness and pass likelihood
    Progress,
}

/// CLI arguments for dcf-prep
#[derive(Parser, Debug)]
#[command(name = "dcf-prep")]
#[command(author, version, about = "Certification exam prep - practice, exams and progress")]
#[command(long_about = r#"
dcf-prep assembles study sessions from a bank of multiple-choice questions.

Sessions:
  practice   One domain, questions you have not seen recently first
  exam       All domains, balanced 30/40/30 across easy/medium/hard
  adaptive   Weak domains first, harder questions first

Configuration files are loaded from (in priority order):
1. DCF_PREP_* env      e.g. DCF_PREP_PRACTICE__COUNT=20
2. --config <path>     Explicit config file
3. ./dcf-prep.toml     Project-level config
4. ~/.config/dcf-prep/config.toml   Global config

Example:
  dcf-prep practice --domain SNP -n 10
  dcf-prep --seed 42 exam --size mini
  dcf-prep -o json --no-interactive exam
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Seed for a reproducible session (defaults to the clock)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Path to the question bank JSON file
    #[arg(long, value_name = "PATH", global = true)]
    pub bank: Option<PathBuf>,

    /// Path to the progress JSON file
    #[arg(long, value_name = "PATH", global = true)]
    pub progress: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Print the assembled session and exit without grading
    #[arg(long, global = true)]
    pub no_interactive: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_practice() {
        let cli = Cli::parse_from(["dcf-prep", "practice", "--domain", "snp", "-n", "5"]);
        assert_eq!(
            cli.command,
            Some(Command::Practice {
                domain: Domain::Snp,
                count: Some(5)
            })
        );
    }

    #[test]
    fn test_parse_exam_defaults_to_full() {
        let cli = Cli::parse_from(["dcf-prep", "exam"]);
        assert_eq!(
            cli.command,
            Some(Command::Exam {
                size: ExamSize::Full,
                count: None
            })
        );
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::parse_from([
            "dcf-prep",
            "exam",
            "--size",
            "mini",
            "--seed",
            "42",
            "-o",
            "json",
            "--no-interactive",
            "-vv",
        ]);
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert!(cli.no_interactive);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_unknown_domain_rejected() {
        let result = Cli::try_parse_from(["dcf-prep", "practice", "--domain", "XYZ"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_show_config_without_command() {
        let cli = Cli::parse_from(["dcf-prep", "--show-config"]);
        assert!(cli.show_config);
        assert!(cli.command.is_none());
    }
}
