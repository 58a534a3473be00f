//! Console output formatter for sessions, reports and progress

use colored::Colorize;
use prep_application::{ProgressSnapshot, SessionReport};
use prep_domain::{AssembledQuestion, AssembledSession, BankReport, Difficulty, Severity};
use serde::Serialize;

/// Letters shown next to presented choices, by position
const POSITION_LABELS: [char; 4] = ['A', 'B', 'C', 'D'];

/// Formats study output for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format any serializable value as JSON
    pub fn format_json<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    /// Session banner shown before the first question
    pub fn format_session_header(session: &AssembledSession) -> String {
        let mut output = Self::header(&format!("{} session", session.mode));
        output.push('\n');
        output.push_str(&format!(
            "{} {}   {} {}",
            "Questions:".cyan().bold(),
            session.len(),
            "Seed:".cyan().bold(),
            session.seed
        ));
        if let Some(minutes) = session.time_limit_minutes {
            output.push_str(&format!("   {} {} min", "Time limit:".cyan().bold(), minutes));
        }
        output.push('\n');
        output
    }

    /// The whole session with answers marked (non-interactive text output)
    pub fn format_session(session: &AssembledSession) -> String {
        let mut output = Self::format_session_header(session);
        for (index, question) in session.questions.iter().enumerate() {
            output.push('\n');
            output.push_str(&Self::format_question(index, session.len(), question));
            if let Some(label) = POSITION_LABELS.get(question.remapped_correct_answer) {
                output.push_str(&format!("   {} {}\n", "Answer:".green().bold(), label));
            }
        }
        output.push_str(&Self::footer());
        output
    }

    /// One question with its choices in presented order
    pub fn format_question(index: usize, total: usize, question: &AssembledQuestion) -> String {
        let q = &question.question;
        let mut output = format!(
            "{} {} {}\n{}\n",
            format!("[{}/{}]", index + 1, total).yellow().bold(),
            format!("{} · {}", q.domain, q.difficulty).dimmed(),
            q.id.dimmed(),
            q.question
        );
        for (label, choice) in POSITION_LABELS.iter().zip(&question.shuffled_choices) {
            output.push_str(&format!("   {}) {}\n", label.to_string().bold(), choice.text));
        }
        output
    }

    /// Immediate feedback after a practice answer
    pub fn format_feedback(question: &AssembledQuestion, response: Option<usize>) -> String {
        let correct_label = POSITION_LABELS
            .get(question.remapped_correct_answer)
            .copied()
            .unwrap_or('?');
        let verdict = match response {
            Some(index) if question.is_correct(index) => "Correct".green().bold(),
            Some(_) => "Incorrect".red().bold(),
            None => "Skipped".yellow().bold(),
        };

        let mut output = format!(
            "{} (answer: {}) {}\n",
            verdict,
            correct_label,
            question.question.correct_text()
        );
        let rationale = &question.question.rationale.short;
        if !rationale.is_empty() {
            output.push_str(&format!("   {}\n", rationale.dimmed()));
        }
        output
    }

    /// Score summary after grading
    pub fn format_report(report: &SessionReport) -> String {
        let score = &report.score;
        let mut output = Self::header("Results");
        output.push('\n');

        let percent = format!("{}%", score.percent);
        let percent = if score.percent >= 70 {
            percent.green().bold()
        } else {
            percent.red().bold()
        };
        output.push_str(&format!(
            "{} {}/{} ({})\n",
            "Score:".cyan().bold(),
            score.correct,
            score.total,
            percent
        ));

        if !score.by_domain.is_empty() {
            output.push_str(&Self::section_header("By domain"));
            for (domain, tally) in &score.by_domain {
                output.push_str(&format!(
                    "  {:<6} {:>2}/{:<2} {:>3}%\n",
                    domain.code(),
                    tally.correct,
                    tally.total,
                    tally.percent()
                ));
            }
        }

        output.push('\n');
        output.push_str(&Self::readiness_lines(
            report.readiness,
            report.pass_likelihood,
            &report
                .weak_domains
                .iter()
                .map(|d| d.code())
                .collect::<Vec<_>>(),
        ));
        output.push_str(&Self::footer());
        output
    }

    /// Bank validation report
    pub fn format_bank_report(report: &BankReport) -> String {
        let mut output = Self::header("Question bank");
        output.push('\n');
        output.push_str(&format!("{} {}\n", "Total:".cyan().bold(), report.total));

        output.push_str(&Self::section_header("Domains"));
        for (domain, count) in &report.domain_counts {
            output.push_str(&format!("  {:<6} {}\n", domain.code(), count));
        }

        output.push_str(&Self::section_header("Difficulty"));
        for difficulty in Difficulty::ALL {
            output.push_str(&format!(
                "  {:<6} {:>4}  ({:.3})\n",
                difficulty.as_str(),
                report.difficulty_counts.get(&difficulty).copied().unwrap_or(0),
                report.difficulty_ratio(difficulty)
            ));
        }

        if !report.issues.is_empty() {
            output.push_str(&Self::section_header("Issues"));
            for issue in &report.issues {
                let tag = match issue.severity {
                    Severity::Error => "error".red().bold(),
                    Severity::Warning => "warning".yellow().bold(),
                };
                output.push_str(&format!("  {}: {}\n", tag, issue.message));
            }
        }

        output.push('\n');
        if report.passed() {
            output.push_str(&format!("{}\n", "PASS".green().bold()));
        } else {
            output.push_str(&format!("{}\n", "FAIL".red().bold()));
        }
        output
    }

    /// Progress summary
    pub fn format_progress(snapshot: &ProgressSnapshot) -> String {
        let mut output = Self::header("Progress");
        output.push('\n');
        output.push_str(&format!(
            "{} {} ({} correct)\n",
            "Answered:".cyan().bold(),
            snapshot.total_answered,
            snapshot.total_correct
        ));

        if !snapshot.domain_accuracy.is_empty() {
            output.push_str(&Self::section_header("Domain accuracy"));
            for (domain, accuracy) in &snapshot.domain_accuracy {
                output.push_str(&format!("  {:<6} {:>3}%\n", domain.code(), accuracy));
            }
        }

        output.push_str(&format!(
            "\n{} {}\n",
            "Exams taken:".cyan().bold(),
            snapshot.exams_taken
        ));
        if let Some(last) = &snapshot.last_exam {
            output.push_str(&format!(
                "{} {}% on {}\n",
                "Last exam:".cyan().bold(),
                last.score,
                last.when.format("%Y-%m-%d %H:%M")
            ));
        }

        output.push('\n');
        output.push_str(&Self::readiness_lines(
            snapshot.readiness,
            snapshot.pass_likelihood,
            &snapshot
                .weak_domains
                .iter()
                .map(|d| d.code())
                .collect::<Vec<_>>(),
        ));
        output
    }

    fn readiness_lines(readiness: u32, pass_likelihood: u32, weak: &[&str]) -> String {
        let mut output = format!(
            "{} {}%   {} {}%\n",
            "Readiness:".cyan().bold(),
            readiness,
            "Pass likelihood:".cyan().bold(),
            pass_likelihood
        );
        if weak.is_empty() {
            output.push_str(&format!("{} none\n", "Weak domains:".cyan().bold()));
        } else {
            output.push_str(&format!(
                "{} {}\n",
                "Weak domains:".cyan().bold(),
                weak.join(", ").red()
            ));
        }
        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prep_domain::{
        ChoiceLabel, Choices, Domain, Question, SeededRandom, SessionMode, present_question,
    };

    fn assembled() -> AssembledQuestion {
        let question = Question::new(
            "HSAN-001",
            Domain::Hsan,
            Difficulty::Medium,
            "Which form is filed first?",
            Choices::new("Form 1", "Form 2", "Form 3", "Form 4"),
            ChoiceLabel::D,
        )
        .with_rationale("Form 4 opens the file.", "");
        present_question(&question, &mut SeededRandom::new(8))
    }

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_format_question_lists_choices_in_order() {
        plain();
        let q = assembled();
        let text = ConsoleFormatter::format_question(0, 3, &q);
        assert!(text.starts_with("[1/3]"));
        assert!(text.contains("Which form is filed first?"));
        for (label, choice) in POSITION_LABELS.iter().zip(&q.shuffled_choices) {
            assert!(text.contains(&format!("{}) {}", label, choice.text)));
        }
    }

    #[test]
    fn test_feedback_verdicts() {
        plain();
        let q = assembled();
        let right = q.remapped_correct_answer;
        let wrong = (right + 1) % 4;

        assert!(ConsoleFormatter::format_feedback(&q, Some(right)).starts_with("Correct"));
        assert!(ConsoleFormatter::format_feedback(&q, Some(wrong)).starts_with("Incorrect"));
        let skipped = ConsoleFormatter::format_feedback(&q, None);
        assert!(skipped.starts_with("Skipped"));
        assert!(skipped.contains("Form 4"));
        assert!(skipped.contains("Form 4 opens the file."));
    }

    #[test]
    fn test_session_json_includes_remapped_answer() {
        let session = AssembledSession::new(SessionMode::Practice, 8, vec![assembled()]);
        let json: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_json(&session)).unwrap();
        assert_eq!(json["mode"], "practice");
        assert_eq!(json["questions"][0]["id"], "HSAN-001");
        assert!(json["questions"][0]["remapped_correct_answer"].is_u64());
    }

    #[test]
    fn test_format_session_marks_answers() {
        plain();
        let session = AssembledSession::new(SessionMode::Exam, 1, vec![assembled()])
            .with_time_limit(20);
        let text = ConsoleFormatter::format_session(&session);
        assert!(text.contains("Time limit: 20 min"));
        assert!(text.contains("Answer:"));
    }
}
