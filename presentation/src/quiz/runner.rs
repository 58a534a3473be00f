//! Quiz loop: asks each question, collects one response per question.

use crate::output::console::ConsoleFormatter;
use prep_domain::{AssembledSession, SessionMode};
use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant};

/// One line of user input, interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    /// Presented index 0..=3
    Choice(usize),
    Skip,
    Quit,
}

/// Parse `A`-`D` / `1`-`4` (case-insensitive), empty to skip, `/quit` or `q` to stop.
///
/// Returns `None` for anything else.
pub fn parse_answer(input: &str) -> Option<Answer> {
    let input = input.trim();
    if input.is_empty() {
        return Some(Answer::Skip);
    }
    if input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("/quit") {
        return Some(Answer::Quit);
    }

    let mut chars = input.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return None;
    };
    match c.to_ascii_uppercase() {
        'A'..='D' => Some(Answer::Choice(c.to_ascii_uppercase() as usize - 'A' as usize)),
        '1'..='4' => Some(Answer::Choice(c as usize - '1' as usize)),
        _ => None,
    }
}

/// Runs a session against line-oriented input and output
pub struct QuizRunner<R: BufRead, W: Write> {
    input: R,
    output: W,
    clock: Box<dyn FnMut() -> Instant>,
}

impl<R: BufRead, W: Write> QuizRunner<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            clock: Box::new(Instant::now),
        }
    }

    /// Replace the clock used for the session time limit
    pub fn with_clock(mut self, clock: impl FnMut() -> Instant + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Ask every question and return one response per question.
    ///
    /// Practice and adaptive sessions show feedback after each answer;
    /// exams only at the end. Quitting, end of input, or running past the
    /// session's time limit skips the rest. An answer entered after the
    /// limit does not count.
    pub fn run(&mut self, session: &AssembledSession) -> io::Result<Vec<Option<usize>>> {
        let deadline = session
            .time_limit_minutes
            .map(|minutes| (self.clock)() + Duration::from_secs(u64::from(minutes) * 60));
        writeln!(self.output, "{}", ConsoleFormatter::format_session_header(session))?;
        writeln!(
            self.output,
            "Answer with A-D or 1-4, press Enter to skip, q to stop.\n"
        )?;

        let mut responses = vec![None; session.len()];
        for (index, question) in session.questions.iter().enumerate() {
            if self.expired(deadline) {
                writeln!(self.output, "Time is up.")?;
                break;
            }
            write!(
                self.output,
                "{}",
                ConsoleFormatter::format_question(index, session.len(), question)
            )?;

            let answer = match self.prompt()? {
                Some(answer) => answer,
                None => break,
            };
            let response = match answer {
                Answer::Choice(choice) => Some(choice),
                Answer::Skip => None,
                Answer::Quit => break,
            };
            if self.expired(deadline) {
                writeln!(self.output, "Time is up.")?;
                break;
            }
            responses[index] = response;

            if session.mode != SessionMode::Exam {
                writeln!(
                    self.output,
                    "{}",
                    ConsoleFormatter::format_feedback(question, response)
                )?;
            } else {
                writeln!(self.output)?;
            }
        }

        self.output.flush()?;
        Ok(responses)
    }

    fn expired(&mut self, deadline: Option<Instant>) -> bool {
        deadline.is_some_and(|deadline| (self.clock)() >= deadline)
    }

    /// Read until a valid answer; `None` at end of input
    fn prompt(&mut self) -> io::Result<Option<Answer>> {
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            match parse_answer(&line) {
                Some(answer) => return Ok(Some(answer)),
                None => writeln!(self.output, "Please answer A-D or 1-4.")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prep_domain::{
        AdaptiveConfig, ChoiceLabel, Choices, Difficulty, Domain, Question,
        assemble_adaptive_session,
    };
    use std::collections::VecDeque;
    use std::io::Cursor;

    fn session(mode: SessionMode) -> AssembledSession {
        let bank: Vec<Question> = (0..3)
            .map(|n| {
                Question::new(
                    format!("SDGR-{n:03}"),
                    Domain::Sdgr,
                    Difficulty::Easy,
                    format!("Question {n}"),
                    Choices::new("w", "x", "y", "z"),
                    ChoiceLabel::A,
                )
            })
            .collect();
        let questions = assemble_adaptive_session(&bank, &[], &AdaptiveConfig { total: 3 }, 5);
        AssembledSession::new(mode, 5, questions)
    }

    #[test]
    fn test_parse_answer() {
        assert_eq!(parse_answer("a\n"), Some(Answer::Choice(0)));
        assert_eq!(parse_answer(" D "), Some(Answer::Choice(3)));
        assert_eq!(parse_answer("2"), Some(Answer::Choice(1)));
        assert_eq!(parse_answer(""), Some(Answer::Skip));
        assert_eq!(parse_answer("Q"), Some(Answer::Quit));
        assert_eq!(parse_answer("/quit"), Some(Answer::Quit));
        assert_eq!(parse_answer("E"), None);
        assert_eq!(parse_answer("5"), None);
        assert_eq!(parse_answer("AB"), None);
    }

    #[test]
    fn test_run_collects_one_response_per_question() {
        let session = session(SessionMode::Practice);
        let input = Cursor::new("b\n\n4\n");
        let mut output = Vec::new();

        let responses = QuizRunner::new(input, &mut output).run(&session).unwrap();
        assert_eq!(responses, vec![Some(1), None, Some(3)]);
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Question 0"));
    }

    #[test]
    fn test_invalid_input_reprompts() {
        let session = session(SessionMode::Exam);
        let input = Cursor::new("x\nhello\nc\na\n1\n");
        let mut output = Vec::new();

        let responses = QuizRunner::new(input, &mut output).run(&session).unwrap();
        assert_eq!(responses, vec![Some(2), Some(0), Some(0)]);
        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches("Please answer").count(), 2);
    }

    #[test]
    fn test_zero_minute_limit_skips_everything() {
        let session = session(SessionMode::Exam).with_time_limit(0);
        let mut output = Vec::new();

        let responses = QuizRunner::new(Cursor::new("a\nb\nc\n"), &mut output)
            .run(&session)
            .unwrap();
        assert_eq!(responses, vec![None, None, None]);
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Time is up."));
        assert!(!text.contains("[1/3]"));
    }

    #[test]
    fn test_time_limit_stops_mid_session() {
        let session = session(SessionMode::Exam).with_time_limit(20);
        let start = Instant::now();
        let minutes = |m: u64| start + Duration::from_secs(m * 60);
        // start, then one reading before and after each answer
        let mut ticks = VecDeque::from([
            minutes(0),
            minutes(0),
            minutes(5),
            minutes(10),
            minutes(25),
        ]);
        let last = minutes(30);
        let clock = move || ticks.pop_front().unwrap_or(last);

        let mut output = Vec::new();
        let responses = QuizRunner::new(Cursor::new("b\nc\nd\n"), &mut output)
            .with_clock(clock)
            .run(&session)
            .unwrap();

        // the second answer arrived after the deadline
        assert_eq!(responses, vec![Some(1), None, None]);
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Time is up."));
        assert!(!text.contains("[3/3]"));
    }

    #[test]
    fn test_quit_and_eof_skip_remaining() {
        let session = session(SessionMode::Practice);
        let responses = QuizRunner::new(Cursor::new("a\nq\n"), Vec::new())
            .run(&session)
            .unwrap();
        assert_eq!(responses, vec![Some(0), None, None]);

        let responses = QuizRunner::new(Cursor::new("c\n"), Vec::new())
            .run(&session)
            .unwrap();
        assert_eq!(responses, vec![Some(2), None, None]);
    }
}
