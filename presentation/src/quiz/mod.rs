//! Interactive quiz over stdin/stdout

mod runner;

pub use runner::{Answer, QuizRunner, parse_answer};
