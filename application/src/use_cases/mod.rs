//! Use cases of the study tool
//!
//! Each use case orchestrates domain services through the ports:
//!
//! - [`start_session`] - load bank and progress, assemble a session
//! - [`complete_session`] - grade responses and fold them into progress
//! - [`validate_bank`] - check bank composition and rationale format
//! - [`show_progress`] - readiness and pass-likelihood summary

pub mod complete_session;
pub mod show_progress;
pub mod start_session;
pub mod validate_bank;

#[cfg(test)]
pub(crate) mod fixtures {
    use prep_domain::{ChoiceLabel, Choices, Difficulty, Domain, Question};

    pub fn question(id: &str, domain: Domain, difficulty: Difficulty) -> Question {
        Question::new(
            id,
            domain,
            difficulty,
            format!("Prompt for {id}"),
            Choices::new("alpha", "bravo", "charlie", "delta"),
            ChoiceLabel::B,
        )
    }

    /// `per_cell` questions for every domain/difficulty pair
    pub fn balanced_bank(per_cell: usize) -> Vec<Question> {
        let mut bank = Vec::new();
        for domain in Domain::ALL {
            for difficulty in Difficulty::ALL {
                for n in 0..per_cell {
                    let id = format!("{}-{}-{:03}", domain.code(), difficulty.as_str(), n);
                    bank.push(question(&id, domain, difficulty));
                }
            }
        }
        bank
    }
}
