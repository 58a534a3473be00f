//! Bank builders shared by unit tests

use crate::core::difficulty::Difficulty;
use crate::core::domain::Domain;
use crate::core::question::{ChoiceLabel, Choices, Question};

pub(crate) fn question(id: &str, domain: Domain, difficulty: Difficulty) -> Question {
    let correct = ChoiceLabel::ALL[id.bytes().map(usize::from).sum::<usize>() % 4];
    Question::new(
        id,
        domain,
        difficulty,
        format!("Prompt for {id}"),
        Choices::new(
            format!("{id} choice A"),
            format!("{id} choice B"),
            format!("{id} choice C"),
            format!("{id} choice D"),
        ),
        correct,
    )
}

/// `per_domain` questions in every domain, ids like `SNP-007`
pub(crate) fn bank_per_domain(per_domain: usize, difficulty: Difficulty) -> Vec<Question> {
    Domain::ALL
        .iter()
        .flat_map(|&domain| {
            (0..per_domain)
                .map(move |i| question(&format!("{}-{i:03}", domain.code()), domain, difficulty))
        })
        .collect()
}

/// `per_cell` questions for every (domain, difficulty) pair
pub(crate) fn balanced_bank(per_cell: usize) -> Vec<Question> {
    let mut bank = Vec::new();
    for domain in Domain::ALL {
        for difficulty in Difficulty::ALL {
            for i in 0..per_cell {
                let id = format!("{}-{}-{i:03}", domain.code(), difficulty.as_str());
                bank.push(question(&id, domain, difficulty));
            }
        }
    }
    bank
}
