//! Choice presenter: shuffles the four choices and remaps the answer

use crate::core::question::{ChoiceLabel, Question};
use crate::sampling::{RandomSource, shuffle};
use crate::session::assembled::{AssembledQuestion, PresentedChoice};

/// Shuffle a question's labels and locate the correct one in the new order
pub fn present_question<R: RandomSource + ?Sized>(
    question: &Question,
    rng: &mut R,
) -> AssembledQuestion {
    let order = shuffle(&ChoiceLabel::ALL, rng);

    let shuffled_choices: Vec<PresentedChoice> = order
        .iter()
        .map(|&key| PresentedChoice {
            key,
            text: question.choices.text(key).to_string(),
        })
        .collect();

    // Every label appears once in `order`, so the position always exists
    let remapped_correct_answer = order
        .iter()
        .position(|&key| key == question.correct_answer)
        .unwrap_or_default();

    AssembledQuestion {
        question: question.clone(),
        shuffled_choices,
        remapped_correct_answer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::difficulty::Difficulty;
    use crate::core::domain::Domain;
    use crate::core::question::Choices;
    use crate::sampling::SeededRandom;
    use std::collections::HashSet;

    fn question(correct: ChoiceLabel) -> Question {
        Question::new(
            "q1",
            Domain::Caan,
            Difficulty::Easy,
            "prompt",
            Choices::new("alpha", "bravo", "charlie", "delta"),
            correct,
        )
    }

    #[test]
    fn test_remap_points_at_correct_text() {
        let mut rng = SeededRandom::new(123);
        for label in ChoiceLabel::ALL {
            let q = question(label);
            for _ in 0..25 {
                let assembled = present_question(&q, &mut rng);
                let chosen = &assembled.shuffled_choices[assembled.remapped_correct_answer];
                assert_eq!(chosen.key, label);
                assert_eq!(chosen.text, q.correct_text());
            }
        }
    }

    #[test]
    fn test_each_label_once() {
        let mut rng = SeededRandom::new(5);
        let assembled = present_question(&question(ChoiceLabel::B), &mut rng);
        assert_eq!(assembled.shuffled_choices.len(), 4);
        let keys: HashSet<ChoiceLabel> =
            assembled.shuffled_choices.iter().map(|c| c.key).collect();
        assert_eq!(keys.len(), 4);
        assert!(assembled.remapped_correct_answer < 4);
        for choice in &assembled.shuffled_choices {
            assert_eq!(choice.text, assembled.question.choices.text(choice.key));
        }
    }

    #[test]
    fn test_orders_vary_across_draws() {
        let mut rng = SeededRandom::new(99);
        let q = question(ChoiceLabel::A);
        let orders: HashSet<Vec<ChoiceLabel>> = (0..50)
            .map(|_| {
                present_question(&q, &mut rng)
                    .shuffled_choices
                    .iter()
                    .map(|c| c.key)
                    .collect()
            })
            .collect();
        assert!(orders.len() > 1);
    }

    #[test]
    fn test_is_correct_helper() {
        let mut rng = SeededRandom::new(8);
        let assembled = present_question(&question(ChoiceLabel::D), &mut rng);
        let right = assembled.remapped_correct_answer;
        assert!(assembled.is_correct(right));
        assert!(!assembled.is_correct((right + 1) % 4));
        assert_eq!(assembled.correct_choice().map(|c| c.key), Some(ChoiceLabel::D));
    }
}
