//! Adaptive assembler: weak domains first, harder questions first

use crate::core::domain::Domain;
use crate::core::question::Question;
use crate::sampling::{RandomSource, SeededRandom, shuffle};
use crate::session::assembled::AssembledQuestion;
use crate::session::config::AdaptiveConfig;
use crate::session::presenter::present_question;
use std::cmp::Reverse;

/// Assemble a mixed session that targets the caller's weak domains.
///
/// The bank is shuffled, then stably ordered so weak-domain questions
/// lead and, within each group, hard precedes medium precedes easy.
/// With no weak domains this is a hardness-ordered random mix.
pub fn assemble_adaptive_session(
    bank: &[Question],
    weak_domains: &[Domain],
    config: &AdaptiveConfig,
    seed: u64,
) -> Vec<AssembledQuestion> {
    let mut rng = SeededRandom::new(seed);
    assemble_adaptive_session_with(bank, weak_domains, config, &mut rng)
}

/// Same as [`assemble_adaptive_session`] over any [`RandomSource`]
pub fn assemble_adaptive_session_with<R: RandomSource + ?Sized>(
    bank: &[Question],
    weak_domains: &[Domain],
    config: &AdaptiveConfig,
    rng: &mut R,
) -> Vec<AssembledQuestion> {
    let pool: Vec<&Question> = bank.iter().collect();
    let mut ordered = shuffle(&pool, rng);
    ordered.sort_by_key(|q| (!weak_domains.contains(&q.domain), Reverse(q.difficulty.rank())));

    ordered
        .into_iter()
        .take(config.total)
        .map(|q| present_question(q, rng))
        .collect()
}
