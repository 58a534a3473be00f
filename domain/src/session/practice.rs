//! Practice assembler: one domain, unseen questions first

use crate::core::question::Question;
use crate::sampling::{RandomSource, SeededRandom, shuffle};
use crate::session::assembled::AssembledQuestion;
use crate::session::config::PracticeConfig;
use crate::session::history::SessionHistory;
use crate::session::presenter::present_question;

/// Assemble a single-domain practice session from `seed`.
///
/// Returns at most `config.total` questions; fewer when the domain pool is
/// smaller. Fresh questions (absent from the recent practice history) are
/// always taken first; recently seen ones only fill the remaining slots.
pub fn assemble_practice_session(
    bank: &[Question],
    history: &SessionHistory,
    config: &PracticeConfig,
    seed: u64,
) -> Vec<AssembledQuestion> {
    let mut rng = SeededRandom::new(seed);
    assemble_practice_session_with(bank, history, config, &mut rng)
}

/// Same as [`assemble_practice_session`] over any [`RandomSource`]
pub fn assemble_practice_session_with<R: RandomSource + ?Sized>(
    bank: &[Question],
    history: &SessionHistory,
    config: &PracticeConfig,
    rng: &mut R,
) -> Vec<AssembledQuestion> {
    let recent = history.practice_set();
    let (fresh, seen): (Vec<&Question>, Vec<&Question>) = bank
        .iter()
        .filter(|q| q.domain == config.domain)
        .partition(|q| !recent.contains(q.id.as_str()));

    if fresh.len() >= config.total {
        return shuffle(&fresh, rng)
            .into_iter()
            .take(config.total)
            .map(|q| present_question(q, rng))
            .collect();
    }

    // Short fresh pool: keep every fresh question and fill from seen
    let fill = config.total - fresh.len();
    let mut pool = fresh;
    pool.extend(shuffle(&seen, rng).into_iter().take(fill));

    // seen fillers would otherwise always trail the fresh ones
    shuffle(&pool, rng)
        .into_iter()
        .map(|q| present_question(q, rng))
        .collect()
}
