//! Exam assembler: mixed domains, difficulty-balanced, repeat-averse

use crate::core::difficulty::Difficulty;
use crate::core::domain::Domain;
use crate::core::question::Question;
use crate::sampling::{RandomSource, SeededRandom, shuffle, weighted_pick};
use crate::session::assembled::AssembledQuestion;
use crate::session::config::ExamConfig;
use crate::session::history::SessionHistory;
use crate::session::presenter::present_question;
use std::collections::{HashMap, HashSet};

/// Weight multiplier for questions served in a recent exam
pub const RECENT_EXAM_PENALTY: f64 = 0.1;

/// Lower bound on any candidate weight, so zero-weight domains stay
/// selectable with low probability
pub const MIN_CANDIDATE_WEIGHT: f64 = 0.0001;

/// Assemble a mixed-domain exam from `seed`.
///
/// Never returns more than `config.total` questions, and returns fewer
/// when a difficulty bucket runs dry.
pub fn assemble_exam_session(
    bank: &[Question],
    history: &SessionHistory,
    config: &ExamConfig,
    seed: u64,
) -> Vec<AssembledQuestion> {
    let mut rng = SeededRandom::new(seed);
    assemble_exam_session_with(bank, history, config, &mut rng)
}

/// Same as [`assemble_exam_session`] over any [`RandomSource`]
pub fn assemble_exam_session_with<R: RandomSource + ?Sized>(
    bank: &[Question],
    history: &SessionHistory,
    config: &ExamConfig,
    rng: &mut R,
) -> Vec<AssembledQuestion> {
    let recent = history.exam_set();
    let targets = config.targets();

    let mut picked: Vec<&Question> = Vec::with_capacity(config.total);
    let mut picked_ids: HashSet<&str> = HashSet::new();

    for difficulty in Difficulty::ALL {
        for _ in 0..targets.get(difficulty) {
            let candidates: Vec<&Question> = bank
                .iter()
                .filter(|q| q.difficulty == difficulty && !picked_ids.contains(q.id.as_str()))
                .collect();
            let weights: Vec<f64> = candidates
                .iter()
                .map(|q| {
                    let penalty = if recent.contains(q.id.as_str()) {
                        RECENT_EXAM_PENALTY
                    } else {
                        1.0
                    };
                    (config.domain_weight(q.domain) * penalty).max(MIN_CANDIDATE_WEIGHT)
                })
                .collect();

            // An exhausted bucket skips the slot
            let Some(&choice) = weighted_pick(&candidates, &weights, rng) else {
                continue;
            };
            picked.push(choice);
            picked_ids.insert(choice.id.as_str());
        }
    }

    ensure_domain_coverage(bank, config.total, &mut picked, &mut picked_ids);

    shuffle(&picked, rng)
        .into_iter()
        .take(config.total)
        .map(|q| present_question(q, rng))
        .collect()
}

/// Swap in one question for every domain missing from `picked`.
///
/// Only runs when `total` admits every domain. The evicted question is the
/// first picked one whose domain differs from the missing one and still
/// has another representative. When no such donor exists (fewer picks
/// than domains) the first differing pick is evicted anyway, which can
/// uncover another domain; that shortfall is accepted.
///
/// Preferring a donor with a second representative departs from the plain
/// first-differing-pick rule, which can evict the sole question of a
/// domain that was covered earlier in the pass.
fn ensure_domain_coverage<'a>(
    bank: &'a [Question],
    total: usize,
    picked: &mut [&'a Question],
    picked_ids: &mut HashSet<&'a str>,
) {
    if total < Domain::count() {
        return;
    }

    for domain in Domain::ALL {
        let mut per_domain: HashMap<Domain, usize> = HashMap::new();
        for q in picked.iter() {
            *per_domain.entry(q.domain).or_insert(0) += 1;
        }
        if per_domain.contains_key(&domain) {
            continue;
        }

        let replacement_index = picked
            .iter()
            .position(|q| q.domain != domain && per_domain[&q.domain] > 1)
            .or_else(|| picked.iter().position(|q| q.domain != domain));
        let candidate = bank
            .iter()
            .find(|q| q.domain == domain && !picked_ids.contains(q.id.as_str()));

        if let (Some(index), Some(candidate)) = (replacement_index, candidate) {
            picked_ids.remove(picked[index].id.as_str());
            picked[index] = candidate;
            picked_ids.insert(candidate.id.as_str());
        }
    }
}
