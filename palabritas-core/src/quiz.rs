use crate::{DifficultySettings, VocabWord, MAX_OPTIONS_MIN};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

#[derive(Clone, Debug)]
pub struct QuizQuestion {
    pub word: VocabWord,
    /// Dutch translations, correct one included exactly once.
    pub options: Vec<String>,
    pub answer_index: usize,
}

/// Builds a multiple-choice question for `word`, drawing wrong answers from
/// the rest of the pool without replacement. Option count follows
/// `settings.max_options`, clamped to what the pool can supply. The rng is
/// injected so tests can seed it.
pub fn build_question<R: Rng>(
    rng: &mut R,
    word: &VocabWord,
    pool: &[VocabWord],
    settings: &DifficultySettings,
) -> QuizQuestion {
    let mut seen: HashSet<&str> = HashSet::new();
    seen.insert(word.dutch.as_str());

    let mut wrong: Vec<&VocabWord> = pool
        .iter()
        .filter(|w| w.id != word.id && seen.insert(w.dutch.as_str()))
        .collect();
    wrong.shuffle(rng);

    let wanted = settings.max_options.max(MAX_OPTIONS_MIN) as usize - 1;
    let mut options: Vec<String> = wrong
        .iter()
        .take(wanted)
        .map(|w| w.dutch.clone())
        .collect();

    let answer_index = rng.gen_range(0..=options.len());
    options.insert(answer_index, word.dutch.clone());

    QuizQuestion {
        word: word.clone(),
        options,
        answer_index,
    }
}
