use crate::{SchedulingRecord, MASTERY_LEVEL};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReviewStats {
    /// Lifetime accuracy across all records, as a percentage.
    pub accuracy: f32,
    /// Accuracy over the supplied recent outcomes; falls back to lifetime
    /// accuracy when no recent outcomes are given.
    pub recent_accuracy: f32,
    pub total_reviews: u32,
    pub mastered_count: usize,
}

pub fn compute_stats(records: &[SchedulingRecord], recent_outcomes: &[bool]) -> ReviewStats {
    let total_reviews: u32 = records.iter().map(|r| r.total_attempts).sum();
    let total_correct: u32 = records.iter().map(|r| r.correct_total()).sum();

    let accuracy = if total_reviews > 0 {
        total_correct as f32 / total_reviews as f32 * 100.0
    } else {
        0.0
    };

    let recent_accuracy = if recent_outcomes.is_empty() {
        accuracy
    } else {
        let correct = recent_outcomes.iter().filter(|&&c| c).count();
        correct as f32 / recent_outcomes.len() as f32 * 100.0
    };

    ReviewStats {
        accuracy,
        recent_accuracy,
        total_reviews,
        mastered_count: records.iter().filter(|r| r.level >= MASTERY_LEVEL).count(),
    }
}
