use crate::{DifficultySettings, MAX_OPTIONS_MAX, MAX_OPTIONS_MIN};

const EASE_WINDOW: usize = 5;
const EASE_THRESHOLD: f32 = 0.70;
const ESCALATE_WINDOW: usize = 10;
const ESCALATE_THRESHOLD: f32 = 0.90;

fn tail_accuracy(outcomes: &[bool], window: usize) -> f32 {
    let tail = &outcomes[outcomes.len() - window..];
    tail.iter().filter(|&&c| c).count() as f32 / window as f32
}

/// Decides new session settings from the rolling outcome window.
///
/// The ease check reacts on a short window of 5 so a struggling learner gets
/// relief quickly; escalation requires a sustained 10-outcome window above
/// 90% so difficulty does not oscillate. With fewer than 5 outcomes the input
/// is returned unchanged.
pub fn adjust_difficulty(current: &DifficultySettings, recent_outcomes: &[bool]) -> DifficultySettings {
    if recent_outcomes.len() < EASE_WINDOW {
        return current.clone();
    }

    if tail_accuracy(recent_outcomes, EASE_WINDOW) < EASE_THRESHOLD {
        return DifficultySettings {
            max_options: current.max_options.saturating_sub(1).max(MAX_OPTIONS_MIN),
            show_hints: true,
            extra_time: true,
            ..current.clone()
        };
    }

    if recent_outcomes.len() >= ESCALATE_WINDOW
        && tail_accuracy(recent_outcomes, ESCALATE_WINDOW) > ESCALATE_THRESHOLD
    {
        return DifficultySettings {
            max_options: current.max_options.saturating_add(1).min(MAX_OPTIONS_MAX),
            show_hints: false,
            extra_time: false,
            ..current.clone()
        };
    }

    current.clone()
}

/// True when the last five outcomes fall below 70% accuracy. Used by the UI
/// for an encouragement banner, independent of [`adjust_difficulty`].
pub fn should_ease(recent_outcomes: &[bool]) -> bool {
    recent_outcomes.len() >= EASE_WINDOW
        && tail_accuracy(recent_outcomes, EASE_WINDOW) < EASE_THRESHOLD
}
