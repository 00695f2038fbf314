use crate::{DifficultySettings, GameSession};

/// Per-item reveal state for the Dutch translation. Fresh items always start
/// hidden; the hint shows once the learner has missed the current item twice
/// and the setting allows it, and hides again on a correct answer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HintState {
    #[default]
    Hidden,
    Shown,
}

impl HintState {
    pub fn after_answer(self, correct: bool, session: &GameSession, settings: &DifficultySettings) -> HintState {
        if correct {
            HintState::Hidden
        } else if settings.show_dutch_on_second_mistake && session.mistake_count >= 2 {
            HintState::Shown
        } else {
            self
        }
    }

    pub fn is_shown(&self) -> bool {
        matches!(self, HintState::Shown)
    }
}
