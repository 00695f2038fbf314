use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type SessionId = Uuid;

/// Review intervals in days, indexed by level.
pub const REVIEW_INTERVALS: [i64; 7] = [1, 3, 7, 14, 30, 90, 180];
pub const LEVEL_MAX: u8 = 6;
/// Records at or above this level count as mastered in stats.
pub const MASTERY_LEVEL: u8 = 5;

pub const MAX_OPTIONS_MIN: u8 = 2;
pub const MAX_OPTIONS_MAX: u8 = 6;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct VocabWord {
    pub id: String,
    pub spanish: String,
    pub dutch: String,
    pub category: String,
    /// Coarse author-assigned difficulty, 1 (easy) to 3 (hard).
    pub difficulty: u8,
    pub emoji: Option<String>,
}

impl VocabWord {
    pub fn new(
        id: impl Into<String>,
        spanish: impl Into<String>,
        dutch: impl Into<String>,
        category: impl Into<String>,
        difficulty: u8,
    ) -> Self {
        Self {
            id: id.into(),
            spanish: spanish.into(),
            dutch: dutch.into(),
            category: category.into(),
            difficulty,
            emoji: None,
        }
    }
}

/// Per-word spaced-repetition state. Updated only through
/// [`crate::scheduler::apply_answer`], which consumes the old value and
/// returns a new one.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SchedulingRecord {
    pub word_id: String,
    /// 0 = unseen, 6 = mastered.
    pub level: u8,
    pub next_due: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
    pub correct_streak: u32,
    pub incorrect_count: u32,
    pub total_attempts: u32,
}

impl SchedulingRecord {
    pub fn new(word_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            word_id: word_id.into(),
            level: 0,
            next_due: now,
            last_seen: now,
            correct_streak: 0,
            incorrect_count: 0,
            total_attempts: 0,
        }
    }

    pub fn is_new(&self) -> bool {
        self.level == 0
    }

    /// New words are always eligible, even when next_due sits in the future.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        now > self.next_due || self.is_new()
    }

    pub fn correct_total(&self) -> u32 {
        self.total_attempts - self.incorrect_count
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum FontSize {
    #[default]
    Normal,
    Large,
    ExtraLarge,
}

/// Presentation scale the UI maps to a concrete text size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextScale {
    Base,
    Large,
    ExtraLarge,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextStyle {
    Dyslexic,
}

/// Session-wide quiz tuning. Replaced wholesale by the tuner, never patched
/// field by field.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DifficultySettings {
    pub max_options: u8,
    pub show_hints: bool,
    pub show_dutch_on_second_mistake: bool,
    pub extra_time: bool,
    pub font_size: FontSize,
    pub dyslexia_friendly: bool,
}

impl Default for DifficultySettings {
    fn default() -> Self {
        Self {
            max_options: 4,
            show_hints: false,
            show_dutch_on_second_mistake: false,
            extra_time: false,
            font_size: FontSize::Normal,
            dyslexia_friendly: false,
        }
    }
}

impl DifficultySettings {
    pub fn text_scale(&self) -> TextScale {
        match self.font_size {
            FontSize::Normal => TextScale::Base,
            FontSize::Large => TextScale::Large,
            FontSize::ExtraLarge => TextScale::ExtraLarge,
        }
    }

    pub fn text_style(&self) -> Option<TextStyle> {
        if self.dyslexia_friendly {
            Some(TextStyle::Dyslexic)
        } else {
            None
        }
    }

    pub fn time_limit(&self, base: Duration) -> Duration {
        if self.extra_time {
            base * 3 / 2
        } else {
            base
        }
    }
}

/// Per-item attempt tracking within one presentation of a word. Distinct from
/// the persisted [`SchedulingRecord`]; lives only for the current session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameSession {
    pub id: SessionId,
    pub word_id: String,
    pub attempts: Vec<bool>,
    pub current_streak: u32,
    pub mistake_count: u32,
    pub started_at: DateTime<Utc>,
}

impl GameSession {
    pub fn new(word_id: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            word_id: word_id.into(),
            attempts: Vec::new(),
            current_streak: 0,
            mistake_count: 0,
            started_at: Utc::now(),
        }
    }

    pub fn record_answer(mut self, correct: bool) -> Self {
        self.attempts.push(correct);
        if correct {
            self.current_streak += 1;
        } else {
            self.current_streak = 0;
            self.mistake_count += 1;
        }
        self
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SessionKind {
    Flashcards,
    Quiz,
}

/// Summary row written once per finished review or quiz run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionLog {
    pub id: SessionId,
    pub kind: SessionKind,
    pub total_questions: u32,
    pub correct_answers: u32,
    pub finished_at: DateTime<Utc>,
    pub duration_secs: i64,
}

impl SessionLog {
    pub fn new(kind: SessionKind, total_questions: u32, correct_answers: u32, started_at: DateTime<Utc>) -> Self {
        let finished_at = Utc::now();
        Self {
            id: Uuid::new_v4(),
            kind,
            total_questions,
            correct_answers,
            finished_at,
            duration_secs: (finished_at - started_at).num_seconds(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serializes_timestamps_as_iso8601() {
        let rec = SchedulingRecord::new("greet_1");
        let json = serde_json::to_string(&rec).unwrap();
        assert!(json.contains("\"next_due\":\""));

        let back: SchedulingRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rec);
    }

    #[test]
    fn font_size_uses_kebab_case() {
        let settings = DifficultySettings {
            font_size: FontSize::ExtraLarge,
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"extra-large\""));
    }

    #[test]
    fn extra_time_scales_limit_by_half() {
        let mut settings = DifficultySettings::default();
        let base = Duration::seconds(30);
        assert_eq!(settings.time_limit(base), base);

        settings.extra_time = true;
        assert_eq!(settings.time_limit(base), Duration::seconds(45));
    }
}
