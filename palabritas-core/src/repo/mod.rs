use crate::{CoreError, DifficultySettings, SchedulingRecord, SessionLog, VocabWord};
use async_trait::async_trait;
use std::collections::HashMap;

pub mod memory;

pub use memory::MemoryRepo;

/// Storage port for the session orchestrator. The scheduler and tuner stay
/// pure; everything that outlives the process goes through here.
#[async_trait]
pub trait Repository: Send + Sync {
    // Vocabulary
    async fn add_word(&self, word: VocabWord) -> Result<VocabWord, CoreError>;
    async fn get_word(&self, id: &str) -> Result<VocabWord, CoreError>;
    async fn list_words(&self, category: Option<&str>) -> Result<Vec<VocabWord>, CoreError>;
    /// Inserts words, skipping ids already present. Returns how many were added.
    async fn import_words(&self, words: Vec<VocabWord>) -> Result<usize, CoreError>;

    // Scheduling records
    async fn load_records(&self) -> Result<HashMap<String, SchedulingRecord>, CoreError>;
    async fn save_record(&self, record: &SchedulingRecord) -> Result<(), CoreError>;

    // Difficulty settings
    async fn load_settings(&self) -> Result<DifficultySettings, CoreError>;
    async fn save_settings(&self, settings: &DifficultySettings) -> Result<(), CoreError>;

    // Session logs
    async fn insert_session(&self, log: &SessionLog) -> Result<(), CoreError>;
    async fn list_sessions(&self) -> Result<Vec<SessionLog>, CoreError>;
}

pub fn validate_word(word: &VocabWord) -> Result<(), CoreError> {
    if word.id.trim().is_empty() || word.spanish.trim().is_empty() || word.dutch.trim().is_empty() {
        return Err(CoreError::InvalidWord("id, spanish, and dutch must be non-empty"));
    }
    if !(1..=3).contains(&word.difficulty) {
        return Err(CoreError::InvalidWord("difficulty must be 1..=3"));
    }
    Ok(())
}
