use crate::repo::validate_word;
use crate::{CoreError, DifficultySettings, SchedulingRecord, SessionLog, VocabWord};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;

#[derive(Default)]
pub struct MemoryRepo {
    words: RwLock<HashMap<String, VocabWord>>,
    records: RwLock<HashMap<String, SchedulingRecord>>,
    settings: RwLock<Option<DifficultySettings>>,
    sessions: RwLock<Vec<SessionLog>>,
}

impl MemoryRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl crate::repo::Repository for MemoryRepo {
    async fn add_word(&self, word: VocabWord) -> Result<VocabWord, CoreError> {
        validate_word(&word)?;
        let mut m = self.words.write();
        if m.contains_key(&word.id) {
            return Err(CoreError::DuplicateWord(word.id.clone()));
        }
        m.insert(word.id.clone(), word.clone());
        Ok(word)
    }

    async fn get_word(&self, id: &str) -> Result<VocabWord, CoreError> {
        self.words
            .read()
            .get(id)
            .cloned()
            .ok_or_else(|| CoreError::WordNotFound(id.to_string()))
    }

    async fn list_words(&self, category: Option<&str>) -> Result<Vec<VocabWord>, CoreError> {
        let words = self.words.read();
        let mut v: Vec<VocabWord> = words.values().cloned().collect();
        if let Some(cat) = category {
            v.retain(|w| w.category.eq_ignore_ascii_case(cat));
        }
        v.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(v)
    }

    async fn import_words(&self, words: Vec<VocabWord>) -> Result<usize, CoreError> {
        let mut added = 0;
        let mut m = self.words.write();
        for word in words {
            validate_word(&word)?;
            if m.contains_key(&word.id) {
                continue;
            }
            m.insert(word.id.clone(), word);
            added += 1;
        }
        Ok(added)
    }

    async fn load_records(&self) -> Result<HashMap<String, SchedulingRecord>, CoreError> {
        Ok(self.records.read().clone())
    }

    async fn save_record(&self, record: &SchedulingRecord) -> Result<(), CoreError> {
        self.records
            .write()
            .insert(record.word_id.clone(), record.clone());
        Ok(())
    }

    async fn load_settings(&self) -> Result<DifficultySettings, CoreError> {
        Ok(self.settings.read().clone().unwrap_or_default())
    }

    async fn save_settings(&self, settings: &DifficultySettings) -> Result<(), CoreError> {
        *self.settings.write() = Some(settings.clone());
        Ok(())
    }

    async fn insert_session(&self, log: &SessionLog) -> Result<(), CoreError> {
        self.sessions.write().push(log.clone());
        Ok(())
    }

    async fn list_sessions(&self) -> Result<Vec<SessionLog>, CoreError> {
        Ok(self.sessions.read().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::Repository;
    use crate::scheduler::apply_answer;

    #[tokio::test]
    async fn word_crud_and_records() {
        let repo = MemoryRepo::new();
        let w = VocabWord::new("greet_1", "hola", "hallo", "saludos", 1);
        repo.add_word(w.clone()).await.unwrap();

        assert!(matches!(
            repo.add_word(w.clone()).await,
            Err(CoreError::DuplicateWord(ref id)) if id == "greet_1"
        ));
        assert_eq!(repo.get_word("greet_1").await.unwrap().dutch, "hallo");

        let rec = apply_answer(SchedulingRecord::new("greet_1"), true);
        repo.save_record(&rec).await.unwrap();
        let records = repo.load_records().await.unwrap();
        assert_eq!(records["greet_1"].total_attempts, 1);
    }

    #[tokio::test]
    async fn errors_name_the_offending_word() {
        let repo = MemoryRepo::new();
        let err = repo.get_word("animal_7").await.unwrap_err();
        assert_eq!(err.to_string(), "word not found: animal_7");

        let w = VocabWord::new("color_2", "azul", "blauw", "colores", 1);
        repo.add_word(w.clone()).await.unwrap();
        let err = repo.add_word(w).await.unwrap_err();
        assert_eq!(err.to_string(), "word already exists: color_2");
    }

    #[tokio::test]
    async fn settings_default_until_saved() {
        let repo = MemoryRepo::new();
        assert_eq!(
            repo.load_settings().await.unwrap(),
            DifficultySettings::default()
        );

        let custom = DifficultySettings {
            max_options: 3,
            show_hints: true,
            ..Default::default()
        };
        repo.save_settings(&custom).await.unwrap();
        assert_eq!(repo.load_settings().await.unwrap(), custom);
    }

    #[tokio::test]
    async fn import_skips_existing_and_rejects_invalid() {
        let repo = MemoryRepo::new();
        let words = vec![
            VocabWord::new("num_1", "uno", "een", "numeros", 1),
            VocabWord::new("num_2", "dos", "twee", "numeros", 1),
        ];
        assert_eq!(repo.import_words(words.clone()).await.unwrap(), 2);
        assert_eq!(repo.import_words(words).await.unwrap(), 0);

        let bad = VocabWord::new("num_3", "tres", "drie", "numeros", 9);
        assert!(matches!(
            repo.import_words(vec![bad]).await,
            Err(CoreError::InvalidWord(_))
        ));
    }
}
