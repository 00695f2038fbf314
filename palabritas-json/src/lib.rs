use async_trait::async_trait;
use chrono::{DateTime, Utc};
use palabritas_core::{
    repo::Repository, CoreError, DifficultySettings, SchedulingRecord, SessionLog, VocabWord,
};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tokio::task;

pub mod paths;

const FILE_VERSION: u32 = 1;

#[derive(Clone, Serialize, Deserialize)]
struct FileImage {
    version: u32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    settings: DifficultySettings,
    words: Vec<VocabWord>,
    records: Vec<SchedulingRecord>,
    sessions: Vec<SessionLog>,
}

#[derive(Clone)]
struct State {
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    settings: DifficultySettings,
    words: HashMap<String, VocabWord>,
    records: HashMap<String, SchedulingRecord>,
    sessions: Vec<SessionLog>,
}

impl State {
    fn new_empty() -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            updated_at: now,
            settings: DifficultySettings::default(),
            words: HashMap::new(),
            records: HashMap::new(),
            sessions: Vec::new(),
        }
    }

    fn to_image(&self) -> FileImage {
        FileImage {
            version: FILE_VERSION,
            created_at: self.created_at,
            updated_at: self.updated_at,
            settings: self.settings.clone(),
            words: self.words.values().cloned().collect(),
            records: self.records.values().cloned().collect(),
            sessions: self.sessions.clone(),
        }
    }

    fn from_image(img: FileImage) -> Self {
        let mut words = HashMap::new();
        for w in img.words {
            words.insert(w.id.clone(), w);
        }
        let mut records = HashMap::new();
        for r in img.records {
            records.insert(r.word_id.clone(), r);
        }
        Self {
            created_at: img.created_at,
            updated_at: img.updated_at,
            settings: img.settings,
            words,
            records,
            sessions: img.sessions,
        }
    }
}

pub struct JsonStore {
    path: PathBuf,
    backups_dir: PathBuf,
    max_backups: usize,
    state: RwLock<State>,
}

impl JsonStore {
    pub async fn open_default() -> Result<Self, CoreError> {
        let p = paths::default_store_paths();
        Self::open_with(p.file, p.backups, 10).await
    }

    pub async fn open_with(path: PathBuf, backups_dir: PathBuf, max_backups: usize) -> Result<Self, CoreError> {
        ensure_parent_dirs(&path)?;
        ensure_dir(&backups_dir)?;
        let state = load_or_init(&path).await;
        Ok(Self {
            path,
            backups_dir,
            max_backups: max_backups.max(1),
            state: RwLock::new(state),
        })
    }

    async fn save(&self) -> Result<(), CoreError> {
        let snapshot = {
            let mut s = self.state.write();
            s.updated_at = Utc::now();
            s.to_image()
        };
        let path = self.path.clone();
        let backups = self.backups_dir.clone();
        let keep = self.max_backups;

        task::spawn_blocking(move || write_with_backup(&path, &backups, keep, &snapshot))
            .await
            .map_err(|_| CoreError::Storage("io"))?
            .map_err(|_| CoreError::Storage("io"))?;
        Ok(())
    }
}

fn ensure_parent_dirs(path: &Path) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    Ok(())
}

fn ensure_dir(path: &Path) -> Result<(), CoreError> {
    fs::create_dir_all(path).map_err(|_| CoreError::Storage("io"))
}

/// Missing or unreadable files are not an error: the store starts from an
/// empty state with default settings and will overwrite on the next save.
async fn load_or_init(path: &Path) -> State {
    if !path.exists() {
        return State::new_empty();
    }
    let p = path.to_path_buf();
    let loaded = task::spawn_blocking(move || {
        let buf = fs::read_to_string(&p).ok()?;
        serde_json::from_str::<FileImage>(&buf).ok()
    })
    .await
    .ok()
    .flatten();

    match loaded {
        Some(img) => {
            let mut st = State::from_image(img);
            st.updated_at = Utc::now();
            st
        }
        None => {
            log::warn!("store file {} was missing or malformed; starting fresh", path.display());
            State::new_empty()
        }
    }
}

fn write_with_backup(path: &Path, backups_dir: &Path, max_backups: usize, img: &FileImage) -> Result<(), std::io::Error> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::create_dir_all(backups_dir)?;

    let json = serde_json::to_vec_pretty(img).map_err(std::io::Error::from)?;
    let mut tmp = NamedTempFile::new_in(path.parent().unwrap_or_else(|| Path::new(".")))?;
    tmp.write_all(&json)?;
    tmp.flush()?;
    let _ = fs::remove_file(path);
    tmp.persist(path)?;

    // Backup rotation
    let ts = chrono::Local::now().format("%Y%m%d-%H%M%S");
    let backup_name = format!("palabritas-{ts}.json");
    let backup_path = backups_dir.join(backup_name);
    let mut btmp = NamedTempFile::new_in(backups_dir)?;
    btmp.write_all(&json)?;
    btmp.flush()?;
    let _ = fs::remove_file(&backup_path);
    btmp.persist(&backup_path)?;

    rotate_backups(backups_dir, max_backups)?;

    Ok(())
}

fn rotate_backups(dir: &Path, keep: usize) -> Result<(), std::io::Error> {
    let mut entries: Vec<_> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().and_then(|s| s.to_str()) == Some("json"))
        .collect();
    entries.sort_by_key(|e| e.metadata().and_then(|m| m.modified()).ok());
    if entries.len() > keep {
        for e in &entries[0..entries.len() - keep] {
            let _ = fs::remove_file(e.path());
        }
    }
    Ok(())
}

#[async_trait]
impl Repository for JsonStore {
    async fn add_word(&self, word: VocabWord) -> Result<VocabWord, CoreError> {
        palabritas_core::repo::validate_word(&word)?;
        {
            let mut s = self.state.write();
            if s.words.contains_key(&word.id) {
                return Err(CoreError::DuplicateWord(word.id.clone()));
            }
            s.words.insert(word.id.clone(), word.clone());
        }
        self.save().await?;
        Ok(word)
    }

    async fn get_word(&self, id: &str) -> Result<VocabWord, CoreError> {
        let s = self.state.read();
        s.words
            .get(id)
            .cloned()
            .ok_or_else(|| CoreError::WordNotFound(id.to_string()))
    }

    async fn list_words(&self, category: Option<&str>) -> Result<Vec<VocabWord>, CoreError> {
        let s = self.state.read();
        let mut v: Vec<VocabWord> = s.words.values().cloned().collect();
        if let Some(cat) = category {
            v.retain(|w| w.category.eq_ignore_ascii_case(cat));
        }
        v.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(v)
    }

    async fn import_words(&self, words: Vec<VocabWord>) -> Result<usize, CoreError> {
        let added = {
            let mut s = self.state.write();
            let mut added = 0;
            for w in words {
                palabritas_core::repo::validate_word(&w)?;
                if s.words.contains_key(&w.id) {
                    continue;
                }
                s.words.insert(w.id.clone(), w);
                added += 1;
            }
            added
        };
        if added > 0 {
            self.save().await?;
        }
        Ok(added)
    }

    async fn load_records(&self) -> Result<HashMap<String, SchedulingRecord>, CoreError> {
        Ok(self.state.read().records.clone())
    }

    async fn save_record(&self, record: &SchedulingRecord) -> Result<(), CoreError> {
        {
            let mut s = self.state.write();
            s.records.insert(record.word_id.clone(), record.clone());
        }
        self.save().await
    }

    async fn load_settings(&self) -> Result<DifficultySettings, CoreError> {
        Ok(self.state.read().settings.clone())
    }

    async fn save_settings(&self, settings: &DifficultySettings) -> Result<(), CoreError> {
        {
            let mut s = self.state.write();
            s.settings = settings.clone();
        }
        self.save().await
    }

    async fn insert_session(&self, log: &SessionLog) -> Result<(), CoreError> {
        {
            let mut s = self.state.write();
            s.sessions.push(log.clone());
        }
        self.save().await
    }

    async fn list_sessions(&self) -> Result<Vec<SessionLog>, CoreError> {
        Ok(self.state.read().sessions.clone())
    }
}
