use directories::ProjectDirs;
use std::path::PathBuf;

/// Store file plus the backup directory that sits next to it.
pub struct StorePaths {
    pub file: PathBuf,
    pub backups: PathBuf,
}

impl StorePaths {
    pub fn in_dir(root: PathBuf) -> Self {
        Self {
            backups: root.join("backups"),
            file: root.join("palabritas.json"),
        }
    }
}

/// Platform data dir when available, current dir otherwise.
pub fn default_store_paths() -> StorePaths {
    let root = ProjectDirs::from("nl", "palabritas", "Palabritas")
        .map(|pd| pd.data_dir().to_path_buf())
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));
    StorePaths::in_dir(root)
}
