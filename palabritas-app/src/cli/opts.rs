use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, ValueEnum)]
pub enum StoreKind {
    Json,
    Memory,
}

#[derive(Debug, Parser, Clone)]
#[command(name = "palabritas", version, about = "Spanish vocabulary trainer for Dutch-speaking kids")]
pub struct Cli {
    /// Storage backend (memory forgets everything on exit)
    #[arg(long, value_enum, default_value_t = StoreKind::Json)]
    pub store: StoreKind,

    /// Store file when --store json (defaults to the app data dir)
    #[arg(long)]
    pub store_path: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Vocabulary list operations
    #[command(subcommand)]
    Words(WordsCmd),
    /// Flashcard review loop over due words
    Review(ReviewCmd),
    /// Multiple-choice quiz over due words
    Quiz(QuizCmd),
    /// Progress statistics
    Stats,
    /// Difficulty settings
    #[command(subcommand)]
    Settings(SettingsCmd),
}

#[derive(Debug, Subcommand, Clone)]
pub enum WordsCmd {
    /// Load the built-in starter vocabulary
    Seed,
    /// Import words from CSV (id,spanish,dutch,category,difficulty,emoji)
    Import { path: PathBuf },
    List {
        #[arg(long)]
        category: Option<String>,
    },
}

#[derive(Debug, Args, Clone)]
pub struct ReviewCmd {
    #[arg(long, default_value_t = 10)]
    pub max: usize,
}

#[derive(Debug, Args, Clone)]
pub struct QuizCmd {
    #[arg(long, default_value_t = 10)]
    pub max: usize,

    /// Fixed rng seed for reproducible option shuffling
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Subcommand, Clone)]
pub enum SettingsCmd {
    Show,
    Reset,
    Set(SettingsSet),
}

#[derive(Debug, Args, Clone)]
pub struct SettingsSet {
    #[arg(long, value_enum)]
    pub font_size: Option<FontSizeArg>,

    #[arg(long)]
    pub dyslexia_friendly: Option<bool>,

    /// Reveal the Dutch translation after two mistakes on the same word
    #[arg(long)]
    pub show_dutch_on_second_mistake: Option<bool>,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum FontSizeArg {
    Normal,
    Large,
    ExtraLarge,
}

impl From<FontSizeArg> for palabritas_core::FontSize {
    fn from(a: FontSizeArg) -> Self {
        match a {
            FontSizeArg::Normal => palabritas_core::FontSize::Normal,
            FontSizeArg::Large => palabritas_core::FontSize::Large,
            FontSizeArg::ExtraLarge => palabritas_core::FontSize::ExtraLarge,
        }
    }
}
