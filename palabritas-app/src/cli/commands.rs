use crate::cli::opts::*;
use crate::seed;

use anyhow::Result;
use chrono::Utc;
use palabritas_core::{
    adjust_difficulty, apply_answer, build_question, compute_stats, format_due_label, select_due,
    should_ease, DifficultySettings, GameSession, HintState, MemoryRepo, Repository,
    SchedulingRecord, SessionKind, SessionLog, VocabWord,
};
use palabritas_json::{paths, JsonStore};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;
use std::io::{stdin, stdout, Write};
use std::path::PathBuf;
use std::sync::Arc;

pub async fn run_cli(args: Cli) -> Result<()> {
    let repo = open_repo(&args.store, args.store_path.clone()).await?;
    match args.cmd {
        Command::Words(cmd) => words_cmd(repo, cmd).await,
        Command::Review(cmd) => review_cmd(repo, cmd).await,
        Command::Quiz(cmd) => quiz_cmd(repo, cmd).await,
        Command::Stats => stats_cmd(repo).await,
        Command::Settings(cmd) => settings_cmd(repo, cmd).await,
    }
}

pub async fn open_repo(store: &StoreKind, store_path: Option<PathBuf>) -> Result<Arc<dyn Repository>> {
    match store {
        StoreKind::Json => {
            let mut p = paths::default_store_paths();
            if let Some(file) = store_path {
                if let Some(parent) = file.parent() {
                    p.backups = parent.join("backups");
                }
                p.file = file;
            }
            let s = JsonStore::open_with(p.file, p.backups, 10).await?;
            Ok(Arc::new(s))
        }
        StoreKind::Memory => Ok(Arc::new(MemoryRepo::new())),
    }
}

async fn words_cmd(repo: Arc<dyn Repository>, cmd: WordsCmd) -> Result<()> {
    match cmd {
        WordsCmd::Seed => {
            let added = repo.import_words(seed::starter_words()).await?;
            println!("added {added} word(s)");
        }
        WordsCmd::Import { path } => {
            let words = read_words_csv(&path)?;
            let added = repo.import_words(words).await?;
            println!("added {added} word(s)");
        }
        WordsCmd::List { category } => {
            let words = repo.list_words(category.as_deref()).await?;
            for w in words {
                let emoji = w.emoji.unwrap_or_default();
                println!("{}\t{}\t{}\t{}\t{}", w.id, w.spanish, w.dutch, w.category, emoji);
            }
        }
    }
    Ok(())
}

#[derive(serde::Deserialize)]
struct WordRow {
    id: String,
    spanish: String,
    dutch: String,
    category: String,
    difficulty: u8,
    emoji: Option<String>,
}

fn read_words_csv(path: &PathBuf) -> Result<Vec<VocabWord>> {
    let mut rdr = csv::Reader::from_path(path)?;
    let mut words = Vec::new();
    for row in rdr.deserialize() {
        let row: WordRow = row?;
        let mut w = VocabWord::new(row.id, row.spanish, row.dutch, row.category, row.difficulty);
        w.emoji = row.emoji.filter(|e| !e.is_empty());
        words.push(w);
    }
    Ok(words)
}

/// Builds the due batch: every word gets a scheduling record on first
/// encounter, and records whose word has been deleted are skipped.
async fn due_batch(
    repo: &dyn Repository,
    max: usize,
) -> Result<(HashMap<String, VocabWord>, Vec<SchedulingRecord>)> {
    let words: HashMap<String, VocabWord> = repo
        .list_words(None)
        .await?
        .into_iter()
        .map(|w| (w.id.clone(), w))
        .collect();

    let mut records = repo.load_records().await?;
    for id in words.keys() {
        records
            .entry(id.clone())
            .or_insert_with(|| SchedulingRecord::new(id.clone()));
    }
    records.retain(|id, _| words.contains_key(id));

    let pool: Vec<SchedulingRecord> = records.into_values().collect();
    let batch = select_due(&pool, Utc::now(), max);
    Ok((words, batch))
}

async fn persist_settings(repo: &dyn Repository, settings: &DifficultySettings) {
    // fire-and-forget: a failed write never interrupts the session
    if let Err(e) = repo.save_settings(settings).await {
        log::warn!("could not persist settings: {e}");
    }
}

async fn review_cmd(repo: Arc<dyn Repository>, cmd: ReviewCmd) -> Result<()> {
    let (words, batch) = due_batch(&*repo, cmd.max).await?;
    if words.is_empty() {
        println!("no words loaded; run `palabritas words seed` first");
        return Ok(());
    }
    if batch.is_empty() {
        println!("nothing due right now");
        return Ok(());
    }

    let started_at = Utc::now();
    let mut settings = repo.load_settings().await?;
    let mut window: Vec<bool> = Vec::new();
    let mut asked = 0u32;
    let mut known = 0u32;

    'outer: for rec in batch {
        let Some(word) = words.get(&rec.word_id) else { continue };

        let emoji = word.emoji.clone().unwrap_or_default();
        println!("\n{} {}", emoji, word.spanish);
        prompt_enter("[enter = show translation]")?;
        println!("= {}", word.dutch);

        let correct = loop {
            let line = read_line("knew it? [y/n/q] ")?;
            match line.trim().to_lowercase().as_str() {
                "y" | "yes" | "j" | "ja" => break true,
                "n" | "no" | "nee" => break false,
                "q" | "quit" => break 'outer,
                _ => println!("enter y, n, or q"),
            }
        };

        asked += 1;
        if correct {
            known += 1;
        }

        let updated = apply_answer(rec, correct);
        println!("next: {}", format_due_label(updated.next_due, Utc::now()));
        repo.save_record(&updated).await?;

        window.push(correct);
        let tuned = adjust_difficulty(&settings, &window);
        if tuned != settings {
            settings = tuned;
            persist_settings(&*repo, &settings).await;
        }
        if should_ease(&window) {
            println!("(no worries, we slow down a little)");
        }
    }

    if asked > 0 {
        let log = SessionLog::new(SessionKind::Flashcards, asked, known, started_at);
        repo.insert_session(&log).await?;
    }
    println!("\nreviewed {asked}");
    Ok(())
}

async fn quiz_cmd(repo: Arc<dyn Repository>, cmd: QuizCmd) -> Result<()> {
    let (words, batch) = due_batch(&*repo, cmd.max).await?;
    if words.len() < 2 {
        println!("need at least two words for a quiz; run `palabritas words seed` first");
        return Ok(());
    }
    if batch.is_empty() {
        println!("nothing due right now");
        return Ok(());
    }

    let pool: Vec<VocabWord> = words.values().cloned().collect();
    let mut rng: StdRng = match cmd.seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    let started_at = Utc::now();
    let mut settings = repo.load_settings().await?;
    let mut window: Vec<bool> = Vec::new();
    let mut asked = 0u32;
    let mut first_try = 0u32;

    'outer: for rec in batch {
        let Some(word) = words.get(&rec.word_id) else { continue };

        let question = build_question(&mut rng, word, &pool, &settings);
        let emoji = word.emoji.clone().unwrap_or_default();
        println!("\n{} {} = ?", emoji, word.spanish);
        for (i, opt) in question.options.iter().enumerate() {
            println!("  {}) {}", i + 1, opt);
        }
        if settings.show_hints {
            println!("hint: it is a {} word", word.category);
        }

        asked += 1;
        let mut rec = rec;
        let mut session = GameSession::new(&word.id);
        let mut hint = HintState::default();

        loop {
            let line = read_line("answer> ")?;
            let trimmed = line.trim();
            if trimmed.eq_ignore_ascii_case("q") {
                break 'outer;
            }
            let pick = match trimmed.parse::<usize>() {
                Ok(n) if (1..=question.options.len()).contains(&n) => n - 1,
                _ => {
                    println!("enter 1-{} or q", question.options.len());
                    continue;
                }
            };

            let correct = pick == question.answer_index;
            session = session.record_answer(correct);
            rec = apply_answer(rec, correct);
            repo.save_record(&rec).await?;

            window.push(correct);
            let tuned = adjust_difficulty(&settings, &window);
            if tuned != settings {
                settings = tuned;
                persist_settings(&*repo, &settings).await;
            }
            hint = hint.after_answer(correct, &session, &settings);

            if correct {
                if session.attempts.len() == 1 {
                    first_try += 1;
                }
                println!("¡muy bien!");
                break;
            }

            if session.mistake_count as usize + 1 >= question.options.len() {
                println!("the answer was: {}", question.options[question.answer_index]);
                break;
            }
            if hint.is_shown() {
                println!("in het Nederlands: {}", word.dutch);
            }
            println!("try again");
        }

        if should_ease(&window) {
            println!("(no worries, we slow down a little)");
        }
    }

    if asked > 0 {
        let log = SessionLog::new(SessionKind::Quiz, asked, first_try, started_at);
        repo.insert_session(&log).await?;
    }
    println!("\nquizzed {asked}");
    Ok(())
}

async fn stats_cmd(repo: Arc<dyn Repository>) -> Result<()> {
    let records_map = repo.load_records().await?;
    let mut records: Vec<SchedulingRecord> = records_map.into_values().collect();
    let stats = compute_stats(&records, &[]);

    println!("reviews:  {}", stats.total_reviews);
    println!("accuracy: {:.0}%", stats.accuracy);
    println!("mastered: {}", stats.mastered_count);

    let sessions = repo.list_sessions().await?;
    println!("sessions: {}", sessions.len());

    let words: HashMap<String, VocabWord> = repo
        .list_words(None)
        .await?
        .into_iter()
        .map(|w| (w.id.clone(), w))
        .collect();

    let now = Utc::now();
    records.sort_by_key(|r| r.next_due);
    for rec in records {
        let Some(word) = words.get(&rec.word_id) else { continue };
        println!(
            "{}\t{}\tlevel {}\t{}",
            word.spanish,
            word.dutch,
            rec.level,
            format_due_label(rec.next_due, now)
        );
    }
    Ok(())
}

async fn settings_cmd(repo: Arc<dyn Repository>, cmd: SettingsCmd) -> Result<()> {
    match cmd {
        SettingsCmd::Show => {
            let settings = repo.load_settings().await?;
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
        SettingsCmd::Reset => {
            repo.save_settings(&DifficultySettings::default()).await?;
            println!("ok");
        }
        SettingsCmd::Set(set) => {
            let mut settings = repo.load_settings().await?;
            if let Some(fs) = set.font_size {
                settings.font_size = fs.into();
            }
            if let Some(d) = set.dyslexia_friendly {
                settings.dyslexia_friendly = d;
            }
            if let Some(s) = set.show_dutch_on_second_mistake {
                settings.show_dutch_on_second_mistake = s;
            }
            repo.save_settings(&settings).await?;
            println!("ok");
        }
    }
    Ok(())
}

// ===== Helpers =====
fn prompt_enter(label: &str) -> Result<()> { print!("{label}"); stdout().flush().ok(); let mut s = String::new(); stdin().read_line(&mut s)?; Ok(()) }
fn read_line(prompt: &str) -> Result<String> { print!("{prompt}"); stdout().flush().ok(); let mut s = String::new(); stdin().read_line(&mut s)?; Ok(s) }
