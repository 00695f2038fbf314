use crate::{SchedulingRecord, LEVEL_MAX, REVIEW_INTERVALS};
use chrono::{DateTime, Duration, Utc};

fn interval_days(level: u8) -> i64 {
    REVIEW_INTERVALS[level.min(LEVEL_MAX) as usize]
}

/// Applies one answer to a record and reschedules it.
///
/// Advancing a level takes two correct answers in a row, so a single lucky
/// guess does not inflate mastery. Demotion fires only on every second
/// lifetime mistake, giving one slip of grace. An incorrect answer always
/// schedules a short-horizon recheck at a third of the current level's
/// interval, floored at one day.
pub fn apply_answer(mut record: SchedulingRecord, correct: bool) -> SchedulingRecord {
    let now = Utc::now();
    record.total_attempts += 1;
    record.last_seen = now;

    if correct {
        record.correct_streak += 1;
        if record.correct_streak >= 2 && record.level < LEVEL_MAX {
            record.level += 1;
        }
        record.next_due = now + Duration::days(interval_days(record.level));
    } else {
        record.correct_streak = 0;
        record.incorrect_count += 1;
        if record.incorrect_count % 2 == 0 && record.level > 0 {
            record.level -= 1;
        }
        let recheck = (interval_days(record.level) / 3).max(1);
        record.next_due = now + Duration::days(recheck);
    }

    record
}

/// Picks the next batch: anything past its due time plus all unseen words,
/// earliest due first, lower level breaking ties.
pub fn select_due(records: &[SchedulingRecord], now: DateTime<Utc>, limit: usize) -> Vec<SchedulingRecord> {
    let mut due: Vec<SchedulingRecord> = records.iter().filter(|r| r.is_due(now)).cloned().collect();
    due.sort_by_key(|r| (r.next_due, r.level));
    due.truncate(limit);
    due
}

pub fn format_due_label(next_due: DateTime<Utc>, now: DateTime<Utc>) -> String {
    if now > next_due {
        "Ready now".to_string()
    } else {
        format!("Due {}", next_due.format("%b %-d"))
    }
}
