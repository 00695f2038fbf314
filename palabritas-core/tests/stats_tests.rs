use palabritas_core::{compute_stats, SchedulingRecord};

fn record(word_id: &str, level: u8, attempts: u32, incorrect: u32) -> SchedulingRecord {
    let mut rec = SchedulingRecord::new(word_id);
    rec.level = level;
    rec.total_attempts = attempts;
    rec.incorrect_count = incorrect;
    rec
}

#[test]
fn empty_input_yields_all_zeros() {
    let stats = compute_stats(&[], &[]);
    assert_eq!(stats.accuracy, 0.0);
    assert_eq!(stats.recent_accuracy, 0.0);
    assert_eq!(stats.total_reviews, 0);
    assert_eq!(stats.mastered_count, 0);
}

#[test]
fn accuracy_and_recent_accuracy_over_mixed_records() {
    let records = vec![record("a", 2, 10, 2), record("b", 1, 5, 1)];
    // 15 attempts, 12 correct; recent window 4 of 5 correct
    let recent = [true, true, false, true, true];
    let stats = compute_stats(&records, &recent);

    assert_eq!(stats.total_reviews, 15);
    assert_eq!(stats.accuracy, 80.0);
    assert_eq!(stats.recent_accuracy, 80.0);
    assert_eq!(stats.mastered_count, 0);
}

#[test]
fn recent_accuracy_falls_back_to_lifetime() {
    let records = vec![record("a", 0, 4, 1)];
    let stats = compute_stats(&records, &[]);
    assert_eq!(stats.accuracy, 75.0);
    assert_eq!(stats.recent_accuracy, 75.0);
}

#[test]
fn mastered_counts_level_five_and_up() {
    let records = vec![
        record("a", 4, 8, 1),
        record("b", 5, 12, 2),
        record("c", 6, 20, 3),
    ];
    let stats = compute_stats(&records, &[]);
    assert_eq!(stats.mastered_count, 2);
}
