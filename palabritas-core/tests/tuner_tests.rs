use palabritas_core::{
    adjust_difficulty, should_ease, DifficultySettings, GameSession, HintState,
};

#[test]
fn fewer_than_five_outcomes_change_nothing() {
    let settings = DifficultySettings::default();
    let out = adjust_difficulty(&settings, &[false, false, false, false]);
    assert_eq!(out, settings);
}

#[test]
fn low_recent_accuracy_eases_the_session() {
    let settings = DifficultySettings::default();
    // 2 of 5 correct = 40%
    let out = adjust_difficulty(&settings, &[true, false, false, false, true]);

    assert_eq!(out.max_options, 3);
    assert!(out.show_hints);
    assert!(out.extra_time);
    // untouched fields carry over
    assert_eq!(out.font_size, settings.font_size);
    assert_eq!(out.dyslexia_friendly, settings.dyslexia_friendly);
}

#[test]
fn easing_floors_at_two_options() {
    let settings = DifficultySettings {
        max_options: 2,
        ..Default::default()
    };
    let out = adjust_difficulty(&settings, &[false; 5]);
    assert_eq!(out.max_options, 2);
}

#[test]
fn sustained_mastery_escalates() {
    let settings = DifficultySettings::default();
    let out = adjust_difficulty(&settings, &[true; 10]);

    assert_eq!(out.max_options, 5);
    assert!(!out.show_hints);
    assert!(!out.extra_time);
}

#[test]
fn escalation_caps_at_six_options() {
    let settings = DifficultySettings {
        max_options: 6,
        ..Default::default()
    };
    let out = adjust_difficulty(&settings, &[true; 10]);
    assert_eq!(out.max_options, 6);
}

#[test]
fn out_of_range_stored_options_are_clamped_not_panicked() {
    // a hand-edited or corrupt settings blob can carry anything
    let settings = DifficultySettings {
        max_options: u8::MAX,
        ..Default::default()
    };
    let escalated = adjust_difficulty(&settings, &[true; 10]);
    assert_eq!(escalated.max_options, 6);

    let eased = adjust_difficulty(&DifficultySettings { max_options: 0, ..Default::default() }, &[false; 5]);
    assert_eq!(eased.max_options, 2);
}

#[test]
fn ninety_percent_over_ten_is_not_enough() {
    // 9 of 10 correct: strictly-greater-than threshold keeps settings as-is
    let mut outcomes = vec![true; 10];
    outcomes[0] = false;
    let settings = DifficultySettings::default();
    assert_eq!(adjust_difficulty(&settings, &outcomes), settings);
}

#[test]
fn fewer_than_ten_outcomes_never_escalate() {
    let settings = DifficultySettings::default();
    assert_eq!(adjust_difficulty(&settings, &[true; 9]), settings);
}

#[test]
fn ease_check_wins_over_escalation() {
    // perfect start, collapsed finish: last 5 at 40%
    let outcomes = vec![
        true, true, true, true, true, true, false, false, false, true,
    ];
    let out = adjust_difficulty(&DifficultySettings::default(), &outcomes);
    assert!(out.show_hints);
    assert_eq!(out.max_options, 3);
}

#[test]
fn should_ease_requires_five_outcomes() {
    assert!(!should_ease(&[]));
    assert!(!should_ease(&[false, false, false, false]));
    assert!(should_ease(&[true, false, false, false, true]));
    assert!(!should_ease(&[true, true, true, true, false]));
}

#[test]
fn should_ease_depends_only_on_last_five() {
    let tail = [true, false, false, false, true];
    let mut padded: Vec<bool> = vec![true; 20];
    padded.extend_from_slice(&tail);

    assert_eq!(should_ease(&tail), should_ease(&padded));

    let mut padded_false: Vec<bool> = vec![false; 20];
    padded_false.extend_from_slice(&tail);
    assert_eq!(should_ease(&tail), should_ease(&padded_false));
}

#[test]
fn game_session_tracks_streak_and_mistakes() {
    let session = GameSession::new("greet_1");
    let session = session.record_answer(true);
    assert_eq!(session.current_streak, 1);
    assert_eq!(session.mistake_count, 0);

    let session = session.record_answer(false);
    assert_eq!(session.current_streak, 0);
    assert_eq!(session.mistake_count, 1);

    let session = session.record_answer(false);
    assert_eq!(session.mistake_count, 2);
    assert_eq!(session.attempts, vec![true, false, false]);
}

#[test]
fn hint_shows_on_second_mistake_when_enabled() {
    let settings = DifficultySettings {
        show_dutch_on_second_mistake: true,
        ..Default::default()
    };

    let mut session = GameSession::new("w");
    let mut hint = HintState::default();
    assert!(!hint.is_shown());

    session = session.record_answer(false);
    hint = hint.after_answer(false, &session, &settings);
    assert!(!hint.is_shown());

    session = session.record_answer(false);
    hint = hint.after_answer(false, &session, &settings);
    assert!(hint.is_shown());

    // correct answer hides it again
    session = session.record_answer(true);
    hint = hint.after_answer(true, &session, &settings);
    assert!(!hint.is_shown());
}

#[test]
fn hint_stays_hidden_when_setting_is_off() {
    let settings = DifficultySettings::default();
    let mut session = GameSession::new("w");
    let mut hint = HintState::default();

    for _ in 0..4 {
        session = session.record_answer(false);
        hint = hint.after_answer(false, &session, &settings);
    }
    assert!(!hint.is_shown());
}
