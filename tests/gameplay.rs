use semantle::{Engine, GameError, VectorStore};

/// Store whose words all sit on the unit circle, so cosines are easy to
/// read off: target style vectors [1, 0], a cosine-c word is [c, sqrt(1-c²)].
fn unit(c: f32) -> Vec<f32> {
    vec![c, (1.0 - c * c).max(0.0).sqrt()]
}

fn single_word_engine() -> Engine<VectorStore> {
    let mut store = VectorStore::new();
    store.insert("太阳", unit(1.0));
    Engine::new(store)
}

#[test]
fn new_game_picks_target_from_pool_and_clears_history() {
    let mut engine = single_word_engine();
    let started = engine.start_new_game().unwrap();
    assert_eq!(started.total_words, 1);
    assert_eq!(engine.pool(), ["太阳".to_string()]);
    assert!(engine.history().is_empty());

    let surrendered = engine.give_up().unwrap();
    assert!(engine.pool().contains(&surrendered.target_word));
}

#[test]
fn guessing_the_target_wins_immediately() {
    let mut engine = single_word_engine();
    engine.start_new_game().unwrap();

    let result = engine.guess("太阳").unwrap();
    assert_eq!(result.similarity, 100.0);
    assert_eq!(result.rank, 1);
    assert!(result.won);
    assert_eq!(result.attempts, 1);
    assert_eq!(result.target_word.as_deref(), Some("太阳"));

    // Win is recorded and the session is over.
    let history = engine.history();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].word, "太阳");
    assert_eq!(history[0].similarity, 100.0);
    assert!(matches!(engine.guess("太阳"), Err(GameError::GameOver)));
}

#[test]
fn cosine_point_six_scores_eighty() {
    let mut store = VectorStore::new();
    store.insert("海洋", unit(1.0));
    store.insert("湖泊", unit(0.6));
    let mut engine = Engine::with_words(store, vec!["海洋".to_string()]);
    engine.start_new_game().unwrap();

    let result = engine.guess("湖泊").unwrap();
    assert_eq!(result.similarity, 80.0);
    assert_eq!(result.rank, 1);
    assert!(!result.won);
    assert_eq!(result.attempts, 1);
}

#[test]
fn guesses_are_trimmed_before_matching() {
    let mut engine = single_word_engine();
    engine.start_new_game().unwrap();
    let result = engine.guess("  太阳\n").unwrap();
    assert!(result.won);
}

#[test]
fn empty_guess_is_rejected_and_not_recorded() {
    let mut engine = single_word_engine();
    engine.start_new_game().unwrap();
    assert!(matches!(engine.guess("   "), Err(GameError::EmptyInput)));
    assert!(engine.history().is_empty());
}

#[test]
fn guess_before_start_fails() {
    let mut engine = single_word_engine();
    assert!(matches!(engine.guess("太阳"), Err(GameError::GameNotStarted)));
}

#[test]
fn duplicate_guess_is_rejected_without_recording() {
    let mut store = VectorStore::new();
    store.insert("天空", unit(1.0));
    store.insert("大海", unit(0.8));
    let mut engine = Engine::with_words(store, vec!["天空".to_string()]);
    engine.start_new_game().unwrap();

    engine.guess("大海").unwrap();
    let err = engine.guess("大海").unwrap_err();
    assert!(matches!(err, GameError::DuplicateGuess(w) if w == "大海"));
    assert_eq!(engine.history().len(), 1);
}

#[test]
fn unknown_word_is_rejected_without_recording() {
    let mut engine = single_word_engine();
    engine.start_new_game().unwrap();
    let err = engine.guess("硅基生物").unwrap_err();
    assert!(matches!(err, GameError::WordNotInVocabulary(w) if w == "硅基生物"));
    assert!(engine.history().is_empty());
}

#[test]
fn history_is_sorted_by_score_descending() {
    let mut store = VectorStore::new();
    store.insert("天空", unit(1.0));
    store.insert("大海", unit(0.8)); // 90.0
    store.insert("河流", unit(0.6)); // 80.0
    store.insert("森林", unit(0.0)); // 50.0
    let mut engine = Engine::with_words(store, vec!["天空".to_string()]);
    engine.start_new_game().unwrap();

    assert_eq!(engine.guess("森林").unwrap().rank, 1);
    assert_eq!(engine.guess("大海").unwrap().rank, 1);
    assert_eq!(engine.guess("河流").unwrap().rank, 2);

    let history = engine.history();
    assert_eq!(history[0].word, "大海");
    assert_eq!(history[1].word, "河流");
    assert_eq!(history[2].word, "森林");
    assert!(history.windows(2).all(|w| w[0].similarity >= w[1].similarity));
}

#[test]
fn give_up_reveals_target_and_ends_the_game() {
    let mut store = VectorStore::new();
    store.insert("天空", unit(1.0));
    store.insert("大海", unit(0.8));
    let mut engine = Engine::with_words(store, vec!["天空".to_string()]);
    engine.start_new_game().unwrap();
    engine.guess("大海").unwrap();

    let surrendered = engine.give_up().unwrap();
    assert_eq!(surrendered.target_word, "天空");
    assert_eq!(surrendered.attempts, 1);

    assert!(matches!(engine.guess("大海"), Err(GameError::GameOver)));
    assert!(matches!(engine.give_up(), Err(GameError::GameNotStarted)));
}

#[test]
fn give_up_before_start_fails() {
    let mut engine = single_word_engine();
    assert!(matches!(engine.give_up(), Err(GameError::GameNotStarted)));
}

#[test]
fn empty_pool_cannot_start_a_game() {
    let mut engine = Engine::new(VectorStore::new());
    assert!(matches!(
        engine.start_new_game(),
        Err(GameError::NoCandidates)
    ));
    // State stays NoGame.
    assert!(matches!(engine.guess("太阳"), Err(GameError::GameNotStarted)));
}

#[test]
fn restart_replaces_the_session() {
    let mut store = VectorStore::new();
    store.insert("天空", unit(1.0));
    store.insert("大海", unit(0.8));
    let mut engine = Engine::with_words(store, vec!["天空".to_string()]);
    engine.start_new_game().unwrap();
    engine.guess("大海").unwrap();

    engine.start_new_game().unwrap();
    assert!(engine.history().is_empty());
    // The previous guess is playable again.
    assert_eq!(engine.guess("大海").unwrap().attempts, 1);
}

#[test]
fn seeded_engines_pick_the_same_targets() {
    let mut store = VectorStore::new();
    for (i, word) in ["太阳", "月亮", "星星", "天空", "大海"].iter().enumerate() {
        store.insert(*word, unit(i as f32 / 5.0));
    }
    let mut a = Engine::new(store.clone());
    let mut b = Engine::new(store);
    a.seed_rng(42);
    b.seed_rng(42);
    for _ in 0..5 {
        a.start_new_game().unwrap();
        b.start_new_game().unwrap();
        assert_eq!(a.give_up().unwrap().target_word, b.give_up().unwrap().target_word);
    }
}

#[test]
fn health_reports_loaded_store() {
    let engine = single_word_engine();
    assert!(engine.health().model_loaded);
}
