//! Serializable outcome values returned by the engine's operations.
//!
//! These are values, not state: the engine builds them per call and any front
//! end (terminal, HTTP, tests) can marshal them as JSON via serde.

use serde::Serialize;

/// One recorded guess.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Guess {
    pub word: String,
    /// User-facing score in [0, 100], rounded to two decimals.
    pub similarity: f64,
}

/// Result of starting a new game.
#[derive(Debug, Clone, Serialize)]
pub struct NewGame {
    pub message: String,
    /// Size of the candidate pool, for display.
    pub total_words: usize,
}

/// Result of a recorded guess.
#[derive(Debug, Clone, Serialize)]
pub struct GuessOutcome {
    pub word: String,
    pub similarity: f64,
    /// 1-based position among all guesses so far, best score first.
    pub rank: usize,
    pub won: bool,
    /// Number of guesses recorded in this session, this one included.
    pub attempts: usize,
    /// The target word, revealed only on a win.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_word: Option<String>,
}

/// A hint: one word semantically close to the target.
#[derive(Debug, Clone, Serialize)]
pub struct Hint {
    pub hint: String,
}

/// Result of giving up: the target is revealed.
#[derive(Debug, Clone, Serialize)]
pub struct Surrender {
    pub target_word: String,
    pub attempts: usize,
}

/// Liveness report.
#[derive(Debug, Clone, Serialize)]
pub struct Health {
    pub model_loaded: bool,
}
