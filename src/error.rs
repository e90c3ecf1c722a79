use thiserror::Error;

use crate::embedding::ModelError;

/// Every way a game operation can fail.
///
/// All variants are expected, recoverable, user-facing conditions reachable
/// through normal play; none of them ends the process or the session.
#[derive(Error, Debug)]
pub enum GameError {
    /// The embedding table is not loaded and could not be loaded.
    #[error("embedding model is not loaded")]
    ModelNotLoaded,

    /// The candidate pool is empty, so no target can be drawn.
    #[error("no candidate words available")]
    NoCandidates,

    /// Operation requires a game in progress.
    #[error("no game in progress")]
    GameNotStarted,

    /// The current game already ended; start a new one.
    #[error("the game is over")]
    GameOver,

    /// Guess was empty after trimming whitespace.
    #[error("empty guess")]
    EmptyInput,

    /// The word was already guessed in this session.
    #[error("'{0}' was already guessed")]
    DuplicateGuess(String),

    /// The word has no vector in the embedding table.
    #[error("'{0}' is not in the vocabulary")]
    WordNotInVocabulary(String),

    /// Every candidate hint was already guessed, or the neighbor lookup
    /// failed.
    #[error("no hints available")]
    NoHintsAvailable,

    /// Propagated embedding-model failure.
    #[error("model error: {0}")]
    Model(#[from] ModelError),
}
