//! Core logic for a semantic word-guessing game.
//!
//! A hidden target word is drawn from a pool of common words and the player
//! submits guesses, each scored by cosine similarity to the target in a
//! pretrained word-embedding table and mapped to a [0, 100] scale. The
//! [`Engine`] owns the single active session; any front end (the bundled
//! terminal binary, an HTTP layer, tests) drives it through its operations
//! and marshals the serde-serializable outcomes.

pub mod embedding;
pub mod error;
pub mod game;
pub mod loader;
pub mod types;
pub mod words;

pub use embedding::{EmbeddingModel, ModelError, Neighbor, VectorStore};
pub use error::GameError;
pub use game::Engine;
pub use loader::Word2vecModel;
pub use types::{Guess, GuessOutcome, Health, Hint, NewGame, Surrender};
