//! Game engine: session state machine plus the guess/score/rank/hint logic.

use std::cmp::Ordering;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use crate::embedding::{EmbeddingModel, ModelError};
use crate::error::GameError;
use crate::types::{Guess, GuessOutcome, Health, Hint, NewGame, Surrender};
use crate::words;

/// How many neighbors of the target to fetch for hint selection.
const HINT_NEIGHBORS: usize = 20;
/// The hint is drawn from the first this-many unguessed neighbors.
const HINT_CHOICES: usize = 5;

/// One game's mutable state. Created by `start_new_game`, replaced by the
/// next one.
#[derive(Debug)]
struct Session {
    target: String,
    /// Attempt order; words are unique within a session.
    guesses: Vec<Guess>,
    over: bool,
}

/// The game engine. Owns the embedding model, the candidate pool and at most
/// one session at a time.
///
/// Every mutating operation takes `&mut self`, which is all the exclusivity
/// single-session play needs; callers that share an engine across threads
/// wrap it in a mutex.
pub struct Engine<M: EmbeddingModel> {
    model: M,
    /// Source word list, filtered into `pool` once the model is loaded.
    words: Vec<String>,
    pool: Option<Vec<String>>,
    session: Option<Session>,
    rng: StdRng,
}

impl<M: EmbeddingModel> Engine<M> {
    /// Engine over the default common-word list.
    pub fn new(model: M) -> Self {
        Self::with_words(model, words::default_words())
    }

    /// Engine over a custom candidate word list.
    pub fn with_words(model: M, words: Vec<String>) -> Self {
        Self {
            model,
            words,
            pool: None,
            session: None,
            rng: StdRng::from_entropy(),
        }
    }

    /// Reseed the RNG driving target and hint selection. Tests use this for
    /// determinism.
    pub fn seed_rng(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Load the embedding table (no-op when already loaded) and rebuild the
    /// candidate pool from it.
    pub fn load_model(&mut self) -> Result<usize, GameError> {
        self.model.load()?;
        let pool = words::build_pool(&self.model, &self.words);
        info!(candidates = pool.len(), "candidate pool built");
        let size = pool.len();
        self.pool = Some(pool);
        Ok(size)
    }

    fn ensure_ready(&mut self) -> Result<(), GameError> {
        if self.model.is_loaded() && self.pool.is_some() {
            return Ok(());
        }
        self.load_model().map_err(|e| {
            warn!(error = %e, "model load failed");
            GameError::ModelNotLoaded
        })?;
        Ok(())
    }

    /// Start a new game, replacing any previous session.
    ///
    /// Triggers the one-time model load if needed. Fails with `NoCandidates`
    /// on an empty pool, leaving any existing session untouched.
    pub fn start_new_game(&mut self) -> Result<NewGame, GameError> {
        self.ensure_ready()?;
        let target = match &self.pool {
            Some(pool) if !pool.is_empty() => pool
                .choose(&mut self.rng)
                .cloned()
                .ok_or(GameError::NoCandidates)?,
            _ => return Err(GameError::NoCandidates),
        };
        self.session = Some(Session {
            target,
            guesses: Vec::new(),
            over: false,
        });
        let total_words = self.pool.as_ref().map_or(0, Vec::len);
        info!(total_words, "new game started");
        Ok(NewGame {
            message: "Game on! Enter your first guess.".to_string(),
            total_words,
        })
    }

    /// Score one guess against the hidden target.
    pub fn guess(&mut self, word: &str) -> Result<GuessOutcome, GameError> {
        let word = word.trim();
        if word.is_empty() {
            return Err(GameError::EmptyInput);
        }
        let Some(session) = self.session.as_mut() else {
            return Err(GameError::GameNotStarted);
        };
        if session.over {
            return Err(GameError::GameOver);
        }

        // Exact match wins outright, before any vocabulary lookup, so a win
        // never depends on the target having a vector.
        if word == session.target {
            session.over = true;
            session.guesses.push(Guess {
                word: word.to_string(),
                similarity: 100.0,
            });
            let attempts = session.guesses.len();
            info!(attempts, "target guessed");
            return Ok(GuessOutcome {
                word: word.to_string(),
                similarity: 100.0,
                rank: 1,
                won: true,
                attempts,
                target_word: Some(session.target.clone()),
            });
        }

        if session.guesses.iter().any(|g| g.word == word) {
            return Err(GameError::DuplicateGuess(word.to_string()));
        }

        let similarity = match self.model.similarity(word, &session.target) {
            Ok(cos) => score_from_cosine(cos),
            Err(ModelError::NotFound(_)) => {
                return Err(GameError::WordNotInVocabulary(word.to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        session.guesses.push(Guess {
            word: word.to_string(),
            similarity,
        });
        let rank = rank_of(&session.guesses, word);
        debug!(word, similarity, rank, "guess recorded");
        Ok(GuessOutcome {
            word: word.to_string(),
            similarity,
            rank,
            won: false,
            attempts: session.guesses.len(),
            target_word: None,
        })
    }

    /// One word close to the target, never one already guessed.
    pub fn hint(&mut self) -> Result<Hint, GameError> {
        let Some(session) = self.session.as_ref() else {
            return Err(GameError::GameNotStarted);
        };
        if session.over {
            return Err(GameError::GameNotStarted);
        }
        let neighbors = self
            .model
            .nearest(&session.target, HINT_NEIGHBORS)
            .map_err(|e| {
                debug!(error = %e, "neighbor lookup failed");
                GameError::NoHintsAvailable
            })?;
        let candidates: Vec<&str> = neighbors
            .iter()
            .filter(|n| !session.guesses.iter().any(|g| g.word == n.word))
            .take(HINT_CHOICES)
            .map(|n| n.word.as_str())
            .collect();
        let hint = candidates
            .choose(&mut self.rng)
            .ok_or(GameError::NoHintsAvailable)?;
        Ok(Hint {
            hint: (*hint).to_string(),
        })
    }

    /// End the game and reveal the target.
    pub fn give_up(&mut self) -> Result<Surrender, GameError> {
        let Some(session) = self.session.as_mut() else {
            return Err(GameError::GameNotStarted);
        };
        if session.over {
            return Err(GameError::GameNotStarted);
        }
        session.over = true;
        info!(attempts = session.guesses.len(), "player gave up");
        Ok(Surrender {
            target_word: session.target.clone(),
            attempts: session.guesses.len(),
        })
    }

    /// All guesses of the current session, best score first (stable on
    /// ties). Empty when no game has been started.
    pub fn history(&self) -> Vec<Guess> {
        let mut guesses = self
            .session
            .as_ref()
            .map(|s| s.guesses.clone())
            .unwrap_or_default();
        sort_by_score(&mut guesses);
        guesses
    }

    pub fn health(&self) -> Health {
        Health {
            model_loaded: self.model.is_loaded(),
        }
    }

    /// The filtered candidate pool. Empty until the model has been loaded.
    pub fn pool(&self) -> &[String] {
        self.pool.as_deref().unwrap_or_default()
    }
}

/// Map cosine in [-1, 1] to the user-facing [0, 100] scale, clamped below
/// and rounded to two decimals.
fn score_from_cosine(cos: f32) -> f64 {
    let score = ((f64::from(cos) + 1.0) / 2.0 * 100.0).max(0.0);
    (score * 100.0).round() / 100.0
}

fn sort_by_score(guesses: &mut [Guess]) {
    // Stable sort: equal scores keep attempt order.
    guesses.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(Ordering::Equal)
    });
}

/// 1-based position of `word` in the score-descending ordering of
/// `guesses`.
fn rank_of(guesses: &[Guess], word: &str) -> usize {
    let mut sorted: Vec<&Guess> = guesses.iter().collect();
    sorted.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(Ordering::Equal)
    });
    sorted.iter().position(|g| g.word == word).unwrap_or(0) + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_maps_cosine_to_percent() {
        assert_eq!(score_from_cosine(1.0), 100.0);
        assert_eq!(score_from_cosine(0.0), 50.0);
        assert_eq!(score_from_cosine(-1.0), 0.0);
        assert_eq!(score_from_cosine(0.6), 80.0);
    }

    #[test]
    fn score_rounds_to_two_decimals() {
        // (0.123456 + 1) / 2 * 100 = 56.1728
        assert_eq!(score_from_cosine(0.123_456), 56.17);
    }

    #[test]
    fn rank_counts_strictly_greater_scores() {
        let guesses = [
            Guess { word: "a".into(), similarity: 70.0 },
            Guess { word: "b".into(), similarity: 90.0 },
            Guess { word: "c".into(), similarity: 80.0 },
        ];
        assert_eq!(rank_of(&guesses, "b"), 1);
        assert_eq!(rank_of(&guesses, "c"), 2);
        assert_eq!(rank_of(&guesses, "a"), 3);
    }

    #[test]
    fn rank_ties_resolve_to_attempt_order() {
        let guesses = [
            Guess { word: "first".into(), similarity: 80.0 },
            Guess { word: "second".into(), similarity: 80.0 },
        ];
        assert_eq!(rank_of(&guesses, "first"), 1);
        assert_eq!(rank_of(&guesses, "second"), 2);
    }
}
