//! Embedding capability consumed by the game engine.
//!
//! The engine never touches raw vectors; everything it needs from the
//! embedding table goes through [`EmbeddingModel`]. [`VectorStore`] is the
//! in-memory implementation backing both the word2vec loader and the test
//! fixtures.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;
use thiserror::Error;

/// Failures of the embedding collaborator.
#[derive(Error, Debug)]
pub enum ModelError {
    /// Propagated I/O error while reading the table.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed entry in the table file.
    #[error("parse error at line {line}: {msg}")]
    Parse { line: usize, msg: String },

    /// Word has no vector in the table.
    #[error("word not found: '{0}'")]
    NotFound(String),

    /// Operation requires a loaded table.
    #[error("model not loaded")]
    NotLoaded,
}

/// One entry of a nearest-neighbor query, score in [-1, 1].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Neighbor {
    pub word: String,
    pub score: f32,
}

/// Capability interface over a pretrained word-embedding table.
///
/// `load` is idempotent and retryable: calling it on an already loaded model
/// is a no-op success, and a failed load leaves the model unloaded so a later
/// call can try again.
pub trait EmbeddingModel {
    fn load(&mut self) -> Result<(), ModelError>;

    fn is_loaded(&self) -> bool;

    /// Exact-string membership test. False on an unloaded model.
    fn contains(&self, word: &str) -> bool;

    /// Cosine similarity between two words' vectors.
    fn similarity(&self, a: &str, b: &str) -> Result<f32, ModelError>;

    /// Up to `top_n` nearest neighbors of `word`, descending by score.
    /// The query word itself is never part of the result.
    fn nearest(&self, word: &str, top_n: usize) -> Result<Vec<Neighbor>, ModelError>;
}

/// In-memory word → vector table with O(1) membership lookup.
#[derive(Debug, Clone, Default)]
pub struct VectorStore {
    vectors: HashMap<String, Vec<f32>>,
}

impl VectorStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a word's vector. Last write wins.
    pub fn insert(&mut self, word: impl Into<String>, vector: Vec<f32>) {
        self.vectors.insert(word.into(), vector);
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    fn vector(&self, word: &str) -> Result<&[f32], ModelError> {
        self.vectors
            .get(word)
            .map(Vec::as_slice)
            .ok_or_else(|| ModelError::NotFound(word.to_string()))
    }

    /// Cosine similarity of two raw vectors. Zero-norm vectors compare as 0.0
    /// so scores stay finite.
    pub fn cosine(a: &[f32], b: &[f32]) -> f32 {
        let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
        let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
        let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }
        dot / (norm_a * norm_b)
    }
}

impl EmbeddingModel for VectorStore {
    fn load(&mut self) -> Result<(), ModelError> {
        Ok(())
    }

    fn is_loaded(&self) -> bool {
        true
    }

    fn contains(&self, word: &str) -> bool {
        self.vectors.contains_key(word)
    }

    fn similarity(&self, a: &str, b: &str) -> Result<f32, ModelError> {
        let va = self.vector(a)?;
        let vb = self.vector(b)?;
        Ok(Self::cosine(va, vb))
    }

    fn nearest(&self, word: &str, top_n: usize) -> Result<Vec<Neighbor>, ModelError> {
        let query = self.vector(word)?;
        let mut hits: Vec<Neighbor> = self
            .vectors
            .iter()
            .filter(|(w, _)| w.as_str() != word)
            .map(|(w, v)| Neighbor {
                word: w.clone(),
                score: Self::cosine(query, v),
            })
            .collect();
        // Descending by score; ties broken by word so the order does not
        // depend on hash-map iteration.
        hits.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.word.cmp(&b.word))
        });
        hits.truncate(top_n);
        Ok(hits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> VectorStore {
        let mut s = VectorStore::new();
        s.insert("east", vec![1.0, 0.0]);
        s.insert("west", vec![-1.0, 0.0]);
        s.insert("north", vec![0.0, 1.0]);
        s.insert("northeast", vec![1.0, 1.0]);
        s
    }

    #[test]
    fn cosine_of_identical_vectors_is_one() {
        assert!((VectorStore::cosine(&[3.0, 4.0], &[3.0, 4.0]) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn cosine_of_opposed_vectors_is_minus_one() {
        let sim = store().similarity("east", "west").unwrap();
        assert!((sim + 1.0).abs() < 1e-6);
    }

    #[test]
    fn cosine_of_orthogonal_vectors_is_zero() {
        let sim = store().similarity("east", "north").unwrap();
        assert!(sim.abs() < 1e-6);
    }

    #[test]
    fn zero_norm_vector_scores_zero() {
        let mut s = store();
        s.insert("void", vec![0.0, 0.0]);
        assert_eq!(s.similarity("void", "east").unwrap(), 0.0);
    }

    #[test]
    fn similarity_of_unknown_word_is_not_found() {
        assert!(matches!(
            store().similarity("east", "海"),
            Err(ModelError::NotFound(w)) if w == "海"
        ));
    }

    #[test]
    fn nearest_is_descending_and_excludes_query() {
        let hits = store().nearest("east", 10).unwrap();
        assert!(hits.iter().all(|n| n.word != "east"));
        assert!(hits.windows(2).all(|w| w[0].score >= w[1].score));
        assert_eq!(hits[0].word, "northeast");
    }

    #[test]
    fn nearest_truncates_to_top_n() {
        let hits = store().nearest("east", 2).unwrap();
        assert_eq!(hits.len(), 2);
    }
}
