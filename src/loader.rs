//! Word2vec text-format loader.
//!
//! Reads the plain-text word2vec layout: an optional `<count> <dims>` header
//! line followed by one `word v1 v2 ... vd` line per word. Loading a large
//! table can take a long time, so it happens lazily, exactly once, and a
//! failed attempt leaves the model unloaded and retryable.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::embedding::{EmbeddingModel, ModelError, Neighbor, VectorStore};

/// Lazily loaded embedding table backed by a word2vec text file.
#[derive(Debug)]
pub struct Word2vecModel {
    path: PathBuf,
    store: Option<VectorStore>,
}

impl Word2vecModel {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            store: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The loaded store, if any.
    pub fn store(&self) -> Option<&VectorStore> {
        self.store.as_ref()
    }

    fn loaded(&self) -> Result<&VectorStore, ModelError> {
        self.store.as_ref().ok_or(ModelError::NotLoaded)
    }
}

impl EmbeddingModel for Word2vecModel {
    fn load(&mut self) -> Result<(), ModelError> {
        if self.store.is_some() {
            return Ok(());
        }
        info!(path = %self.path.display(), "loading word2vec table");
        let store = read_word2vec(&self.path)?;
        info!(words = store.len(), "word2vec table loaded");
        self.store = Some(store);
        Ok(())
    }

    fn is_loaded(&self) -> bool {
        self.store.is_some()
    }

    fn contains(&self, word: &str) -> bool {
        self.store.as_ref().is_some_and(|s| s.contains(word))
    }

    fn similarity(&self, a: &str, b: &str) -> Result<f32, ModelError> {
        self.loaded()?.similarity(a, b)
    }

    fn nearest(&self, word: &str, top_n: usize) -> Result<Vec<Neighbor>, ModelError> {
        self.loaded()?.nearest(word, top_n)
    }
}

/// Parse a word2vec text file into a [`VectorStore`].
///
/// The first line is treated as a `<count> <dims>` header when it consists of
/// exactly two integers; otherwise it is parsed as a vector entry. Every
/// entry must have the same dimensionality; duplicate words keep the last
/// vector seen.
pub fn read_word2vec(path: &Path) -> Result<VectorStore, ModelError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut store = VectorStore::new();
    let mut dims: Option<usize> = None;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let lineno = idx + 1;
        let mut tokens = line.split_whitespace();
        let Some(word) = tokens.next() else {
            continue; // blank line
        };
        let rest: Vec<&str> = tokens.collect();

        if lineno == 1 && rest.len() == 1 {
            let header = word.parse::<usize>().and_then(|n| {
                rest[0].parse::<usize>().map(|d| (n, d))
            });
            if let Ok((count, d)) = header {
                info!(words = count, dims = d, "word2vec header");
                dims = Some(d);
                continue;
            }
        }

        let mut vector = Vec::with_capacity(rest.len());
        for tok in &rest {
            let v: f32 = tok.parse().map_err(|_| ModelError::Parse {
                line: lineno,
                msg: format!("invalid vector component '{tok}'"),
            })?;
            vector.push(v);
        }
        if vector.is_empty() {
            return Err(ModelError::Parse {
                line: lineno,
                msg: format!("no vector components for word '{word}'"),
            });
        }
        match dims {
            Some(d) if d != vector.len() => {
                return Err(ModelError::Parse {
                    line: lineno,
                    msg: format!("expected {d} components, found {}", vector.len()),
                });
            }
            None => dims = Some(vector.len()),
            _ => {}
        }
        store.insert(word, vector);
    }

    Ok(store)
}
