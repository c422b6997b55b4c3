//! Markov chain text generation library.
//!
//! This crate provides a word-level Markov chain system including:
//! - Lookahead cursors and a line-joining filter over raw characters
//! - A Unicode-aware tokenizer splitting text into words and punctuation
//! - A weighted transition graph built from token sequences
//! - Random walks and sentence generation with an explicit random source
//! - Internal utilities for reading sample text

/// Errors reported by the chain, the walks and the cursors.
pub mod error;

/// Transition graph, nodes and generation logic.
///
/// Exposes the chain, its nodes, random walks and sentence generation.
pub mod model;

/// Character cursors, line joining and tokenization.
pub mod text;

/// I/O utilities (sample files and standard input).
pub mod io;

pub use error::{ChainError, Result};
