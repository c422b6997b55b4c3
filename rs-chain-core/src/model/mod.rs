//! Top-level module for the transition graph and text generation.
//!
//! This module provides:
//! - The weighted transition graph (`Chain`)
//! - Its states and weighted sampling (`Node`)
//! - Random walks and sentence generation (`Walk`, `Sentences`)
//! - Generation configuration (`GenerationInput`)

/// Weighted transition graph between token values.
///
/// Handles node creation, transition accumulation and removal.
pub mod chain;

/// A single state of the chain and its weighted transitions.
///
/// Supports weighted random sampling with an explicit random source.
pub mod node;

/// Random walks through the chain and endless sentence generation.
pub mod walk;

/// Generation parameters such as sentence count, terminators and seed.
pub mod generation_input;

pub use chain::Chain;
pub use generation_input::GenerationInput;
pub use node::{Node, NodeId};
pub use walk::{DEFAULT_TERMINATORS, Sentences, Walk};
