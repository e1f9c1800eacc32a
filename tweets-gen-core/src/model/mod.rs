//! Top-level module for the word chain.
//!
//! This module provides:
//! - Word nodes and their successor weights (`Word`)
//! - The first-seen-ordered word store (`Dictionary`)
//! - Model construction from a token stream (`ChainModel`, `ChainBuilder`)
//! - Start-word and successor sampling
//! - Generation configuration (`GenerationConfig`)
//! - Sentence generation (`SentenceGenerator`)

/// A single distinct word and its weighted outgoing transitions.
pub mod word;

/// Ordered collection of words with lookup by text and by position.
pub mod dictionary;

/// Chain model and its streaming builder.
///
/// Handles token ingestion, occurrence counting and transition recording.
pub mod chain;

/// Uniform start-word and weighted successor sampling.
pub mod sampler;

/// Generation parameters: word budget and sentence terminators.
pub mod config;

/// Sentence assembly on top of the samplers, one or many at a time.
pub mod generator;
