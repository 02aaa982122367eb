//! Character-level Markov text generation library.
//!
//! This crate provides a fixed-order character model including:
//! - Per-context character frequency tables with cumulative probabilities
//! - A context model built by a single sliding-window scan of a corpus
//! - Weighted random sampling from a finalized table
//! - Autoregressive text generation from a seed string
//!
//! Only the high-level API is exposed publicly. Low-level components
//! are kept internal to ensure consistency and prevent misuse.

/// Core model types and generation logic.
///
/// This module exposes the context model, the sampler and the generator
/// while keeping file-handling details private.
pub mod model;

/// I/O utilities (corpus file loading).
///
/// Not exposed
pub(crate) mod io;
