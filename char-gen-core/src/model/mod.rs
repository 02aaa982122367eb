//! Top-level module for the Markov generation system.
//!
//! This crate provides a fixed-order character-level text generator, including:
//! - Per-context frequency tables (`FrequencyTable`)
//! - The trained window-to-table mapping (`ContextModel`)
//! - Weighted random sampling (`ProbabilitySampler`)
//! - A high-level generation interface (`TextGenerator`)

/// Trained mapping from fixed-length windows to frequency tables.
///
/// Exposes training from in-memory text or from a corpus file,
/// read-only lookups, and a human-readable model dump.
pub mod context_model;

/// Ordered character frequency table for one context window.
///
/// Tracks follower counts in first-seen order and computes
/// probability and cumulative-probability annotations.
pub mod freq_table;

/// High-level interface for generating text from a trained model.
///
/// Drives autoregressive generation by repeated window lookup,
/// sampling and window sliding.
pub mod generator;

/// Weighted random character sampling.
///
/// Owns an explicit random source, constructible seeded (reproducible)
/// or from OS entropy.
pub mod sampler;
