//! Shared types for the Pali lexicon generation engine.
//!
//! This crate holds the vocabulary that every other crate in the workspace
//! speaks: grammatical category enums, semantic-field tags, the generated
//! entry record, the clamped frequency weight, and the error taxonomy.
//! It carries no generation logic of its own.

pub mod entry;
pub mod error;
pub mod field;
pub mod frequency;
pub mod gloss;
pub mod grammar;
