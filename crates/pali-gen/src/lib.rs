//! Rule-driven Pali lexicon generation.
//!
//! A seed knowledge base of roots, stems, particles, prefixes and affix
//! rules is expanded combinatorially into a full dictionary: nominal and
//! verbal inflections, degrees of comparison, participles, prefixed
//! verbs, compounds with sandhi at the joins, layered derivatives,
//! technical vocabulary, phrasal
//! expressions, numeral forms and sandhi variants. Every candidate passes
//! through one deduplicating registry, so generation is deterministic and
//! every surface form appears exactly once.

pub mod compound;
pub mod derivation;
pub mod morphology;
pub mod orchestrator;
pub mod output;
pub mod registry;
pub mod sandhi;
pub mod seed;
