// Morphological generation: nominal declension, degrees of comparison,
// verbal conjugation and participle formation.
//
// Each generator is total over the combinations its skip policies admit:
// given a valid combination it always returns a form with a composed
// meaning. Invalid combinations (dual verbs, first-person singular
// imperatives, disallowed tense/voice pairs) return `None` and the caller
// moves on.

pub mod nominal;
pub mod verbal;

pub use nominal::{compare, inflect_nominal};
pub use verbal::{conjugate, form_participle, tense_voice_valid};

/// A generated surface form and its composed meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    pub surface: String,
    pub meaning: String,
}
