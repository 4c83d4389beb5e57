// Compound composition: sandhi-joined surfaces, a semantic-field
// meaningfulness filter, and a fixed classification decision table.
//
// Classification looks only at the first and last component fields, in
// this order: identical fields read as coordination, a quality-like
// opener as description, a body or faculty closer as possession, and
// anything else as determination. The table is total, so composition
// never fails to classify.

use pali_core::field::SemanticField;
use pali_core::frequency::Frequency;
use pali_core::grammar::CompoundType;

use crate::sandhi;

/// Hard cap on components folded into one compound.
pub const MAX_DEPTH: usize = 4;

/// A compounding component: a seed key with its gloss and field.
#[derive(Debug, Clone, Copy)]
pub struct Component<'a> {
    pub key: &'a str,
    pub gloss: &'a str,
    pub field: SemanticField,
    pub frequency: Frequency,
}

/// A composed compound before registry commit.
#[derive(Debug, Clone, PartialEq)]
pub struct CompoundCandidate {
    pub surface: String,
    pub meaning: String,
    pub compound_type: CompoundType,
    /// Component keys in surface order.
    pub components: Vec<String>,
    /// Field of the first component, kept for re-classification when the
    /// compound is extended.
    pub first_field: SemanticField,
    pub frequency: Frequency,
}

impl CompoundCandidate {
    pub fn depth(&self) -> u8 {
        self.components.len() as u8
    }
}

/// Whether a component pair can head a meaningful compound. Two members
/// of closed grammatical classes never can.
pub fn is_meaningful(first: SemanticField, last: SemanticField) -> bool {
    !(first.is_closed_class() && last.is_closed_class())
}

/// Classify a compound by its first and last component fields.
pub fn classify(first: SemanticField, last: SemanticField) -> CompoundType {
    if first == last {
        CompoundType::Coordinative
    } else if first.is_quality_like() {
        CompoundType::Descriptive
    } else if last.is_possessive_marker() {
        CompoundType::Possessive
    } else {
        CompoundType::Determinative
    }
}

fn compound_meaning(kind: CompoundType, first: &str, last: &str) -> String {
    match kind {
        CompoundType::Coordinative => format!("{first} and {last}"),
        CompoundType::Descriptive => format!("{first} {last}"),
        CompoundType::Possessive => format!("having the {last} of {first}"),
        CompoundType::Determinative => format!("{last} of {first}"),
    }
}

/// Compose a two-component compound. Returns `None` when the pair is
/// filtered out (closed-class pair, or a component compounded with
/// itself).
pub fn compose(first: Component<'_>, last: Component<'_>) -> Option<CompoundCandidate> {
    if first.key == last.key {
        return None;
    }
    if !is_meaningful(first.field, last.field) {
        return None;
    }
    let compound_type = classify(first.field, last.field);
    Some(CompoundCandidate {
        surface: sandhi::join(first.key, last.key),
        meaning: compound_meaning(compound_type, first.gloss, last.gloss),
        compound_type,
        components: vec![first.key.to_string(), last.key.to_string()],
        first_field: first.field,
        frequency: Frequency::combine(first.frequency, last.frequency),
    })
}

/// Extend an existing compound by one component. Returns `None` at the
/// depth cap or when the extension is filtered out.
pub fn extend(base: &CompoundCandidate, ext: Component<'_>) -> Option<CompoundCandidate> {
    if base.components.len() >= MAX_DEPTH {
        return None;
    }
    if base.components.iter().any(|k| k == ext.key) {
        return None;
    }
    if !is_meaningful(base.first_field, ext.field) {
        return None;
    }
    let compound_type = classify(base.first_field, ext.field);
    let mut components = base.components.clone();
    components.push(ext.key.to_string());
    Some(CompoundCandidate {
        surface: sandhi::join(&base.surface, ext.key),
        meaning: format!("{} of {}", ext.gloss, base.meaning),
        compound_type,
        components,
        first_field: base.first_field,
        frequency: Frequency::combine(base.frequency, ext.frequency),
    })
}
