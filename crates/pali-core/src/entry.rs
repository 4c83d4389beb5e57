// The generated entry record: a mandatory core plus kind-specific
// attribute groups.
//
// The original ad hoc per-entry field soup is reworked as one record with
// a mandatory core (key, meaning, kind, frequency) and optional attribute
// groups that are populated according to the entry kind. Groups are
// flattened on serialization so consumers see the flat schema they expect.

use serde::{Deserialize, Serialize};

use crate::frequency::Frequency;
use crate::grammar::{
    Case, CompoundType, Degree, DerivationLevel, Gender, Number, ParticipleKind, Person, Tense,
    Voice,
};

/// Kind of a generated entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    BaseWord,
    InflectedNominal,
    VerbForm,
    Participle,
    ComparisonForm,
    PrefixedVerb,
    Compound,
    Derivative,
    TechnicalTerm,
    PhrasalExpression,
    Numeral,
    SandhiVariant,
}

impl EntryKind {
    /// The serialized tag, for human-readable listings.
    pub fn label(self) -> &'static str {
        match self {
            EntryKind::BaseWord => "base_word",
            EntryKind::InflectedNominal => "inflected_nominal",
            EntryKind::VerbForm => "verb_form",
            EntryKind::Participle => "participle",
            EntryKind::ComparisonForm => "comparison_form",
            EntryKind::PrefixedVerb => "prefixed_verb",
            EntryKind::Compound => "compound",
            EntryKind::Derivative => "derivative",
            EntryKind::TechnicalTerm => "technical_term",
            EntryKind::PhrasalExpression => "phrasal_expression",
            EntryKind::Numeral => "numeral",
            EntryKind::SandhiVariant => "sandhi_variant",
        }
    }
}

/// Attributes of an inflected nominal form (also used for declined
/// participles, technical-term inflections and proper-name declensions).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NominalAttrs {
    /// Key of the base stem this form was declined from.
    pub base: String,
    pub case: Case,
    pub number: Number,
    pub gender: Gender,
}

/// Attributes of a finite verb form (plain or prefixed).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerbalAttrs {
    /// Key of the root this form was conjugated from (with its `√`).
    pub root: String,
    pub person: Person,
    pub number: Number,
    pub tense: Tense,
    pub voice: Voice,
    /// Prefixes applied, outermost first. Empty for plain verb forms.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prefixes: Vec<String>,
}

/// Attributes of a participle entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipleAttrs {
    pub root: String,
    pub participle: ParticipleKind,
}

/// Attributes of a comparison form (comparative or superlative).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonAttrs {
    /// Key of the stem the degree suffix attached to.
    pub base: String,
    pub degree: Degree,
}

/// Attributes of a compound entry (and of sandhi variants of compounds).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundAttrs {
    /// Component keys in surface order.
    pub components: Vec<String>,
    pub compound_type: CompoundType,
    /// Number of components folded into the surface form. Capped at 4.
    pub depth: u8,
}

/// Attributes of a derivative entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivativeAttrs {
    /// Key of the base the suffix attached to. For secondary and tertiary
    /// derivatives this is itself a generated derivative key.
    pub base: String,
    pub suffix: String,
    pub level: DerivationLevel,
    /// Low-confidence flag set on tertiary derivatives.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub rare: bool,
}

/// A generated lexicon entry. Immutable once committed to the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedEntry {
    /// Surface form; the dictionary key. Globally unique.
    #[serde(skip)]
    pub key: String,
    pub meaning: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub frequency: Frequency,
    #[serde(flatten)]
    pub nominal: Option<NominalAttrs>,
    #[serde(flatten)]
    pub verbal: Option<VerbalAttrs>,
    #[serde(flatten)]
    pub participle: Option<ParticipleAttrs>,
    #[serde(flatten)]
    pub comparison: Option<ComparisonAttrs>,
    #[serde(flatten)]
    pub compound: Option<CompoundAttrs>,
    #[serde(flatten)]
    pub derivative: Option<DerivativeAttrs>,
}

impl GeneratedEntry {
    /// Create an entry with the mandatory core and no attribute groups.
    pub fn new(
        key: impl Into<String>,
        meaning: impl Into<String>,
        kind: EntryKind,
        frequency: Frequency,
    ) -> Self {
        GeneratedEntry {
            key: key.into(),
            meaning: meaning.into(),
            kind,
            frequency,
            nominal: None,
            verbal: None,
            participle: None,
            comparison: None,
            compound: None,
            derivative: None,
        }
    }

    pub fn with_nominal(mut self, attrs: NominalAttrs) -> Self {
        self.nominal = Some(attrs);
        self
    }

    pub fn with_verbal(mut self, attrs: VerbalAttrs) -> Self {
        self.verbal = Some(attrs);
        self
    }

    pub fn with_participle(mut self, attrs: ParticipleAttrs) -> Self {
        self.participle = Some(attrs);
        self
    }

    pub fn with_comparison(mut self, attrs: ComparisonAttrs) -> Self {
        self.comparison = Some(attrs);
        self
    }

    pub fn with_compound(mut self, attrs: CompoundAttrs) -> Self {
        self.compound = Some(attrs);
        self
    }

    pub fn with_derivative(mut self, attrs: DerivativeAttrs) -> Self {
        self.derivative = Some(attrs);
        self
    }

    /// Provenance: the keys this entry was produced from, in order.
    /// Empty for base words and other pass-through entries.
    pub fn provenance(&self) -> Vec<&str> {
        if let Some(c) = &self.compound {
            return c.components.iter().map(String::as_str).collect();
        }
        if let Some(d) = &self.derivative {
            return vec![d.base.as_str()];
        }
        if let Some(n) = &self.nominal {
            return vec![n.base.as_str()];
        }
        if let Some(v) = &self.verbal {
            return vec![v.root.as_str()];
        }
        if let Some(p) = &self.participle {
            return vec![p.root.as_str()];
        }
        if let Some(c) = &self.comparison {
            return vec![c.base.as_str()];
        }
        Vec::new()
    }

    /// True when the composed meaning is degenerate (empty or just the
    /// template punctuation). Such candidates are discarded before commit.
    pub fn meaning_is_degenerate(&self) -> bool {
        let trimmed = self.meaning.trim();
        trimmed.is_empty() || trimmed.chars().all(|c| !c.is_alphabetic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::{Case, Gender, Number};

    fn sample_nominal() -> GeneratedEntry {
        GeneratedEntry::new(
            "gamanāya",
            "to/for going",
            EntryKind::InflectedNominal,
            Frequency::new(3.0),
        )
        .with_nominal(NominalAttrs {
            base: "gamana".to_string(),
            case: Case::Dative,
            number: Number::Singular,
            gender: Gender::Neuter,
        })
    }

    #[test]
    fn provenance_of_nominal_is_its_base() {
        assert_eq!(sample_nominal().provenance(), vec!["gamana"]);
    }

    #[test]
    fn provenance_of_compound_is_component_list() {
        let e = GeneratedEntry::new(
            "buddhadhamma",
            "awakened one and doctrine",
            EntryKind::Compound,
            Frequency::new(3.5),
        )
        .with_compound(CompoundAttrs {
            components: vec!["buddha".to_string(), "dhamma".to_string()],
            compound_type: CompoundType::Coordinative,
            depth: 2,
        });
        assert_eq!(e.provenance(), vec!["buddha", "dhamma"]);
    }

    #[test]
    fn serializes_flat_schema() {
        let v = serde_json::to_value(sample_nominal()).unwrap();
        assert_eq!(v["meaning"], "to/for going");
        assert_eq!(v["type"], "inflected_nominal");
        assert_eq!(v["base"], "gamana");
        assert_eq!(v["case"], "dative");
        // absent groups leave no keys behind
        assert!(v.get("components").is_none());
        assert!(v.get("root").is_none());
        // the key is the map key in the output document, not a field
        assert!(v.get("key").is_none());
    }

    #[test]
    fn degenerate_meaning_detection() {
        let mut e = sample_nominal();
        assert!(!e.meaning_is_degenerate());
        e.meaning = "  ".to_string();
        assert!(e.meaning_is_degenerate());
        e.meaning = "?!".to_string();
        assert!(e.meaning_is_degenerate());
    }

    #[test]
    fn rare_flag_omitted_when_false() {
        let e = GeneratedEntry::new(
            "gamakatā",
            "state of being one who goes",
            EntryKind::Derivative,
            Frequency::new(2.4),
        )
        .with_derivative(DerivativeAttrs {
            base: "gamaka".to_string(),
            suffix: "tā".to_string(),
            level: DerivationLevel::Secondary,
            rare: false,
        });
        let v = serde_json::to_value(e).unwrap();
        assert!(v.get("rare").is_none());
        assert_eq!(v["level"], "secondary");
    }
}
