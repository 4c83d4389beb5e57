// Seed knowledge base: the hand-curated lexical material every
// generation phase draws from.
//
// The builtin tables live in `data.rs`. A user-supplied JSON seed file can
// be merged on top; merged data goes through the same validation as the
// builtin set, so generation always starts from a knowledge base that is
// known to be internally consistent.

use std::path::Path;

use serde::Deserialize;

use pali_core::error::SeedError;
use pali_core::field::{LexicalCategory, SemanticField};
use pali_core::frequency::Frequency;
use pali_core::grammar::Declension;

mod data;

/// One seed lexical item: root, stem, particle, prefix, proper name or
/// technical term.
#[derive(Debug, Clone, Deserialize)]
pub struct LexicalEntry {
    pub key: String,
    pub category: LexicalCategory,
    pub gloss: String,
    pub field: SemanticField,
    /// Declension class for declinable items; `None` for roots, particles
    /// and prefixes.
    #[serde(default)]
    pub declension: Option<Declension>,
    #[serde(default)]
    pub frequency: Frequency,
}

impl LexicalEntry {
    /// The combinable form: roots are cited with a leading `√` that never
    /// appears in surface forms.
    pub fn bare(&self) -> &str {
        self.key.strip_prefix('√').unwrap_or(&self.key)
    }
}

/// A seed numeral.
#[derive(Debug, Clone, Deserialize)]
pub struct NumeralEntry {
    pub key: String,
    pub gloss: String,
    pub value: u32,
    #[serde(default)]
    pub frequency: Frequency,
}

/// A seed phrasal expression, committed verbatim.
#[derive(Debug, Clone, Deserialize)]
pub struct PhraseEntry {
    pub surface: String,
    pub gloss: String,
    #[serde(default)]
    pub frequency: Frequency,
}

/// What a derivational affix attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AffixTarget {
    VerbalRoot,
    NominalStem,
}

/// What a derivational affix produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DerivedCategory {
    AgentNoun,
    ActionNoun,
    AbstractNoun,
    PossessiveAdjective,
    RelationalAdjective,
    Diminutive,
    DenominativeVerb,
}

/// One primary derivational affix rule.
#[derive(Debug, Clone, Deserialize)]
pub struct AffixRule {
    pub suffix: String,
    pub attaches_to: AffixTarget,
    pub produces: DerivedCategory,
    /// Meaning template; `{}` is replaced with the base gloss.
    pub template: String,
}

/// The seed knowledge base. Category order inside each table is the
/// iteration order of every generation phase, so it is part of the
/// deterministic-output contract.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct KnowledgeBase {
    pub roots: Vec<LexicalEntry>,
    pub stems: Vec<LexicalEntry>,
    pub particles: Vec<LexicalEntry>,
    pub prefixes: Vec<LexicalEntry>,
    pub numerals: Vec<NumeralEntry>,
    pub proper_names: Vec<LexicalEntry>,
    pub technical: Vec<LexicalEntry>,
    pub phrases: Vec<PhraseEntry>,
    pub affix_rules: Vec<AffixRule>,
}

impl KnowledgeBase {
    /// The builtin seed tables.
    pub fn builtin() -> Self {
        data::builtin()
    }

    /// Parse a seed extension from JSON. Missing categories default to
    /// empty; validate after merging.
    pub fn from_json_str(json: &str) -> Result<Self, SeedError> {
        serde_json::from_str(json).map_err(|e| SeedError::Parse(e.to_string()))
    }

    /// Read a seed extension file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Merge another knowledge base into this one. Purely additive; run
    /// `validate` afterwards to catch cross-category duplicates.
    pub fn merge(&mut self, other: KnowledgeBase) {
        self.roots.extend(other.roots);
        self.stems.extend(other.stems);
        self.particles.extend(other.particles);
        self.prefixes.extend(other.prefixes);
        self.numerals.extend(other.numerals);
        self.proper_names.extend(other.proper_names);
        self.technical.extend(other.technical);
        self.phrases.extend(other.phrases);
        self.affix_rules.extend(other.affix_rules);
    }

    /// Check seed integrity: the categories the pipeline depends on are
    /// non-empty, no key appears twice anywhere, no gloss is empty, and
    /// every affix template has a substitution slot.
    pub fn validate(&self) -> Result<(), SeedError> {
        for (name, table) in [
            ("roots", &self.roots),
            ("stems", &self.stems),
            ("particles", &self.particles),
            ("prefixes", &self.prefixes),
        ] {
            if table.is_empty() {
                return Err(SeedError::EmptyCategory { category: name });
            }
        }
        if self.affix_rules.is_empty() {
            return Err(SeedError::EmptyCategory {
                category: "affix_rules",
            });
        }

        let mut seen: hashbrown::HashSet<&str> = hashbrown::HashSet::new();
        for entry in self.lexical_entries() {
            if entry.gloss.trim().is_empty() {
                return Err(SeedError::EmptyGloss {
                    key: entry.key.clone(),
                });
            }
            if !seen.insert(&entry.key) {
                return Err(SeedError::DuplicateKey {
                    key: entry.key.clone(),
                });
            }
        }
        for numeral in &self.numerals {
            if numeral.gloss.trim().is_empty() {
                return Err(SeedError::EmptyGloss {
                    key: numeral.key.clone(),
                });
            }
            if !seen.insert(&numeral.key) {
                return Err(SeedError::DuplicateKey {
                    key: numeral.key.clone(),
                });
            }
        }
        for phrase in &self.phrases {
            if phrase.gloss.trim().is_empty() {
                return Err(SeedError::EmptyGloss {
                    key: phrase.surface.clone(),
                });
            }
            if !seen.insert(&phrase.surface) {
                return Err(SeedError::DuplicateKey {
                    key: phrase.surface.clone(),
                });
            }
        }
        for rule in &self.affix_rules {
            if !rule.template.contains("{}") {
                return Err(SeedError::EmptyTemplate {
                    suffix: rule.suffix.clone(),
                });
            }
        }
        Ok(())
    }

    fn lexical_entries(&self) -> impl Iterator<Item = &LexicalEntry> {
        self.roots
            .iter()
            .chain(&self.stems)
            .chain(&self.particles)
            .chain(&self.prefixes)
            .chain(&self.proper_names)
            .chain(&self.technical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_seed_validates() {
        KnowledgeBase::builtin().validate().unwrap();
    }

    #[test]
    fn builtin_covers_required_categories() {
        let kb = KnowledgeBase::builtin();
        assert!(kb.roots.len() >= 10);
        assert!(kb.stems.len() >= 30);
        assert!(!kb.particles.is_empty());
        assert!(!kb.prefixes.is_empty());
        assert!(!kb.numerals.is_empty());
        assert!(!kb.technical.is_empty());
        assert!(!kb.affix_rules.is_empty());
    }

    #[test]
    fn roots_are_cited_with_radical_sign() {
        let kb = KnowledgeBase::builtin();
        for root in &kb.roots {
            assert!(root.key.starts_with('√'), "root {} lacks √", root.key);
            assert!(!root.bare().contains('√'));
        }
    }

    #[test]
    fn declinable_stems_end_in_their_stem_vowel() {
        let kb = KnowledgeBase::builtin();
        for stem in kb.stems.iter().chain(&kb.proper_names).chain(&kb.technical) {
            let decl = stem.declension.expect("stems carry a declension");
            assert!(
                stem.key.ends_with(decl.stem_vowel()),
                "{} does not end in {}",
                stem.key,
                decl.stem_vowel()
            );
        }
    }

    #[test]
    fn technical_vocabulary_carries_its_own_category() {
        let kb = KnowledgeBase::builtin();
        for term in &kb.technical {
            assert_eq!(term.category, LexicalCategory::TechnicalTerm);
        }
    }

    #[test]
    fn out_of_range_seed_weights_are_clamped_at_load() {
        let ext = KnowledgeBase::from_json_str(
            r#"{
                "stems": [{
                    "key": "vihāra",
                    "category": "stem",
                    "gloss": "dwelling",
                    "field": "society",
                    "declension": "a_masculine",
                    "frequency": 9.5
                }]
            }"#,
        )
        .unwrap();
        assert_eq!(ext.stems[0].frequency, Frequency::new(5.0));
    }

    #[test]
    fn duplicate_key_is_rejected() {
        let mut kb = KnowledgeBase::builtin();
        let copy = kb.stems[0].clone();
        kb.stems.push(copy);
        assert!(matches!(
            kb.validate(),
            Err(SeedError::DuplicateKey { .. })
        ));
    }

    #[test]
    fn empty_gloss_is_rejected() {
        let mut kb = KnowledgeBase::builtin();
        kb.stems[0].gloss = String::new();
        assert!(matches!(kb.validate(), Err(SeedError::EmptyGloss { .. })));
    }

    #[test]
    fn json_extension_merges_additively() {
        let mut kb = KnowledgeBase::builtin();
        let before = kb.stems.len();
        let ext = KnowledgeBase::from_json_str(
            r#"{
                "stems": [{
                    "key": "vihāra",
                    "category": "stem",
                    "gloss": "dwelling",
                    "field": "society",
                    "declension": "a_masculine",
                    "frequency": 3.5
                }]
            }"#,
        )
        .unwrap();
        kb.merge(ext);
        kb.validate().unwrap();
        assert_eq!(kb.stems.len(), before + 1);
        assert_eq!(kb.stems.last().unwrap().key, "vihāra");
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            KnowledgeBase::from_json_str("{ not json"),
            Err(SeedError::Parse(_))
        ));
    }
}
