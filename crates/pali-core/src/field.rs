// Semantic-field tags and seed lexical categories.
//
// Semantic fields are coarse category labels on seed entries. They drive
// the compound meaningfulness filter and the compound-type decision table.

use serde::{Deserialize, Serialize};

/// Semantic field of a lexical item. Deserialization of an unknown tag
/// fails, which surfaces malformed seed data at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SemanticField {
    ReligiousCore,
    Philosophy,
    Meditation,
    Ethics,
    Mind,
    Qualities,
    Beings,
    Body,
    Faculties,
    Action,
    Objects,
    Nature,
    Society,
    Spatial,
    Temporal,
    Names,
    Particles,
    Prefixes,
    Numbers,
}

impl SemanticField {
    /// Closed grammatical classes. Two items both drawn from these never
    /// form an attested compound pattern and are rejected by the
    /// meaningfulness filter.
    pub fn is_closed_class(self) -> bool {
        matches!(
            self,
            SemanticField::Particles | SemanticField::Prefixes | SemanticField::Numbers
        )
    }

    /// Fields whose members behave as qualifying attributes when they head
    /// a compound (descriptive classification).
    pub fn is_quality_like(self) -> bool {
        matches!(self, SemanticField::Qualities | SemanticField::Mind)
    }

    /// Fields that mark a possessive compound when they close it.
    pub fn is_possessive_marker(self) -> bool {
        matches!(self, SemanticField::Body | SemanticField::Faculties)
    }

    /// Human-readable label, used inside composed meanings.
    pub fn label(self) -> &'static str {
        match self {
            SemanticField::ReligiousCore => "religious doctrine",
            SemanticField::Philosophy => "philosophy",
            SemanticField::Meditation => "meditation",
            SemanticField::Ethics => "ethics",
            SemanticField::Mind => "mind",
            SemanticField::Qualities => "qualities",
            SemanticField::Beings => "beings",
            SemanticField::Body => "body",
            SemanticField::Faculties => "faculties",
            SemanticField::Action => "action",
            SemanticField::Objects => "objects",
            SemanticField::Nature => "nature",
            SemanticField::Society => "society",
            SemanticField::Spatial => "space",
            SemanticField::Temporal => "time",
            SemanticField::Names => "names",
            SemanticField::Particles => "particles",
            SemanticField::Prefixes => "prefixes",
            SemanticField::Numbers => "numbers",
        }
    }
}

/// Category of a seed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LexicalCategory {
    /// Verbal root (cited with a leading `√`).
    Root,
    /// Nominal stem.
    Stem,
    /// Indeclinable particle.
    Particle,
    /// Verbal prefix.
    Prefix,
    /// Technical doctrinal vocabulary.
    TechnicalTerm,
    /// Proper name (declined in its own phase).
    ProperName,
    /// Numeral.
    Numeral,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_classes() {
        assert!(SemanticField::Particles.is_closed_class());
        assert!(SemanticField::Numbers.is_closed_class());
        assert!(!SemanticField::ReligiousCore.is_closed_class());
    }

    #[test]
    fn quality_and_possessive_markers_are_disjoint_from_closed() {
        for field in [SemanticField::Qualities, SemanticField::Body] {
            assert!(!field.is_closed_class());
        }
    }

    #[test]
    fn unknown_field_tag_fails_to_deserialize() {
        let result: Result<SemanticField, _> = serde_json::from_str("\"astrology\"");
        assert!(result.is_err());
    }

    #[test]
    fn field_tag_round_trip() {
        let s = serde_json::to_string(&SemanticField::ReligiousCore).unwrap();
        assert_eq!(s, "\"religious_core\"");
        let back: SemanticField = serde_json::from_str(&s).unwrap();
        assert_eq!(back, SemanticField::ReligiousCore);
    }
}
