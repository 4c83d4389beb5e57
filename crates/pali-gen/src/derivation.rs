// Derivational generation: affix rules layered up to three levels deep.
//
// Primary derivatives attach a seed affix rule to a root or stem.
// Secondary and tertiary derivatives re-suffix an already generated
// derivative; each level decays the frequency weight and tertiary forms
// carry the low-confidence `rare` flag. The level cap is structural:
// there is no rule table past the tertiary one.

use pali_core::frequency::Frequency;
use pali_core::gloss;
use pali_core::grammar::DerivationLevel;

use crate::sandhi;
use crate::seed::AffixRule;

/// Frequency decay applied per derivation level past the base.
pub const LEVEL_DECAY: f32 = 0.8;

/// Suffixes that re-attach to primary derivatives.
pub const SECONDARY_SUFFIXES: &[(&str, &str)] = &[
    ("tā", "state of being {}"),
    ("ka", "little {}"),
];

/// Suffixes that re-attach to secondary derivatives. Deliberately a
/// subset of the secondary table; everything formed here is rare.
pub const TERTIARY_SUFFIXES: &[(&str, &str)] = &[("tā", "state of being {}")];

/// A derived surface form with its composed meaning and bookkeeping.
#[derive(Debug, Clone, PartialEq)]
pub struct Derived {
    pub surface: String,
    pub meaning: String,
    pub suffix: String,
    pub level: DerivationLevel,
    pub rare: bool,
    pub frequency: Frequency,
}

/// Apply a primary affix rule to a base (bare root or stem).
pub fn derive_primary(base: &str, base_gloss: &str, rule: &AffixRule, base_freq: Frequency) -> Derived {
    Derived {
        surface: sandhi::join(base, &rule.suffix),
        meaning: gloss::apply(&rule.template, base_gloss),
        suffix: rule.suffix.clone(),
        level: DerivationLevel::Primary,
        rare: false,
        frequency: base_freq.decay(LEVEL_DECAY),
    }
}

/// Re-suffix an existing derivative one level down. Returns `None` at the
/// tertiary cap.
pub fn derive_further(
    base: &Derived,
    suffix: &str,
    template: &str,
) -> Option<Derived> {
    let level = base.level.next()?;
    Some(Derived {
        surface: sandhi::join(&base.surface, suffix),
        meaning: gloss::apply(template, &base.meaning),
        suffix: suffix.to_string(),
        level,
        rare: level == DerivationLevel::Tertiary,
        frequency: base.frequency.decay(LEVEL_DECAY),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::{AffixTarget, DerivedCategory};

    fn agent_rule() -> AffixRule {
        AffixRule {
            suffix: "aka".to_string(),
            attaches_to: AffixTarget::VerbalRoot,
            produces: DerivedCategory::AgentNoun,
            template: "one who {}s".to_string(),
        }
    }

    #[test]
    fn primary_agent_noun_from_root() {
        let d = derive_primary("gam", "go", &agent_rule(), Frequency::new(5.0));
        assert_eq!(d.surface, "gamaka");
        assert_eq!(d.meaning, "one who goes");
        assert_eq!(d.level, DerivationLevel::Primary);
        assert!(!d.rare);
        assert!((d.frequency.value() - 4.0).abs() < 1e-6);
    }

    #[test]
    fn secondary_derivative_decays_and_composes() {
        let primary = derive_primary("gam", "go", &agent_rule(), Frequency::new(5.0));
        let d = derive_further(&primary, "tā", "state of being {}").unwrap();
        assert_eq!(d.surface, "gamakatā");
        assert_eq!(d.meaning, "state of being one who goes");
        assert_eq!(d.level, DerivationLevel::Secondary);
        assert!(!d.rare);
        assert!((d.frequency.value() - 3.2).abs() < 1e-6);
    }

    #[test]
    fn tertiary_is_rare_and_final() {
        let primary = derive_primary("gam", "go", &agent_rule(), Frequency::new(5.0));
        let secondary = derive_further(&primary, "ka", "little {}").unwrap();
        let tertiary = derive_further(&secondary, "tā", "state of being {}").unwrap();
        assert_eq!(tertiary.level, DerivationLevel::Tertiary);
        assert!(tertiary.rare);
        assert!(derive_further(&tertiary, "tā", "state of being {}").is_none());
    }

    #[test]
    fn vowel_initial_suffix_joins_with_sandhi() {
        let rule = AffixRule {
            suffix: "āyati".to_string(),
            attaches_to: AffixTarget::NominalStem,
            produces: DerivedCategory::DenominativeVerb,
            template: "acts like {}".to_string(),
        };
        let d = derive_primary("dhamma", "doctrine", &rule, Frequency::new(5.0));
        assert_eq!(d.surface, "dhammāyati");
        assert_eq!(d.meaning, "acts like doctrine");
    }
}
