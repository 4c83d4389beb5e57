// Frequency weight: a heuristic plausibility score in [0, 5].

use serde::{Deserialize, Deserializer, Serialize};

/// Heuristic frequency weight of an entry, clamped to [0, 5].
///
/// Seed entries carry hand-assigned weights; generated entries derive
/// theirs from their components (averaging, multiplicative decay per
/// derivation or recursion level). The external browsing collaborator
/// expects a plain number in this range.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Frequency(f32);

// Deserialization goes through `new` so out-of-range weights in seed
// data are clamped instead of flowing through to the output.
impl<'de> Deserialize<'de> for Frequency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Frequency::new(f32::deserialize(deserializer)?))
    }
}

impl Frequency {
    pub const MIN: Frequency = Frequency(0.0);
    pub const MAX: Frequency = Frequency(5.0);

    /// Create a frequency, clamping out-of-range values.
    pub fn new(value: f32) -> Self {
        Frequency(value.clamp(0.0, 5.0))
    }

    pub fn value(self) -> f32 {
        self.0
    }

    /// Multiplicative decay, used when deriving an entry from another
    /// (one derivation level, one recursion level, one sandhi variant).
    pub fn decay(self, factor: f32) -> Self {
        Frequency::new(self.0 * factor)
    }

    /// Mean of two component weights, with the combination penalty the
    /// compound compositor applies.
    pub fn combine(a: Frequency, b: Frequency) -> Self {
        Frequency::new((a.0 + b.0) / 2.0 * 0.8)
    }
}

impl Default for Frequency {
    fn default() -> Self {
        Frequency(3.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_range() {
        assert_eq!(Frequency::new(-1.0).value(), 0.0);
        assert_eq!(Frequency::new(7.5).value(), 5.0);
        assert_eq!(Frequency::new(3.2).value(), 3.2);
    }

    #[test]
    fn decay_multiplies_and_stays_in_range() {
        let f = Frequency::new(4.0).decay(0.8);
        assert!((f.value() - 3.2).abs() < 1e-6);
        assert!(Frequency::new(5.0).decay(2.0).value() <= 5.0);
    }

    #[test]
    fn combine_averages_with_penalty() {
        let f = Frequency::combine(Frequency::new(4.0), Frequency::new(2.0));
        assert!((f.value() - 2.4).abs() < 1e-6);
    }

    #[test]
    fn deserialization_clamps_range() {
        let f: Frequency = serde_json::from_str("9.5").unwrap();
        assert_eq!(f.value(), 5.0);
        let f: Frequency = serde_json::from_str("-2.0").unwrap();
        assert_eq!(f.value(), 0.0);
    }

    #[test]
    fn serializes_as_bare_number() {
        let s = serde_json::to_string(&Frequency::new(3.5)).unwrap();
        assert_eq!(s, "3.5");
    }
}
