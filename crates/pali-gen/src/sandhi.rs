// Sandhi: euphonic joining at morpheme boundaries.
//
// One ordered substitution table drives both the primary join and the
// enumeration of attested alternative junctions. Rules are keyed on the
// final segment of the left word and the initial segment of the right
// word; the most specific matching rule (longest combined match) wins,
// earliest-in-table on ties. When nothing matches the words concatenate
// unchanged, so `join` is total.

/// One euphonic substitution rule.
struct SandhiRule {
    /// Required final segment of the left word.
    left_end: &'static str,
    /// Required initial segment of the right word.
    right_start: &'static str,
    /// Replacement for both matched segments in the primary join.
    junction: &'static str,
    /// Attested alternative junctions, most common first.
    alternatives: &'static [&'static str],
}

const RULES: &[SandhiRule] = &[
    // like vowels contract to the long grade
    SandhiRule { left_end: "a", right_start: "a", junction: "ā", alternatives: &["a"] },
    SandhiRule { left_end: "a", right_start: "ā", junction: "ā", alternatives: &[] },
    SandhiRule { left_end: "ā", right_start: "a", junction: "ā", alternatives: &[] },
    SandhiRule { left_end: "ā", right_start: "ā", junction: "ā", alternatives: &[] },
    SandhiRule { left_end: "i", right_start: "i", junction: "ī", alternatives: &["i"] },
    SandhiRule { left_end: "i", right_start: "ī", junction: "ī", alternatives: &[] },
    SandhiRule { left_end: "ī", right_start: "i", junction: "ī", alternatives: &[] },
    SandhiRule { left_end: "u", right_start: "u", junction: "ū", alternatives: &["u"] },
    SandhiRule { left_end: "u", right_start: "ū", junction: "ū", alternatives: &[] },
    // a + dissimilar vowel strengthens
    SandhiRule { left_end: "a", right_start: "i", junction: "e", alternatives: &["i"] },
    SandhiRule { left_end: "a", right_start: "ī", junction: "e", alternatives: &[] },
    SandhiRule { left_end: "a", right_start: "u", junction: "o", alternatives: &["u"] },
    SandhiRule { left_end: "a", right_start: "ū", junction: "o", alternatives: &[] },
    // high vowel + a glides
    SandhiRule { left_end: "i", right_start: "a", junction: "ya", alternatives: &["a"] },
    SandhiRule { left_end: "ī", right_start: "a", junction: "ya", alternatives: &[] },
    SandhiRule { left_end: "u", right_start: "a", junction: "va", alternatives: &["a"] },
    SandhiRule { left_end: "ū", right_start: "a", junction: "va", alternatives: &[] },
    // niggahita assimilates to a following stop
    SandhiRule { left_end: "ṃ", right_start: "k", junction: "ṅk", alternatives: &["ṃk"] },
    SandhiRule { left_end: "ṃ", right_start: "g", junction: "ṅg", alternatives: &["ṃg"] },
    SandhiRule { left_end: "ṃ", right_start: "c", junction: "ñc", alternatives: &["ṃc"] },
    SandhiRule { left_end: "ṃ", right_start: "j", junction: "ñj", alternatives: &["ṃj"] },
    SandhiRule { left_end: "ṃ", right_start: "t", junction: "nt", alternatives: &["ṃt"] },
    SandhiRule { left_end: "ṃ", right_start: "d", junction: "nd", alternatives: &["ṃd"] },
    SandhiRule { left_end: "ṃ", right_start: "p", junction: "mp", alternatives: &["ṃp"] },
    SandhiRule { left_end: "ṃ", right_start: "b", junction: "mb", alternatives: &["ṃb"] },
];

fn find_rule(left: &str, right: &str) -> Option<&'static SandhiRule> {
    let mut best: Option<&'static SandhiRule> = None;
    for rule in RULES {
        if !left.ends_with(rule.left_end) || !right.starts_with(rule.right_start) {
            continue;
        }
        let specificity = rule.left_end.len() + rule.right_start.len();
        let beats = match best {
            Some(b) => specificity > b.left_end.len() + b.right_start.len(),
            None => true,
        };
        if beats {
            best = Some(rule);
        }
    }
    best
}

fn splice(left: &str, right: &str, rule: &SandhiRule, junction: &str) -> String {
    let mut out = String::with_capacity(left.len() + right.len());
    out.push_str(&left[..left.len() - rule.left_end.len()]);
    out.push_str(junction);
    out.push_str(&right[rule.right_start.len()..]);
    out
}

/// Join two words across a morpheme boundary. Total: falls back to plain
/// concatenation when no rule applies, and returns the other word
/// unchanged when either side is empty.
pub fn join(left: &str, right: &str) -> String {
    if left.is_empty() || right.is_empty() {
        return format!("{left}{right}");
    }
    match find_rule(left, right) {
        Some(rule) => splice(left, right, rule, rule.junction),
        None => format!("{left}{right}"),
    }
}

/// Attested alternative joins of the same boundary, in table order. Never
/// contains the primary `join` output. Empty when the boundary has no
/// attested variation.
pub fn alternatives(left: &str, right: &str) -> Vec<String> {
    if left.is_empty() || right.is_empty() {
        return Vec::new();
    }
    let Some(rule) = find_rule(left, right) else {
        return Vec::new();
    };
    let primary = splice(left, right, rule, rule.junction);
    let mut out = Vec::new();
    for alt in rule.alternatives {
        let form = splice(left, right, rule, alt);
        if form != primary && !out.contains(&form) {
            out.push(form);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_vowels_contract() {
        assert_eq!(join("dhamma", "agga"), "dhammāgga");
        assert_eq!(join("buddha", "ānanda"), "buddhānanda");
        assert_eq!(join("muni", "inda"), "munīnda");
        assert_eq!(join("bhikkhu", "uttama"), "bhikkhūttama");
    }

    #[test]
    fn dissimilar_vowels_strengthen() {
        assert_eq!(join("dhamma", "indriya"), "dhammendriya");
        assert_eq!(join("mahā", "ummagga"), "mahāummagga"); // ā+u has no rule
        assert_eq!(join("deva", "upamā"), "devopamā");
    }

    #[test]
    fn high_vowels_glide_before_a() {
        assert_eq!(join("muni", "attha"), "munyattha");
        assert_eq!(join("bhikkhu", "attha"), "bhikkhvattha");
    }

    #[test]
    fn niggahita_assimilates() {
        assert_eq!(join("saṃ", "gaha"), "saṅgaha");
        assert_eq!(join("evaṃ", "pi"), "evampi");
    }

    #[test]
    fn no_rule_concatenates() {
        assert_eq!(join("tat", "purisa"), "tatpurisa");
        assert_eq!(join("dhamma", "cakka"), "dhammacakka");
    }

    #[test]
    fn empty_side_is_identity() {
        assert_eq!(join("", "dhamma"), "dhamma");
        assert_eq!(join("dhamma", ""), "dhamma");
        assert!(alternatives("", "dhamma").is_empty());
    }

    #[test]
    fn join_is_idempotent_on_its_own_output() {
        // re-joining the joined form with an empty boundary changes nothing
        let once = join("dhamma", "agga");
        assert_eq!(join(&once, ""), once);
    }

    #[test]
    fn alternatives_exclude_primary() {
        let primary = join("dhamma", "agga");
        let alts = alternatives("dhamma", "agga");
        assert!(!alts.is_empty());
        assert!(!alts.contains(&primary));
        assert!(alts.contains(&"dhammagga".to_string()));
    }

    #[test]
    fn boundaries_without_variation_have_no_alternatives() {
        assert!(alternatives("dhamma", "cakka").is_empty());
        assert!(alternatives("mahā", "atta").is_empty());
    }

    #[test]
    fn longest_match_wins() {
        // a+ā must pick the long-vowel rule, not the a+a rule
        assert_eq!(join("dhamma", "ābhā"), "dhammābhā");
        assert!(alternatives("dhamma", "ābhā").is_empty());
    }
}
