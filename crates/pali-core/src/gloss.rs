// English inflection of gloss text inside composed meanings.
//
// Meaning templates mark the verb slot with "{}s", "{}ed" or "{}ing" when
// the inserted gloss must be inflected. Only the first word of a
// multi-word gloss inflects, so "be born" becomes "is born". A small
// irregular table covers the verbs the builtin seed glosses use; anything
// else inflects regularly.

/// (base, third person, simple past, past participle, gerund)
const IRREGULAR: &[(&str, &str, &str, &str, &str)] = &[
    ("be", "is", "was", "been", "being"),
    ("go", "goes", "went", "gone", "going"),
    ("do", "does", "did", "done", "doing"),
    ("see", "sees", "saw", "seen", "seeing"),
    ("give", "gives", "gave", "given", "giving"),
    ("know", "knows", "knew", "known", "knowing"),
    ("speak", "speaks", "spoke", "spoken", "speaking"),
    ("think", "thinks", "thought", "thought", "thinking"),
    ("eat", "eats", "ate", "eaten", "eating"),
    ("stand", "stands", "stood", "stood", "standing"),
    ("hold", "holds", "held", "held", "holding"),
];

fn irregular(word: &str) -> Option<&'static (&'static str, &'static str, &'static str, &'static str, &'static str)> {
    IRREGULAR.iter().find(|row| row.0 == word)
}

fn split_first(gloss: &str) -> (&str, &str) {
    match gloss.find(' ') {
        Some(i) => (&gloss[..i], &gloss[i..]),
        None => (gloss, ""),
    }
}

fn ends_consonant_y(word: &str) -> Option<&str> {
    let stem = word.strip_suffix('y')?;
    let before = stem.chars().last()?;
    if matches!(before, 'a' | 'e' | 'i' | 'o' | 'u') {
        None
    } else {
        Some(stem)
    }
}

/// Third-person singular present of a gloss.
pub fn third_person(gloss: &str) -> String {
    let (word, rest) = split_first(gloss);
    if let Some(row) = irregular(word) {
        return format!("{}{rest}", row.1);
    }
    let inflected = if word.ends_with(['o', 's', 'x', 'z'])
        || word.ends_with("ch")
        || word.ends_with("sh")
    {
        format!("{word}es")
    } else if let Some(stem) = ends_consonant_y(word) {
        format!("{stem}ies")
    } else {
        format!("{word}s")
    };
    format!("{inflected}{rest}")
}

fn regular_past(word: &str) -> String {
    if word.ends_with('e') {
        format!("{word}d")
    } else if let Some(stem) = ends_consonant_y(word) {
        format!("{stem}ied")
    } else {
        format!("{word}ed")
    }
}

/// Simple past of a gloss.
pub fn simple_past(gloss: &str) -> String {
    let (word, rest) = split_first(gloss);
    match irregular(word) {
        Some(row) => format!("{}{rest}", row.2),
        None => format!("{}{rest}", regular_past(word)),
    }
}

/// Past participle of a gloss.
pub fn past_participle(gloss: &str) -> String {
    let (word, rest) = split_first(gloss);
    match irregular(word) {
        Some(row) => format!("{}{rest}", row.3),
        None => format!("{}{rest}", regular_past(word)),
    }
}

/// Gerund of a gloss.
pub fn gerund(gloss: &str) -> String {
    let (word, rest) = split_first(gloss);
    if let Some(row) = irregular(word) {
        return format!("{}{rest}", row.4);
    }
    let inflected = if let Some(stem) = word.strip_suffix("ie") {
        format!("{stem}ying")
    } else if word.ends_with('e') && !word.ends_with("ee") {
        format!("{}ing", &word[..word.len() - 1])
    } else {
        format!("{word}ing")
    };
    format!("{inflected}{rest}")
}

/// Fill a meaning template. The slot markers "{}s", "{}ed" and "{}ing"
/// inflect the inserted gloss (third person, simple past, gerund); a bare
/// "{}" inserts it verbatim. Templates without a slot pass through.
pub fn apply(template: &str, gloss: &str) -> String {
    let Some(idx) = template.find("{}") else {
        return template.to_string();
    };
    let before = &template[..idx];
    let after = &template[idx + 2..];
    if let Some(tail) = after.strip_prefix("ing") {
        format!("{before}{}{tail}", gerund(gloss))
    } else if let Some(tail) = after.strip_prefix("ed") {
        format!("{before}{}{tail}", simple_past(gloss))
    } else if let Some(tail) = after.strip_prefix('s') {
        format!("{before}{}{tail}", third_person(gloss))
    } else {
        format!("{before}{gloss}{after}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regular_and_irregular_third_person() {
        assert_eq!(third_person("protect"), "protects");
        assert_eq!(third_person("go"), "goes");
        assert_eq!(third_person("carry"), "carries");
        assert_eq!(third_person("be born"), "is born");
    }

    #[test]
    fn past_forms() {
        assert_eq!(simple_past("protect"), "protected");
        assert_eq!(simple_past("go"), "went");
        assert_eq!(simple_past("release"), "released");
        assert_eq!(past_participle("go"), "gone");
        assert_eq!(past_participle("eat"), "eaten");
        assert_eq!(past_participle("train"), "trained");
    }

    #[test]
    fn gerund_forms() {
        assert_eq!(gerund("go"), "going");
        assert_eq!(gerund("release"), "releasing");
        assert_eq!(gerund("see"), "seeing");
        assert_eq!(gerund("die"), "dying");
        assert_eq!(gerund("be born"), "being born");
    }

    #[test]
    fn apply_inflects_at_the_marker() {
        assert_eq!(apply("one who {}s", "go"), "one who goes");
        assert_eq!(apply("the act of {}ing", "give"), "the act of giving");
        assert_eq!(apply("{}ed", "speak"), "spoke");
        assert_eq!(apply("will {}", "go"), "will go");
        assert_eq!(apply("state of being {}", "one who goes"), "state of being one who goes");
    }

    #[test]
    fn apply_without_slot_passes_through() {
        assert_eq!(apply("thus", "anything"), "thus");
    }
}
