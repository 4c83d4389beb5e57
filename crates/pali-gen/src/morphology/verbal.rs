// Verbal conjugation and participle formation.
//
// Endings attach to the bare root through the sandhi join, so vowel-final
// roots contract regularly. Skip policies: no dual verb forms, no
// first-person singular imperative, and each non-active voice is
// restricted to its attested tense set.

use pali_core::gloss;
use pali_core::grammar::{Number, ParticipleKind, Person, Tense, Voice, pronoun_gloss};

use crate::sandhi;

use super::Form;

/// Attested tense set per voice.
pub fn tense_voice_valid(tense: Tense, voice: Voice) -> bool {
    match voice {
        Voice::Active => true,
        Voice::Middle => matches!(tense, Tense::Present | Tense::Optative),
        Voice::Passive => matches!(tense, Tense::Present | Tense::Aorist | Tense::Future),
        Voice::Causative => tense != Tense::Conditional,
    }
}

fn active_ending(tense: Tense, person: Person, number: Number) -> Option<&'static str> {
    use Number::*;
    use Person::*;
    use Tense::*;
    let e = match (tense, person, number) {
        (Present, Third, Singular) => "ati",
        (Present, Second, Singular) => "asi",
        (Present, First, Singular) => "āmi",
        (Present, Third, Plural) => "anti",
        (Present, Second, Plural) => "atha",
        (Present, First, Plural) => "āma",
        (Aorist, Third, Singular) => "i",
        (Aorist, Second, Singular) => "o",
        (Aorist, First, Singular) => "iṃ",
        (Aorist, Third, Plural) => "iṃsu",
        (Aorist, Second, Plural) => "ittha",
        (Aorist, First, Plural) => "imha",
        (Future, Third, Singular) => "issati",
        (Future, Second, Singular) => "issasi",
        (Future, First, Singular) => "issāmi",
        (Future, Third, Plural) => "issanti",
        (Future, Second, Plural) => "issatha",
        (Future, First, Plural) => "issāma",
        (Imperative, Third, Singular) => "atu",
        (Imperative, Second, Singular) => "āhi",
        (Imperative, Third, Plural) => "antu",
        (Imperative, Second, Plural) => "atha",
        (Imperative, First, Plural) => "āma",
        (Optative, Third, Singular) => "eyya",
        (Optative, Second, Singular) => "eyyāsi",
        (Optative, First, Singular) => "eyyāmi",
        (Optative, Third, Plural) => "eyyuṃ",
        (Optative, Second, Plural) => "eyyātha",
        (Optative, First, Plural) => "eyyāma",
        (Conditional, Third, Singular) => "issā",
        (Conditional, Second, Singular) => "isse",
        (Conditional, First, Singular) => "issaṃ",
        (Conditional, Third, Plural) => "issaṃsu",
        (Conditional, Second, Plural) => "issatha",
        (Conditional, First, Plural) => "issāmhā",
        _ => return None,
    };
    Some(e)
}

fn middle_ending(tense: Tense, person: Person, number: Number) -> Option<&'static str> {
    use Number::*;
    use Person::*;
    use Tense::*;
    let e = match (tense, person, number) {
        (Present, Third, Singular) => "ate",
        (Present, Second, Singular) => "ase",
        (Present, First, Singular) => "e",
        (Present, Third, Plural) => "ante",
        (Present, Second, Plural) => "avhe",
        (Present, First, Plural) => "āmhe",
        (Optative, Third, Singular) => "etha",
        (Optative, Second, Singular) => "etho",
        (Optative, First, Singular) => "eyyaṃ",
        (Optative, Third, Plural) => "eraṃ",
        (Optative, Second, Plural) => "eyyāvho",
        (Optative, First, Plural) => "eyyāmhe",
        _ => return None,
    };
    Some(e)
}

// Consonant-initial endings on the -āpe causative stem.
fn causative_ending(tense: Tense, person: Person, number: Number) -> Option<&'static str> {
    use Number::*;
    use Person::*;
    use Tense::*;
    let e = match (tense, person, number) {
        (Present, Third, Singular) => "ti",
        (Present, Second, Singular) => "si",
        (Present, First, Singular) => "mi",
        (Present, Third, Plural) => "nti",
        (Present, Second, Plural) => "tha",
        (Present, First, Plural) => "ma",
        (Aorist, Third, Singular) => "si",
        (Aorist, Second, Singular) => "si",
        (Aorist, First, Singular) => "siṃ",
        (Aorist, Third, Plural) => "suṃ",
        (Aorist, Second, Plural) => "ttha",
        (Aorist, First, Plural) => "mha",
        (Future, Third, Singular) => "ssati",
        (Future, Second, Singular) => "ssasi",
        (Future, First, Singular) => "ssāmi",
        (Future, Third, Plural) => "ssanti",
        (Future, Second, Plural) => "ssatha",
        (Future, First, Plural) => "ssāma",
        (Imperative, Third, Singular) => "tu",
        (Imperative, Second, Singular) => "hi",
        (Imperative, Third, Plural) => "ntu",
        (Imperative, Second, Plural) => "tha",
        (Imperative, First, Plural) => "ma",
        (Optative, Third, Singular) => "yya",
        (Optative, Second, Singular) => "yyāsi",
        (Optative, First, Singular) => "yyāmi",
        (Optative, Third, Plural) => "yyuṃ",
        (Optative, Second, Plural) => "yyātha",
        (Optative, First, Plural) => "yyāma",
        _ => return None,
    };
    Some(e)
}

// The English phrase agrees with the subject: present-tense glosses
// inflect to the third singular only for a third-singular subject, and
// passive copulas follow person and number.
fn verb_phrase(gloss: &str, person: Person, number: Number, tense: Tense, voice: Voice) -> String {
    let third_singular = person == Person::Third && number == Number::Singular;
    match voice {
        Voice::Active | Voice::Middle => {
            let base = if tense == Tense::Present {
                if third_singular {
                    gloss::third_person(gloss)
                } else {
                    gloss.to_string()
                }
            } else {
                gloss::apply(tense.template(), gloss)
            };
            if voice == Voice::Middle {
                format!("{base} for oneself")
            } else {
                base
            }
        }
        Voice::Passive => {
            let done = gloss::past_participle(gloss);
            match tense {
                Tense::Aorist if number == Number::Singular => format!("was {done}"),
                Tense::Aorist => format!("were {done}"),
                Tense::Future => format!("will be {done}"),
                _ => {
                    let copula = if third_singular {
                        "is"
                    } else if person == Person::First && number == Number::Singular {
                        "am"
                    } else {
                        "are"
                    };
                    format!("{copula} {done}")
                }
            }
        }
        Voice::Causative => match tense {
            Tense::Aorist => format!("caused to {gloss}"),
            Tense::Future => format!("will cause to {gloss}"),
            Tense::Imperative => format!("must cause to {gloss}!"),
            Tense::Optative => format!("should cause to {gloss}"),
            _ if third_singular => format!("causes to {gloss}"),
            _ => format!("cause to {gloss}"),
        },
    }
}

/// Conjugate a bare root (no `√`). Returns `None` for combinations the
/// skip policies exclude.
pub fn conjugate(
    root: &str,
    gloss: &str,
    person: Person,
    number: Number,
    tense: Tense,
    voice: Voice,
) -> Option<Form> {
    if number == Number::Dual {
        return None;
    }
    if !tense_voice_valid(tense, voice) {
        return None;
    }
    if tense == Tense::Imperative && person == Person::First && number == Number::Singular {
        return None;
    }

    let surface = match voice {
        Voice::Active => sandhi::join(root, active_ending(tense, person, number)?),
        Voice::Middle => sandhi::join(root, middle_ending(tense, person, number)?),
        Voice::Passive => {
            let stem = sandhi::join(root, "īy");
            sandhi::join(&stem, active_ending(tense, person, number)?)
        }
        Voice::Causative => {
            let stem = sandhi::join(root, "āpe");
            sandhi::join(&stem, causative_ending(tense, person, number)?)
        }
    };
    let meaning = format!(
        "({}) {}",
        pronoun_gloss(person, number),
        verb_phrase(gloss, person, number, tense, voice)
    );
    Some(Form { surface, meaning })
}

/// Form a participle from a bare root. Total: every root/kind pair has a
/// form.
pub fn form_participle(root: &str, gloss: &str, kind: ParticipleKind) -> Form {
    let meaning = match kind {
        ParticipleKind::PresentActive => gloss::gerund(gloss),
        ParticipleKind::PastPassive => gloss::past_participle(gloss),
        ParticipleKind::FuturePassive => format!("to be {}", gloss::past_participle(gloss)),
        ParticipleKind::Gerund => format!("having {}", gloss::past_participle(gloss)),
        ParticipleKind::Infinitive => format!("to {gloss}"),
    };
    Form {
        surface: sandhi::join(root, kind.suffix()),
        meaning,
    }
}
