// Grammatical category enums shared by the morphological, derivational
// and compounding generators.

use serde::{Deserialize, Serialize};

/// Nominal case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Case {
    Nominative,
    Accusative,
    Instrumental,
    Dative,
    Ablative,
    Genitive,
    Locative,
    Vocative,
}

impl Case {
    /// All cases in their traditional citation order. Generators iterate
    /// this slice so output order is stable across runs.
    pub const ALL: [Case; 8] = [
        Case::Nominative,
        Case::Accusative,
        Case::Instrumental,
        Case::Dative,
        Case::Ablative,
        Case::Genitive,
        Case::Locative,
        Case::Vocative,
    ];

    /// Meaning template for this case. `{}` is replaced with the gloss
    /// of the base word.
    pub fn template(self) -> &'static str {
        match self {
            Case::Nominative => "{}",
            Case::Accusative => "to {}",
            Case::Instrumental => "by/with {}",
            Case::Dative => "to/for {}",
            Case::Ablative => "from {}",
            Case::Genitive => "of {}",
            Case::Locative => "in/on {}",
            Case::Vocative => "O {}!",
        }
    }
}

/// Grammatical number. Pali retains a marginal dual, valid only in the
/// nominative and accusative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Number {
    Singular,
    Dual,
    Plural,
}

impl Number {
    pub const ALL: [Number; 3] = [Number::Singular, Number::Dual, Number::Plural];

    /// Suffix appended to a composed meaning to mark non-singular number.
    pub fn gloss_marker(self) -> &'static str {
        match self {
            Number::Singular => "",
            Number::Dual => " (both)",
            Number::Plural => " (plural)",
        }
    }
}

/// Grammatical gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Masculine,
    Feminine,
    Neuter,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Masculine, Gender::Feminine, Gender::Neuter];
}

/// Nominal declension class: stem vowel plus gender. Determines the
/// ending table used for inflection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Declension {
    AMasculine,
    ANeuter,
    AaFeminine,
    IMasculine,
    IiFeminine,
    UMasculine,
    UNeuter,
}

impl Declension {
    /// The gender this declension class inflects for.
    pub fn gender(self) -> Gender {
        match self {
            Declension::AMasculine | Declension::IMasculine | Declension::UMasculine => {
                Gender::Masculine
            }
            Declension::AaFeminine | Declension::IiFeminine => Gender::Feminine,
            Declension::ANeuter | Declension::UNeuter => Gender::Neuter,
        }
    }

    /// The stem-final vowel that inflection endings replace.
    pub fn stem_vowel(self) -> char {
        match self {
            Declension::AMasculine | Declension::ANeuter => 'a',
            Declension::AaFeminine => 'ā',
            Declension::IMasculine => 'i',
            Declension::IiFeminine => 'ī',
            Declension::UMasculine | Declension::UNeuter => 'u',
        }
    }
}

/// Degree of comparison for adjective-like stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Degree {
    Comparative,
    Superlative,
}

impl Degree {
    pub const ALL: [Degree; 2] = [Degree::Comparative, Degree::Superlative];

    /// Suffix attached to the bare stem.
    pub fn suffix(self) -> &'static str {
        match self {
            Degree::Comparative => "tara",
            Degree::Superlative => "tama",
        }
    }

    /// Meaning template wrapping the base gloss.
    pub fn template(self) -> &'static str {
        match self {
            Degree::Comparative => "more {}",
            Degree::Superlative => "most {}",
        }
    }
}

/// Verbal person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Person {
    First,
    Second,
    Third,
}

impl Person {
    pub const ALL: [Person; 3] = [Person::First, Person::Second, Person::Third];
}

/// Verbal tense/mood. The traditional grammars treat imperative and
/// optative as moods; the generator treats the whole set as one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tense {
    Present,
    Aorist,
    Future,
    Imperative,
    Optative,
    Conditional,
}

impl Tense {
    pub const ALL: [Tense; 6] = [
        Tense::Present,
        Tense::Aorist,
        Tense::Future,
        Tense::Imperative,
        Tense::Optative,
        Tense::Conditional,
    ];

    /// Meaning template wrapping the root gloss (before the pronoun gloss
    /// is prepended).
    pub fn template(self) -> &'static str {
        match self {
            Tense::Present => "{}s",
            Tense::Aorist => "{}ed",
            Tense::Future => "will {}",
            Tense::Imperative => "must {}!",
            Tense::Optative => "should {}",
            Tense::Conditional => "would {}",
        }
    }
}

/// Verbal voice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Voice {
    Active,
    Middle,
    Passive,
    Causative,
}

impl Voice {
    pub const ALL: [Voice; 4] = [Voice::Active, Voice::Middle, Voice::Passive, Voice::Causative];
}

/// Participle kind. Declinable kinds are further declined like nominals;
/// the rest are committed as indeclinable forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticipleKind {
    PresentActive,
    PastPassive,
    FuturePassive,
    Gerund,
    Infinitive,
}

impl ParticipleKind {
    pub const ALL: [ParticipleKind; 5] = [
        ParticipleKind::PresentActive,
        ParticipleKind::PastPassive,
        ParticipleKind::FuturePassive,
        ParticipleKind::Gerund,
        ParticipleKind::Infinitive,
    ];

    /// Suffix attached to the bare root.
    pub fn suffix(self) -> &'static str {
        match self {
            ParticipleKind::PresentActive => "nta",
            ParticipleKind::PastPassive => "ta",
            ParticipleKind::FuturePassive => "tabba",
            ParticipleKind::Gerund => "tvā",
            ParticipleKind::Infinitive => "tuṃ",
        }
    }

    /// Whether forms of this kind decline for case/number/gender.
    pub fn declinable(self) -> bool {
        matches!(
            self,
            ParticipleKind::PresentActive
                | ParticipleKind::PastPassive
                | ParticipleKind::FuturePassive
        )
    }
}

/// Compound classification. Generic labels for the traditional
/// tatpurusa / karmadharaya / dvandva / bahuvrihi split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompoundType {
    /// Head-final "B of A" compound. The default/fallback type.
    Determinative,
    /// Attributive "A B" compound.
    Descriptive,
    /// Coordinating "A and B" compound.
    Coordinative,
    /// Exocentric "having B of A" compound.
    Possessive,
}

/// Derivation depth of a derivative entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DerivationLevel {
    Primary,
    Secondary,
    Tertiary,
}

impl DerivationLevel {
    /// Number of suffix layers applied, counting from the seed base.
    pub fn depth(self) -> u8 {
        match self {
            DerivationLevel::Primary => 1,
            DerivationLevel::Secondary => 2,
            DerivationLevel::Tertiary => 3,
        }
    }

    /// The next level down, if any. Tertiary is the hard cap.
    pub fn next(self) -> Option<DerivationLevel> {
        match self {
            DerivationLevel::Primary => Some(DerivationLevel::Secondary),
            DerivationLevel::Secondary => Some(DerivationLevel::Tertiary),
            DerivationLevel::Tertiary => None,
        }
    }
}

/// Pronoun gloss for a person/number pair, prepended to verbal meanings.
pub fn pronoun_gloss(person: Person, number: Number) -> &'static str {
    match (person, number) {
        (Person::First, Number::Singular) => "I",
        (Person::Second, Number::Singular) => "you",
        (Person::Third, Number::Singular) => "he/she/it",
        (Person::First, Number::Dual) => "we two",
        (Person::Second, Number::Dual) => "you two",
        (Person::Third, Number::Dual) => "they two",
        (Person::First, Number::Plural) => "we",
        (Person::Second, Number::Plural) => "you all",
        (Person::Third, Number::Plural) => "they",
    }
}
