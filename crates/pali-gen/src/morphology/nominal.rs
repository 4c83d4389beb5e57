// Nominal declension tables.
//
// Endings replace the stem-final vowel. The dual survives only in the
// nominative and accusative; every other dual cell is empty. Forms
// identical to the bare stem still come back `Some`; deciding whether to
// keep them is the caller's business.

use pali_core::grammar::{Case, Declension, Degree, Number};

use crate::sandhi;

use super::Form;

/// Ending for a declension/case/number cell, or `None` where the paradigm
/// has no form (dual outside nominative/accusative).
pub fn ending(declension: Declension, case: Case, number: Number) -> Option<&'static str> {
    use Case::*;
    use Declension::*;
    use Number::*;

    if number == Dual && !matches!(case, Nominative | Accusative) {
        return None;
    }

    let e = match declension {
        AMasculine => match (case, number) {
            (Nominative, Singular) => "o",
            (Accusative, Singular) => "aṃ",
            (Instrumental, Singular) => "ena",
            (Dative, Singular) => "āya",
            (Ablative, Singular) => "asmā",
            (Genitive, Singular) => "assa",
            (Locative, Singular) => "asmiṃ",
            (Vocative, Singular) => "a",
            (Nominative, Plural) => "ā",
            (Accusative, Plural) => "e",
            (Instrumental | Ablative, Plural) => "ehi",
            (Dative | Genitive, Plural) => "ānaṃ",
            (Locative, Plural) => "esu",
            (Vocative, Plural) => "ā",
            (Nominative | Accusative, Dual) => "ā",
            _ => return None,
        },
        ANeuter => match (case, number) {
            (Nominative | Accusative, Singular) => "aṃ",
            (Nominative | Accusative, Plural) => "āni",
            (Vocative, Plural) => "āni",
            (Nominative | Accusative, Dual) => "ā",
            _ => return ending(AMasculine, case, number),
        },
        AaFeminine => match (case, number) {
            (Nominative, Singular) => "ā",
            (Accusative, Singular) => "aṃ",
            (Instrumental | Dative | Ablative | Genitive, Singular) => "āya",
            (Locative, Singular) => "āyaṃ",
            (Vocative, Singular) => "e",
            (Nominative | Accusative | Vocative, Plural) => "āyo",
            (Instrumental | Ablative, Plural) => "āhi",
            (Dative | Genitive, Plural) => "ānaṃ",
            (Locative, Plural) => "āsu",
            (Nominative | Accusative, Dual) => "ā",
            _ => return None,
        },
        IMasculine => match (case, number) {
            (Nominative | Vocative, Singular) => "i",
            (Accusative, Singular) => "iṃ",
            (Instrumental, Singular) => "inā",
            (Dative | Genitive, Singular) => "ino",
            (Ablative, Singular) => "ismā",
            (Locative, Singular) => "ismiṃ",
            (Nominative | Accusative | Vocative, Plural) => "ayo",
            (Instrumental | Ablative, Plural) => "īhi",
            (Dative | Genitive, Plural) => "īnaṃ",
            (Locative, Plural) => "īsu",
            (Nominative | Accusative, Dual) => "ī",
            _ => return None,
        },
        IiFeminine => match (case, number) {
            (Nominative, Singular) => "ī",
            (Accusative, Singular) => "iṃ",
            (Instrumental | Dative | Ablative | Genitive, Singular) => "iyā",
            (Locative, Singular) => "iyaṃ",
            (Vocative, Singular) => "i",
            (Nominative | Accusative | Vocative, Plural) => "iyo",
            (Instrumental | Ablative, Plural) => "īhi",
            (Dative | Genitive, Plural) => "īnaṃ",
            (Locative, Plural) => "īsu",
            (Nominative | Accusative, Dual) => "ī",
            _ => return None,
        },
        UMasculine => match (case, number) {
            (Nominative | Vocative, Singular) => "u",
            (Accusative, Singular) => "uṃ",
            (Instrumental, Singular) => "unā",
            (Dative | Genitive, Singular) => "uno",
            (Ablative, Singular) => "usmā",
            (Locative, Singular) => "usmiṃ",
            (Nominative | Accusative | Vocative, Plural) => "avo",
            (Instrumental | Ablative, Plural) => "ūhi",
            (Dative | Genitive, Plural) => "ūnaṃ",
            (Locative, Plural) => "ūsu",
            (Nominative | Accusative, Dual) => "ū",
            _ => return None,
        },
        UNeuter => match (case, number) {
            (Nominative | Accusative, Singular) => "uṃ",
            (Nominative | Accusative | Vocative, Plural) => "ūni",
            (Nominative | Accusative, Dual) => "ū",
            _ => return ending(UMasculine, case, number),
        },
    };
    Some(e)
}

/// Decline a stem. Returns `None` when the paradigm has no such cell or
/// the stem does not end in the declension's stem vowel.
pub fn inflect_nominal(
    stem: &str,
    gloss: &str,
    declension: Declension,
    case: Case,
    number: Number,
) -> Option<Form> {
    let ending = ending(declension, case, number)?;
    let trunk = stem.strip_suffix(declension.stem_vowel())?;
    let surface = format!("{trunk}{ending}");
    let meaning = format!(
        "{}{}",
        case.template().replace("{}", gloss),
        number.gloss_marker()
    );
    Some(Form { surface, meaning })
}

/// Form a degree of comparison from a stem. The suffix is sandhi-joined,
/// though for the vowel-final stems in practice this is plain
/// concatenation.
pub fn compare(stem: &str, gloss: &str, degree: Degree) -> Form {
    Form {
        surface: sandhi::join(stem, degree.suffix()),
        meaning: degree.template().replace("{}", gloss),
    }
}
