// Builtin seed tables.
//
// Row order is load-bearing: generation phases iterate these tables in
// order, and the registry keeps first-committed entries, so reordering a
// table reorders (and can change) the generated lexicon.

use pali_core::field::{LexicalCategory, SemanticField};
use pali_core::frequency::Frequency;
use pali_core::grammar::Declension;

use super::{
    AffixRule, AffixTarget, DerivedCategory, KnowledgeBase, LexicalEntry, NumeralEntry,
    PhraseEntry,
};

use Declension::*;
use SemanticField::*;

type RootRow = (&'static str, &'static str, SemanticField, f32);
type StemRow = (&'static str, &'static str, SemanticField, Declension, f32);

const ROOTS: &[RootRow] = &[
    ("√gam", "go", Action, 5.0),
    ("√kar", "do", Action, 5.0),
    ("√vad", "speak", Action, 4.5),
    ("√pass", "see", Action, 4.5),
    ("√dā", "give", Action, 4.5),
    ("√ñā", "know", Mind, 4.5),
    ("√budh", "awaken", Mind, 4.5),
    ("√cint", "think", Mind, 4.0),
    ("√dhar", "hold", Action, 4.0),
    ("√labh", "obtain", Action, 4.0),
    ("√jan", "be born", Beings, 4.0),
    ("√mar", "die", Beings, 4.0),
    ("√ṭhā", "stand", Spatial, 4.0),
    ("√vas", "dwell", Society, 4.0),
    ("√muc", "release", Ethics, 4.0),
    ("√rakkh", "protect", Ethics, 4.0),
    ("√sikkh", "train", Ethics, 4.0),
    ("√bhuj", "eat", Body, 3.5),
];

const STEMS: &[StemRow] = &[
    ("buddha", "awakened one", ReligiousCore, AMasculine, 5.0),
    ("dhamma", "doctrine", ReligiousCore, AMasculine, 5.0),
    ("saṅgha", "community", ReligiousCore, AMasculine, 5.0),
    ("nibbāna", "extinguishing", ReligiousCore, ANeuter, 5.0),
    ("magga", "path", ReligiousCore, AMasculine, 4.5),
    ("kamma", "action", Philosophy, ANeuter, 5.0),
    ("dukkha", "suffering", Philosophy, ANeuter, 5.0),
    ("sacca", "truth", Philosophy, ANeuter, 4.5),
    ("taṇhā", "craving", Philosophy, AaFeminine, 4.5),
    ("avijjā", "ignorance", Philosophy, AaFeminine, 4.0),
    ("khandha", "aggregate", Philosophy, AMasculine, 4.0),
    ("atta", "self", Philosophy, AMasculine, 4.0),
    ("citta", "mind", Mind, ANeuter, 5.0),
    ("paññā", "wisdom", Mind, AaFeminine, 4.5),
    ("ñāṇa", "knowledge", Mind, ANeuter, 4.5),
    ("samādhi", "concentration", Meditation, IMasculine, 4.5),
    ("jhāna", "absorption", Meditation, ANeuter, 4.0),
    ("vipassanā", "insight", Meditation, AaFeminine, 4.0),
    ("sīla", "virtue", Ethics, ANeuter, 4.5),
    ("dāna", "giving", Ethics, ANeuter, 4.0),
    ("puñña", "merit", Ethics, ANeuter, 4.0),
    ("pāpa", "evil", Ethics, ANeuter, 4.0),
    ("mettā", "loving-kindness", Qualities, AaFeminine, 4.5),
    ("karuṇā", "compassion", Qualities, AaFeminine, 4.5),
    ("saddhā", "faith", Qualities, AaFeminine, 4.0),
    ("sukha", "happiness", Qualities, ANeuter, 4.5),
    ("bala", "strength", Qualities, ANeuter, 4.0),
    ("viriya", "energy", Qualities, ANeuter, 4.0),
    ("guṇa", "quality", Qualities, AMasculine, 3.5),
    ("deva", "god", Beings, AMasculine, 4.0),
    ("manussa", "human", Beings, AMasculine, 4.0),
    ("muni", "sage", Beings, IMasculine, 4.0),
    ("kāya", "body", Body, AMasculine, 4.5),
    ("hattha", "hand", Body, AMasculine, 3.5),
    ("mukha", "mouth", Body, ANeuter, 3.5),
    ("cakkhu", "eye", Faculties, UNeuter, 4.0),
    ("sota", "ear", Faculties, ANeuter, 3.5),
    ("vācā", "speech", Action, AaFeminine, 4.0),
    ("loka", "world", Nature, AMasculine, 4.5),
    ("rukkha", "tree", Nature, AMasculine, 3.5),
    ("vana", "forest", Nature, ANeuter, 3.5),
    ("nadī", "river", Nature, IiFeminine, 3.5),
    ("phala", "fruit", Nature, ANeuter, 4.0),
    ("bhikkhu", "monk", Society, UMasculine, 4.5),
    ("bhikkhunī", "nun", Society, IiFeminine, 4.0),
    ("garu", "teacher", Society, UMasculine, 3.5),
    ("gāma", "village", Society, AMasculine, 3.5),
    ("nagara", "city", Society, ANeuter, 3.5),
    ("agga", "top", Spatial, AMasculine, 3.5),
    ("kāla", "time", Temporal, AMasculine, 4.0),
    ("divasa", "day", Temporal, AMasculine, 3.5),
    ("māsa", "month", Temporal, AMasculine, 3.5),
    ("vassa", "year", Temporal, AMasculine, 3.5),
];

const PARTICLES: &[RootRow] = &[
    ("ca", "and", Particles, 5.0),
    ("na", "not", Particles, 5.0),
    ("vā", "or", Particles, 4.5),
    ("pi", "also", Particles, 4.5),
    ("eva", "just", Particles, 4.5),
    ("evaṃ", "thus", Particles, 4.5),
    ("iti", "thus (end of quote)", Particles, 4.5),
    ("kho", "indeed", Particles, 4.0),
    ("hi", "for", Particles, 4.0),
    ("pana", "but", Particles, 4.0),
    ("tadā", "then", Particles, 3.5),
    ("idāni", "now", Particles, 3.5),
    ("tattha", "there", Particles, 3.5),
];

const PREFIXES: &[RootRow] = &[
    ("saṃ", "together", Prefixes, 5.0),
    ("pa", "forth", Prefixes, 5.0),
    ("vi", "apart", Prefixes, 5.0),
    ("abhi", "toward", Prefixes, 4.5),
    ("anu", "along", Prefixes, 4.5),
    ("pari", "around", Prefixes, 4.5),
    ("paṭi", "back", Prefixes, 4.5),
    ("ā", "up to", Prefixes, 4.5),
    ("upa", "near", Prefixes, 4.0),
    ("ni", "down", Prefixes, 4.0),
    ("ud", "up", Prefixes, 4.0),
    ("adhi", "over", Prefixes, 4.0),
];

const NUMERALS: &[(&str, &str, u32, f32)] = &[
    ("eka", "one", 1, 5.0),
    ("dvi", "two", 2, 4.5),
    ("ti", "three", 3, 4.5),
    ("catu", "four", 4, 4.0),
    ("pañca", "five", 5, 4.5),
    ("cha", "six", 6, 3.5),
    ("satta", "seven", 7, 4.0),
    ("aṭṭha", "eight", 8, 4.0),
    ("nava", "nine", 9, 3.5),
    ("dasa", "ten", 10, 4.0),
    ("sata", "hundred", 100, 4.0),
    ("sahassa", "thousand", 1000, 4.0),
];

const PROPER_NAMES: &[StemRow] = &[
    ("gotama", "Gotama, the clan name of the Buddha", Names, AMasculine, 4.5),
    ("ānanda", "Ānanda, the attendant", Names, AMasculine, 4.5),
    ("sāriputta", "Sāriputta, foremost in wisdom", Names, AMasculine, 4.0),
    ("moggallāna", "Moggallāna, foremost in powers", Names, AMasculine, 4.0),
    ("sāvatthī", "Sāvatthī, a city", Names, IiFeminine, 4.0),
    ("rājagaha", "Rājagaha, a city", Names, ANeuter, 4.0),
    ("vesālī", "Vesālī, a city", Names, IiFeminine, 3.5),
    ("gaṅgā", "the Ganges", Names, AaFeminine, 3.5),
];

const TECHNICAL: &[StemRow] = &[
    ("anicca", "impermanence", Philosophy, ANeuter, 4.5),
    ("anatta", "non-self", Philosophy, ANeuter, 4.5),
    ("saṅkhāra", "formation", Philosophy, AMasculine, 4.5),
    ("viññāṇa", "consciousness", Mind, ANeuter, 4.5),
    ("vedanā", "feeling", Mind, AaFeminine, 4.5),
    ("saññā", "perception", Mind, AaFeminine, 4.5),
    ("cetasika", "mental factor", Mind, ANeuter, 3.5),
    ("paṭiccasamuppāda", "dependent origination", Philosophy, AMasculine, 4.0),
    ("abhidhamma", "higher doctrine", Philosophy, AMasculine, 4.0),
    ("satipaṭṭhāna", "foundation of mindfulness", Meditation, ANeuter, 4.0),
    ("samatha", "calm abiding", Meditation, AMasculine, 4.0),
    ("brahmavihāra", "divine abiding", Meditation, AMasculine, 3.5),
    ("nīvaraṇa", "hindrance", Meditation, ANeuter, 3.5),
    ("bojjhaṅga", "factor of awakening", Meditation, AMasculine, 3.5),
    ("kasiṇa", "meditation disc", Meditation, ANeuter, 3.0),
    ("vinaya", "discipline", Ethics, AMasculine, 4.0),
    ("uposatha", "observance day", Ethics, AMasculine, 3.5),
    ("pātimokkha", "monastic code", Ethics, ANeuter, 3.5),
];

const PHRASES: &[(&str, &str, f32)] = &[
    ("evaṃ me sutaṃ", "thus have I heard", 5.0),
    ("namo tassa bhagavato", "homage to the Blessed One", 4.5),
    ("buddhaṃ saraṇaṃ gacchāmi", "I go to the Buddha for refuge", 4.5),
    ("dhammaṃ saraṇaṃ gacchāmi", "I go to the Dhamma for refuge", 4.5),
    ("saṅghaṃ saraṇaṃ gacchāmi", "I go to the Sangha for refuge", 4.5),
    ("sabbe sattā", "all beings", 4.0),
    ("yathā bhūtaṃ", "as it really is", 4.0),
    ("sabbaṃ dukkhaṃ", "all is suffering", 4.0),
    ("appamādena sampādetha", "strive with diligence", 4.0),
];

const AFFIX_RULES: &[(&str, AffixTarget, DerivedCategory, &str)] = &[
    ("aka", AffixTarget::VerbalRoot, DerivedCategory::AgentNoun, "one who {}s"),
    ("ana", AffixTarget::VerbalRoot, DerivedCategory::ActionNoun, "the act of {}ing"),
    ("tā", AffixTarget::NominalStem, DerivedCategory::AbstractNoun, "state of being {}"),
    ("tta", AffixTarget::NominalStem, DerivedCategory::AbstractNoun, "the condition of {}"),
    ("vant", AffixTarget::NominalStem, DerivedCategory::PossessiveAdjective, "possessing {}"),
    ("ika", AffixTarget::NominalStem, DerivedCategory::RelationalAdjective, "relating to {}"),
    ("maya", AffixTarget::NominalStem, DerivedCategory::RelationalAdjective, "made of {}"),
    ("ka", AffixTarget::NominalStem, DerivedCategory::Diminutive, "little {}"),
    ("āyati", AffixTarget::NominalStem, DerivedCategory::DenominativeVerb, "acts like {}"),
];

fn lexical(rows: &[RootRow], category: LexicalCategory) -> Vec<LexicalEntry> {
    rows.iter()
        .map(|&(key, gloss, field, freq)| LexicalEntry {
            key: key.to_string(),
            category,
            gloss: gloss.to_string(),
            field,
            declension: None,
            frequency: Frequency::new(freq),
        })
        .collect()
}

fn declinable(rows: &[StemRow], category: LexicalCategory) -> Vec<LexicalEntry> {
    rows.iter()
        .map(|&(key, gloss, field, declension, freq)| LexicalEntry {
            key: key.to_string(),
            category,
            gloss: gloss.to_string(),
            field,
            declension: Some(declension),
            frequency: Frequency::new(freq),
        })
        .collect()
}

pub(super) fn builtin() -> KnowledgeBase {
    KnowledgeBase {
        roots: lexical(ROOTS, LexicalCategory::Root),
        stems: declinable(STEMS, LexicalCategory::Stem),
        particles: lexical(PARTICLES, LexicalCategory::Particle),
        prefixes: lexical(PREFIXES, LexicalCategory::Prefix),
        numerals: NUMERALS
            .iter()
            .map(|&(key, gloss, value, freq)| NumeralEntry {
                key: key.to_string(),
                gloss: gloss.to_string(),
                value,
                frequency: Frequency::new(freq),
            })
            .collect(),
        proper_names: declinable(PROPER_NAMES, LexicalCategory::ProperName),
        technical: declinable(TECHNICAL, LexicalCategory::TechnicalTerm),
        phrases: PHRASES
            .iter()
            .map(|&(surface, gloss, freq)| PhraseEntry {
                surface: surface.to_string(),
                gloss: gloss.to_string(),
                frequency: Frequency::new(freq),
            })
            .collect(),
        affix_rules: AFFIX_RULES
            .iter()
            .map(|&(suffix, attaches_to, produces, template)| AffixRule {
                suffix: suffix.to_string(),
                attaches_to,
                produces,
                template: template.to_string(),
            })
            .collect(),
    }
}
