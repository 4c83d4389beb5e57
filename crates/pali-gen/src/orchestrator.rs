// The generation pipeline: eleven phases over one shared registry.
//
// Phase order is fixed and matters twice over. Seed-derived base entries
// commit first, so no later candidate can shadow a seed headword. And
// later phases (secondary derivation, compound extension, sandhi
// variants) iterate entries committed by earlier ones, so only surviving
// entries spawn descendants. Each committing phase stops at its budget;
// rejected candidates (collisions, filtered combinations) cost no budget.

use pali_core::entry::{
    ComparisonAttrs, CompoundAttrs, DerivativeAttrs, EntryKind, GeneratedEntry, NominalAttrs,
    ParticipleAttrs, VerbalAttrs,
};
use pali_core::field::SemanticField;
use pali_core::frequency::Frequency;
use pali_core::grammar::{Case, Degree, Gender, Number, ParticipleKind, Person, Tense, Voice};

use crate::compound::{self, Component, CompoundCandidate};
use crate::derivation::{self, Derived, SECONDARY_SUFFIXES, TERTIARY_SUFFIXES};
use crate::morphology::{compare, conjugate, form_participle, inflect_nominal};
use crate::registry::Registry;
use crate::sandhi;
use crate::seed::{AffixTarget, KnowledgeBase, LexicalEntry};

pub const PHASE_BASE: &str = "base_entries";
pub const PHASE_MORPHOLOGY: &str = "morphological_forms";
pub const PHASE_PREFIXED: &str = "prefixed_verbs";
pub const PHASE_COMPOUNDS: &str = "compounds";
pub const PHASE_DERIVATIVES: &str = "derivatives";
pub const PHASE_TECHNICAL: &str = "technical_terms";
pub const PHASE_PHRASAL: &str = "phrasal_expressions";
pub const PHASE_NUMERALS: &str = "numeral_forms";
pub const PHASE_SANDHI: &str = "sandhi_variants";
pub const PHASE_NAMES: &str = "proper_names";
pub const PHASE_VALIDATION: &str = "validation";

/// All phases in execution order.
pub const PHASES: [&str; 11] = [
    PHASE_BASE,
    PHASE_MORPHOLOGY,
    PHASE_PREFIXED,
    PHASE_COMPOUNDS,
    PHASE_DERIVATIVES,
    PHASE_TECHNICAL,
    PHASE_PHRASAL,
    PHASE_NUMERALS,
    PHASE_SANDHI,
    PHASE_NAMES,
    PHASE_VALIDATION,
];

/// Attested triple prefix stacks, outermost first.
const TRIPLE_STACKS: [[&str; 3]; 3] = [
    ["abhi", "saṃ", "pa"],
    ["saṃ", "anu", "pa"],
    ["upa", "saṃ", "pa"],
];

/// Minimum root weight for double and triple prefix stacking.
const STACKING_THRESHOLD: f32 = 4.5;

/// Per-phase caps on committed entries.
#[derive(Debug, Clone, Copy)]
pub struct Budgets {
    pub base_entries: usize,
    pub morphological_forms: usize,
    pub prefixed_verbs: usize,
    pub compounds: usize,
    pub derivatives: usize,
    pub technical_terms: usize,
    pub phrasal_expressions: usize,
    pub numeral_forms: usize,
    pub sandhi_variants: usize,
    pub proper_names: usize,
}

impl Budgets {
    /// The same cap for every phase.
    pub fn uniform(cap: usize) -> Self {
        Budgets {
            base_entries: cap,
            morphological_forms: cap,
            prefixed_verbs: cap,
            compounds: cap,
            derivatives: cap,
            technical_terms: cap,
            phrasal_expressions: cap,
            numeral_forms: cap,
            sandhi_variants: cap,
            proper_names: cap,
        }
    }
}

impl Default for Budgets {
    fn default() -> Self {
        Budgets {
            base_entries: 500,
            morphological_forms: 25_000,
            prefixed_verbs: 12_000,
            compounds: 10_000,
            derivatives: 8_000,
            technical_terms: 2_000,
            phrasal_expressions: 200,
            numeral_forms: 2_000,
            sandhi_variants: 3_000,
            proper_names: 500,
        }
    }
}

/// The generation pipeline over one knowledge base.
pub struct Generator<'a> {
    kb: &'a KnowledgeBase,
    budgets: Budgets,
}

fn component(e: &LexicalEntry) -> Component<'_> {
    Component {
        key: &e.key,
        gloss: &e.gloss,
        field: e.field,
        frequency: e.frequency,
    }
}

fn commit(reg: &mut Registry, left: &mut usize, phase: &'static str, entry: GeneratedEntry) -> bool {
    if reg.commit(phase, entry) {
        *left -= 1;
        true
    } else {
        false
    }
}

impl<'a> Generator<'a> {
    pub fn new(kb: &'a KnowledgeBase) -> Self {
        Generator {
            kb,
            budgets: Budgets::default(),
        }
    }

    pub fn with_budgets(kb: &'a KnowledgeBase, budgets: Budgets) -> Self {
        Generator { kb, budgets }
    }

    /// Run every phase in order and return the filled registry.
    pub fn run(&self) -> Registry {
        let mut reg = Registry::new();
        self.base_entries(&mut reg);
        self.reserve_seed_keys(&mut reg);
        self.morphological_forms(&mut reg);
        self.prefixed_verbs(&mut reg);
        self.compounds(&mut reg);
        self.derivatives(&mut reg);
        self.technical_terms(&mut reg);
        self.phrasal_expressions(&mut reg);
        self.numeral_forms(&mut reg);
        self.sandhi_variants(&mut reg);
        self.proper_names(&mut reg);
        let checked = reg.iter().filter(|e| !e.meaning_is_degenerate()).count() as u64;
        reg.note_phase(PHASE_VALIDATION, checked);
        reg
    }

    // Phase 1: seed headwords. Committing these first pins every seed key
    // before any generated candidate can claim it.
    fn base_entries(&self, reg: &mut Registry) {
        let mut left = self.budgets.base_entries;
        for e in self
            .kb
            .roots
            .iter()
            .chain(&self.kb.stems)
            .chain(&self.kb.particles)
        {
            if left == 0 {
                return;
            }
            let entry = GeneratedEntry::new(&e.key, &e.gloss, EntryKind::BaseWord, e.frequency);
            commit(reg, &mut left, PHASE_BASE, entry);
        }
    }

    // Seed keys owned by later phases (technical terms, phrases, numerals,
    // proper names) are claimed here, before any generating phase runs, so
    // no generated candidate can take a seed headword.
    fn reserve_seed_keys(&self, reg: &mut Registry) {
        for numeral in &self.kb.numerals {
            reg.reserve(&numeral.key);
        }
        for entry in self.kb.technical.iter().chain(&self.kb.proper_names) {
            reg.reserve(&entry.key);
        }
        for phrase in &self.kb.phrases {
            reg.reserve(&phrase.surface);
        }
    }

    // Phase 2: full nominal paradigms, comparison forms, finite verb
    // forms, participles.
    fn morphological_forms(&self, reg: &mut Registry) {
        let mut left = self.budgets.morphological_forms;
        self.decline_stems(reg, &mut left);
        self.compare_stems(reg, &mut left);
        self.conjugate_roots(reg, &mut left);
        self.form_participles(reg, &mut left);
    }

    fn decline_stems(&self, reg: &mut Registry, left: &mut usize) {
        for stem in &self.kb.stems {
            let Some(declension) = stem.declension else {
                continue;
            };
            for number in Number::ALL {
                for case in Case::ALL {
                    if *left == 0 {
                        return;
                    }
                    let Some(form) =
                        inflect_nominal(&stem.key, &stem.gloss, declension, case, number)
                    else {
                        continue;
                    };
                    if form.surface == stem.key {
                        continue;
                    }
                    let entry = GeneratedEntry::new(
                        form.surface,
                        form.meaning,
                        EntryKind::InflectedNominal,
                        stem.frequency,
                    )
                    .with_nominal(NominalAttrs {
                        base: stem.key.clone(),
                        case,
                        number,
                        gender: declension.gender(),
                    });
                    commit(reg, left, PHASE_MORPHOLOGY, entry);
                }
            }
        }
    }

    fn compare_stems(&self, reg: &mut Registry, left: &mut usize) {
        for stem in &self.kb.stems {
            for degree in Degree::ALL {
                if *left == 0 {
                    return;
                }
                let form = compare(&stem.key, &stem.gloss, degree);
                let entry = GeneratedEntry::new(
                    form.surface,
                    form.meaning,
                    EntryKind::ComparisonForm,
                    stem.frequency,
                )
                .with_comparison(ComparisonAttrs {
                    base: stem.key.clone(),
                    degree,
                });
                commit(reg, left, PHASE_MORPHOLOGY, entry);
            }
        }
    }

    fn conjugate_roots(&self, reg: &mut Registry, left: &mut usize) {
        for root in &self.kb.roots {
            for voice in Voice::ALL {
                for tense in Tense::ALL {
                    for person in Person::ALL {
                        for number in Number::ALL {
                            if *left == 0 {
                                return;
                            }
                            let Some(form) =
                                conjugate(root.bare(), &root.gloss, person, number, tense, voice)
                            else {
                                continue;
                            };
                            let entry = GeneratedEntry::new(
                                form.surface,
                                form.meaning,
                                EntryKind::VerbForm,
                                root.frequency,
                            )
                            .with_verbal(VerbalAttrs {
                                root: root.key.clone(),
                                person,
                                number,
                                tense,
                                voice,
                                prefixes: Vec::new(),
                            });
                            commit(reg, left, PHASE_MORPHOLOGY, entry);
                        }
                    }
                }
            }
        }
    }

    fn form_participles(&self, reg: &mut Registry, left: &mut usize) {
        for root in &self.kb.roots {
            for kind in ParticipleKind::ALL {
                if *left == 0 {
                    return;
                }
                let base = form_participle(root.bare(), &root.gloss, kind);
                let entry = GeneratedEntry::new(
                    &base.surface,
                    &base.meaning,
                    EntryKind::Participle,
                    root.frequency,
                )
                .with_participle(ParticipleAttrs {
                    root: root.key.clone(),
                    participle: kind,
                });
                commit(reg, left, PHASE_MORPHOLOGY, entry);
                if !kind.declinable() {
                    continue;
                }
                for gender in Gender::ALL {
                    // declinable participle suffixes all end in -a; the
                    // feminine swaps it for -ā
                    let (stem, declension) = match gender {
                        Gender::Masculine => (base.surface.clone(), pali_core::grammar::Declension::AMasculine),
                        Gender::Neuter => (base.surface.clone(), pali_core::grammar::Declension::ANeuter),
                        Gender::Feminine => {
                            let Some(trunk) = base.surface.strip_suffix('a') else {
                                continue;
                            };
                            (format!("{trunk}ā"), pali_core::grammar::Declension::AaFeminine)
                        }
                    };
                    for number in Number::ALL {
                        for case in Case::ALL {
                            if *left == 0 {
                                return;
                            }
                            let Some(form) =
                                inflect_nominal(&stem, &base.meaning, declension, case, number)
                            else {
                                continue;
                            };
                            if form.surface == base.surface {
                                continue;
                            }
                            let entry = GeneratedEntry::new(
                                form.surface,
                                form.meaning,
                                EntryKind::Participle,
                                root.frequency,
                            )
                            .with_participle(ParticipleAttrs {
                                root: root.key.clone(),
                                participle: kind,
                            })
                            .with_nominal(NominalAttrs {
                                base: base.surface.clone(),
                                case,
                                number,
                                gender,
                            });
                            commit(reg, left, PHASE_MORPHOLOGY, entry);
                        }
                    }
                }
            }
        }
    }

    // Phase 3: prefixed verbs, stacking up to three prefixes on
    // high-frequency roots.
    fn prefixed_verbs(&self, reg: &mut Registry) {
        let mut left = self.budgets.prefixed_verbs;
        let prefix_tenses = [Tense::Present, Tense::Aorist, Tense::Future];

        for prefix in &self.kb.prefixes {
            for root in &self.kb.roots {
                for tense in prefix_tenses {
                    for person in Person::ALL {
                        for number in [Number::Singular, Number::Plural] {
                            if left == 0 {
                                return;
                            }
                            let Some(form) = conjugate(
                                root.bare(),
                                &root.gloss,
                                person,
                                number,
                                tense,
                                Voice::Active,
                            ) else {
                                continue;
                            };
                            let entry = GeneratedEntry::new(
                                sandhi::join(&prefix.key, &form.surface),
                                format!("{} {}", form.meaning, prefix.gloss),
                                EntryKind::PrefixedVerb,
                                Frequency::combine(prefix.frequency, root.frequency),
                            )
                            .with_verbal(VerbalAttrs {
                                root: root.key.clone(),
                                person,
                                number,
                                tense,
                                voice: Voice::Active,
                                prefixes: vec![prefix.key.clone()],
                            });
                            commit(reg, &mut left, PHASE_PREFIXED, entry);
                        }
                    }
                }
            }
        }

        // double stacks: third person only, strong roots
        for outer in &self.kb.prefixes {
            for inner in &self.kb.prefixes {
                if outer.key == inner.key {
                    continue;
                }
                for root in &self.kb.roots {
                    if root.frequency.value() < STACKING_THRESHOLD {
                        continue;
                    }
                    for tense in [Tense::Present, Tense::Future] {
                        for number in [Number::Singular, Number::Plural] {
                            if left == 0 {
                                return;
                            }
                            let Some(form) = conjugate(
                                root.bare(),
                                &root.gloss,
                                Person::Third,
                                number,
                                tense,
                                Voice::Active,
                            ) else {
                                continue;
                            };
                            let inner_form = sandhi::join(&inner.key, &form.surface);
                            let entry = GeneratedEntry::new(
                                sandhi::join(&outer.key, &inner_form),
                                format!("{} {} {}", form.meaning, inner.gloss, outer.gloss),
                                EntryKind::PrefixedVerb,
                                Frequency::combine(outer.frequency, root.frequency)
                                    .decay(derivation::LEVEL_DECAY),
                            )
                            .with_verbal(VerbalAttrs {
                                root: root.key.clone(),
                                person: Person::Third,
                                number,
                                tense,
                                voice: Voice::Active,
                                prefixes: vec![outer.key.clone(), inner.key.clone()],
                            });
                            commit(reg, &mut left, PHASE_PREFIXED, entry);
                        }
                    }
                }
            }
        }

        // triple stacks: a short attested list, present third singular only
        for stack in TRIPLE_STACKS {
            let resolved: Vec<&LexicalEntry> = stack
                .iter()
                .filter_map(|key| self.kb.prefixes.iter().find(|p| p.key == *key))
                .collect();
            if resolved.len() != 3 {
                continue;
            }
            for root in &self.kb.roots {
                if root.frequency.value() < STACKING_THRESHOLD {
                    continue;
                }
                if left == 0 {
                    return;
                }
                let Some(form) = conjugate(
                    root.bare(),
                    &root.gloss,
                    Person::Third,
                    Number::Singular,
                    Tense::Present,
                    Voice::Active,
                ) else {
                    continue;
                };
                let mut surface = form.surface;
                let mut meaning = form.meaning;
                for prefix in resolved.iter().rev() {
                    surface = sandhi::join(&prefix.key, &surface);
                    meaning = format!("{meaning} {}", prefix.gloss);
                }
                let entry = GeneratedEntry::new(
                    surface,
                    meaning,
                    EntryKind::PrefixedVerb,
                    Frequency::combine(resolved[0].frequency, root.frequency)
                        .decay(derivation::LEVEL_DECAY),
                )
                .with_verbal(VerbalAttrs {
                    root: root.key.clone(),
                    person: Person::Third,
                    number: Number::Singular,
                    tense: Tense::Present,
                    voice: Voice::Active,
                    prefixes: stack.iter().map(|s| s.to_string()).collect(),
                });
                commit(reg, &mut left, PHASE_PREFIXED, entry);
            }
        }
    }

    // Phase 4: two-component compounds over the open-class pool, then
    // recursive extension up to the depth cap.
    fn compounds(&self, reg: &mut Registry) {
        let mut left = self.budgets.compounds;
        let pool: Vec<Component<'_>> = self
            .kb
            .stems
            .iter()
            .chain(&self.kb.technical)
            .map(component)
            .collect();

        let mut committed: Vec<CompoundCandidate> = Vec::new();
        for first in &pool {
            for last in &pool {
                if left == 0 {
                    return;
                }
                let Some(cand) = compound::compose(*first, *last) else {
                    continue;
                };
                if self.commit_compound(reg, &mut left, &cand) {
                    committed.push(cand);
                }
            }
        }

        // extension pool: doctrinal heads only
        let extenders: Vec<Component<'_>> = pool
            .iter()
            .copied()
            .filter(|c| {
                matches!(
                    c.field,
                    SemanticField::ReligiousCore | SemanticField::Philosophy | SemanticField::Mind
                )
            })
            .collect();

        let mut frontier = committed;
        while !frontier.is_empty() && left > 0 {
            let mut next = Vec::new();
            for base in &frontier {
                for ext in &extenders {
                    if left == 0 {
                        return;
                    }
                    let Some(cand) = compound::extend(base, *ext) else {
                        continue;
                    };
                    if self.commit_compound(reg, &mut left, &cand) {
                        next.push(cand);
                    }
                }
            }
            frontier = next;
        }
    }

    fn commit_compound(
        &self,
        reg: &mut Registry,
        left: &mut usize,
        cand: &CompoundCandidate,
    ) -> bool {
        let entry = GeneratedEntry::new(
            &cand.surface,
            &cand.meaning,
            EntryKind::Compound,
            cand.frequency,
        )
        .with_compound(CompoundAttrs {
            components: cand.components.clone(),
            compound_type: cand.compound_type,
            depth: cand.depth(),
        });
        commit(reg, left, PHASE_COMPOUNDS, entry)
    }

    // Phase 5: layered derivation. Only committed forms spawn the next
    // level, so a collided derivative prunes its whole subtree.
    fn derivatives(&self, reg: &mut Registry) {
        let mut left = self.budgets.derivatives;

        let mut primaries: Vec<Derived> = Vec::new();
        for rule in &self.kb.affix_rules {
            let bases: &[LexicalEntry] = match rule.attaches_to {
                AffixTarget::VerbalRoot => &self.kb.roots,
                AffixTarget::NominalStem => &self.kb.stems,
            };
            for base in bases {
                if left == 0 {
                    return;
                }
                let d = derivation::derive_primary(base.bare(), &base.gloss, rule, base.frequency);
                if self.commit_derived(reg, &mut left, &d, &base.key) {
                    primaries.push(d);
                }
            }
        }

        let mut secondaries: Vec<Derived> = Vec::new();
        for primary in &primaries {
            for (suffix, template) in SECONDARY_SUFFIXES {
                if left == 0 {
                    return;
                }
                let Some(d) = derivation::derive_further(primary, suffix, template) else {
                    continue;
                };
                if self.commit_derived(reg, &mut left, &d, &primary.surface) {
                    secondaries.push(d);
                }
            }
        }

        for secondary in &secondaries {
            for (suffix, template) in TERTIARY_SUFFIXES {
                if left == 0 {
                    return;
                }
                let Some(d) = derivation::derive_further(secondary, suffix, template) else {
                    continue;
                };
                self.commit_derived(reg, &mut left, &d, &secondary.surface);
            }
        }
    }

    fn commit_derived(
        &self,
        reg: &mut Registry,
        left: &mut usize,
        d: &Derived,
        base_key: &str,
    ) -> bool {
        let entry = GeneratedEntry::new(&d.surface, &d.meaning, EntryKind::Derivative, d.frequency)
            .with_derivative(DerivativeAttrs {
                base: base_key.to_string(),
                suffix: d.suffix.clone(),
                level: d.level,
                rare: d.rare,
            });
        commit(reg, left, PHASE_DERIVATIVES, entry)
    }

    // Phase 6: technical vocabulary, each term with its full declension.
    fn technical_terms(&self, reg: &mut Registry) {
        let mut left = self.budgets.technical_terms;
        for term in &self.kb.technical {
            if left == 0 {
                return;
            }
            reg.release(&term.key);
            let entry = GeneratedEntry::new(
                &term.key,
                format!("{} (technical term of {})", term.gloss, term.field.label()),
                EntryKind::TechnicalTerm,
                term.frequency,
            );
            commit(reg, &mut left, PHASE_TECHNICAL, entry);
            let Some(declension) = term.declension else {
                continue;
            };
            for number in Number::ALL {
                for case in Case::ALL {
                    if left == 0 {
                        return;
                    }
                    let Some(form) =
                        inflect_nominal(&term.key, &term.gloss, declension, case, number)
                    else {
                        continue;
                    };
                    if form.surface == term.key {
                        continue;
                    }
                    let entry = GeneratedEntry::new(
                        form.surface,
                        form.meaning,
                        EntryKind::InflectedNominal,
                        term.frequency,
                    )
                    .with_nominal(NominalAttrs {
                        base: term.key.clone(),
                        case,
                        number,
                        gender: declension.gender(),
                    });
                    commit(reg, &mut left, PHASE_TECHNICAL, entry);
                }
            }
        }
    }

    // Phase 7: fixed phrasal expressions, committed verbatim.
    fn phrasal_expressions(&self, reg: &mut Registry) {
        let mut left = self.budgets.phrasal_expressions;
        for phrase in &self.kb.phrases {
            if left == 0 {
                return;
            }
            reg.release(&phrase.surface);
            let entry = GeneratedEntry::new(
                &phrase.surface,
                &phrase.gloss,
                EntryKind::PhrasalExpression,
                phrase.frequency,
            );
            commit(reg, &mut left, PHASE_PHRASAL, entry);
        }
    }

    // Phase 8: numerals and numeral-noun compounds.
    fn numeral_forms(&self, reg: &mut Registry) {
        let mut left = self.budgets.numeral_forms;
        for numeral in &self.kb.numerals {
            if left == 0 {
                return;
            }
            reg.release(&numeral.key);
            let entry = GeneratedEntry::new(
                &numeral.key,
                &numeral.gloss,
                EntryKind::Numeral,
                numeral.frequency,
            );
            commit(reg, &mut left, PHASE_NUMERALS, entry);
        }

        let countable = |field: SemanticField| {
            matches!(
                field,
                SemanticField::Beings
                    | SemanticField::Body
                    | SemanticField::Faculties
                    | SemanticField::Qualities
                    | SemanticField::Objects
                    | SemanticField::Nature
                    | SemanticField::Society
                    | SemanticField::Temporal
            )
        };
        for numeral in &self.kb.numerals {
            for stem in &self.kb.stems {
                if !countable(stem.field) {
                    continue;
                }
                if left == 0 {
                    return;
                }
                let meaning = if numeral.value == 1 {
                    format!("{} {}", numeral.gloss, stem.gloss)
                } else {
                    format!("{} {}", numeral.gloss, pali_core::gloss::third_person(&stem.gloss))
                };
                let entry = GeneratedEntry::new(
                    sandhi::join(&numeral.key, &stem.key),
                    meaning,
                    EntryKind::Numeral,
                    Frequency::combine(numeral.frequency, stem.frequency),
                )
                .with_compound(CompoundAttrs {
                    components: vec![numeral.key.clone(), stem.key.clone()],
                    compound_type: pali_core::grammar::CompoundType::Descriptive,
                    depth: 2,
                });
                commit(reg, &mut left, PHASE_NUMERALS, entry);
            }
        }
    }

    // Phase 9: attested junction variants of two-component compounds.
    fn sandhi_variants(&self, reg: &mut Registry) {
        let mut left = self.budgets.sandhi_variants;
        let snapshot: Vec<(String, String, CompoundAttrs, Frequency)> = reg
            .iter()
            .filter(|e| e.kind == EntryKind::Compound)
            .filter_map(|e| {
                let attrs = e.compound.as_ref()?;
                if attrs.depth != 2 {
                    return None;
                }
                Some((e.key.clone(), e.meaning.clone(), attrs.clone(), e.frequency))
            })
            .collect();

        for (surface, meaning, attrs, frequency) in snapshot {
            for variant in sandhi::alternatives(&attrs.components[0], &attrs.components[1]) {
                if left == 0 {
                    return;
                }
                if variant == surface {
                    continue;
                }
                let entry = GeneratedEntry::new(
                    variant,
                    format!("{meaning} (sandhi variant of {surface})"),
                    EntryKind::SandhiVariant,
                    frequency.decay(0.9),
                )
                .with_compound(attrs.clone());
                commit(reg, &mut left, PHASE_SANDHI, entry);
            }
        }
    }

    // Phase 10: proper names with their declensions.
    fn proper_names(&self, reg: &mut Registry) {
        let mut left = self.budgets.proper_names;
        for name in &self.kb.proper_names {
            if left == 0 {
                return;
            }
            reg.release(&name.key);
            let entry =
                GeneratedEntry::new(&name.key, &name.gloss, EntryKind::BaseWord, name.frequency);
            commit(reg, &mut left, PHASE_NAMES, entry);
            let Some(declension) = name.declension else {
                continue;
            };
            for number in Number::ALL {
                for case in Case::ALL {
                    if left == 0 {
                        return;
                    }
                    let Some(form) =
                        inflect_nominal(&name.key, &name.gloss, declension, case, number)
                    else {
                        continue;
                    };
                    if form.surface == name.key {
                        continue;
                    }
                    let entry = GeneratedEntry::new(
                        form.surface,
                        form.meaning,
                        EntryKind::InflectedNominal,
                        name.frequency,
                    )
                    .with_nominal(NominalAttrs {
                        base: name.key.clone(),
                        case,
                        number,
                        gender: declension.gender(),
                    });
                    commit(reg, &mut left, PHASE_NAMES, entry);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pali_core::grammar::{CompoundType, DerivationLevel};

    fn run_default() -> Registry {
        let kb = KnowledgeBase::builtin();
        Generator::new(&kb).run()
    }

    #[test]
    fn seed_headwords_commit_first_and_survive() {
        let reg = run_default();
        let kb = KnowledgeBase::builtin();
        for stem in &kb.stems {
            let e = reg.get(&stem.key).unwrap();
            assert_eq!(e.kind, EntryKind::BaseWord, "{} was shadowed", stem.key);
            assert_eq!(e.meaning, stem.gloss);
        }
    }

    #[test]
    fn late_phase_seed_keys_survive_earlier_phases() {
        // "gamaka" is also the agent noun the derivatives phase would mint
        // out of √gam; the seed proper name must win.
        let mut kb = KnowledgeBase::builtin();
        let ext = KnowledgeBase::from_json_str(
            r#"{
                "proper_names": [{
                    "key": "gamaka",
                    "category": "proper_name",
                    "gloss": "Gamaka, a village headman",
                    "field": "names",
                    "declension": "a_masculine",
                    "frequency": 3.0
                }]
            }"#,
        )
        .unwrap();
        kb.merge(ext);
        kb.validate().unwrap();

        let reg = Generator::new(&kb).run();
        let e = reg.get("gamaka").unwrap();
        assert_eq!(e.kind, EntryKind::BaseWord);
        assert_eq!(e.meaning, "Gamaka, a village headman");
    }

    #[test]
    fn comparison_forms_cover_both_degrees() {
        let reg = run_default();
        let c = reg.get("dhammatara").unwrap();
        assert_eq!(c.kind, EntryKind::ComparisonForm);
        assert_eq!(c.meaning, "more doctrine");
        let s = reg.get("dhammatama").unwrap();
        assert_eq!(s.meaning, "most doctrine");
        let attrs = s.comparison.as_ref().unwrap();
        assert_eq!(attrs.base, "dhamma");
        assert_eq!(attrs.degree, Degree::Superlative);
    }

    #[test]
    fn every_phase_commits_something() {
        let reg = run_default();
        for phase in PHASES {
            assert!(
                reg.phase_count(phase) > 0,
                "phase {phase} committed nothing"
            );
        }
    }

    #[test]
    fn budgets_cap_committed_entries() {
        let kb = KnowledgeBase::builtin();
        let reg = Generator::with_budgets(&kb, Budgets::uniform(50)).run();
        for phase in PHASES {
            if phase == PHASE_VALIDATION {
                continue;
            }
            assert!(
                reg.phase_count(phase) <= 50,
                "phase {phase} exceeded its budget: {}",
                reg.phase_count(phase)
            );
        }
    }

    #[test]
    fn known_compound_is_generated() {
        let reg = run_default();
        let e = reg.get("buddhadhamma").unwrap();
        assert_eq!(e.kind, EntryKind::Compound);
        let attrs = e.compound.as_ref().unwrap();
        assert_eq!(attrs.compound_type, CompoundType::Coordinative);
        assert_eq!(e.meaning, "awakened one and doctrine");
    }

    #[test]
    fn known_derivative_chain_is_generated() {
        let reg = run_default();
        let gamaka = reg.get("gamaka").unwrap();
        assert_eq!(gamaka.meaning, "one who goes");
        assert_eq!(
            gamaka.derivative.as_ref().unwrap().level,
            DerivationLevel::Primary
        );

        let gamakata = reg.get("gamakatā").unwrap();
        assert_eq!(gamakata.meaning, "state of being one who goes");
        let attrs = gamakata.derivative.as_ref().unwrap();
        assert_eq!(attrs.level, DerivationLevel::Secondary);
        assert_eq!(attrs.base, "gamaka");
        assert!(
            (gamakata.frequency.value() - gamaka.frequency.value() * 0.8).abs() < 1e-6
        );
    }

    #[test]
    fn prefixed_verb_records_its_stack() {
        let reg = run_default();
        let e = reg.get("āgamati").unwrap();
        assert_eq!(e.kind, EntryKind::PrefixedVerb);
        let attrs = e.verbal.as_ref().unwrap();
        assert_eq!(attrs.prefixes, vec!["ā".to_string()]);
        assert_eq!(attrs.root, "√gam");
        assert_eq!(e.meaning, "(he/she/it) goes up to");
    }

    #[test]
    fn sandhi_variants_point_back_at_their_compound() {
        let reg = run_default();
        // dhamma + agga joins as dhammāgga with the elided dhammagga variant
        let primary = reg.get("dhammāgga").unwrap();
        assert_eq!(primary.kind, EntryKind::Compound);
        let variant = reg.get("dhammagga").unwrap();
        assert_eq!(variant.kind, EntryKind::SandhiVariant);
        assert!(variant.meaning.contains("dhammāgga"));
        assert_eq!(
            variant.compound.as_ref().unwrap().components,
            vec!["dhamma".to_string(), "agga".to_string()]
        );
    }

    #[test]
    fn proper_names_are_declined() {
        let reg = run_default();
        assert_eq!(reg.get("gotama").unwrap().kind, EntryKind::BaseWord);
        let e = reg.get("gotamassa").unwrap();
        assert_eq!(e.kind, EntryKind::InflectedNominal);
        assert_eq!(e.nominal.as_ref().unwrap().base, "gotama");
    }

    #[test]
    fn deterministic_across_runs() {
        let a = run_default();
        let b = run_default();
        assert_eq!(a.len(), b.len());
        let keys_a: Vec<&str> = a.iter().map(|e| e.key.as_str()).collect();
        let keys_b: Vec<&str> = b.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys_a, keys_b);
    }

    #[test]
    fn provenance_resolves_to_seeds_within_depth_bound() {
        let reg = run_default();
        let kb = KnowledgeBase::builtin();
        let is_seed = |key: &str| {
            kb.roots.iter().any(|e| e.key == key)
                || kb.stems.iter().any(|e| e.key == key)
                || kb.technical.iter().any(|e| e.key == key)
                || kb.numerals.iter().any(|e| e.key == key)
        };
        for entry in reg.iter().filter(|e| e.kind == EntryKind::Derivative) {
            let mut key = entry.derivative.as_ref().unwrap().base.clone();
            let mut hops = 0;
            while !is_seed(&key) {
                let parent = reg.get(&key).unwrap_or_else(|| panic!("dangling base {key}"));
                key = match &parent.derivative {
                    Some(d) => d.base.clone(),
                    None => break,
                };
                hops += 1;
                assert!(hops <= 3, "derivation chain too deep at {}", entry.key);
            }
        }
    }
}
