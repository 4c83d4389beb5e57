// The deduplicating entry registry.
//
// One registry instance sees every candidate the pipeline produces.
// Commit is insert-if-absent on the surface form: the first entry for a
// key wins and later candidates for the same key only bump the collision
// counter. Validation happens at the same gate; a candidate with a
// degenerate meaning never reaches the map. Insertion order is preserved
// because later phases iterate earlier phases' output.

use std::collections::BTreeMap;

use hashbrown::{HashMap, HashSet};

use pali_core::entry::GeneratedEntry;

#[derive(Debug, Default)]
pub struct Registry {
    index: HashMap<String, usize>,
    /// Keys claimed for a later phase. A reserved key rejects candidates
    /// like a committed one until its owner releases it.
    reserved: HashSet<String>,
    order: Vec<GeneratedEntry>,
    phase_counts: BTreeMap<&'static str, u64>,
    collisions: u64,
    discarded: u64,
}

impl Registry {
    pub fn new() -> Self {
        Registry::default()
    }

    /// Commit a candidate under a phase label. Returns whether the entry
    /// was inserted; rejected candidates only move a counter.
    pub fn commit(&mut self, phase: &'static str, entry: GeneratedEntry) -> bool {
        if entry.meaning_is_degenerate() {
            self.discarded += 1;
            return false;
        }
        if self.index.contains_key(&entry.key) || self.reserved.contains(&entry.key) {
            self.collisions += 1;
            return false;
        }
        self.index.insert(entry.key.clone(), self.order.len());
        self.order.push(entry);
        *self.phase_counts.entry(phase).or_insert(0) += 1;
        true
    }

    /// Reserve a key for a phase that has not run yet. No-op for keys
    /// already committed.
    pub fn reserve(&mut self, key: &str) {
        if !self.index.contains_key(key) {
            self.reserved.insert(key.to_string());
        }
    }

    /// Release a reservation so its owner can commit the entry.
    pub fn release(&mut self, key: &str) {
        self.reserved.remove(key);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&GeneratedEntry> {
        self.index.get(key).map(|&i| &self.order[i])
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &GeneratedEntry> {
        self.order.iter()
    }

    pub fn phase_count(&self, phase: &str) -> u64 {
        self.phase_counts.get(phase).copied().unwrap_or(0)
    }

    pub fn phase_counts(&self) -> &BTreeMap<&'static str, u64> {
        &self.phase_counts
    }

    /// Candidates rejected because their key was already taken.
    pub fn collisions(&self) -> u64 {
        self.collisions
    }

    /// Candidates rejected by meaning validation.
    pub fn discarded(&self) -> u64 {
        self.discarded
    }

    pub fn into_entries(self) -> Vec<GeneratedEntry> {
        self.order
    }

    /// Record a non-committing phase (the final validation sweep) in the
    /// per-phase statistics.
    pub fn note_phase(&mut self, phase: &'static str, count: u64) {
        self.phase_counts.insert(phase, count);
    }
}
