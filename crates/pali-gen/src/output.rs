// The serialized lexicon document: metadata, dictionary, statistics.
//
// The dictionary is a BTreeMap keyed by surface form, so serialization
// order is the sorted key order regardless of generation order. Together
// with an injectable timestamp this makes the emitted JSON byte-for-byte
// reproducible for a given knowledge base and budget set.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use pali_core::entry::GeneratedEntry;

use crate::orchestrator::{PHASES, PHASE_VALIDATION};
use crate::registry::Registry;

/// Error reading or writing a lexicon document.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid lexicon document: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub generated_at: DateTime<Utc>,
    pub generator: String,
    pub total_entries: usize,
    /// The generation phases this document was produced with.
    pub features: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LexiconDocument {
    pub metadata: Metadata,
    pub dictionary: BTreeMap<String, GeneratedEntry>,
    pub statistics: BTreeMap<String, u64>,
}

impl LexiconDocument {
    /// Build a document from a filled registry with an explicit timestamp.
    pub fn from_registry(registry: Registry, generated_at: DateTime<Utc>) -> Self {
        let total_entries = registry.len();
        let mut statistics: BTreeMap<String, u64> = registry
            .phase_counts()
            .iter()
            .map(|(&phase, &count)| (phase.to_string(), count))
            .collect();
        statistics.insert("key_collisions".to_string(), registry.collisions());
        statistics.insert("validation_discards".to_string(), registry.discarded());
        statistics.insert("total_entries".to_string(), total_entries as u64);

        let features = PHASES
            .iter()
            .filter(|&&p| p != PHASE_VALIDATION)
            .map(|p| p.to_string())
            .collect();

        let dictionary = registry
            .into_entries()
            .into_iter()
            .map(|e| (e.key.clone(), e))
            .collect();

        LexiconDocument {
            metadata: Metadata {
                generated_at,
                generator: format!("palikosha {}", env!("CARGO_PKG_VERSION")),
                total_entries,
                features,
            },
            dictionary,
            statistics,
        }
    }

    /// Build a document stamped with the current time.
    pub fn now(registry: Registry) -> Self {
        Self::from_registry(registry, Utc::now())
    }

    pub fn to_json(&self, pretty: bool) -> Result<String, LexiconError> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    pub fn write_to(&self, path: impl AsRef<Path>, pretty: bool) -> Result<(), LexiconError> {
        std::fs::write(path, self.to_json(pretty)?)?;
        Ok(())
    }

    /// Read a document back. Entry keys are not serialized as fields, so
    /// they are restored from the map keys here.
    pub fn read_from(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(json: &str) -> Result<Self, LexiconError> {
        let mut doc: LexiconDocument = serde_json::from_str(json)?;
        for (key, entry) in &mut doc.dictionary {
            entry.key = key.clone();
        }
        Ok(doc)
    }
}
