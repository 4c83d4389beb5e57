// Error taxonomy.
//
// Only seed-data integrity problems are fatal, and only before generation
// starts. Everything that can go wrong during generation (invalid
// combination, key collision, budget exhaustion, degenerate meaning) is
// skip-and-continue at entry granularity and never an error value.

/// Fatal seed knowledge-base integrity error, detected at load time.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("duplicate seed key across categories: {key}")]
    DuplicateKey { key: String },
    #[error("seed entry {key} has an empty gloss")]
    EmptyGloss { key: String },
    #[error("seed category {category} is empty but the pipeline depends on it")]
    EmptyCategory { category: &'static str },
    #[error("affix rule {suffix} carries an empty meaning template")]
    EmptyTemplate { suffix: String },
    #[error("failed to parse seed file: {0}")]
    Parse(String),
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),
}
