// pali-stats: Summarize a generated lexicon.
//
// Prints the document metadata, the per-phase generation statistics and
// an entry-type histogram.
//
// Usage:
//   pali-stats [-f LEXICON_FILE]
//
// Options:
//   -f, --file PATH   Lexicon file (default: pali_lexicon.json)
//   -h, --help        Print help

use std::collections::BTreeMap;

use pali_gen::output::LexiconDocument;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (file, args) = pali_cli::parse_value_flag(&args, "--file", "-f");

    if pali_cli::wants_help(&args) {
        println!("pali-stats: Summarize a generated lexicon.");
        println!();
        println!("Usage: pali-stats [-f LEXICON_FILE]");
        println!();
        println!("Options:");
        println!("  -f, --file PATH   Lexicon file (default: pali_lexicon.json)");
        println!("  -h, --help        Print this help");
        return;
    }

    let file = file.unwrap_or_else(|| "pali_lexicon.json".to_string());
    let document = LexiconDocument::read_from(&file)
        .unwrap_or_else(|e| pali_cli::fatal(&format!("failed to read {file}: {e}")));

    println!("generator:     {}", document.metadata.generator);
    println!("generated at:  {}", document.metadata.generated_at);
    println!("total entries: {}", document.metadata.total_entries);
    println!();

    println!("generation statistics:");
    for (name, count) in &document.statistics {
        println!("  {count:>8}  {name}");
    }
    println!();

    let mut kinds: BTreeMap<&str, u64> = BTreeMap::new();
    for entry in document.dictionary.values() {
        *kinds.entry(entry.kind.label()).or_insert(0) += 1;
    }
    println!("entries by type:");
    for (kind, count) in &kinds {
        println!("  {count:>8}  {kind}");
    }
}
