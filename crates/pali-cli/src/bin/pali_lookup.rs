// pali-lookup: Look up words in a generated lexicon.
//
// Reads words from stdin (one per line) and prints the matching entries.
// Lookup is exact first; when nothing matches, diacritics are folded on
// both sides, so plain-ASCII input finds accented headwords.
//   F: word<TAB>meaning (type)   (found)
//   N: word                      (not found)
//
// Usage:
//   pali-lookup [-f LEXICON_FILE]
//
// Options:
//   -f, --file PATH   Lexicon file (default: pali_lexicon.json)
//   -h, --help        Print help

use std::collections::HashMap;
use std::io::{self, BufRead, Write};

use pali_gen::output::LexiconDocument;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (file, args) = pali_cli::parse_value_flag(&args, "--file", "-f");

    if pali_cli::wants_help(&args) {
        println!("pali-lookup: Look up words in a generated lexicon.");
        println!();
        println!("Usage: pali-lookup [-f LEXICON_FILE]");
        println!();
        println!("Reads words from stdin (one per line). Prints:");
        println!("  F: word\tmeaning (type)   (found)");
        println!("  N: word                  (not found)");
        println!();
        println!("Options:");
        println!("  -f, --file PATH   Lexicon file (default: pali_lexicon.json)");
        println!("  -h, --help        Print this help");
        return;
    }

    let file = file.unwrap_or_else(|| "pali_lexicon.json".to_string());
    let document = LexiconDocument::read_from(&file)
        .unwrap_or_else(|e| pali_cli::fatal(&format!("failed to read {file}: {e}")));

    // folded key -> headwords sharing that folding
    let mut folded: HashMap<String, Vec<&str>> = HashMap::new();
    for key in document.dictionary.keys() {
        folded
            .entry(pali_cli::fold_diacritics(key))
            .or_default()
            .push(key);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let word = line.trim();
        if word.is_empty() {
            continue;
        }

        if let Some(entry) = document.dictionary.get(word) {
            let _ = writeln!(out, "F: {word}\t{} ({})", entry.meaning, entry.kind.label());
            continue;
        }
        match folded.get(&pali_cli::fold_diacritics(word)) {
            Some(keys) => {
                for key in keys {
                    let entry = &document.dictionary[*key];
                    let _ =
                        writeln!(out, "F: {key}\t{} ({})", entry.meaning, entry.kind.label());
                }
            }
            None => {
                let _ = writeln!(out, "N: {word}");
            }
        }
    }
}
