// pali-generate: Expand the seed knowledge base into a lexicon file.
//
// Runs the full generation pipeline over the builtin seed data (plus an
// optional JSON seed extension) and writes the lexicon document as JSON.
//
// Usage:
//   pali-generate [OPTIONS]
//
// Options:
//   -o, --output PATH       Output file (default: pali_lexicon.json)
//   --seed PATH             JSON seed extension merged over the builtin data
//   --max-per-phase N       Cap every generation phase at N entries
//   --pretty                Pretty-print the JSON output
//   -h, --help              Print help

use pali_gen::orchestrator::{Budgets, Generator};
use pali_gen::output::LexiconDocument;
use pali_gen::seed::KnowledgeBase;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (output, args) = pali_cli::parse_value_flag(&args, "--output", "-o");
    let (seed_path, args) = pali_cli::parse_value_flag(&args, "--seed", "--seed");
    let (max_per_phase, args) = pali_cli::parse_value_flag(&args, "--max-per-phase", "--max-per-phase");

    if pali_cli::wants_help(&args) {
        println!("pali-generate: Expand the seed knowledge base into a lexicon file.");
        println!();
        println!("Usage: pali-generate [OPTIONS]");
        println!();
        println!("Options:");
        println!("  -o, --output PATH       Output file (default: pali_lexicon.json)");
        println!("  --seed PATH             JSON seed extension merged over the builtin data");
        println!("  --max-per-phase N       Cap every generation phase at N entries");
        println!("  --pretty                Pretty-print the JSON output");
        println!("  -h, --help              Print this help");
        return;
    }

    let pretty = args.iter().any(|a| a == "--pretty");
    let output = output.unwrap_or_else(|| "pali_lexicon.json".to_string());

    let mut kb = KnowledgeBase::builtin();
    if let Some(path) = seed_path {
        let ext = KnowledgeBase::from_path(&path)
            .unwrap_or_else(|e| pali_cli::fatal(&format!("failed to load {path}: {e}")));
        kb.merge(ext);
    }
    if let Err(e) = kb.validate() {
        pali_cli::fatal(&format!("invalid seed data: {e}"));
    }

    let budgets = match max_per_phase {
        Some(n) => {
            let cap: usize = n
                .parse()
                .unwrap_or_else(|_| pali_cli::fatal(&format!("invalid --max-per-phase: {n}")));
            Budgets::uniform(cap)
        }
        None => Budgets::default(),
    };

    let registry = Generator::with_budgets(&kb, budgets).run();
    let document = LexiconDocument::now(registry);
    let total = document.metadata.total_entries;

    if let Err(e) = document.write_to(&output, pretty) {
        pali_cli::fatal(&format!("failed to write {output}: {e}"));
    }
    println!("wrote {total} entries to {output}");
}
