// pali-cli: shared utilities for CLI tools.

use std::process;

/// Parse a `--name=VALUE`, `--name VALUE` or `-n VALUE` argument.
///
/// Returns `(value, remaining_args)`.
pub fn parse_value_flag(args: &[String], long: &str, short: &str) -> (Option<String>, Vec<String>) {
    let prefix = format!("{long}=");
    let mut value = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix(&prefix) {
            value = Some(val.to_string());
        } else if arg == long || arg == short {
            if i + 1 < args.len() {
                value = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {arg} requires a value");
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (value, remaining)
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

/// Strip Pali diacritics for fuzzy lookup: long vowels shorten and the
/// retroflex/nasal series fold onto their plain counterparts, so "nana"
/// finds "ñāṇa".
pub fn fold_diacritics(word: &str) -> String {
    word.chars()
        .map(|c| match c {
            'ā' => 'a',
            'ī' => 'i',
            'ū' => 'u',
            'ṃ' => 'm',
            'ñ' => 'n',
            'ṇ' => 'n',
            'ṅ' => 'n',
            'ṭ' => 't',
            'ḍ' => 'd',
            'ḷ' => 'l',
            c => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn value_flag_forms() {
        let (v, rest) = parse_value_flag(&args(&["--file=a.json", "x"]), "--file", "-f");
        assert_eq!(v.as_deref(), Some("a.json"));
        assert_eq!(rest, args(&["x"]));

        let (v, rest) = parse_value_flag(&args(&["-f", "b.json"]), "--file", "-f");
        assert_eq!(v.as_deref(), Some("b.json"));
        assert!(rest.is_empty());

        let (v, _) = parse_value_flag(&args(&["--other"]), "--file", "-f");
        assert!(v.is_none());
    }

    #[test]
    fn diacritic_folding() {
        assert_eq!(fold_diacritics("ñāṇa"), "nana");
        assert_eq!(fold_diacritics("saṅghaṃ"), "sangham");
        assert_eq!(fold_diacritics("paṭiccasamuppāda"), "paticcasamuppada");
        assert_eq!(fold_diacritics("dhamma"), "dhamma");
    }
}
