// svlang-compound: Split Swedish compound words.
//
// Splits each word given on the command line, or reads words from stdin
// (one per line) when none are given. Tokens without any Swedish letter
// are skipped.
//
// Usage:
//   svlang-compound [-w WORDLIST] [OPTIONS] [WORD...]
//
// Options:
//   -w, --wordlist PATH    Newline-delimited wordlist (default: search, then built-in)
//   -j, --json             Print results as JSON
//   -q, --quiet            Print nothing; only the exit code matters
//   --check                Print "WORD<TAB>true|false"; exit 1 if any word is not a compound
//   --shortest-first       Scan split points from the shortest prefix up
//   --max-depth N          Maximum recursion depth (default: 5)
//   --min-part N           Minimum part length in characters (default: 2)
//   --keep-known           Do not split words that are themselves in the wordlist
//   -v, --verbose          More log output (repeatable); RUST_LOG overrides
//   -h, --help             Print help

use std::io::{self, BufRead, Write};
use std::process;

use serde::Serialize;
use svlang_cli::JsonEntry;
use svlang_core::segmentation::SegmentationResult;
use svlang_sv::compound::{Segmenter, SegmenterOptions, SplitOrder};

/// JSON document printed with `--json`.
#[derive(Serialize)]
struct Report<'a> {
    results: Vec<JsonEntry<'a>>,
}

/// Format one result for the plain-text output.
fn format_result(result: &SegmentationResult) -> String {
    if result.is_compound() {
        format!(
            "  {} \u{2192} {}",
            result.word(),
            result.display_parts().join(" + ")
        )
    } else {
        format!("  {} \u{2192} (not a compound)", result.word())
    }
}

fn parse_number(args: &[String], i: usize, flag: &str) -> usize {
    args.get(i + 1)
        .and_then(|v| v.parse().ok())
        .unwrap_or_else(|| svlang_cli::fatal(&format!("invalid number for {flag}")))
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (wordlist, args) = svlang_cli::parse_wordlist_path(&args);
    let (verbosity, args) = svlang_cli::parse_verbosity(&args);

    if svlang_cli::wants_help(&args) {
        println!("svlang-compound: Split Swedish compound words.");
        println!();
        println!("Usage: svlang-compound [-w WORDLIST] [OPTIONS] [WORD...]");
        println!();
        println!("If WORD arguments are given, splits each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -w, --wordlist PATH    Newline-delimited wordlist");
        println!("  -j, --json             Print results as JSON");
        println!("  -q, --quiet            Print nothing; only the exit code matters");
        println!("  --check                Print WORD<TAB>true|false; exit 1 if any is not a compound");
        println!("  --shortest-first       Scan split points from the shortest prefix up");
        println!("  --max-depth N          Maximum recursion depth (default: 5)");
        println!("  --min-part N           Minimum part length (default: 2)");
        println!("  --keep-known           Do not split words found in the wordlist");
        println!("  -v, --verbose          More log output (repeatable)");
        println!("  -h, --help             Print this help");
        return;
    }

    svlang_cli::init_logging(verbosity);

    let mut options = SegmenterOptions::default();
    let mut json = false;
    let mut quiet = false;
    let mut check = false;
    let mut words: Vec<String> = Vec::new();
    let mut from_args = false;
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        match arg.as_str() {
            "--json" | "-j" => json = true,
            "--quiet" | "-q" => quiet = true,
            "--check" => check = true,
            "--shortest-first" => options.split_order = SplitOrder::ShortestPrefixFirst,
            "--keep-known" => options.keep_known_words = true,
            "--max-depth" => {
                options.max_depth = parse_number(&args, i, arg);
                skip_next = true;
            }
            "--min-part" => {
                options.min_part_len = parse_number(&args, i, arg);
                skip_next = true;
            }
            s if !s.starts_with('-') => {
                from_args = true;
                if svlang_cli::is_word_token(s) {
                    words.push(arg.clone());
                } else {
                    log::debug!("skipping non-word token {s:?}");
                }
            }
            s => svlang_cli::fatal(&format!("unknown option: {s}")),
        }
    }

    let dictionary = svlang_cli::load_dictionary(wordlist.as_deref())
        .unwrap_or_else(|e| svlang_cli::fatal(&e));
    log::debug!("dictionary has {} words", dictionary.len());
    let segmenter = Segmenter::with_options(dictionary, options);

    if !from_args {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let word = line.trim();
            if svlang_cli::is_word_token(word) {
                words.push(word.to_string());
            } else if !word.is_empty() {
                log::debug!("skipping non-word token {word:?}");
            }
        }
    }

    let results: Vec<SegmentationResult> = words.iter().map(|w| segmenter.segment(w)).collect();
    let all_compound = results.iter().all(SegmentationResult::is_compound);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if json {
        let report = Report {
            results: results.iter().map(JsonEntry::from).collect(),
        };
        match serde_json::to_string_pretty(&report) {
            Ok(text) => {
                let _ = writeln!(out, "{text}");
            }
            Err(e) => svlang_cli::fatal(&format!("failed to encode JSON: {e}")),
        }
    } else if !quiet {
        for result in &results {
            if check {
                let _ = writeln!(out, "{}\t{}", result.word(), result.is_compound());
            } else {
                let _ = writeln!(out, "{}", format_result(result));
            }
        }
    }
    let _ = out.flush();

    if check && !all_compound {
        process::exit(1);
    }
}
