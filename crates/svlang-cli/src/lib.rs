// svlang-cli: shared utilities for CLI tools.

use std::path::{Path, PathBuf};
use std::process;

use serde::Serialize;
use svlang_core::character::is_swedish_letter;
use svlang_core::segmentation::SegmentationResult;
use svlang_sv::dictionary::Dictionary;

/// Wordlist file name looked up in each search directory.
const WORDLIST_FILE: &str = "sv_wordlist.txt";

/// Environment variable naming a wordlist file or a directory holding one.
const WORDLIST_ENV: &str = "SVLANG_WORDLIST";

/// Load the dictionary for a CLI run.
///
/// Search order:
/// 1. `wordlist` argument (if provided; must exist)
/// 2. `SVLANG_WORDLIST` environment variable (file, or directory with `sv_wordlist.txt`)
/// 3. `~/.local/share/svlang/sv_wordlist.txt`
/// 4. `/usr/share/svlang/sv_wordlist.txt`
/// 5. `sv_wordlist.txt` in the current working directory
///
/// Falls back to the built-in vocabulary when nothing is found.
pub fn load_dictionary(wordlist: Option<&str>) -> Result<Dictionary, String> {
    if let Some(path) = wordlist {
        let path = Path::new(path);
        return Dictionary::from_path(path).map_err(|e| e.to_string());
    }

    match build_search_paths().into_iter().find(|p| p.is_file()) {
        Some(path) => {
            log::info!("using wordlist {}", path.display());
            Ok(Dictionary::load_or_builtin(Some(&path)))
        }
        None => {
            log::info!("no {WORDLIST_FILE} found, using built-in vocabulary");
            Ok(Dictionary::builtin())
        }
    }
}

/// Build the list of wordlist files to try, in priority order.
fn build_search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(env_path) = std::env::var(WORDLIST_ENV) {
        let env_path = PathBuf::from(env_path);
        paths.push(env_path.join(WORDLIST_FILE));
        paths.push(env_path);
    }

    if let Some(home) = home_dir() {
        paths.push(
            home.join(".local")
                .join("share")
                .join("svlang")
                .join(WORDLIST_FILE),
        );
    }

    paths.push(PathBuf::from("/usr/share/svlang").join(WORDLIST_FILE));

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(WORDLIST_FILE));
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Parse a `--wordlist=PATH` or `-w PATH` argument from command line args.
///
/// Returns `(wordlist, remaining_args)`.
pub fn parse_wordlist_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut wordlist = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--wordlist=") {
            wordlist = Some(val.to_string());
        } else if arg == "--wordlist" || arg == "-w" {
            match args.get(i + 1) {
                Some(val) => {
                    wordlist = Some(val.clone());
                    skip_next = true;
                }
                None => fatal(&format!("{arg} requires a value")),
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (wordlist, remaining)
}

/// Count `-v` / `--verbose` flags and strip them from the args.
pub fn parse_verbosity(args: &[String]) -> (u8, Vec<String>) {
    let mut verbosity: u8 = 0;
    let mut remaining = Vec::new();
    for arg in args {
        match arg.as_str() {
            "--verbose" => verbosity = verbosity.saturating_add(1),
            s if s.len() > 1 && s.starts_with('-') && s[1..].chars().all(|c| c == 'v') => {
                verbosity = verbosity.saturating_add((s.len() - 1) as u8);
            }
            _ => remaining.push(arg.clone()),
        }
    }
    (verbosity, remaining)
}

/// Install the `env_logger` backend. `RUST_LOG` takes precedence over
/// the verbosity level.
pub fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Whether a command-line or stdin token can be a word at all: it must
/// contain at least one Swedish letter. Numbers and punctuation are skipped.
pub fn is_word_token(token: &str) -> bool {
    token.chars().any(is_swedish_letter)
}

/// One entry of the `--json` report.
///
/// Non-compounds are listed with empty `parts`.
#[derive(Debug, Serialize)]
pub struct JsonEntry<'a> {
    pub word: &'a str,
    pub is_compound: bool,
    pub parts: &'a [String],
    pub joiners: &'a [String],
}

impl<'a> From<&'a SegmentationResult> for JsonEntry<'a> {
    fn from(result: &'a SegmentationResult) -> Self {
        let (parts, joiners) = if result.is_compound() {
            (result.parts(), result.joiners())
        } else {
            (&[][..], &[][..])
        };
        Self {
            word: result.word(),
            is_compound: result.is_compound(),
            parts,
            joiners,
        }
    }
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
