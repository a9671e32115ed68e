//! Turning the model's free-text answer into clean suggestion lines.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex_lite::Regex;

static LIST_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+\.|-|\*)\s+").expect("Invalid regex"));
static LEADING_QUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^['"]"#).expect("Invalid regex"));
static TRAILING_QUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"['"]$"#).expect("Invalid regex"));
static QUOTE_BEFORE_COLON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"['"]:"#).expect("Invalid regex"));
static QUOTE_AFTER_COLON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#":['"]"#).expect("Invalid regex"));

/// Split a response into normalized suggestions.
///
/// - The first non-blank line is treated as a preamble and dropped when it
///   ends with `:` (e.g. "Here are some commit messages:")
/// - Lines of one character or less are skipped
/// - Each remaining line goes through [`normalize_message`]
/// - Empty results and duplicates are dropped, keeping first occurrences
pub fn normalize_messages(response: &str) -> Vec<String> {
    let mut lines = response.lines().skip_while(|l| l.trim().is_empty()).peekable();

    if lines.peek().is_some_and(|first| first.trim_end().ends_with(':')) {
        lines.next();
    }

    let mut seen = HashSet::new();
    lines
        .filter(|line| line.chars().count() > 1)
        .map(normalize_message)
        .filter(|message| !message.is_empty())
        .filter(|message| seen.insert(message.clone()))
        .collect()
}

/// Normalize a single suggestion line.
///
/// Strips list markers (`1.`, `-`, `*`), surrounding quotes, quotes
/// directly touching a colon (`"fix":"x"` → `fix:x`), and literal `\n` escapes.
pub fn normalize_message(message: &str) -> String {
    let message = message.trim();
    let message = LIST_MARKER.replace(message, "");
    let message = LEADING_QUOTE.replace(&message, "");
    let message = TRAILING_QUOTE.replace(&message, "");
    let message = QUOTE_BEFORE_COLON.replace_all(&message, ":");
    let message = QUOTE_AFTER_COLON.replace_all(&message, ":");
    let message = message.replace("\\n", "");
    message.trim().to_string()
}
