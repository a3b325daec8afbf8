//! Compiled regex patterns for whitespace normalization.
//!
//! All patterns are compiled once at startup using `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Matches any horizontal-whitespace/newline run that contains at least one
/// newline. The whole run collapses to a single newline, so spaces and tabs
/// hugging a line break disappear with it.
pub static NEWLINE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]*\n[ \t\n]*").expect("NEWLINE_RUNS regex"));

/// Matches runs of one or more spaces.
pub static SPACE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" +").expect("SPACE_RUNS regex"));

/// Matches runs of one or more tabs.
pub static TAB_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\t+").expect("TAB_RUNS regex"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newline_runs_swallow_surrounding_blanks() {
        let result = NEWLINE_RUNS.replace_all("a  \n\n  b", "\n");
        assert_eq!(result, "a\nb");
    }

    #[test]
    fn space_runs_collapse() {
        let result = SPACE_RUNS.replace_all("hello   world", " ");
        assert_eq!(result, "hello world");
    }

    #[test]
    fn tab_runs_collapse() {
        let result = TAB_RUNS.replace_all("a\t\t\tb", "\t");
        assert_eq!(result, "a\tb");
    }
}
