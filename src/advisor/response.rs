//! Advisor response interpretation
//!
//! The model replies with either a numbered list of moves or the literal
//! terminal text. This module turns that raw text into a [`SuggestionSet`]:
//! the trimmed raw response (kept for prompt context on the next call) plus
//! the per-move display list with numbering prefixes stripped.

/// The exact text the advisor is instructed to return when the game is over
pub const NO_MOVES_MESSAGE: &str = "No moves available.";

/// One ordered batch of move suggestions
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SuggestionSet {
    raw: String,
    moves: Vec<String>,
    terminal: bool,
}

impl SuggestionSet {
    /// Parse a raw advisor response
    ///
    /// A trimmed response that case-insensitively equals
    /// [`NO_MOVES_MESSAGE`] (or is empty) is the terminal case: a single
    /// entry carrying the message, and no further analysis is worthwhile.
    /// Anything else is split on line breaks, blank lines dropped, and any
    /// leading "N. " numbering removed for display.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Self {
                raw: NO_MOVES_MESSAGE.to_string(),
                moves: vec![NO_MOVES_MESSAGE.to_string()],
                terminal: true,
            };
        }

        if trimmed.eq_ignore_ascii_case(NO_MOVES_MESSAGE) {
            return Self {
                raw: trimmed.to_string(),
                moves: vec![trimmed.to_string()],
                terminal: true,
            };
        }

        let moves = trimmed
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| strip_numbering(line).to_string())
            .collect();

        Self {
            raw: trimmed.to_string(),
            moves,
            terminal: false,
        }
    }

    /// The move descriptions, in the order the advisor gave them
    pub fn moves(&self) -> &[String] {
        &self.moves
    }

    /// The trimmed raw response, serialized back as prompt context
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Whether this set is the "no moves available" terminal case
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }
}

/// Strip a leading "N. " numbering prefix, if present
fn strip_numbering(line: &str) -> &str {
    let digits = line.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 {
        return line;
    }
    match line[digits..].strip_prefix(". ") {
        Some(rest) => rest.trim_start(),
        None => line,
    }
}

#[cfg(test)]
#[path = "response_tests.rs"]
mod response_tests;
