//! Tests for advisor response interpretation

use super::*;
use proptest::prelude::*;

#[test]
fn numbered_list_becomes_display_moves() {
    let set = SuggestionSet::parse("1. Move 7♠ to foundation\n2. Draw from stockpile");
    assert_eq!(set.moves(), ["Move 7♠ to foundation", "Draw from stockpile"]);
    assert!(!set.is_terminal());
    // Raw text keeps the numbering so the next prompt sees what was shown
    assert_eq!(set.raw(), "1. Move 7♠ to foundation\n2. Draw from stockpile");
}

#[test]
fn blank_lines_are_dropped() {
    let set = SuggestionSet::parse("1. Move Q♦ onto K♠\n\n   \n2. Flip the exposed card\n");
    assert_eq!(set.moves(), ["Move Q♦ onto K♠", "Flip the exposed card"]);
}

#[test]
fn unnumbered_lines_pass_through() {
    let set = SuggestionSet::parse("Draw three from the stockpile");
    assert_eq!(set.moves(), ["Draw three from the stockpile"]);
}

#[test]
fn terminal_message_is_a_single_entry() {
    let set = SuggestionSet::parse("No moves available.");
    assert!(set.is_terminal());
    assert_eq!(set.moves(), [NO_MOVES_MESSAGE]);
}

#[test]
fn terminal_match_is_case_insensitive() {
    let set = SuggestionSet::parse("  no MOVES available.  ");
    assert!(set.is_terminal());
    // The raw text is preserved as received, only trimmed
    assert_eq!(set.moves(), ["no MOVES available."]);
}

#[test]
fn empty_response_falls_back_to_the_terminal_message() {
    let set = SuggestionSet::parse("   \n ");
    assert!(set.is_terminal());
    assert_eq!(set.moves(), [NO_MOVES_MESSAGE]);
    assert_eq!(set.raw(), NO_MOVES_MESSAGE);
}

#[test]
fn strip_numbering_requires_the_dot_space_form() {
    assert_eq!(strip_numbering("1. Move the ace"), "Move the ace");
    assert_eq!(strip_numbering("12. Move the ace"), "Move the ace");
    assert_eq!(strip_numbering("1.Move the ace"), "1.Move the ace");
    assert_eq!(strip_numbering("a. Move the ace"), "a. Move the ace");
    assert_eq!(strip_numbering("Move the ace"), "Move the ace");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Parsing never yields an empty set: either the terminal entry or at
    // least one move line survives.
    #[test]
    fn prop_parsed_sets_are_never_empty(raw in ".{0,200}") {
        let set = SuggestionSet::parse(&raw);
        prop_assert!(!set.moves().is_empty());
    }

    // Numbering prefixes never survive into the display list.
    #[test]
    fn prop_numbering_is_always_stripped(
        number in 1u32..100,
        body in "[A-Za-z][A-Za-z ♠♥♦♣0-9]{0,40}",
    ) {
        let set = SuggestionSet::parse(&format!("{number}. {body}"));
        prop_assert_eq!(set.moves().len(), 1);
        prop_assert_eq!(set.moves()[0].as_str(), body.trim());
    }
}
