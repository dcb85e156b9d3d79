//! Property tests for wrapping, truncation and script detection.

use gr_layout::text::{format_location, split_text_to_fit, truncate_text, Script, ELLIPSIS};
use gr_layout::writer::FontManager;
use proptest::prelude::*;

fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Words joined by single spaces, runs of spaces or tabs.
fn latin_text() -> impl Strategy<Value = String> {
    let gap = prop_oneof![Just(" "), Just("  "), Just("   "), Just("\t"), Just(" \t ")];
    prop::collection::vec(("[A-Za-z0-9,.\\-]{1,14}", gap), 0..24).prop_map(|words| {
        let mut text = String::new();
        for (i, (word, gap)) in words.iter().enumerate() {
            if i > 0 {
                text.push_str(gap);
            }
            text.push_str(word);
        }
        text
    })
}

fn devanagari_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof!["[क-ह]{1,9}", "[क-ह]{1,4}[,\\-]", "[0-9]{1,6}"],
        1..16,
    )
    .prop_map(|words| words.join(" "))
}

fn any_text() -> impl Strategy<Value = String> {
    prop_oneof![latin_text(), devanagari_text()]
}

proptest! {
    #[test]
    fn prop_wrap_preserves_content_order(text in any_text(), width in 8.0f32..160.0) {
        let lines = split_text_to_fit(&FontManager::new(), &text, width, 8.0);
        prop_assert!(!lines.is_empty());
        prop_assert_eq!(strip_whitespace(&lines.concat()), strip_whitespace(&text));
    }

    #[test]
    fn prop_wrapped_lines_are_trimmed(text in any_text(), width in 8.0f32..160.0) {
        for line in split_text_to_fit(&FontManager::new(), &text, width, 8.0) {
            prop_assert_eq!(line.trim(), line.as_str());
        }
    }

    #[test]
    fn prop_short_text_is_one_trimmed_line(text in latin_text()) {
        let padded = format!("  {}\t", text);
        let lines = split_text_to_fit(&FontManager::new(), &padded, 10_000.0, 8.0);
        prop_assert_eq!(lines, vec![text.trim().to_string()]);
    }

    #[test]
    fn prop_truncate_respects_line_limit(
        text in any_text(),
        max_lines in 1usize..4,
        width in 15.0f32..160.0,
    ) {
        let metrics = FontManager::new();
        let out = truncate_text(&metrics, &text, max_lines, width, 8.0);
        let lines: Vec<&str> = out.split('\n').collect();
        prop_assert!(lines.len() <= max_lines);

        let wrapped = split_text_to_fit(&metrics, &text, width, 8.0);
        if wrapped.len() > max_lines {
            let limit = if Script::detect(&text).is_complex() { 25 } else { 40 };
            let last = lines[lines.len() - 1];
            prop_assert!(last.chars().count() <= limit, "{:?} exceeds {}", last, limit);
        }
    }

    #[test]
    fn prop_location_at_most_two_lines(text in any_text(), width in 20.0f32..160.0) {
        let out = format_location(&FontManager::new(), &text, width, 8.0);
        prop_assert!(out.split('\n').count() <= 2);
    }

    #[test]
    fn prop_devanagari_is_always_complex(
        prefix in "[ -~]{0,20}",
        ch in proptest::char::range('\u{0900}', '\u{097F}'),
        suffix in "[ -~]{0,20}",
    ) {
        let text = format!("{}{}{}", prefix, ch, suffix);
        prop_assert_eq!(Script::detect(&text), Script::Complex);
    }

    #[test]
    fn prop_ascii_is_simple(text in "[ -~]{0,60}") {
        prop_assert_eq!(Script::detect(&text), Script::Simple);
    }
}

#[test]
fn test_one_line_text_keeps_inner_whitespace() {
    let lines = split_text_to_fit(&FontManager::new(), "  Gate  4,   Nhava Sheva\t", 10_000.0, 8.0);
    assert_eq!(lines, vec!["Gate  4,   Nhava Sheva"]);
}

#[test]
fn test_complex_truncation_marker() {
    let text = "कखगघङचछजझञटठडढणतथदधनपफबभमयरलवशसह अआइईउऊ";
    let out = truncate_text(&FontManager::new(), text, 1, 100.0, 8.0);
    assert!(out.ends_with(ELLIPSIS));
    assert_eq!(out.chars().count(), 25);
}

#[test]
fn test_simple_truncation_marker() {
    let text = "Consignment of assorted engineering spares for the Chakan plant maintenance shutdown";
    let out = truncate_text(&FontManager::new(), text, 1, 90.0, 8.0);
    assert_eq!(out.lines().count(), 1);
    assert!(out.chars().count() <= 40);
}
