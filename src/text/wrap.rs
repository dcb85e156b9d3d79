//! Width-aware greedy line wrapping.
//!
//! Simple-script text is measured with the drawing collaborator's font
//! metrics. Complex-script text uses a linear per-character estimate; the
//! constants below were tuned against printed output and must not drift.

use lazy_static::lazy_static;
use regex::Regex;

use super::script::Script;
use crate::writer::FontMetrics;

/// Estimated width of one complex-script character, in millimetres.
pub const COMPLEX_CHAR_WIDTH: f32 = 3.2;

/// Width credited back for each ASCII character in a complex-script line.
pub const ASCII_WIDTH_CREDIT: f32 = 0.8;

lazy_static! {
    /// A run of non-whitespace.
    static ref WORD: Regex = Regex::new(r"\S+").unwrap();

    /// A run of non-separators with its trailing separators, or a leading separator run.
    static ref COMPLEX_SEGMENT: Regex = Regex::new(r"[^\s,\-]+[\s,\-]*|[\s,\-]+").unwrap();
}

/// Estimated width of a complex-script line.
///
/// `chars * 3.2 - ascii_chars * 0.8`
pub fn estimate_complex_width(text: &str) -> f32 {
    let (chars, ascii) = text.chars().fold((0usize, 0usize), |(all, ascii), ch| {
        (all + 1, ascii + usize::from(ch.is_ascii()))
    });
    chars as f32 * COMPLEX_CHAR_WIDTH - ascii as f32 * ASCII_WIDTH_CREDIT
}

/// Width of a hard-broken complex-script chunk: a flat 3.2 per character.
pub(crate) fn estimate_chunk_width(text: &str) -> f32 {
    text.chars().count() as f32 * COMPLEX_CHAR_WIDTH
}

/// Split complex-script text on whitespace, comma and dash boundaries.
///
/// Separators stay attached to the segment they follow, so concatenating the
/// segments reproduces the input exactly.
pub(crate) fn complex_segments(text: &str) -> impl Iterator<Item = &str> {
    COMPLEX_SEGMENT.find_iter(text).map(|m| m.as_str())
}

/// Wrap text into lines no wider than `max_width`.
///
/// Returns at least one line; empty input yields a single empty line. Words
/// that share a line keep the whitespace that separated them in `text`.
///
/// # Examples
///
/// ```
/// use gr_layout::text::split_text_to_fit;
/// use gr_layout::writer::FontManager;
///
/// let metrics = FontManager::new();
/// let lines = split_text_to_fit(&metrics, "Container yard, Gate 4", 200.0, 8.0);
/// assert_eq!(lines, vec!["Container yard, Gate 4".to_string()]);
/// ```
pub fn split_text_to_fit<M: FontMetrics + ?Sized>(
    metrics: &M,
    text: &str,
    max_width: f32,
    font_size: f32,
) -> Vec<String> {
    let lines = match Script::detect(text) {
        Script::Simple => {
            let mut packer = LinePacker::new(
                |line: &str| metrics.text_width(line, font_size) <= max_width,
                |chunk: &str| metrics.text_width(chunk, font_size) <= max_width,
            );
            let mut gap_start = 0;
            for word in WORD.find_iter(text) {
                packer.push(word.as_str(), &text[gap_start..word.start()]);
                gap_start = word.end();
            }
            packer.finish()
        },
        Script::Complex => {
            let mut packer = LinePacker::new(
                |line: &str| estimate_complex_width(line) <= max_width,
                |chunk: &str| estimate_chunk_width(chunk) <= max_width,
            );
            for segment in complex_segments(text) {
                packer.push(segment, "");
            }
            packer.finish()
        },
    };

    log::trace!(
        "Wrapped {} chars into {} line(s) at width {:.1}",
        text.chars().count(),
        lines.len(),
        max_width
    );

    if lines.is_empty() {
        vec![String::new()]
    } else {
        lines
    }
}

/// Greedy line accumulator shared by wrapping and location formatting.
///
/// `line_fits` decides whether a candidate line may grow; `chunk_fits`
/// decides how far an oversized segment is hard-broken. Both receive
/// trimmed text.
pub(crate) struct LinePacker<L, C>
where
    L: Fn(&str) -> bool,
    C: Fn(&str) -> bool,
{
    line_fits: L,
    chunk_fits: C,
    lines: Vec<String>,
    current: String,
}

impl<L, C> LinePacker<L, C>
where
    L: Fn(&str) -> bool,
    C: Fn(&str) -> bool,
{
    pub(crate) fn new(line_fits: L, chunk_fits: C) -> Self {
        Self {
            line_fits,
            chunk_fits,
            lines: Vec::new(),
            current: String::new(),
        }
    }

    /// Append a segment, joined to the current line with `joiner`.
    pub(crate) fn push(&mut self, segment: &str, joiner: &str) {
        if self.current.is_empty() {
            if (self.line_fits)(segment.trim()) {
                self.current.push_str(segment);
            } else {
                self.hard_break(segment);
            }
            return;
        }

        let mut candidate = String::with_capacity(self.current.len() + joiner.len() + segment.len());
        candidate.push_str(&self.current);
        candidate.push_str(joiner);
        candidate.push_str(segment);

        if (self.line_fits)(candidate.trim()) {
            self.current = candidate;
            return;
        }

        self.flush();
        if (self.line_fits)(segment.trim()) {
            self.current.push_str(segment);
        } else {
            self.hard_break(segment);
        }
    }

    /// Break a segment that is wider than a line on its own.
    ///
    /// Full chunks become lines; the remainder continues as the current line.
    fn hard_break(&mut self, segment: &str) {
        let mut chunk = String::new();
        for ch in segment.chars() {
            chunk.push(ch);
            if chunk.chars().count() > 1 && !(self.chunk_fits)(chunk.trim()) {
                chunk.pop();
                self.push_line(&chunk);
                chunk.clear();
                chunk.push(ch);
            }
        }
        self.current = chunk;
    }

    fn flush(&mut self) {
        let current = std::mem::take(&mut self.current);
        self.push_line(&current);
    }

    fn push_line(&mut self, line: &str) {
        let line = line.trim();
        if !line.is_empty() {
            self.lines.push(line.to_string());
        }
    }

    pub(crate) fn finish(mut self) -> Vec<String> {
        self.flush();
        self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::FontManager;

    /// 1mm per character at any font size.
    struct UnitMetrics;

    impl FontMetrics for UnitMetrics {
        fn text_width(&self, text: &str, _font_size: f32) -> f32 {
            text.chars().count() as f32
        }
    }

    #[test]
    fn test_empty_input_yields_one_empty_line() {
        assert_eq!(split_text_to_fit(&UnitMetrics, "", 10.0, 8.0), vec![String::new()]);
        assert_eq!(split_text_to_fit(&UnitMetrics, "   \t ", 10.0, 8.0), vec![String::new()]);
    }

    #[test]
    fn test_short_text_is_single_trimmed_line() {
        let lines = split_text_to_fit(&UnitMetrics, "  Pune depot  ", 20.0, 8.0);
        assert_eq!(lines, vec!["Pune depot"]);
    }

    #[test]
    fn test_inner_whitespace_preserved() {
        let text = "Gate  4,   Nhava Sheva";
        assert_eq!(split_text_to_fit(&FontManager::new(), text, 10_000.0, 8.0), vec![text]);

        let lines = split_text_to_fit(&UnitMetrics, " aaa  bbb\tccc ", 8.0, 8.0);
        assert_eq!(lines, vec!["aaa  bbb", "ccc"]);
    }

    #[test]
    fn test_greedy_word_packing() {
        let lines = split_text_to_fit(&UnitMetrics, "aaa bbb ccc ddd", 7.0, 8.0);
        assert_eq!(lines, vec!["aaa bbb", "ccc ddd"]);
    }

    #[test]
    fn test_exact_fit_is_allowed() {
        let lines = split_text_to_fit(&UnitMetrics, "abcde fghij", 11.0, 8.0);
        assert_eq!(lines, vec!["abcde fghij"]);
    }

    #[test]
    fn test_long_word_hard_break() {
        let lines = split_text_to_fit(&UnitMetrics, "ab ABCDEFGHIJ cd", 4.0, 8.0);
        assert_eq!(lines, vec!["ab", "ABCD", "EFGH", "IJ", "cd"]);
    }

    #[test]
    fn test_hard_break_remainder_continues_line() {
        let lines = split_text_to_fit(&UnitMetrics, "ABCDEF g", 4.0, 8.0);
        assert_eq!(lines, vec!["ABCD", "EF g"]);
    }

    #[test]
    fn test_measured_path_uses_font_size() {
        let metrics = FontManager::new();
        let text = "one two three four five six";
        let small = split_text_to_fit(&metrics, text, 30.0, 6.0);
        let large = split_text_to_fit(&metrics, text, 30.0, 12.0);
        assert!(large.len() > small.len());
    }

    #[test]
    fn test_complex_estimate() {
        // 4 Devanagari chars, no ASCII
        assert!((estimate_complex_width("पुणे") - 12.8).abs() < 1e-4);
        // 2 Devanagari + 3 ASCII: 5 * 3.2 - 3 * 0.8
        assert!((estimate_complex_width("पु 12") - 13.6).abs() < 1e-4);
    }

    #[test]
    fn test_complex_segments_reassemble() {
        let text = "- गोदाम 7, नई दिल्ली-110001";
        let joined: String = complex_segments(text).collect();
        assert_eq!(joined, text);
    }

    #[test]
    fn test_complex_wrapping_uses_estimate_not_metrics() {
        // UnitMetrics would fit all of this on one line; the estimate does not.
        let text = "गोदाम नंबर सात";
        let lines = split_text_to_fit(&UnitMetrics, text, 25.0, 8.0);
        assert_eq!(lines, vec!["गोदाम", "नंबर सात"]);
        for line in &lines {
            assert!(estimate_complex_width(line) <= 25.0);
        }
    }

    #[test]
    fn test_complex_oversized_segment_chunks() {
        // 10 chars at 3.2 each; 10mm fits 3 per chunk
        let text = "कखगघङचछजझञ";
        let lines = split_text_to_fit(&UnitMetrics, text, 10.0, 8.0);
        assert_eq!(lines, vec!["कखग", "घङच", "छजझ", "ञ"]);
    }

    #[test]
    fn test_complex_splits_on_comma_and_dash() {
        let text = "मुंबई,पुणे-नाशिक";
        let lines = split_text_to_fit(&UnitMetrics, text, 32.0, 8.0);
        assert_eq!(lines, vec!["मुंबई,", "पुणे-नाशिक"]);
    }
}
