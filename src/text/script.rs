//! Script classification for width estimation.
//!
//! Glyph metrics for Devanagari are unreliable in the Base-14 fonts used for
//! measurement (conjuncts and matras collapse several code points into one
//! visual cluster), so any field containing Devanagari is laid out with an
//! estimated width instead of a measured one.

use serde::{Deserialize, Serialize};

/// Devanagari Unicode block.
const DEVANAGARI: std::ops::RangeInclusive<u32> = 0x0900..=0x097F;

/// Width strategy selected for a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Script {
    /// Latin and other scripts measured with real font metrics
    Simple,
    /// Devanagari (Hindi) text, measured by estimate
    Complex,
}

impl Script {
    /// Classify text: `Complex` if it contains any Devanagari code point.
    ///
    /// # Examples
    ///
    /// ```
    /// use gr_layout::text::Script;
    ///
    /// assert_eq!(Script::detect("Mumbai Port"), Script::Simple);
    /// assert_eq!(Script::detect("Plot 7, मुंबई"), Script::Complex);
    /// ```
    pub fn detect(text: &str) -> Self {
        if text.chars().any(is_devanagari) {
            Script::Complex
        } else {
            Script::Simple
        }
    }

    /// Classify a set of lines; complex if any line is.
    pub fn detect_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        if lines
            .iter()
            .any(|line| Script::detect(line.as_ref()) == Script::Complex)
        {
            Script::Complex
        } else {
            Script::Simple
        }
    }

    /// Whether this is the estimated-width script.
    pub fn is_complex(self) -> bool {
        self == Script::Complex
    }
}

/// Whether a character lies in the Devanagari block.
pub fn is_devanagari(ch: char) -> bool {
    DEVANAGARI.contains(&(ch as u32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latin_is_simple() {
        assert_eq!(Script::detect("Nhava Sheva, JNPT"), Script::Simple);
        assert_eq!(Script::detect(""), Script::Simple);
    }

    #[test]
    fn test_single_devanagari_char_is_complex() {
        assert_eq!(Script::detect("Warehouse 12 क"), Script::Complex);
        assert_eq!(Script::detect("दिल्ली"), Script::Complex);
    }

    #[test]
    fn test_block_boundaries() {
        assert!(is_devanagari('\u{0900}'));
        assert!(is_devanagari('\u{097F}'));
        assert!(!is_devanagari('\u{08FF}'));
        // Bengali, the next block, is not Devanagari
        assert!(!is_devanagari('\u{0980}'));
    }

    #[test]
    fn test_other_scripts_are_simple() {
        assert_eq!(Script::detect("東京"), Script::Simple);
        assert_eq!(Script::detect("Zürich"), Script::Simple);
    }

    #[test]
    fn test_detect_lines() {
        assert_eq!(Script::detect_lines(&["Pune", "गोदाम"]), Script::Complex);
        assert_eq!(Script::detect_lines(&["Pune", "Nashik"]), Script::Simple);
        assert_eq!(Script::detect_lines::<&str>(&[]), Script::Simple);
    }
}
