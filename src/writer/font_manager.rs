//! Font metrics for GR layout.
//!
//! The printed form uses the Base-14 Helvetica family, so widths come from
//! the standard Adobe font metrics (units of 1/1000 em) and are converted to
//! millimetres at the requested point size.

use phf::phf_map;
use serde::{Deserialize, Serialize};

/// Millimetres per typographic point.
pub const PT_TO_MM: f32 = 25.4 / 72.0;

/// Width used for characters missing from the metric tables.
const DEFAULT_CHAR_WIDTH: u16 = 500;

/// Font weight classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FontWeight {
    /// Normal weight
    #[default]
    Normal,
    /// Bold weight
    Bold,
}

/// Information about a font.
#[derive(Debug, Clone, Copy)]
pub struct FontInfo {
    /// Font name (e.g., "Helvetica-Bold")
    pub name: &'static str,
    /// Font weight
    pub weight: FontWeight,
    /// Ascender height (above baseline)
    pub ascender: f32,
    /// Descender depth (below baseline, negative)
    pub descender: f32,
    widths: &'static phf::Map<char, u16>,
}

impl FontInfo {
    /// Calculate the width of text in this font.
    ///
    /// Returns width in millimetres for the given font size in points.
    pub fn text_width(&self, text: &str, font_size: f32) -> f32 {
        let width_units: u32 = text.chars().map(|c| u32::from(self.char_width(c))).sum();
        width_units as f32 * font_size / 1000.0 * PT_TO_MM
    }

    /// Get the width of a single character in font units (1/1000 of em).
    pub fn char_width(&self, ch: char) -> u16 {
        self.widths.get(&ch).copied().unwrap_or(DEFAULT_CHAR_WIDTH)
    }

    /// Get the line height for this font at the given size, in millimetres.
    pub fn line_height(&self, font_size: f32) -> f32 {
        (self.ascender - self.descender) * font_size / 1000.0 * PT_TO_MM * 1.2
    }
}

static HELVETICA: FontInfo = FontInfo {
    name: "Helvetica",
    weight: FontWeight::Normal,
    ascender: 718.0,
    descender: -207.0,
    widths: &HELVETICA_WIDTHS,
};

static HELVETICA_BOLD: FontInfo = FontInfo {
    name: "Helvetica-Bold",
    weight: FontWeight::Bold,
    ascender: 718.0,
    descender: -207.0,
    widths: &HELVETICA_BOLD_WIDTHS,
};

/// Width source used by text fitting.
pub trait FontMetrics {
    /// Width of `text` in millimetres at `font_size` points.
    fn text_width(&self, text: &str, font_size: f32) -> f32;
}

impl<M: FontMetrics + ?Sized> FontMetrics for &M {
    fn text_width(&self, text: &str, font_size: f32) -> f32 {
        (**self).text_width(text, font_size)
    }
}

/// Font manager for GR generation.
///
/// Provides Helvetica metrics; measurement through [`FontMetrics`] uses the
/// regular weight.
#[derive(Debug, Clone, Copy, Default)]
pub struct FontManager;

impl FontManager {
    /// Create a new font manager.
    pub fn new() -> Self {
        Self
    }

    /// Get font info for a weight.
    pub fn font(&self, weight: FontWeight) -> &'static FontInfo {
        match weight {
            FontWeight::Normal => &HELVETICA,
            FontWeight::Bold => &HELVETICA_BOLD,
        }
    }

    /// Calculate the width of a string, in millimetres.
    pub fn styled_text_width(&self, text: &str, weight: FontWeight, font_size: f32) -> f32 {
        self.font(weight).text_width(text, font_size)
    }
}

impl FontMetrics for FontManager {
    fn text_width(&self, text: &str, font_size: f32) -> f32 {
        HELVETICA.text_width(text, font_size)
    }
}

static HELVETICA_WIDTHS: phf::Map<char, u16> = phf_map! {
    ' ' => 278, '!' => 278, '"' => 355, '#' => 556, '$' => 556, '%' => 889, '&' => 667,
    '\'' => 191, '(' => 333, ')' => 333, '*' => 389, '+' => 584, ',' => 278, '-' => 333,
    '.' => 278, '/' => 278, '0' => 556, '1' => 556, '2' => 556, '3' => 556, '4' => 556,
    '5' => 556, '6' => 556, '7' => 556, '8' => 556, '9' => 556, ':' => 278, ';' => 278,
    '<' => 584, '=' => 584, '>' => 584, '?' => 556, '@' => 1015,
    'A' => 667, 'B' => 667, 'C' => 722, 'D' => 722, 'E' => 667, 'F' => 611, 'G' => 778,
    'H' => 722, 'I' => 278, 'J' => 500, 'K' => 667, 'L' => 556, 'M' => 833, 'N' => 722,
    'O' => 778, 'P' => 667, 'Q' => 778, 'R' => 722, 'S' => 667, 'T' => 611, 'U' => 722,
    'V' => 667, 'W' => 944, 'X' => 667, 'Y' => 667, 'Z' => 611,
    '[' => 278, '\\' => 278, ']' => 278, '^' => 469, '_' => 556, '`' => 333,
    'a' => 556, 'b' => 556, 'c' => 500, 'd' => 556, 'e' => 556, 'f' => 278, 'g' => 556,
    'h' => 556, 'i' => 222, 'j' => 222, 'k' => 500, 'l' => 222, 'm' => 833, 'n' => 556,
    'o' => 556, 'p' => 556, 'q' => 556, 'r' => 333, 's' => 500, 't' => 278, 'u' => 556,
    'v' => 500, 'w' => 722, 'x' => 500, 'y' => 500, 'z' => 500,
    '{' => 334, '|' => 260, '}' => 334, '~' => 584,
};

static HELVETICA_BOLD_WIDTHS: phf::Map<char, u16> = phf_map! {
    ' ' => 278, '!' => 333, '"' => 474, '#' => 556, '$' => 556, '%' => 889, '&' => 722,
    '\'' => 238, '(' => 333, ')' => 333, '*' => 389, '+' => 584, ',' => 278, '-' => 333,
    '.' => 278, '/' => 278, '0' => 556, '1' => 556, '2' => 556, '3' => 556, '4' => 556,
    '5' => 556, '6' => 556, '7' => 556, '8' => 556, '9' => 556, ':' => 333, ';' => 333,
    '<' => 584, '=' => 584, '>' => 584, '?' => 611, '@' => 975,
    'A' => 722, 'B' => 722, 'C' => 722, 'D' => 722, 'E' => 667, 'F' => 611, 'G' => 778,
    'H' => 722, 'I' => 278, 'J' => 556, 'K' => 722, 'L' => 611, 'M' => 833, 'N' => 722,
    'O' => 778, 'P' => 667, 'Q' => 778, 'R' => 722, 'S' => 667, 'T' => 611, 'U' => 722,
    'V' => 667, 'W' => 944, 'X' => 667, 'Y' => 667, 'Z' => 611,
    '[' => 333, '\\' => 278, ']' => 333, '^' => 584, '_' => 556, '`' => 333,
    'a' => 556, 'b' => 611, 'c' => 556, 'd' => 611, 'e' => 556, 'f' => 333, 'g' => 611,
    'h' => 611, 'i' => 278, 'j' => 278, 'k' => 556, 'l' => 278, 'm' => 889, 'n' => 611,
    'o' => 611, 'p' => 611, 'q' => 611, 'r' => 389, 's' => 556, 't' => 333, 'u' => 611,
    'v' => 556, 'w' => 778, 'x' => 556, 'y' => 556, 'z' => 500,
    '{' => 389, '|' => 280, '}' => 389, '~' => 584,
};
