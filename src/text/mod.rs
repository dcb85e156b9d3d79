//! Text fitting for fixed-size print cells.
//!
//! Three operations decide what content goes into a cell:
//!
//! - [`split_text_to_fit`]: greedy, width-aware line wrapping
//! - [`truncate_text`]: wrapping limited to a number of lines, with an ellipsis
//! - [`format_location`]: two-line address formatting with re-segmentation
//!
//! Each operation classifies its input once with [`Script::detect`] and then
//! either measures with the supplied [`FontMetrics`] (simple script) or
//! applies the linear width estimate (complex script).
//!
//! ```
//! use gr_layout::text::TextFitter;
//! use gr_layout::writer::FontManager;
//!
//! let metrics = FontManager::new();
//! let fitter = TextFitter::new(&metrics, 8.0);
//! let cell = fitter.truncate_text("Plot 22, MIDC Industrial Area, Taloja", 2, 50.0);
//! assert!(cell.lines().count() <= 2);
//! ```

mod script;
mod truncate;
mod wrap;

pub use script::{is_devanagari, Script};
pub use truncate::{
    format_location, truncate_text, COMPLEX_LOCATION_THRESHOLD, ELLIPSIS,
    LOCATION_COMPLEX_WEIGHT, LOCATION_MAX_LINES, SIMPLE_LOCATION_THRESHOLD,
};
pub use wrap::{estimate_complex_width, split_text_to_fit, ASCII_WIDTH_CREDIT, COMPLEX_CHAR_WIDTH};

use crate::writer::FontMetrics;

/// Text fitting bound to a width source and a font size.
pub struct TextFitter<'a, M: FontMetrics + ?Sized> {
    metrics: &'a M,
    font_size: f32,
}

impl<'a, M: FontMetrics + ?Sized> TextFitter<'a, M> {
    /// Create a fitter measuring at `font_size` points.
    pub fn new(metrics: &'a M, font_size: f32) -> Self {
        Self { metrics, font_size }
    }

    /// Font size used for measurement.
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// See [`split_text_to_fit`].
    pub fn split_text_to_fit(&self, text: &str, max_width: f32) -> Vec<String> {
        split_text_to_fit(self.metrics, text, max_width, self.font_size)
    }

    /// See [`truncate_text`].
    pub fn truncate_text(&self, text: &str, max_lines: usize, max_width: f32) -> String {
        truncate_text(self.metrics, text, max_lines, max_width, self.font_size)
    }

    /// See [`format_location`].
    pub fn format_location(&self, text: &str, max_width: f32) -> String {
        format_location(self.metrics, text, max_width, self.font_size)
    }
}
