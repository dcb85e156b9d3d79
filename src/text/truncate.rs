//! Line-limited truncation and location formatting.

use lazy_static::lazy_static;
use regex::Regex;

use super::script::Script;
use super::wrap::{estimate_chunk_width, estimate_complex_width, split_text_to_fit, LinePacker};
use crate::writer::FontMetrics;

/// Marker appended to a truncated last line.
pub const ELLIPSIS: &str = "...";

/// Locations longer than this many characters are re-segmented (complex script).
pub const COMPLEX_LOCATION_THRESHOLD: usize = 35;

/// Locations longer than this many characters are re-segmented (simple script).
pub const SIMPLE_LOCATION_THRESHOLD: usize = 45;

/// Lines kept for a formatted location.
pub const LOCATION_MAX_LINES: usize = 2;

/// Weight applied to the complex-script estimate when packing locations.
pub const LOCATION_COMPLEX_WEIGHT: f32 = 1.5;

lazy_static! {
    /// Location segments: text followed by its `,` `;` danda or whitespace separators.
    static ref LOCATION_SEGMENT: Regex = Regex::new(r"[^,;\x{0964}\s]+[,;\x{0964}\s]*|[,;\x{0964}\s]+").unwrap();
}

/// Last-line limits: (cut point, longest line kept uncut).
fn last_line_limits(script: Script) -> (usize, usize) {
    match script {
        Script::Complex => (22, 25),
        Script::Simple => (37, 40),
    }
}

/// Wrap `text` and keep at most `max_lines` lines, joined with `\n`.
///
/// When the text needs more lines, the last kept line is cut to 22 (complex)
/// or 37 (simple) characters plus [`ELLIPSIS`] if it is longer than 25 or 40
/// characters respectively.
pub fn truncate_text<M: FontMetrics + ?Sized>(
    metrics: &M,
    text: &str,
    max_lines: usize,
    max_width: f32,
    font_size: f32,
) -> String {
    let max_lines = max_lines.max(1);
    let mut lines = split_text_to_fit(metrics, text, max_width, font_size);
    if lines.len() <= max_lines {
        return lines.join("\n");
    }

    let script = Script::detect(text);
    lines.truncate(max_lines);
    if let Some(last) = lines.last_mut() {
        *last = shorten_line(last, script);
    }

    log::trace!("Truncated {:?} text to {} line(s)", script, max_lines);
    lines.join("\n")
}

fn shorten_line(line: &str, script: Script) -> String {
    let (cut, limit) = last_line_limits(script);
    if line.chars().count() > limit {
        let mut shortened: String = line.chars().take(cut).collect();
        shortened.push_str(ELLIPSIS);
        shortened
    } else {
        line.to_string()
    }
}

/// Format a pickup/delivery location into at most two lines.
///
/// Short locations go through [`truncate_text`]. Longer ones are split on
/// commas, semicolons, the danda and whitespace and greedily recombined; only
/// the first two lines are kept.
pub fn format_location<M: FontMetrics + ?Sized>(
    metrics: &M,
    text: &str,
    max_width: f32,
    font_size: f32,
) -> String {
    let script = Script::detect(text);
    let threshold = match script {
        Script::Complex => COMPLEX_LOCATION_THRESHOLD,
        Script::Simple => SIMPLE_LOCATION_THRESHOLD,
    };

    if text.trim().chars().count() <= threshold {
        return truncate_text(metrics, text, LOCATION_MAX_LINES, max_width, font_size);
    }

    let segments = LOCATION_SEGMENT.find_iter(text).map(|m| m.as_str());
    let mut lines = match script {
        Script::Simple => {
            let mut packer = LinePacker::new(
                |line: &str| metrics.text_width(line, font_size) <= max_width,
                |chunk: &str| metrics.text_width(chunk, font_size) <= max_width,
            );
            for segment in segments {
                packer.push(segment, "");
            }
            packer.finish()
        },
        Script::Complex => {
            let mut packer = LinePacker::new(
                |line: &str| estimate_complex_width(line) * LOCATION_COMPLEX_WEIGHT <= max_width,
                |chunk: &str| estimate_chunk_width(chunk) * LOCATION_COMPLEX_WEIGHT <= max_width,
            );
            for segment in segments {
                packer.push(segment, "");
            }
            packer.finish()
        },
    };

    if lines.len() > LOCATION_MAX_LINES {
        log::trace!(
            "Location split into {} lines, keeping {}",
            lines.len(),
            LOCATION_MAX_LINES
        );
        lines.truncate(LOCATION_MAX_LINES);
    }
    lines.join("\n")
}
