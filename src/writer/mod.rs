//! Drawing collaborator for GR generation.
//!
//! The layout engine never produces bytes itself. It issues drawing calls
//! against a [`DrawingSurface`], which also answers width queries through
//! [`FontMetrics`] so text can be fitted before it is placed.
//!
//! ## Architecture
//!
//! ```text
//! TransportRequest + TransporterDetail[]
//!     ↓
//! [DocumentLayoutEngine] (field resolution, text fitting, layout)
//!     ↓
//! [DrawingSurface] (begin_page, draw_text, draw_rect, draw_image, draw_table)
//!     ↓
//! [RecordingSurface] → Document (serializable list of placed ops)
//! ```
//!
//! All coordinates are millimetres from the top-left corner of the page;
//! font sizes are points.

mod font_manager;
mod image_handler;
mod recording;
mod table_renderer;

pub use font_manager::{FontInfo, FontManager, FontMetrics, FontWeight, PT_TO_MM};
pub use image_handler::{ColorSpace, ImageData, ImageError, ImageFormat, ImageManager};
pub use recording::{Document, DrawOp, Page, RecordingSurface};
pub use table_renderer::{
    PlacedCell, Table, TableCell, TableLayout, TableRow, TableStyle, LABEL_FILL,
};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::geometry::{Color, Rect};

/// Horizontal anchoring of a text run relative to its x-coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    /// x is the left edge
    #[default]
    Left,
    /// x is the centre
    Center,
    /// x is the right edge
    Right,
}

/// Stroke and fill for a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectStyle {
    /// Fill color, if filled
    pub fill: Option<Color>,
    /// Stroke color, if outlined
    pub stroke: Option<Color>,
    /// Stroke width in millimetres
    pub line_width: f32,
}

impl Default for RectStyle {
    fn default() -> Self {
        Self::outline()
    }
}

impl RectStyle {
    /// Black outline, no fill.
    pub fn outline() -> Self {
        Self {
            fill: None,
            stroke: Some(Color::black()),
            line_width: 0.3,
        }
    }

    /// Fill only.
    pub fn filled(color: Color) -> Self {
        Self {
            fill: Some(color),
            stroke: None,
            line_width: 0.0,
        }
    }

    /// Add a fill to this style.
    pub fn with_fill(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }
}

/// Target of the layout engine's drawing calls.
///
/// Every drawing call may fail. The engine recovers from any failure of
/// [`draw_image`](Self::draw_image) by drawing a placeholder; every other
/// failure is fatal for the document.
pub trait DrawingSurface: FontMetrics {
    /// Start a new page; subsequent calls draw on it.
    fn begin_page(&mut self) -> Result<()>;

    /// Select the font weight and size for subsequent text.
    fn set_font(&mut self, weight: FontWeight, font_size: f32) -> Result<()>;

    /// Draw a single line of text with its baseline at `y`.
    fn draw_text(&mut self, text: &str, x: f32, y: f32, align: TextAlign) -> Result<()>;

    /// Draw a rectangle.
    fn draw_rect(&mut self, rect: Rect, style: RectStyle) -> Result<()>;

    /// Draw a registered image asset fitted into `rect`.
    fn draw_image(&mut self, asset: &str, rect: Rect) -> Result<()>;

    /// Lay out and draw a table with its top-left corner at (`x`, `y`).
    fn draw_table(&mut self, table: &Table, x: f32, y: f32) -> Result<()>;

    /// Bottom edge of the most recently drawn table on the current page.
    fn last_table_end(&self) -> Option<f32>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_style_defaults() {
        let style = RectStyle::default();
        assert_eq!(style.stroke, Some(Color::black()));
        assert!(style.fill.is_none());

        let filled = RectStyle::outline().with_fill(Color::gray(0.9));
        assert_eq!(filled.fill, Some(Color::gray(0.9)));
        assert!(filled.stroke.is_some());

        let fill_only = RectStyle::filled(Color::white());
        assert!(fill_only.stroke.is_none());
    }

    #[test]
    fn test_text_align_serializes_by_name() {
        let json = serde_json::to_string(&TextAlign::Right).unwrap();
        assert_eq!(json, "\"Right\"");
    }
}
