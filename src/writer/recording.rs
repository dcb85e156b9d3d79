//! In-memory drawing surface.
//!
//! [`RecordingSurface`] performs the same layout a PDF surface would (font
//! metrics, table layout, image fitting) but records the placed operations
//! instead of encoding them. The resulting [`Document`] serializes to JSON for
//! downstream encoders and is what the tests inspect.

use serde::{Deserialize, Serialize};

use super::font_manager::{FontManager, FontMetrics, FontWeight};
use super::image_handler::{ImageData, ImageManager};
use super::table_renderer::{PlacedCell, Table};
use super::{DrawingSurface, RectStyle, TextAlign};
use crate::config::PageSize;
use crate::error::{Error, Result};
use crate::geometry::Rect;

/// A single recorded drawing operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    /// A line of text
    Text {
        /// Text content
        text: String,
        /// Anchor x
        x: f32,
        /// Baseline y
        y: f32,
        /// Anchoring of `x`
        align: TextAlign,
        /// Font weight
        weight: FontWeight,
        /// Font size in points
        font_size: f32,
    },
    /// A rectangle
    Rect {
        /// Bounds
        rect: Rect,
        /// Stroke and fill
        style: RectStyle,
    },
    /// A placed image
    Image {
        /// Asset name
        asset: String,
        /// Fitted bounds
        rect: Rect,
    },
    /// A laid-out table
    Table {
        /// Outer bounds
        bounds: Rect,
        /// Grid line width
        line_width: f32,
        /// Cells in row order
        cells: Vec<PlacedCell>,
    },
}

/// One recorded page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Operations in drawing order
    pub ops: Vec<DrawOp>,
}

impl Page {
    /// Text runs on this page, in drawing order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Whether any text run equals `text`.
    pub fn has_text(&self, text: &str) -> bool {
        self.texts().any(|t| t == text)
    }

    /// Tables on this page, in drawing order.
    pub fn tables(&self) -> impl Iterator<Item = (&Rect, &[PlacedCell])> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Table { bounds, cells, .. } => Some((bounds, cells.as_slice())),
            _ => None,
        })
    }

    /// Images on this page.
    pub fn images(&self) -> impl Iterator<Item = (&str, &Rect)> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Image { asset, rect } => Some((asset.as_str(), rect)),
            _ => None,
        })
    }

    /// Lowest point reached by any operation.
    pub fn content_bottom(&self) -> f32 {
        self.ops
            .iter()
            .map(|op| match op {
                DrawOp::Text { y, .. } => *y,
                DrawOp::Rect { rect, .. } | DrawOp::Image { rect, .. } => rect.bottom(),
                DrawOp::Table { bounds, .. } => bounds.bottom(),
            })
            .fold(0.0, f32::max)
    }
}

/// A recorded document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Page width in millimetres
    pub page_width: f32,
    /// Page height in millimetres
    pub page_height: f32,
    /// Pages in order
    pub pages: Vec<Page>,
}

impl Document {
    /// Number of pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Drawing surface that records operations.
#[derive(Debug)]
pub struct RecordingSurface {
    fonts: FontManager,
    images: ImageManager,
    page_width: f32,
    page_height: f32,
    pages: Vec<Page>,
    weight: FontWeight,
    font_size: f32,
    last_table_end: Option<f32>,
}

impl RecordingSurface {
    /// Create a surface for the given page size.
    pub fn new(page_size: PageSize) -> Self {
        let (page_width, page_height) = page_size.dimensions();
        Self {
            fonts: FontManager::new(),
            images: ImageManager::new(),
            page_width,
            page_height,
            pages: Vec::new(),
            weight: FontWeight::Normal,
            font_size: 10.0,
            last_table_end: None,
        }
    }

    /// Use `images` to resolve image assets.
    pub fn with_images(mut self, images: ImageManager) -> Self {
        self.images = images;
        self
    }

    /// Register a single image asset.
    pub fn register_image(&mut self, name: impl Into<String>, image: ImageData) -> String {
        self.images.register(name, image)
    }

    /// Number of pages begun so far.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Finish recording.
    pub fn finish(self) -> Document {
        log::debug!("Recorded {} page(s)", self.pages.len());
        Document {
            page_width: self.page_width,
            page_height: self.page_height,
            pages: self.pages,
        }
    }

    fn page_mut(&mut self) -> Result<&mut Page> {
        self.pages
            .last_mut()
            .ok_or_else(|| Error::Surface("no page begun".to_string()))
    }

    fn record(&mut self, op: DrawOp) -> Result<()> {
        self.page_mut()?.ops.push(op);
        Ok(())
    }
}

impl FontMetrics for RecordingSurface {
    fn text_width(&self, text: &str, font_size: f32) -> f32 {
        self.fonts.styled_text_width(text, self.weight, font_size)
    }
}

impl DrawingSurface for RecordingSurface {
    fn begin_page(&mut self) -> Result<()> {
        self.pages.push(Page::default());
        self.last_table_end = None;
        log::trace!("Begin page {}", self.pages.len());
        Ok(())
    }

    fn set_font(&mut self, weight: FontWeight, font_size: f32) -> Result<()> {
        if font_size.is_nan() || font_size <= 0.0 {
            return Err(Error::Surface(format!("invalid font size {}", font_size)));
        }
        self.weight = weight;
        self.font_size = font_size;
        Ok(())
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, align: TextAlign) -> Result<()> {
        let op = DrawOp::Text {
            text: text.to_string(),
            x,
            y,
            align,
            weight: self.weight,
            font_size: self.font_size,
        };
        self.record(op)
    }

    fn draw_rect(&mut self, rect: Rect, style: RectStyle) -> Result<()> {
        self.record(DrawOp::Rect { rect, style })
    }

    fn draw_image(&mut self, asset: &str, rect: Rect) -> Result<()> {
        self.page_mut()?;
        let image = self.images.require(asset)?;
        let (width, height) = image.fit_to_box(rect.width, rect.height);
        self.record(DrawOp::Image {
            asset: asset.to_string(),
            rect: Rect::new(rect.x, rect.y, width, height),
        })
    }

    fn draw_table(&mut self, table: &Table, x: f32, y: f32) -> Result<()> {
        self.page_mut()?;
        if table.is_empty() {
            return Err(Error::Surface("table has no rows".to_string()));
        }
        if !table.has_column_widths() {
            return Err(Error::Surface(format!(
                "table has {} columns but {} widths",
                table.num_columns(),
                table.column_widths.len()
            )));
        }

        let layout = table.calculate_layout();
        let cells = table.place(x, y, &layout);
        let bounds = Rect::new(x, y, layout.total_width, layout.total_height);
        log::trace!(
            "Table {}x{} at ({:.1}, {:.1}) ends at {:.1}",
            table.num_rows(),
            table.num_columns(),
            x,
            y,
            bounds.bottom()
        );

        self.record(DrawOp::Table {
            bounds,
            line_width: table.style.line_width,
            cells,
        })?;
        self.last_table_end = Some(bounds.bottom());
        Ok(())
    }

    fn last_table_end(&self) -> Option<f32> {
        self.last_table_end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::image_handler::tests::tiny_png;
    use crate::writer::{TableCell, TableRow};

    fn surface() -> RecordingSurface {
        RecordingSurface::new(PageSize::A4)
    }

    #[test]
    fn test_drawing_requires_page() {
        let mut s = surface();
        let err = s.draw_text("x", 0.0, 0.0, TextAlign::Left).unwrap_err();
        assert!(matches!(err, Error::Surface(_)));
        assert!(s.draw_rect(Rect::new(0.0, 0.0, 1.0, 1.0), RectStyle::outline()).is_err());
    }

    #[test]
    fn test_text_records_current_font() {
        let mut s = surface();
        s.begin_page().unwrap();
        s.set_font(FontWeight::Bold, 16.0).unwrap();
        s.draw_text("TEAM ELOGISOL", 105.0, 20.0, TextAlign::Center).unwrap();

        let doc = s.finish();
        assert_eq!(doc.page_count(), 1);
        match &doc.pages[0].ops[0] {
            DrawOp::Text { weight, font_size, align, .. } => {
                assert_eq!(*weight, FontWeight::Bold);
                assert_eq!(*font_size, 16.0);
                assert_eq!(*align, TextAlign::Center);
            },
            other => panic!("unexpected op {:?}", other),
        }
    }

    #[test]
    fn test_invalid_font_size() {
        let mut s = surface();
        assert!(s.set_font(FontWeight::Normal, 0.0).is_err());
    }

    #[test]
    fn test_metrics_follow_weight() {
        let mut s = surface();
        let regular = s.text_width("Consignee", 8.0);
        s.set_font(FontWeight::Bold, 8.0).unwrap();
        assert!(s.text_width("Consignee", 8.0) > regular);
    }

    #[test]
    fn test_missing_image_is_image_error() {
        let mut s = surface();
        s.begin_page().unwrap();
        let err = s.draw_image("logo", Rect::new(10.0, 10.0, 30.0, 15.0)).unwrap_err();
        assert!(matches!(err, Error::Image(_)));
    }

    #[test]
    fn test_image_is_fitted() {
        let mut s = surface();
        s.register_image("logo", ImageData::from_png(&tiny_png(20, 20)).unwrap());
        s.begin_page().unwrap();
        s.draw_image("logo", Rect::new(10.0, 10.0, 30.0, 15.0)).unwrap();

        let doc = s.finish();
        let (asset, rect) = doc.pages[0].images().next().unwrap();
        assert_eq!(asset, "logo");
        assert_eq!((rect.width, rect.height), (15.0, 15.0));
    }

    #[test]
    fn test_table_updates_last_table_end() {
        let mut s = surface();
        s.begin_page().unwrap();
        assert_eq!(s.last_table_end(), None);

        let table = Table::from_rows(vec![
            TableRow::new(vec![TableCell::label("GR No."), TableCell::text("GR-7")]).min_height(7.0),
            TableRow::new(vec![TableCell::label("Remarks"), TableCell::text("-")]).min_height(7.0),
        ])
        .with_column_widths(vec![32.0, 63.0]);
        s.draw_table(&table, 10.0, 50.0).unwrap();
        assert_eq!(s.last_table_end(), Some(64.0));

        // A new page resets the position
        s.begin_page().unwrap();
        assert_eq!(s.last_table_end(), None);

        let doc = s.finish();
        let (bounds, cells) = doc.pages[0].tables().next().unwrap();
        assert_eq!(bounds.height, 14.0);
        assert_eq!(cells.len(), 4);
    }

    #[test]
    fn test_empty_table_rejected() {
        let mut s = surface();
        s.begin_page().unwrap();
        let err = s.draw_table(&Table::from_rows(Vec::new()), 10.0, 10.0).unwrap_err();
        assert!(matches!(err, Error::Surface(_)));
    }

    #[test]
    fn test_table_without_widths_rejected() {
        let mut s = surface();
        s.begin_page().unwrap();
        let table = Table::new(vec![vec![TableCell::label("Line"), TableCell::text("ABC")]]);
        let err = s.draw_table(&table, 10.0, 10.0).unwrap_err();
        assert!(err.to_string().contains("2 columns but 0 widths"));
        assert_eq!(s.last_table_end(), None);
    }

    #[test]
    fn test_document_json() {
        let mut s = surface();
        s.begin_page().unwrap();
        s.draw_text("GOODS RECEIPT", 105.0, 30.0, TextAlign::Center).unwrap();
        let json = s.finish().to_json().unwrap();
        assert!(json.contains("\"op\": \"text\""));
        assert!(json.contains("GOODS RECEIPT"));

        let back: Document = serde_json::from_str(&json).unwrap();
        assert!(back.pages[0].has_text("GOODS RECEIPT"));
    }
}
