//! Fixed-grid table layout for GR generation.
//!
//! Tables are laid out on explicit column widths in millimetres. Cell content
//! arrives already fitted by the text module: every `\n`-separated line is
//! placed as given, never re-wrapped. A row is as tall as its tallest cell or
//! its minimum height, whichever is larger.
//!
//! # Example
//!
//! ```
//! use gr_layout::writer::{Table, TableCell};
//!
//! let table = Table::new(vec![
//!     vec![TableCell::label("Vehicle No."), TableCell::text("MH04 KL 2211")],
//!     vec![TableCell::label("Remarks"), TableCell::text("Fragile")],
//! ])
//! .with_column_widths(vec![32.0, 63.0]);
//!
//! let layout = table.calculate_layout();
//! assert_eq!(layout.total_width, 95.0);
//! ```

use serde::{Deserialize, Serialize};

use super::font_manager::PT_TO_MM;
use crate::geometry::{Color, Rect};

/// Fill used for label cells.
pub const LABEL_FILL: f32 = 0.9;

/// A table cell.
#[derive(Debug, Clone, PartialEq)]
pub struct TableCell {
    /// Cell content; lines separated by `\n`
    pub content: String,
    /// Number of columns this cell spans
    pub colspan: usize,
    /// Background color
    pub background: Option<Color>,
    /// Bold text
    pub bold: bool,
}

impl TableCell {
    /// Plain value cell.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            colspan: 1,
            background: None,
            bold: false,
        }
    }

    /// Label cell: bold on a light-gray fill.
    pub fn label(content: impl Into<String>) -> Self {
        Self {
            bold: true,
            background: Some(Color::gray(LABEL_FILL)),
            ..Self::text(content)
        }
    }

    /// Span `span` grid columns (at least one).
    pub fn colspan(mut self, span: usize) -> Self {
        self.colspan = span.max(1);
        self
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.content.split('\n')
    }

    pub fn line_count(&self) -> usize {
        self.lines().count()
    }
}

/// A table row.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    /// Cells in this row
    pub cells: Vec<TableCell>,
    /// Minimum row height
    pub min_height: Option<f32>,
}

impl TableRow {
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self {
            cells,
            min_height: None,
        }
    }

    /// Set minimum height.
    pub fn min_height(mut self, height: f32) -> Self {
        self.min_height = Some(height);
        self
    }

    /// Number of grid columns covered by this row.
    pub fn span(&self) -> usize {
        self.cells.iter().map(|c| c.colspan).sum()
    }
}

/// Text and grid settings shared by every cell.
#[derive(Debug, Clone, PartialEq)]
pub struct TableStyle {
    /// Font size in points
    pub font_size: f32,
    /// Inset of text from the left cell edge, in millimetres
    pub padding_x: f32,
    /// Inset of text from the top and bottom cell edges, in millimetres
    pub padding_y: f32,
    /// Grid line width in millimetres
    pub line_width: f32,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            font_size: 8.0,
            padding_x: 1.5,
            padding_y: 1.0,
            line_width: 0.2,
        }
    }
}

impl TableStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the font size.
    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Distance between consecutive baselines, in millimetres.
    pub fn line_advance(&self) -> f32 {
        self.font_size * 1.15 * PT_TO_MM
    }
}

/// A table on explicit column widths.
#[derive(Debug, Clone)]
pub struct Table {
    /// Table rows
    pub rows: Vec<TableRow>,
    /// Column widths in millimetres
    pub column_widths: Vec<f32>,
    /// Table style
    pub style: TableStyle,
}

impl Table {
    /// Create a table from rows of cells.
    pub fn new(rows: Vec<Vec<TableCell>>) -> Self {
        Self::from_rows(rows.into_iter().map(TableRow::new).collect())
    }

    /// Create a table from rows. Column widths must be set before layout.
    pub fn from_rows(rows: Vec<TableRow>) -> Self {
        Self {
            rows,
            column_widths: Vec::new(),
            style: TableStyle::default(),
        }
    }

    pub fn with_style(mut self, style: TableStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_column_widths(mut self, widths: Vec<f32>) -> Self {
        self.column_widths = widths;
        self
    }

    /// Number of grid columns used by the widest row.
    pub fn num_columns(&self) -> usize {
        self.rows.iter().map(TableRow::span).max().unwrap_or(0)
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether every grid column has a width.
    pub fn has_column_widths(&self) -> bool {
        self.column_widths.len() >= self.num_columns()
    }

    /// Find a row whose first cell has the given content.
    pub fn row_labelled(&self, label: &str) -> Option<&TableRow> {
        self.rows
            .iter()
            .find(|row| row.cells.first().map(|c| c.content.as_str()) == Some(label))
    }

    /// Value cells following every cell with the given label content.
    pub fn values_for(&self, label: &str) -> Vec<&str> {
        self.rows
            .iter()
            .flat_map(|row| row.cells.windows(2))
            .filter(|pair| pair[0].content == label)
            .map(|pair| pair[1].content.as_str())
            .collect()
    }

    fn row_height(&self, row: &TableRow) -> f32 {
        let tallest = row
            .cells
            .iter()
            .map(|cell| cell.line_count() as f32 * self.style.line_advance() + 2.0 * self.style.padding_y)
            .fold(0.0, f32::max);
        row.min_height.map_or(tallest, |min| tallest.max(min))
    }

    /// Column widths and row heights of this table.
    ///
    /// Columns without a configured width get zero width.
    pub fn calculate_layout(&self) -> TableLayout {
        let column_widths: Vec<f32> = (0..self.num_columns())
            .map(|col| self.column_widths.get(col).copied().unwrap_or(0.0))
            .collect();
        let row_heights: Vec<f32> = self.rows.iter().map(|row| self.row_height(row)).collect();

        TableLayout {
            total_width: column_widths.iter().sum(),
            total_height: row_heights.iter().sum(),
            column_widths,
            row_heights,
        }
    }

    /// Place every cell with the table's top-left corner at (`x`, `y`).
    pub fn place(&self, x: f32, y: f32, layout: &TableLayout) -> Vec<PlacedCell> {
        let advance = self.style.line_advance();
        let mut placed = Vec::new();
        let mut top = y;

        for (row_idx, (row, &height)) in self.rows.iter().zip(&layout.row_heights).enumerate() {
            let mut column = 0;
            let mut left = x;
            for cell in &row.cells {
                let end = (column + cell.colspan).min(layout.column_widths.len());
                let width: f32 = layout.column_widths[column.min(end)..end].iter().sum();
                placed.push(PlacedCell {
                    row: row_idx,
                    column,
                    colspan: cell.colspan,
                    rect: Rect::new(left, top, width, height),
                    lines: cell.lines().map(str::to_string).collect(),
                    bold: cell.bold,
                    font_size: self.style.font_size,
                    fill: cell.background,
                    text_x: left + self.style.padding_x,
                    // First baseline sits one line advance below the padded top
                    baseline: top + self.style.padding_y + advance,
                    line_advance: advance,
                });
                left += width;
                column += cell.colspan;
            }
            top += height;
        }
        placed
    }
}

/// Calculated layout for a table.
#[derive(Debug, Clone)]
pub struct TableLayout {
    pub column_widths: Vec<f32>,
    pub row_heights: Vec<f32>,
    pub total_width: f32,
    pub total_height: f32,
}

/// A cell placed on the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedCell {
    /// Row index
    pub row: usize,
    /// First grid column covered by the cell
    pub column: usize,
    /// Number of grid columns covered
    pub colspan: usize,
    /// Cell rectangle in page coordinates
    pub rect: Rect,
    /// Lines of text in drawing order
    pub lines: Vec<String>,
    pub bold: bool,
    /// Font size in points
    pub font_size: f32,
    /// Background fill
    pub fill: Option<Color>,
    /// Left edge of the text
    pub text_x: f32,
    /// Baseline of the first line
    pub baseline: f32,
    /// Distance between baselines
    pub line_advance: f32,
}
