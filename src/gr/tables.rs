//! The two GR grids: shipment details and container/cargo.
//!
//! Both grids share a four-column layout (label, value, label, value). Every
//! value is fitted before the table is built, so the table renderer only ever
//! sees content that already fits its cell.

use super::fields::GrFields;
use crate::text::{Script, TextFitter};
use crate::writer::{FontMetrics, Table, TableCell, TableRow, TableStyle};

/// Width of a label column, in millimetres.
pub const LABEL_WIDTH: f32 = 32.0;
/// Width of a value column, in millimetres.
pub const VALUE_WIDTH: f32 = 63.0;

/// Height of a row whose cells all hold a single line.
pub const SINGLE_LINE_HEIGHT: f32 = 7.0;
/// Minimum height of a row with a multi-line cell.
pub const MULTI_LINE_MIN_HEIGHT: f32 = 12.0;
const SIMPLE_LINE_ADVANCE: f32 = 4.0;
const COMPLEX_LINE_ADVANCE: f32 = 5.0;

/// Fitting width for values in a single value column.
pub const PAIR_FIT_WIDTH: f32 = 58.0;
/// Fitting width for values spanning three columns.
pub const SPAN_FIT_WIDTH: f32 = 150.0;
/// Fitting width of the delivery address.
pub const ADDRESS_FIT_WIDTH: f32 = 50.0;
/// Lines kept for the delivery address.
pub const ADDRESS_MAX_LINES: usize = 3;
/// Lines kept for every other fitted value.
pub const SHORT_MAX_LINES: usize = 2;

/// Height of a cell holding `content`.
///
/// Single-line content is 7mm; `n` lines take `max(12, n * 4)`, or
/// `max(12, n * 5)` when any line contains complex script.
pub fn cell_height(content: &str) -> f32 {
    let lines: Vec<&str> = content.split('\n').collect();
    if lines.len() <= 1 {
        return SINGLE_LINE_HEIGHT;
    }

    let advance = if Script::detect_lines(&lines).is_complex() {
        COMPLEX_LINE_ADVANCE
    } else {
        SIMPLE_LINE_ADVANCE
    };
    MULTI_LINE_MIN_HEIGHT.max(lines.len() as f32 * advance)
}

fn row(cells: Vec<TableCell>) -> TableRow {
    let height = cells
        .iter()
        .map(|cell| cell_height(&cell.content))
        .fold(SINGLE_LINE_HEIGHT, f32::max);
    TableRow::new(cells).min_height(height)
}

fn pair_row(left: &str, left_value: String, right: &str, right_value: String) -> TableRow {
    row(vec![
        TableCell::label(left),
        TableCell::text(left_value),
        TableCell::label(right),
        TableCell::text(right_value),
    ])
}

fn span_row(label: &str, value: String) -> TableRow {
    row(vec![TableCell::label(label), TableCell::text(value).colspan(3)])
}

/// Fit a short value (identifiers, dates, names) into one value column.
fn short<M: FontMetrics + ?Sized>(fitter: &TextFitter<'_, M>, value: &str) -> String {
    fitter.truncate_text(value, SHORT_MAX_LINES, PAIR_FIT_WIDTH)
}

fn grid(rows: Vec<TableRow>, font_size: f32) -> Table {
    Table::from_rows(rows)
        .with_column_widths(vec![LABEL_WIDTH, VALUE_WIDTH, LABEL_WIDTH, VALUE_WIDTH])
        .with_style(TableStyle::new().font_size(font_size))
}

/// Shipment details grid (7 rows).
pub fn details_table<M: FontMetrics + ?Sized>(fitter: &TextFitter<'_, M>, fields: &GrFields) -> Table {
    let rows = vec![
        pair_row(
            "GR No.",
            short(fitter, &fields.gr_number),
            "Date",
            short(fitter, &fields.date),
        ),
        pair_row(
            "Consignor",
            short(fitter, &fields.consignor),
            "Consignee",
            short(fitter, &fields.consignee),
        ),
        pair_row(
            "From",
            fitter.format_location(&fields.from, PAIR_FIT_WIDTH),
            "To",
            fitter.format_location(&fields.to, PAIR_FIT_WIDTH),
        ),
        pair_row(
            "GSTIN",
            short(fitter, &fields.gstin),
            "Reference No.",
            short(fitter, &fields.reference_number),
        ),
        span_row(
            "Delivery Address",
            fitter.truncate_text(&fields.delivery_address, ADDRESS_MAX_LINES, ADDRESS_FIT_WIDTH),
        ),
        pair_row(
            "Vehicle No.",
            short(fitter, &fields.vehicle_number),
            "Driver Name",
            short(fitter, &fields.driver_name),
        ),
        pair_row(
            "Driver Contact",
            short(fitter, &fields.driver_contact),
            "Seal No.",
            short(fitter, &fields.seal_number),
        ),
    ];
    grid(rows, fitter.font_size())
}

/// Container and cargo grid (9 rows).
pub fn cargo_table<M: FontMetrics + ?Sized>(fitter: &TextFitter<'_, M>, fields: &GrFields) -> Table {
    let rows = vec![
        pair_row(
            "Container No.",
            short(fitter, &fields.container_number),
            "Container Size",
            short(fitter, &fields.container_size),
        ),
        pair_row(
            "Line",
            short(fitter, &fields.shipping_line),
            "Seal No.",
            short(fitter, &fields.seal_number),
        ),
        span_row(
            "Description of goods",
            fitter.truncate_text(&fields.goods, SHORT_MAX_LINES, SPAN_FIT_WIDTH),
        ),
        pair_row(
            "Weight (Kg)",
            short(fitter, &fields.weight),
            "Vehicle Size",
            short(fitter, &fields.vehicle_size),
        ),
        span_row("Port", fitter.format_location(&fields.port, SPAN_FIT_WIDTH)),
        pair_row(
            "Factory Reporting",
            short(fitter, &fields.factory_reporting),
            "Factory Release",
            short(fitter, &fields.factory_release),
        ),
        pair_row(
            "Job No.",
            short(fitter, &fields.job_number),
            "Request ID",
            short(fitter, &fields.request_id),
        ),
        pair_row(
            "No. of Containers",
            short(fitter, &fields.no_of_containers),
            "Transporter",
            short(fitter, &fields.transporter),
        ),
        span_row(
            "Remarks",
            fitter.truncate_text(&fields.remarks, SHORT_MAX_LINES, SPAN_FIT_WIDTH),
        ),
    ];
    grid(rows, fitter.font_size())
}
