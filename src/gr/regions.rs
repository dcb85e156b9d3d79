//! Fixed page regions around the two grids.
//!
//! Each function draws its region starting at a vertical cursor and returns
//! the cursor below what it drew.

use crate::config::LayoutConfig;
use crate::error::Result;
use crate::geometry::Rect;
use crate::writer::{DrawingSurface, FontWeight, RectStyle, TextAlign};

/// Document title.
pub const TITLE: &str = "GOODS RECEIPT";
/// Label drawn in place of a missing logo.
pub const LOGO_PLACEHOLDER: &str = "LOGO";
/// Logo box width, in millimetres.
pub const LOGO_WIDTH: f32 = 30.0;
/// Logo box height, in millimetres.
pub const LOGO_HEIGHT: f32 = 15.0;
/// Space taken by the header above the details grid.
pub const HEADER_HEIGHT: f32 = 25.0;

/// Signature box height.
pub const SIGNATURE_HEIGHT: f32 = 22.0;
/// Gap between the two signature boxes.
pub const SIGNATURE_GUTTER: f32 = 10.0;
/// Signature captions, left then right.
pub const SIGNATURE_CAPTIONS: [&str; 2] =
    ["Consignor's Signature", "For TEAM ELOGISOL (Authorised Signatory)"];

/// Declaration box heading.
pub const DECLARATION_HEADING: &str = "Declaration";
/// Declaration lines, printed in order.
pub const DECLARATION_LINES: [&str; 4] = [
    "1. Goods are received in apparent good order and condition unless noted above.",
    "2. The transporter is not responsible for leakage, breakage or damage to packing.",
    "3. Goods are carried at owner's risk; insurance is the consignor's responsibility.",
    "4. All disputes are subject to Navi Mumbai jurisdiction only.",
];

/// Footer prefix before the verification URL.
pub const FOOTER_PREFIX: &str = "Track this GR online: ";

const SECTION_GAP: f32 = 6.0;
const BOX_PADDING: f32 = 3.0;
const DECLARATION_LINE_ADVANCE: f32 = 4.5;

/// Draw the header and return the top of the details grid.
pub fn header<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    config: &LayoutConfig,
    copy_label: &str,
    date: &str,
) -> Result<f32> {
    let top = config.margin;
    let (page_width, _) = config.page_size.dimensions();
    let center = page_width / 2.0;
    let right = page_width - config.margin;

    logo(surface, config)?;

    surface.set_font(FontWeight::Bold, config.heading_font_size)?;
    surface.draw_text(&config.company_name, center, top + 7.0, TextAlign::Center)?;

    surface.set_font(FontWeight::Normal, config.body_font_size)?;
    surface.draw_text(&config.company_address, center, top + 12.0, TextAlign::Center)?;

    surface.set_font(FontWeight::Bold, config.title_font_size)?;
    surface.draw_text(TITLE, center, top + 20.0, TextAlign::Center)?;

    surface.set_font(FontWeight::Bold, config.body_font_size)?;
    surface.draw_text(copy_label, right, top + 5.0, TextAlign::Right)?;

    surface.set_font(FontWeight::Normal, config.body_font_size)?;
    surface.draw_text(&format!("Date: {}", date), right, top + 10.0, TextAlign::Right)?;

    Ok(top + HEADER_HEIGHT)
}

/// Draw the logo, or a labelled placeholder when the image cannot be placed.
fn logo<S: DrawingSurface + ?Sized>(surface: &mut S, config: &LayoutConfig) -> Result<()> {
    let rect = Rect::new(config.margin, config.margin, LOGO_WIDTH, LOGO_HEIGHT);
    // A failed placement never aborts the page; the placeholder calls below
    // still fail if the surface itself is gone.
    if let Err(err) = surface.draw_image(&config.logo_asset, rect) {
        log::warn!("Logo {:?} not drawn ({}), using placeholder", config.logo_asset, err);
        surface.draw_rect(rect, RectStyle::outline())?;
        surface.set_font(FontWeight::Bold, config.body_font_size)?;
        let (x, y) = (rect.center_x(), rect.center_y() + 1.0);
        surface.draw_text(LOGO_PLACEHOLDER, x, y, TextAlign::Center)?;
    }
    Ok(())
}

/// Draw the two signature boxes below `y`.
pub fn signatures<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    config: &LayoutConfig,
    y: f32,
) -> Result<f32> {
    let top = y + SECTION_GAP;
    let width = (config.content_width() - SIGNATURE_GUTTER) / 2.0;
    let boxes = [
        Rect::new(config.margin, top, width, SIGNATURE_HEIGHT),
        Rect::new(config.margin + width + SIGNATURE_GUTTER, top, width, SIGNATURE_HEIGHT),
    ];

    surface.set_font(FontWeight::Normal, config.body_font_size)?;
    for (rect, caption) in boxes.iter().zip(SIGNATURE_CAPTIONS) {
        surface.draw_rect(*rect, RectStyle::outline())?;
        surface.draw_text(caption, rect.center_x(), rect.bottom() - BOX_PADDING, TextAlign::Center)?;
    }

    Ok(top + SIGNATURE_HEIGHT)
}

/// Draw the declaration box below `y`.
pub fn declaration<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    config: &LayoutConfig,
    y: f32,
) -> Result<f32> {
    let top = y + SECTION_GAP;
    let text_x = config.margin + BOX_PADDING;
    let first_line = top + 10.0;
    let height = first_line - top
        + (DECLARATION_LINES.len() - 1) as f32 * DECLARATION_LINE_ADVANCE
        + BOX_PADDING;

    surface.draw_rect(
        Rect::new(config.margin, top, config.content_width(), height),
        RectStyle::outline(),
    )?;

    surface.set_font(FontWeight::Bold, config.body_font_size)?;
    surface.draw_text(DECLARATION_HEADING, text_x, top + 5.0, TextAlign::Left)?;

    surface.set_font(FontWeight::Normal, config.body_font_size)?;
    for (i, line) in DECLARATION_LINES.iter().enumerate() {
        let baseline = first_line + i as f32 * DECLARATION_LINE_ADVANCE;
        surface.draw_text(line, text_x, baseline, TextAlign::Left)?;
    }

    Ok(top + height)
}

/// Draw the footer line below `y` and return its baseline.
pub fn footer<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    config: &LayoutConfig,
    y: f32,
    gr_number: &str,
) -> Result<f32> {
    let baseline = y + SECTION_GAP + 2.0;
    let (page_width, _) = config.page_size.dimensions();
    let text = format!("{}{}", FOOTER_PREFIX, config.footer_url(gr_number));

    surface.set_font(FontWeight::Normal, config.footer_font_size)?;
    surface.draw_text(&text, page_width / 2.0, baseline, TextAlign::Center)?;
    Ok(baseline)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PageSize;
    use crate::writer::{DrawOp, RecordingSurface};

    fn surface() -> RecordingSurface {
        let mut s = RecordingSurface::new(PageSize::A4);
        s.begin_page().unwrap();
        s
    }

    #[test]
    fn test_header_without_logo_uses_placeholder() {
        let config = LayoutConfig::default();
        let mut s = surface();
        let next = header(&mut s, &config, "Duplicate", "05/01/2024").unwrap();
        assert_eq!(next, 35.0);

        let page = &s.finish().pages[0];
        assert!(page.has_text(LOGO_PLACEHOLDER));
        assert!(page.has_text("TEAM ELOGISOL"));
        assert!(page.has_text(TITLE));
        assert!(page.has_text("Duplicate"));
        assert!(page.has_text("Date: 05/01/2024"));
        assert!(matches!(
            page.ops[0],
            DrawOp::Rect { rect, .. } if rect.width == LOGO_WIDTH && rect.height == LOGO_HEIGHT
        ));
    }

    #[test]
    fn test_signature_boxes_are_equal() {
        let config = LayoutConfig::default();
        let mut s = surface();
        let next = signatures(&mut s, &config, 100.0).unwrap();
        assert_eq!(next, 128.0);

        let page = &s.finish().pages[0];
        let rects: Vec<Rect> = page
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Rect { rect, .. } => Some(*rect),
                _ => None,
            })
            .collect();
        assert_eq!(rects.len(), 2);
        assert_eq!(rects[0].width, 90.0);
        assert_eq!(rects[0].width, rects[1].width);
        assert_eq!(rects[0].height, SIGNATURE_HEIGHT);
        assert_eq!(rects[1].x - rects[0].right(), SIGNATURE_GUTTER);
        for caption in SIGNATURE_CAPTIONS {
            assert!(page.has_text(caption));
        }
    }

    #[test]
    fn test_declaration_lines() {
        let config = LayoutConfig::default();
        let mut s = surface();
        let next = declaration(&mut s, &config, 150.0).unwrap();
        assert!(next > 156.0);

        let page = &s.finish().pages[0];
        assert!(page.has_text(DECLARATION_HEADING));
        let numbered = page.texts().filter(|t| t.starts_with(|c: char| c.is_ascii_digit())).count();
        assert_eq!(numbered, 4);
        // Every line sits inside the box
        assert!(page.content_bottom() <= next);
    }

    #[test]
    fn test_footer_embeds_gr_number() {
        let config = LayoutConfig::default();
        let mut s = surface();
        footer(&mut s, &config, 200.0, "GR-118").unwrap();
        assert!(s
            .finish()
            .pages[0]
            .has_text("Track this GR online: https://www.elogisol.in/gr/GR-118"));
    }
}
