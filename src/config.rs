//! Configuration for GR document layout.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Placeholder in [`LayoutConfig::footer_url_template`] replaced by the GR number.
pub const GR_NUMBER_PLACEHOLDER: &str = "{gr_number}";

/// Standard page sizes, in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PageSize {
    /// A4 (210mm x 297mm)
    A4,
    /// US Letter (215.9mm x 279.4mm)
    Letter,
    /// Custom dimensions in millimetres
    Custom(f32, f32),
}

impl PageSize {
    /// Get dimensions in millimetres.
    pub fn dimensions(&self) -> (f32, f32) {
        match self {
            PageSize::A4 => (210.0, 297.0),
            PageSize::Letter => (215.9, 279.4),
            PageSize::Custom(w, h) => (*w, *h),
        }
    }
}

/// GR layout configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Page size.
    pub page_size: PageSize,

    /// Margin on every side, in millimetres.
    pub margin: f32,

    /// Font size for table cells, in points.
    pub body_font_size: f32,

    /// Font size for the company name, in points.
    pub heading_font_size: f32,

    /// Font size for the document title, in points.
    pub title_font_size: f32,

    /// Font size for the footer line, in points.
    pub footer_font_size: f32,

    /// Company name printed in the header.
    pub company_name: String,

    /// Address line printed under the company name.
    pub company_address: String,

    /// Registered name of the logo image asset.
    pub logo_asset: String,

    /// Footer verification URL; `{gr_number}` is replaced by the GR number.
    pub footer_url_template: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self {
            page_size: PageSize::A4,
            margin: 10.0,
            body_font_size: 8.0,
            heading_font_size: 16.0,
            title_font_size: 12.0,
            footer_font_size: 7.0,
            company_name: "TEAM ELOGISOL".to_string(),
            company_address: "Logistics & Freight Solutions".to_string(),
            logo_asset: "logo".to_string(),
            footer_url_template: format!("https://www.elogisol.in/gr/{}", GR_NUMBER_PLACEHOLDER),
        }
    }

    /// Load configuration from JSON; missing keys keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the page size.
    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the page margin.
    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    /// Set the table body font size.
    pub fn with_body_font_size(mut self, size: f32) -> Self {
        self.body_font_size = size;
        self
    }

    /// Set the company name and address line.
    pub fn with_company(mut self, name: impl Into<String>, address: impl Into<String>) -> Self {
        self.company_name = name.into();
        self.company_address = address.into();
        self
    }

    /// Set the logo asset name.
    pub fn with_logo_asset(mut self, name: impl Into<String>) -> Self {
        self.logo_asset = name.into();
        self
    }

    /// Set the footer URL template.
    pub fn with_footer_url_template(mut self, template: impl Into<String>) -> Self {
        self.footer_url_template = template.into();
        self
    }

    /// Width available between the left and right margins.
    pub fn content_width(&self) -> f32 {
        self.page_size.dimensions().0 - 2.0 * self.margin
    }

    /// Lowest y-coordinate content may reach.
    pub fn content_bottom(&self) -> f32 {
        self.page_size.dimensions().1 - self.margin
    }

    /// Footer URL for a GR number.
    pub fn footer_url(&self, gr_number: &str) -> String {
        self.footer_url_template
            .replace(GR_NUMBER_PLACEHOLDER, gr_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LayoutConfig::default();
        assert_eq!(config.page_size, PageSize::A4);
        assert_eq!(config.content_width(), 190.0);
        assert_eq!(config.content_bottom(), 287.0);
        assert_eq!(config.company_name, "TEAM ELOGISOL");
    }

    #[test]
    fn test_footer_url() {
        let config = LayoutConfig::new().with_footer_url_template("https://example.test/v/{gr_number}");
        assert_eq!(config.footer_url("GR-42"), "https://example.test/v/GR-42");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = LayoutConfig::from_json_str(r#"{"margin": 12.5, "company_name": "ACME"}"#).unwrap();
        assert_eq!(config.margin, 12.5);
        assert_eq!(config.company_name, "ACME");
        assert_eq!(config.body_font_size, 8.0);
        assert_eq!(config.logo_asset, "logo");
    }

    #[test]
    fn test_custom_page_size() {
        let config = LayoutConfig::new()
            .with_page_size(PageSize::Custom(100.0, 200.0))
            .with_margin(5.0);
        assert_eq!(config.content_width(), 90.0);
        assert_eq!(config.content_bottom(), 195.0);
    }
}
