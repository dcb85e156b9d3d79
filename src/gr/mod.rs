//! Goods-receipt layout.
//!
//! [`DocumentLayoutEngine`] turns a transport request and its transporter
//! details into a three-copy GR. Each copy is one page:
//!
//! ```text
//! header (logo, company, title, copy label, date)
//! details grid      7 rows
//! cargo grid        9 rows
//! signature boxes
//! declaration
//! footer
//! ```
//!
//! Field values are resolved once and shared by all copies, so the pages
//! differ only in their copy label.

pub mod dates;
pub mod fields;
pub mod regions;
pub mod tables;

pub use fields::GrFields;

use chrono::{Local, NaiveDate};

use crate::config::LayoutConfig;
use crate::error::Result;
use crate::model::{TransportRequest, TransporterDetail};
use crate::text::TextFitter;
use crate::writer::{
    Document, DrawingSurface, FontWeight, ImageData, ImageManager, RecordingSurface, Table,
};

/// Copy labels, one page each, in print order.
pub const COPY_LABELS: [&str; 3] = ["Original", "Duplicate", "Triplicate"];

/// Vertical gap between the details grid and the cargo grid.
pub const TABLE_GAP: f32 = 4.0;

/// Lays out goods-receipt documents.
#[derive(Debug, Clone, Default)]
pub struct DocumentLayoutEngine {
    config: LayoutConfig,
    images: ImageManager,
}

impl DocumentLayoutEngine {
    /// Create an engine with the given configuration.
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            images: ImageManager::new(),
        }
    }

    /// Register an image asset (e.g. the logo) for [`generate`](Self::generate).
    pub fn with_image(mut self, name: impl Into<String>, image: ImageData) -> Self {
        self.images.register(name, image);
        self
    }

    /// Register the logo from a file path or `data:` URI under the configured
    /// logo asset name.
    ///
    /// A logo that cannot be loaded is skipped with a warning; pages then get
    /// the placeholder.
    pub fn with_logo(self, source: &str) -> Self {
        match ImageData::from_source(source) {
            Ok(image) => {
                let asset = self.config.logo_asset.clone();
                self.with_image(asset, image)
            },
            Err(err) => {
                log::warn!("Logo not loaded from {:?} ({}), using placeholder", source, err);
                self
            },
        }
    }

    /// Layout configuration.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Generate a GR dated with the local current date where the request has none.
    pub fn generate(
        &self,
        request: &TransportRequest,
        transporter_details: Option<&[TransporterDetail]>,
    ) -> Result<Document> {
        self.generate_on(request, transporter_details, Local::now().date_naive())
    }

    /// Generate a GR using `today` for absent dates.
    pub fn generate_on(
        &self,
        request: &TransportRequest,
        transporter_details: Option<&[TransporterDetail]>,
        today: NaiveDate,
    ) -> Result<Document> {
        let mut surface =
            RecordingSurface::new(self.config.page_size).with_images(self.images.clone());
        self.render_into(&mut surface, request, transporter_details, today)?;
        Ok(surface.finish())
    }

    /// Lay out all copies onto `surface`.
    ///
    /// A failed logo placement is replaced by a placeholder; any other
    /// surface error aborts the layout.
    pub fn render_into<S: DrawingSurface + ?Sized>(
        &self,
        surface: &mut S,
        request: &TransportRequest,
        transporter_details: Option<&[TransporterDetail]>,
        today: NaiveDate,
    ) -> Result<()> {
        let fields = GrFields::resolve(request, transporter_details, today);
        for label in COPY_LABELS {
            self.render_copy(surface, &fields, label)?;
        }
        Ok(())
    }

    fn render_copy<S: DrawingSurface + ?Sized>(
        &self,
        surface: &mut S,
        fields: &GrFields,
        copy_label: &str,
    ) -> Result<()> {
        let config = &self.config;
        log::debug!("Laying out {} copy of GR {}", copy_label, fields.gr_number);

        surface.begin_page()?;
        let header_end = regions::header(surface, config, copy_label, &fields.date)?;

        surface.set_font(FontWeight::Normal, config.body_font_size)?;
        let (details, cargo) = {
            let fitter = TextFitter::new(&*surface, config.body_font_size);
            (tables::details_table(&fitter, fields), tables::cargo_table(&fitter, fields))
        };

        surface.draw_table(&details, config.margin, header_end)?;
        let details_end = table_end(surface, &details, header_end);
        log::debug!("Details grid ends at {:.1}mm", details_end);

        let cargo_top = details_end + TABLE_GAP;
        surface.draw_table(&cargo, config.margin, cargo_top)?;
        let cargo_end = table_end(surface, &cargo, cargo_top);
        log::debug!("Cargo grid ends at {:.1}mm", cargo_end);

        let y = regions::signatures(surface, config, cargo_end)?;
        let y = regions::declaration(surface, config, y)?;
        let y = regions::footer(surface, config, y, &fields.gr_number)?;

        if y > config.content_bottom() {
            log::warn!(
                "{} copy of GR {} runs {:.1}mm past the bottom margin",
                copy_label,
                fields.gr_number,
                y - config.content_bottom()
            );
        }
        Ok(())
    }
}

/// Bottom of a drawn table, from the surface or else from its own layout.
fn table_end<S: DrawingSurface + ?Sized>(surface: &S, table: &Table, top: f32) -> f32 {
    surface
        .last_table_end()
        .unwrap_or_else(|| top + table.calculate_layout().total_height)
}
