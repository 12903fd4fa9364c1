//! Certificate gallery built from the asset catalog

use eframe::egui;
use tracing::info;

use super::{clickable_card, grid, heading_text, CardIntent};
use crate::catalog::DisplayRecord;
use crate::gui::constants::*;
use crate::gui::modal::Modal;
use crate::gui::nav::{Navigator, SectionId};
use crate::selection::Selection;

pub struct CertificatesSection {
    records: Vec<DisplayRecord>,
    /// Shown when the catalog is empty
    source_hint: String,
    selection: Selection<DisplayRecord>,
}

impl CertificatesSection {
    pub fn new(records: Vec<DisplayRecord>, source_hint: impl Into<String>) -> Self {
        Self {
            records,
            source_hint: source_hint.into(),
            selection: Selection::new(),
        }
    }

    pub fn records(&self) -> &[DisplayRecord] {
        &self.records
    }

    pub fn selection(&self) -> &Selection<DisplayRecord> {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut Selection<DisplayRecord> {
        &mut self.selection
    }

    /// Select the first record with this caption
    pub fn select_caption(&mut self, caption: &str) -> bool {
        match self.records.iter().find(|r| r.caption == caption) {
            Some(record) => {
                self.selection.select(record.clone());
                true
            }
            None => false,
        }
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, nav: &mut Navigator) {
        nav.heading(ui, SectionId::Certificates, heading_text("Certificates"));
        ui.add_space(SECTION_SPACING / 2.0);

        if self.records.is_empty() {
            ui.label(
                egui::RichText::new(format!("No certificates found in {}", self.source_hint))
                    .italics()
                    .color(TEXT_MUTED),
            );
        }

        let records = &self.records;
        let selection = &mut self.selection;
        grid(ui, records, CERTIFICATE_COLUMNS, |ui, record| {
            let card = clickable_card(ui, ("certificate_card", &record.locator), |ui| {
                ui.add(
                    egui::Image::new(record.locator.as_str())
                        .max_height(CERTIFICATE_THUMB_HEIGHT)
                        .maintain_aspect_ratio(true)
                        .corner_radius(egui::CornerRadius::same(8)),
                );
                ui.add_space(ITEM_SPACING);
                ui.label(egui::RichText::new(&record.caption).size(17.0));
            });

            let intent = CardIntent::resolve(record, card.response.clicked(), false);
            if intent.map(DisplayRecord::clone).apply(selection) {
                info!(caption = %record.caption, "Certificate selected");
            }
        });

        self.modal_ui(ui.ctx());
    }

    fn modal_ui(&mut self, ctx: &egui::Context) {
        let current = self.selection.displayed();
        let response = Modal::new("certificate_modal").show(ctx, self.selection.is_open(), |ui| {
            if let Some(record) = current {
                ui.vertical_centered(|ui| {
                    ui.add(
                        egui::Image::new(record.locator.as_str())
                            .max_height(MODAL_IMAGE_MAX_HEIGHT)
                            .maintain_aspect_ratio(true),
                    );
                    ui.add_space(ITEM_SPACING);
                    ui.label(
                        egui::RichText::new(&record.caption)
                            .size(CARD_TITLE_SIZE)
                            .strong()
                            .color(TEXT_STRONG),
                    );
                });
            }
        });
        if let Some(response) = response {
            response.close_into(&mut self.selection);
        }
    }
}
