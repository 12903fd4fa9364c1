//! Hero banner with the profile photo; clicking the photo enlarges it

use eframe::egui;
use tracing::info;

use crate::content::HeroProfile;
use crate::gui::constants::*;
use crate::gui::modal::Modal;
use crate::gui::nav::{Navigator, SectionId};
use crate::selection::Selection;

pub struct HeroSection {
    profile: &'static HeroProfile,
    /// `file://` URI of the profile photo, if the file exists
    photo: Option<String>,
    photo_zoom: Selection<()>,
}

impl HeroSection {
    pub fn new(profile: &'static HeroProfile, photo: Option<String>) -> Self {
        Self {
            profile,
            photo,
            photo_zoom: Selection::new(),
        }
    }

    pub fn selection(&self) -> &Selection<()> {
        &self.photo_zoom
    }

    pub fn selection_mut(&mut self) -> &mut Selection<()> {
        &mut self.photo_zoom
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, nav: &mut Navigator) {
        ui.add_space(SECTION_SPACING);

        let photo = photo_widget(ui, self.photo.as_deref(), HERO_PHOTO_SIZE, true)
            .on_hover_cursor(egui::CursorIcon::ZoomIn);
        nav.anchor(&photo, SectionId::About);
        if photo.clicked() {
            info!("Profile photo selected");
            self.photo_zoom.select(());
        }

        ui.add_space(ITEM_SPACING * 2.0);
        ui.label(
            egui::RichText::new(self.profile.name)
                .size(HERO_NAME_SIZE)
                .strong()
                .color(TEXT_STRONG),
        );
        ui.add_space(ITEM_SPACING);
        ui.label(
            egui::RichText::new(self.profile.tagline)
                .size(HERO_TAGLINE_SIZE)
                .color(TEXT_MUTED),
        );
        ui.add_space(ITEM_SPACING * 2.0);
        for highlight in self.profile.highlights {
            ui.label(egui::RichText::new(format!("• {highlight}")).size(16.0));
        }

        self.modal_ui(ui.ctx());
    }

    fn modal_ui(&mut self, ctx: &egui::Context) {
        let profile = self.profile;
        let photo = self.photo.as_deref();
        let response = Modal::new("profile_photo_modal").show(ctx, self.photo_zoom.is_open(), |ui| {
            ui.vertical_centered(|ui| {
                match photo {
                    Some(uri) => {
                        ui.add(
                            egui::Image::new(uri)
                                .max_height(MODAL_IMAGE_MAX_HEIGHT)
                                .corner_radius(egui::CornerRadius::same(12)),
                        );
                    }
                    None => {
                        ui.label(egui::RichText::new("👤").size(MODAL_IMAGE_MAX_HEIGHT / 3.0));
                    }
                }
                ui.add_space(ITEM_SPACING);
                ui.label(egui::RichText::new(profile.name).size(CARD_TITLE_SIZE).strong().color(TEXT_STRONG));
            });
        });
        if let Some(response) = response {
            response.close_into(&mut self.photo_zoom);
        }
    }
}

/// Round profile photo, or a placeholder glyph when no photo is available
pub fn photo_widget(ui: &mut egui::Ui, photo: Option<&str>, size: f32, clickable: bool) -> egui::Response {
    let sense = if clickable { egui::Sense::click() } else { egui::Sense::hover() };
    match photo {
        Some(uri) => ui.add(
            egui::Image::new(uri)
                .fit_to_exact_size(egui::vec2(size, size))
                .corner_radius(egui::CornerRadius::same((size / 2.0).min(255.0) as u8))
                .sense(sense),
        ),
        None => ui.add(
            egui::Label::new(egui::RichText::new("👤").size(size * 0.75).color(TEXT_MUTED))
                .sense(sense),
        ),
    }
}
