//! Contact details; links open in the browser, nothing is selectable here

use eframe::egui;

use super::heading_text;
use super::hero::photo_widget;
use crate::content::ContactMethod;
use crate::gui::constants::*;
use crate::gui::nav::{Navigator, SectionId};
use crate::gui::theme;

pub struct ContactSection {
    methods: &'static [ContactMethod],
    photo: Option<String>,
}

impl ContactSection {
    pub fn new(methods: &'static [ContactMethod], photo: Option<String>) -> Self {
        Self { methods, photo }
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, nav: &mut Navigator) {
        nav.heading(ui, SectionId::Contact, heading_text("Contact"));
        ui.add_space(SECTION_SPACING / 2.0);

        ui.horizontal_top(|ui| {
            photo_widget(ui, self.photo.as_deref(), CONTACT_PHOTO_SIZE, false);
            ui.add_space(SECTION_SPACING / 2.0);
            ui.vertical(|ui| {
                for method in self.methods {
                    ui.horizontal(|ui| {
                        ui.label(theme::glyph_text(method.kind.symbol(), GLYPH_SIZE));
                        match method.link {
                            Some(url) => {
                                ui.add(
                                    egui::Hyperlink::from_label_and_url(
                                        egui::RichText::new(method.label).size(17.0),
                                        url,
                                    )
                                    .open_in_new_tab(true),
                                );
                            }
                            None => {
                                ui.label(egui::RichText::new(method.label).size(17.0));
                            }
                        }
                    });
                    ui.add_space(ITEM_SPACING);
                }
            });
        });
        ui.add_space(SECTION_SPACING);
    }
}
