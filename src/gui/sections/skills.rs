//! Skills grid; clicking a category card lists it in a modal

use eframe::egui;
use tracing::info;

use super::{card_title, clickable_card, grid, heading_text, CardIntent};
use crate::content::{SkillCategory, SkillItem};
use crate::gui::constants::*;
use crate::gui::modal::Modal;
use crate::gui::nav::{Navigator, SectionId};
use crate::gui::theme;
use crate::selection::Selection;

/// Soft skills are shown as a short first row and the rest below it
const SOFT_SKILLS: &str = "Soft Skills";
const SOFT_SKILLS_FIRST_ROW: usize = 3;

/// Rows a category's items are laid out in on its card
pub fn item_rows(category: &SkillCategory) -> Vec<&[SkillItem]> {
    let items = category.items;
    if category.name == SOFT_SKILLS && items.len() > SOFT_SKILLS_FIRST_ROW {
        let (first, rest) = items.split_at(SOFT_SKILLS_FIRST_ROW);
        vec![first, rest]
    } else {
        vec![items]
    }
}

pub struct SkillsSection {
    categories: &'static [SkillCategory],
    selection: Selection<&'static SkillCategory>,
}

impl SkillsSection {
    pub fn new(categories: &'static [SkillCategory]) -> Self {
        Self {
            categories,
            selection: Selection::new(),
        }
    }

    pub fn selection(&self) -> &Selection<&'static SkillCategory> {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut Selection<&'static SkillCategory> {
        &mut self.selection
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, nav: &mut Navigator) {
        nav.heading(ui, SectionId::Skills, heading_text("Skills"));
        ui.add_space(SECTION_SPACING / 2.0);

        let categories = self.categories;
        let selection = &mut self.selection;
        grid(ui, categories, SKILL_COLUMNS, |ui, category| {
            let card = clickable_card(ui, ("skill_card", category.name), |ui| {
                ui.label(card_title(category.name));
                ui.add_space(ITEM_SPACING);
                for row in item_rows(category) {
                    ui.horizontal_wrapped(|ui| {
                        for item in row {
                            skill_chip(ui, item);
                        }
                    });
                }
            });

            if CardIntent::resolve(category, card.response.clicked(), false).apply(selection) {
                info!(category = category.name, "Skill category selected");
            }
        });

        self.modal_ui(ui.ctx());
    }

    fn modal_ui(&mut self, ctx: &egui::Context) {
        let current = self.selection.displayed().copied();
        let response = Modal::new("skill_modal").show(ctx, self.selection.is_open(), |ui| {
            if let Some(category) = current {
                ui.label(card_title(category.name));
                ui.label(
                    egui::RichText::new(format!("{} skills", category.items.len())).color(TEXT_MUTED),
                );
                ui.add_space(ITEM_SPACING * 2.0);
                egui::Grid::new("skill_modal_items")
                    .num_columns(2)
                    .spacing([ITEM_SPACING * 2.0, ITEM_SPACING])
                    .show(ui, |ui| {
                        for item in category.items {
                            ui.label(theme::glyph_text(item.symbol, GLYPH_SIZE));
                            ui.label(egui::RichText::new(item.name).size(16.0));
                            ui.end_row();
                        }
                    });
            }
        });
        if let Some(response) = response {
            response.close_into(&mut self.selection);
        }
    }
}

fn skill_chip(ui: &mut egui::Ui, item: &SkillItem) {
    ui.vertical(|ui| {
        ui.label(theme::glyph_text(item.symbol, GLYPH_SIZE));
        ui.label(egui::RichText::new(item.name).small());
    });
    ui.add_space(ITEM_SPACING);
}
