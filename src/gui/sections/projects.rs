//! Project showcase: summary cards with a direct link, detail modal on click

use eframe::egui;
use tracing::info;

use super::{card_title, clickable_card, grid, heading_text, CardIntent};
use crate::content::{ProjectEntry, Tag};
use crate::gui::constants::*;
use crate::gui::modal::Modal;
use crate::gui::nav::{Navigator, SectionId};
use crate::gui::theme;
use crate::selection::Selection;

const LINK_LABEL: &str = "View Project ↗";

pub struct ProjectsSection {
    projects: &'static [ProjectEntry],
    selection: Selection<&'static ProjectEntry>,
}

impl ProjectsSection {
    pub fn new(projects: &'static [ProjectEntry]) -> Self {
        Self {
            projects,
            selection: Selection::new(),
        }
    }

    pub fn selection(&self) -> &Selection<&'static ProjectEntry> {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut Selection<&'static ProjectEntry> {
        &mut self.selection
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, nav: &mut Navigator) {
        let heading = ui.horizontal(|ui| {
            ui.label(egui::RichText::new("🏆").size(SECTION_HEADING_SIZE).color(AWARD_YELLOW));
            ui.label(heading_text("Projects"));
        });
        nav.anchor(&heading.response, SectionId::Projects);
        ui.add_space(SECTION_SPACING / 2.0);

        let projects = self.projects;
        let selection = &mut self.selection;
        grid(ui, projects, PROJECT_COLUMNS, |ui, project| {
            let mut link_clicked = false;
            let card = clickable_card(ui, ("project_card", project.title), |ui| {
                summary_ui(ui, project);
                ui.add_space(ITEM_SPACING);
                link_clicked = ui
                    .add(egui::Hyperlink::from_label_and_url(LINK_LABEL, project.external_link).open_in_new_tab(true))
                    .clicked();
            });

            let intent = CardIntent::resolve(project, card.response.clicked(), link_clicked);
            if intent == CardIntent::FollowLink {
                info!(project = project.title, "Opening project link");
            } else if intent.apply(selection) {
                info!(project = project.title, "Project selected");
            }
        });

        self.modal_ui(ui.ctx());
    }

    fn modal_ui(&mut self, ctx: &egui::Context) {
        let current = self.selection.displayed().copied();
        let response = Modal::new("project_modal").show(ctx, self.selection.is_open(), |ui| {
            if let Some(project) = current {
                detail_ui(ui, project);
            }
        });
        if let Some(response) = response {
            response.close_into(&mut self.selection);
        }
    }
}

fn title_row(ui: &mut egui::Ui, project: &ProjectEntry) {
    ui.horizontal(|ui| {
        ui.label(theme::glyph_text(project.symbol, GLYPH_SIZE + 4.0));
        ui.label(card_title(project.title));
    });
}

fn tech_row(ui: &mut egui::Ui, tech_stack: &[Tag]) {
    ui.horizontal_wrapped(|ui| {
        for tech in tech_stack {
            ui.label(theme::glyph_text(tech.symbol, 18.0))
                .on_hover_text(tech.label);
            ui.label(tech.label);
            ui.add_space(ITEM_SPACING);
        }
    });
}

fn summary_ui(ui: &mut egui::Ui, project: &ProjectEntry) {
    title_row(ui, project);
    ui.add_space(ITEM_SPACING);
    for line in project.description_lines {
        ui.label(format!("• {line}"));
    }
    ui.add_space(ITEM_SPACING);
    ui.horizontal_wrapped(|ui| {
        for feature in project.features {
            ui.label(theme::glyph_text(feature.symbol, GLYPH_SIZE))
                .on_hover_text(feature.label);
        }
    });
    ui.add_space(ITEM_SPACING);
    tech_row(ui, project.tech_stack);
}

fn detail_ui(ui: &mut egui::Ui, project: &ProjectEntry) {
    title_row(ui, project);
    ui.add_space(ITEM_SPACING);
    for line in project.description_lines {
        ui.label(format!("• {line}"));
    }

    ui.add_space(ITEM_SPACING * 2.0);
    ui.label(egui::RichText::new("Features").strong().color(TEXT_STRONG));
    ui.horizontal_wrapped(|ui| {
        for feature in project.features {
            ui.label(theme::glyph_text(feature.symbol, GLYPH_SIZE));
            ui.label(feature.label);
            ui.add_space(ITEM_SPACING);
        }
    });

    ui.add_space(ITEM_SPACING * 2.0);
    ui.label(egui::RichText::new("Tech Stack").strong().color(TEXT_STRONG));
    tech_row(ui, project.tech_stack);

    ui.add_space(ITEM_SPACING * 2.0);
    ui.add(egui::Hyperlink::from_label_and_url(LINK_LABEL, project.external_link).open_in_new_tab(true));
}
