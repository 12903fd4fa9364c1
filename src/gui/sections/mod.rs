//! Page sections
//!
//! Each section renders a list of cards from its data source and, if it has
//! a detail view, owns one [`Selection`] plus the single modal bound to it.

pub mod certificates;
pub mod contact;
pub mod hero;
pub mod projects;
pub mod skills;

pub use certificates::CertificatesSection;
pub use contact::ContactSection;
pub use hero::HeroSection;
pub use projects::ProjectsSection;
pub use skills::SkillsSection;

use std::hash::Hash;

use eframe::egui;

use crate::gui::constants::*;
use crate::gui::theme;
use crate::selection::Selection;

/// What a click on a card amounts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardIntent<T> {
    /// Expand the card's item in the section modal
    Select(T),
    /// An outbound link inside the card was clicked; the card stays unselected
    FollowLink,
    Idle,
}

impl<T> CardIntent<T> {
    /// A link click takes precedence over the card click around it
    pub fn resolve(item: T, card_clicked: bool, link_clicked: bool) -> Self {
        if link_clicked {
            CardIntent::FollowLink
        } else if card_clicked {
            CardIntent::Select(item)
        } else {
            CardIntent::Idle
        }
    }

    /// Convert the selected item; `f` only runs for [`CardIntent::Select`]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> CardIntent<U> {
        match self {
            CardIntent::Select(item) => CardIntent::Select(f(item)),
            CardIntent::FollowLink => CardIntent::FollowLink,
            CardIntent::Idle => CardIntent::Idle,
        }
    }

    /// Returns true if the selection changed
    pub fn apply(self, selection: &mut Selection<T>) -> bool {
        match self {
            CardIntent::Select(item) => {
                selection.select(item);
                true
            }
            CardIntent::FollowLink | CardIntent::Idle => false,
        }
    }
}

/// Card whose whole area senses clicks; widgets added inside stay on top of it
pub fn clickable_card<R>(
    ui: &mut egui::Ui,
    id_salt: impl Hash,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> egui::InnerResponse<R> {
    let scoped = ui.scope_builder(
        egui::UiBuilder::new()
            .id_salt(id_salt)
            .sense(egui::Sense::click()),
        |ui| {
            // Selectable text would take the click away from the card
            ui.style_mut().interaction.selectable_labels = false;
            theme::card_frame()
                .show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    add_contents(ui)
                })
                .inner
        },
    );
    let response = scoped.response.on_hover_cursor(egui::CursorIcon::PointingHand);
    theme::paint_card_hover(ui, &response);
    egui::InnerResponse::new(scoped.inner, response)
}

/// Lay `items` out row by row in equal-width columns
pub fn grid<'a, T>(
    ui: &mut egui::Ui,
    items: &'a [T],
    columns: usize,
    mut cell: impl FnMut(&mut egui::Ui, &'a T),
) {
    let columns = columns.max(1);
    for row in items.chunks(columns) {
        ui.columns(columns, |cols| {
            for (col, item) in cols.iter_mut().zip(row) {
                cell(col, item);
            }
        });
        ui.add_space(CARD_GAP);
    }
}

pub fn heading_text(text: &str) -> egui::RichText {
    egui::RichText::new(text)
        .size(SECTION_HEADING_SIZE)
        .strong()
        .color(TEXT_STRONG)
}

pub fn card_title(text: &str) -> egui::RichText {
    egui::RichText::new(text)
        .size(CARD_TITLE_SIZE)
        .strong()
        .color(TEXT_STRONG)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_click_never_selects() {
        let mut selection = Selection::new();
        let intent = CardIntent::resolve("GeoPulse", true, true);
        assert_eq!(intent, CardIntent::FollowLink);
        assert!(!intent.apply(&mut selection));
        assert!(!selection.is_open());
    }

    #[test]
    fn test_card_click_selects() {
        let mut selection = Selection::new();
        assert!(CardIntent::resolve("GeoPulse", true, false).apply(&mut selection));
        assert_eq!(selection.current(), Some(&"GeoPulse"));
    }

    #[test]
    fn test_link_click_keeps_existing_selection() {
        let mut selection = Selection::new();
        selection.select("MentorConnect");
        CardIntent::resolve("GeoPulse", false, true).apply(&mut selection);
        assert_eq!(selection.current(), Some(&"MentorConnect"));
    }

    #[test]
    fn test_idle_card_is_not_converted() {
        let caption = String::from("AWS Cert");
        let idle: CardIntent<String> =
            CardIntent::resolve(&caption, false, false).map(|_| unreachable!("idle card converted"));
        assert_eq!(idle, CardIntent::Idle);

        let mut conversions = 0;
        let selected = CardIntent::resolve(&caption, true, false).map(|c| {
            conversions += 1;
            c.clone()
        });
        assert_eq!(selected, CardIntent::Select("AWS Cert".to_string()));
        assert_eq!(conversions, 1);
    }

    #[test]
    fn test_no_click_is_idle() {
        assert_eq!(CardIntent::resolve(1, false, false), CardIntent::Idle);
    }
}
