//! Top navigation bar and in-page scrolling
//!
//! Clicking an entry records a pending target; the matching section heading
//! scrolls itself into view when it is laid out and consumes the target.

use eframe::egui;
use tracing::debug;

use crate::gui::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    About,
    Skills,
    Projects,
    Certificates,
    Contact,
}

impl SectionId {
    /// Page order
    pub const ALL: [SectionId; 5] = [
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Certificates,
        SectionId::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SectionId::About => "About",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Projects",
            SectionId::Certificates => "Certificates",
            SectionId::Contact => "Contact",
        }
    }

    fn glyph(self) -> &'static str {
        match self {
            SectionId::About => "👤",
            SectionId::Skills => "🔧",
            SectionId::Projects => "🗂",
            SectionId::Certificates => "🏅",
            SectionId::Contact => "📞",
        }
    }
}

#[derive(Debug, Default)]
pub struct Navigator {
    pending: Option<SectionId>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&mut self, target: SectionId) {
        debug!(?target, "Scroll requested");
        self.pending = Some(target);
    }

    pub fn pending(&self) -> Option<SectionId> {
        self.pending
    }

    /// True exactly once after `request(section)`
    pub fn take_if(&mut self, section: SectionId) -> bool {
        if self.pending == Some(section) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    pub fn bar_ui(&mut self, ui: &mut egui::Ui, owner: &str) {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(format!("👤 {owner}"))
                    .size(18.0)
                    .strong()
                    .color(TEXT_STRONG),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                // right_to_left lays out in reverse
                for section in SectionId::ALL.iter().rev() {
                    let text = format!("{} {}", section.glyph(), section.label());
                    if ui
                        .add(egui::Button::new(egui::RichText::new(text).color(TEXT_BODY)).frame(false))
                        .clicked()
                    {
                        self.request(*section);
                    }
                    ui.add_space(ITEM_SPACING);
                }
            });
        });
    }

    /// Section heading that doubles as the scroll anchor
    pub fn heading(&mut self, ui: &mut egui::Ui, section: SectionId, text: impl Into<egui::WidgetText>) {
        let response = ui.label(text);
        self.anchor(&response, section);
    }

    /// Scroll `response` into view if `section` was requested
    pub fn anchor(&mut self, response: &egui::Response, section: SectionId) {
        if self.take_if(section) {
            response.scroll_to_me(Some(egui::Align::TOP));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_if_consumes_matching_target() {
        let mut nav = Navigator::new();
        nav.request(SectionId::Projects);

        assert!(!nav.take_if(SectionId::Skills));
        assert_eq!(nav.pending(), Some(SectionId::Projects));

        assert!(nav.take_if(SectionId::Projects));
        assert!(!nav.take_if(SectionId::Projects));
        assert_eq!(nav.pending(), None);
    }

    #[test]
    fn test_latest_request_wins() {
        let mut nav = Navigator::new();
        nav.request(SectionId::Skills);
        nav.request(SectionId::Contact);
        assert!(!nav.take_if(SectionId::Skills));
        assert!(nav.take_if(SectionId::Contact));
    }

    #[test]
    fn test_sections_in_page_order() {
        let labels: Vec<_> = SectionId::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels, vec!["About", "Skills", "Projects", "Certificates", "Contact"]);
    }
}
