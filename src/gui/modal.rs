//! Reusable modal overlay
//!
//! A modal is drawn while its owner says it is open, which in practice means
//! "while the owning section's [`Selection`] holds an item", and then fades
//! out over the item [`Selection::displayed`] still remembers. The
//! backdrop, the corner close control and Escape dismiss it; clicks inside
//! the panel never do, so links and buttons in the content keep working.

use std::hash::Hash;

use eframe::egui;
use tracing::debug;

use crate::gui::constants::*;
use crate::selection::Selection;

/// User gesture observed on an open modal during one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalGesture {
    /// Click on the dimmed area around the panel
    Backdrop,
    /// Click anywhere inside the panel
    Content,
    /// The "×" button in the panel corner
    CloseControl,
    Escape,
}

impl ModalGesture {
    pub fn dismisses(self) -> bool {
        !matches!(self, ModalGesture::Content)
    }

    /// Pick the gesture for a frame; the close control always wins
    fn classify(
        close_clicked: bool,
        backdrop_clicked: bool,
        escape_pressed: bool,
        content_clicked: bool,
    ) -> Option<Self> {
        if close_clicked {
            Some(ModalGesture::CloseControl)
        } else if backdrop_clicked {
            Some(ModalGesture::Backdrop)
        } else if escape_pressed {
            Some(ModalGesture::Escape)
        } else if content_clicked {
            Some(ModalGesture::Content)
        } else {
            None
        }
    }
}

/// Clear `selection` if `gesture` dismisses; returns whether it did
pub fn dismiss_on<T>(selection: &mut Selection<T>, gesture: ModalGesture) -> bool {
    if gesture.dismisses() {
        debug!(?gesture, "Modal dismissed");
        selection.clear();
        true
    } else {
        false
    }
}

/// What happened to an open modal during one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalResponse {
    gesture: Option<ModalGesture>,
}

impl ModalResponse {
    /// The gesture that dismissed the modal this frame, if any
    pub fn dismissed(&self) -> Option<ModalGesture> {
        self.gesture.filter(|g| g.dismisses())
    }

    /// Forward a dismissal to the owning selection
    pub fn close_into<T>(&self, selection: &mut Selection<T>) {
        if let Some(gesture) = self.dismissed() {
            dismiss_on(selection, gesture);
        }
    }
}

pub struct Modal {
    id: egui::Id,
}

impl Modal {
    pub fn new(id_salt: impl Hash) -> Self {
        Self {
            id: egui::Id::new(id_salt),
        }
    }

    /// Draw the modal while `open` and through its exit fade
    ///
    /// Returns `None` whenever the modal is closed, including while it is
    /// still fading out; gestures only count on an open modal.
    pub fn show(
        self,
        ctx: &egui::Context,
        open: bool,
        add_contents: impl FnOnce(&mut egui::Ui),
    ) -> Option<ModalResponse> {
        // Tracked even while closed so the next open starts from transparent
        let fade = ctx.animate_bool_with_time(self.id.with("fade"), open, MODAL_FADE_SECS);
        if !open && fade <= 0.0 {
            return None;
        }
        let panel_opacity = egui::emath::easing::cubic_out(fade);

        let frame = egui::Frame::popup(&ctx.style())
            .fill(CARD_BG)
            .stroke(egui::Stroke::new(1.0, CARD_BORDER))
            .corner_radius(egui::CornerRadius::same(16))
            .inner_margin(egui::Margin::same(24));

        let mut close_clicked = false;
        let response = egui::Modal::new(self.id)
            .backdrop_color(BACKDROP.gamma_multiply(fade))
            .frame(frame)
            .show(ctx, |ui| {
                ui.multiply_opacity(panel_opacity);
                ui.set_max_width(MODAL_MAX_WIDTH);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                    let close = ui
                        .add(egui::Button::new(egui::RichText::new("✖").size(16.0)).frame(false))
                        .on_hover_text("Close");
                    if close.clicked() {
                        close_clicked = true;
                    }
                });
                add_contents(ui)
            });

        if !open {
            return None;
        }

        let (escape_pressed, any_click) =
            ctx.input(|i| (i.key_pressed(egui::Key::Escape), i.pointer.any_click()));
        let content_clicked = any_click && response.response.contains_pointer();

        let gesture = ModalGesture::classify(
            close_clicked,
            response.backdrop_response.clicked(),
            escape_pressed && response.is_top_modal,
            content_clicked,
        );

        Some(ModalResponse { gesture })
    }
}
