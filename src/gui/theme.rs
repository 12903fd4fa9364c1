//! Visual theme: dark palette, symbol glyphs and small drawing helpers

use eframe::egui;

use crate::content::Symbol;
use crate::gui::constants::*;

/// Install the dark palette on the context
pub fn apply(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = PAGE_BG;
    visuals.window_fill = CARD_BG;
    visuals.override_text_color = Some(TEXT_BODY);
    visuals.hyperlink_color = egui::Color32::from_rgb(0x60, 0xa5, 0xfa);
    ctx.set_visuals(visuals);
}

/// Unicode glyph drawn for a symbol
pub fn glyph(symbol: Symbol) -> &'static str {
    match symbol {
        Symbol::Cpp => "©",
        Symbol::Python => "🐍",
        Symbol::Java | Symbol::NodeJs | Symbol::Xml | Symbol::Api | Symbol::Kubernetes => "⌨",
        Symbol::React => "⚛",
        Symbol::Tailwind => "🌊",
        Symbol::TypeScript => "🇹",
        Symbol::Html => "🌐",
        Symbol::Css => "🎨",
        Symbol::JavaScript => "📜",
        Symbol::Android => "🤖",
        Symbol::AndroidStudio => "📱",
        Symbol::Git => "⎇",
        Symbol::GitHub => "🐙",
        Symbol::VsCode => "⌨",
        Symbol::Jupyter => "📓",
        Symbol::IntelliJ => "💡",
        Symbol::Eclipse => "🌘",
        Symbol::Firebase => "🔥",
        Symbol::MongoDb => "🍃",
        Symbol::Docker => "🐳",
        Symbol::Dsa => "💡",
        Symbol::Teamwork => "🤝",
        Symbol::ProblemSolving => "💡",
        Symbol::TimeManagement => "⏰",
        Symbol::Adaptability => "🔄",
        Symbol::Communication => "👥",
        Symbol::Geofencing => "📍",
        Symbol::Biometric => "🔏",
        Symbol::RoleBased => "🛡",
        Symbol::Realtime => "🔃",
        Symbol::Reports => "📊",
        Symbol::ExcelExport => "📄",
        Symbol::Matching => "🎓",
        Symbol::Chat => "💬",
        Symbol::Video => "🎥",
        Symbol::Rewards => "🎁",
        Symbol::Library => "📚",
        Symbol::Events => "📅",
        Symbol::Mentorship => "👪",
        Symbol::Phone => "📞",
        Symbol::LinkedIn => "🔗",
        Symbol::Instagram => "📷",
    }
}

/// Accent color drawn for a symbol
pub fn accent(symbol: Symbol) -> egui::Color32 {
    use eframe::egui::Color32 as C;
    match symbol {
        Symbol::Cpp => C::from_rgb(0x00, 0x59, 0x9c),
        Symbol::Python => C::from_rgb(0x37, 0x76, 0xab),
        Symbol::Java => C::from_rgb(0xf9, 0x73, 0x16),
        Symbol::React => C::from_rgb(0x61, 0xda, 0xfb),
        Symbol::Tailwind | Symbol::Realtime | Symbol::Events => C::from_rgb(0x06, 0xb6, 0xd4),
        Symbol::TypeScript => C::from_rgb(0x31, 0x78, 0xc6),
        Symbol::Html => C::from_rgb(0xe3, 0x4f, 0x26),
        Symbol::Css => C::from_rgb(0x15, 0x72, 0xb6),
        Symbol::JavaScript | Symbol::Reports | Symbol::Rewards => C::from_rgb(0xf7, 0xdf, 0x1e),
        Symbol::Android | Symbol::AndroidStudio | Symbol::Geofencing | Symbol::Matching => {
            C::from_rgb(0x3d, 0xdc, 0x84)
        }
        Symbol::Git => C::from_rgb(0xf0, 0x50, 0x32),
        Symbol::GitHub => C::WHITE,
        Symbol::VsCode => C::from_rgb(0x00, 0x7a, 0xcc),
        Symbol::Jupyter => C::from_rgb(0xf3, 0x76, 0x26),
        Symbol::IntelliJ => C::from_rgb(0xfe, 0x31, 0x5d),
        Symbol::Eclipse => C::from_rgb(0x7b, 0x6f, 0xc9),
        Symbol::Firebase | Symbol::Biometric | Symbol::Chat => C::from_rgb(0xff, 0xca, 0x28),
        Symbol::MongoDb => C::from_rgb(0x47, 0xa2, 0x48),
        Symbol::Docker => C::from_rgb(0x24, 0x96, 0xed),
        Symbol::NodeJs => C::from_rgb(0x3b, 0x82, 0xf6),
        Symbol::Xml | Symbol::Api => TEXT_BODY,
        Symbol::Kubernetes => C::from_rgb(0x60, 0xa5, 0xfa),
        Symbol::Dsa | Symbol::TimeManagement => C::from_rgb(0xea, 0xb3, 0x08),
        Symbol::Teamwork => C::from_rgb(0x4a, 0xde, 0x80),
        Symbol::ProblemSolving => C::from_rgb(0x60, 0xa5, 0xfa),
        Symbol::Adaptability => C::from_rgb(0xfb, 0x92, 0x3c),
        Symbol::Communication => C::from_rgb(0xc0, 0x84, 0xfc),
        Symbol::RoleBased | Symbol::Video => C::from_rgb(0x61, 0xda, 0xfb),
        Symbol::ExcelExport | Symbol::Library => C::from_rgb(0x21, 0xa3, 0x66),
        Symbol::Mentorship => C::from_rgb(0x0a, 0x66, 0xc2),
        Symbol::Phone => C::from_rgb(0x4a, 0xde, 0x80),
        Symbol::LinkedIn => C::from_rgb(0x60, 0xa5, 0xfa),
        Symbol::Instagram => C::from_rgb(0xf4, 0x72, 0xb6),
    }
}

/// Colored glyph as rich text at the given size
pub fn glyph_text(symbol: Symbol, size: f32) -> egui::RichText {
    egui::RichText::new(glyph(symbol)).size(size).color(accent(symbol))
}

/// Rounded card frame shared by all sections
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(CARD_BG)
        .stroke(egui::Stroke::new(1.0, CARD_BORDER))
        .corner_radius(egui::CornerRadius::same(12))
        .inner_margin(egui::Margin::same(20))
}

/// Outline a hovered card so it reads as clickable
pub fn paint_card_hover(ui: &egui::Ui, response: &egui::Response) {
    if response.hovered() {
        ui.painter().rect_stroke(
            response.rect,
            egui::CornerRadius::same(12),
            egui::Stroke::new(1.5, CARD_HOVER_BORDER),
            egui::StrokeKind::Inside,
        );
    }
}

/// Dot grid drawn behind the whole page
pub fn paint_dot_pattern(painter: &egui::Painter, rect: egui::Rect) {
    let mut y = rect.top() + DOT_RADIUS;
    while y < rect.bottom() {
        let mut x = rect.left() + DOT_RADIUS;
        while x < rect.right() {
            painter.circle_filled(egui::pos2(x, y), DOT_RADIUS, DOT_COLOR);
            x += DOT_SPACING;
        }
        y += DOT_SPACING;
    }
}
