//! GUI-specific constants for layout, palette and transitions

use egui;

/// Window dimensions
pub const WINDOW_MIN_WIDTH: f32 = 640.0;
pub const WINDOW_MIN_HEIGHT: f32 = 480.0;

/// Layout spacing
pub const PAGE_MARGIN: f32 = 32.0;
pub const SECTION_SPACING: f32 = 48.0;
pub const ITEM_SPACING: f32 = 8.0;
pub const CARD_GAP: f32 = 16.0;

/// Grid columns per section
pub const SKILL_COLUMNS: usize = 3;
pub const PROJECT_COLUMNS: usize = 2;
pub const CERTIFICATE_COLUMNS: usize = 3;

/// Image sizes
pub const HERO_PHOTO_SIZE: f32 = 144.0;
pub const CONTACT_PHOTO_SIZE: f32 = 112.0;
pub const CERTIFICATE_THUMB_HEIGHT: f32 = 220.0;
pub const MODAL_MAX_WIDTH: f32 = 720.0;
pub const MODAL_IMAGE_MAX_HEIGHT: f32 = 520.0;

/// Text sizes
pub const HERO_NAME_SIZE: f32 = 44.0;
pub const HERO_TAGLINE_SIZE: f32 = 20.0;
pub const SECTION_HEADING_SIZE: f32 = 30.0;
pub const CARD_TITLE_SIZE: f32 = 20.0;
pub const GLYPH_SIZE: f32 = 26.0;

/// Palette
pub const PAGE_BG: egui::Color32 = egui::Color32::from_rgb(0x25, 0x24, 0x25);
pub const NAV_BG: egui::Color32 = egui::Color32::from_rgb(0x23, 0x22, 0x24);
pub const CARD_BG: egui::Color32 = egui::Color32::from_rgb(0x2d, 0x2d, 0x30);
pub const CARD_BORDER: egui::Color32 = egui::Color32::from_rgb(0x37, 0x41, 0x51);
pub const CARD_HOVER_BORDER: egui::Color32 = egui::Color32::from_rgb(0x9c, 0xa3, 0xaf);
pub const DOT_COLOR: egui::Color32 = egui::Color32::from_rgb(0x35, 0x35, 0x35);
pub const TEXT_STRONG: egui::Color32 = egui::Color32::from_rgb(0xf3, 0xf4, 0xf6);
pub const TEXT_BODY: egui::Color32 = egui::Color32::from_rgb(0xd1, 0xd5, 0xdb);
pub const TEXT_MUTED: egui::Color32 = egui::Color32::from_rgb(0x9c, 0xa3, 0xaf);
pub const AWARD_YELLOW: egui::Color32 = egui::Color32::from_rgb(0xfa, 0xcc, 0x15);

/// Background dot pattern
pub const DOT_SPACING: f32 = 20.0;
pub const DOT_RADIUS: f32 = 2.0;

/// Modal backdrop and transitions
pub const BACKDROP: egui::Color32 = egui::Color32::from_black_alpha(180);
pub const MODAL_FADE_SECS: f32 = 0.18;
