//! Portfolio window implemented with egui/eframe

use std::io::Cursor;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use eframe::{egui, CreationContext, NativeOptions};
use tracing::{info, warn};

use super::constants::*;
use super::nav::Navigator;
use super::sections::{
    CertificatesSection, ContactSection, HeroSection, ProjectsSection, SkillsSection,
};
use super::theme;
use crate::catalog::{self, DisplayRecord};
use crate::config::Config;
use crate::content;

const APP_TITLE: &str = "Portfolio";

pub struct PortfolioApp {
    nav: Navigator,
    hero: HeroSection,
    skills: SkillsSection,
    projects: ProjectsSection,
    certificates: CertificatesSection,
    contact: ContactSection,
}

impl PortfolioApp {
    /// Fresh page: every section starts with nothing selected
    pub fn new(photo: Option<String>, certificates: Vec<DisplayRecord>, certificates_hint: String) -> Self {
        info!(certificates = certificates.len(), has_photo = photo.is_some(), "Mounting portfolio page");
        Self {
            nav: Navigator::new(),
            hero: HeroSection::new(content::hero(), photo.clone()),
            skills: SkillsSection::new(content::skills()),
            projects: ProjectsSection::new(content::projects()),
            certificates: CertificatesSection::new(certificates, certificates_hint),
            contact: ContactSection::new(content::contacts(), photo),
        }
    }

    fn init(cc: &CreationContext<'_>) {
        egui_extras::install_image_loaders(&cc.egui_ctx);
        theme::apply(&cc.egui_ctx);
    }

    /// Draw one frame of the page
    pub fn ui(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("nav_bar")
            .frame(egui::Frame::new().fill(NAV_BG).inner_margin(egui::Margin::symmetric(16, 8)))
            .show(ctx, |ui| {
                self.nav.bar_ui(ui, content::hero().short_name);
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(PAGE_BG))
            .show(ctx, |ui| {
                theme::paint_dot_pattern(ui.painter(), ui.max_rect());

                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        egui::Frame::new()
                            .inner_margin(egui::Margin::symmetric(PAGE_MARGIN as i8, 0))
                            .show(ui, |ui| {
                                self.hero.ui(ui, &mut self.nav);
                                ui.add_space(SECTION_SPACING);
                                self.skills.ui(ui, &mut self.nav);
                                ui.add_space(SECTION_SPACING);
                                self.projects.ui(ui, &mut self.nav);
                                ui.add_space(SECTION_SPACING);
                                self.certificates.ui(ui, &mut self.nav);
                                ui.add_space(SECTION_SPACING);
                                self.contact.ui(ui, &mut self.nav);
                            });
                    });
            });
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Portfolio exiting");
    }
}

/// Locator for the profile photo, if the file is present
fn profile_photo(config: &Config) -> Option<String> {
    let path = config.profile_photo_path();
    if path.is_file() {
        Some(catalog::locator_for(&path))
    } else {
        warn!(path = %path.display(), "Profile photo not found, using placeholder");
        None
    }
}

fn load_window_icon() -> Result<egui::IconData> {
    let icon_bytes = include_bytes!("../../assets/icon.png");
    let decoder = png::Decoder::new(Cursor::new(icon_bytes));
    let mut reader = decoder.read_info()?;
    let mut buf = vec![0; reader.output_buffer_size().context("Icon too large to decode")?];
    let info = reader.next_frame(&mut buf)?;
    let bytes = &buf[..info.buffer_size()];

    // egui expects RGBA
    let rgba = match info.color_type {
        png::ColorType::Rgba => bytes.to_vec(),
        png::ColorType::Rgb => {
            let mut rgba = Vec::with_capacity(bytes.len() / 3 * 4);
            for chunk in bytes.chunks_exact(3) {
                rgba.extend_from_slice(chunk);
                rgba.push(0xFF);
            }
            rgba
        }
        other => {
            return Err(anyhow!(
                "Unsupported window icon color type {:?} (expected RGB or RGBA)",
                other
            ))
        }
    };

    Ok(egui::IconData {
        rgba,
        width: info.width,
        height: info.height,
    })
}

pub fn run_gui(config: &Config) -> Result<()> {
    let certificates_dir = config.certificates_dir();
    let certificates = catalog::build_catalog_or_empty(&certificates_dir, &config.image_extensions);
    let app = PortfolioApp::new(
        profile_photo(config),
        certificates,
        certificates_dir.display().to_string(),
    );

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size([config.window_width, config.window_height])
        .with_min_inner_size([WINDOW_MIN_WIDTH, WINDOW_MIN_HEIGHT])
        .with_title(APP_TITLE);
    match load_window_icon() {
        Ok(icon) => viewport = viewport.with_icon(Arc::new(icon)),
        Err(err) => warn!(error = ?err, "Failed to load window icon"),
    }

    let options = NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |cc| {
            PortfolioApp::init(cc);
            Ok(Box::new(app))
        }),
    )
    .map_err(|err| anyhow!("Failed to launch portfolio window: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_mount_has_nothing_selected() {
        let app = PortfolioApp::new(None, Vec::new(), "nowhere".to_string());
        assert!(!app.hero.selection().is_open());
        assert!(!app.skills.selection().is_open());
        assert!(!app.projects.selection().is_open());
        assert!(!app.certificates.selection().is_open());
    }

    #[test]
    fn test_full_page_renders_headless() {
        let mut app = PortfolioApp::new(None, Vec::new(), "nowhere".to_string());
        let geo = content::project_by_title("GeoPulse").unwrap();
        app.projects.selection_mut().select(geo);

        let ctx = egui::Context::default();
        for _ in 0..2 {
            let _ = ctx.run(egui::RawInput::default(), |ctx| app.ui(ctx));
        }
        assert!(app.projects.selection().is_open());
        assert!(!app.skills.selection().is_open());
    }

    #[test]
    fn test_window_icon_decodes() {
        let icon = load_window_icon().unwrap();
        assert_eq!(icon.rgba.len(), (icon.width * icon.height * 4) as usize);
    }
}
