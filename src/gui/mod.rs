//! egui front end: page sections, the shared modal and navigation

pub mod app;
pub mod constants;
pub mod modal;
pub mod nav;
pub mod sections;
pub mod theme;

pub use app::run_gui;
