//! Personal portfolio viewer
//!
//! Static portfolio content, a certificate catalog discovered from image
//! assets, and an egui front end whose detail views open as modals bound to
//! per-section selections.

#![forbid(unsafe_code)]

pub mod catalog;
pub mod config;
pub mod constants;
pub mod content;
pub mod gui;
pub mod selection;
