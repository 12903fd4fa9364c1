//! Application-wide constants
//!
//! This module contains all magic numbers and string literals used throughout
//! the application, providing a single source of truth for constant values.

/// Configuration file location
pub mod config {
    /// Directory under the platform config dir
    pub const APP_DIR: &str = "portfolio-viewer";

    /// Config file name
    pub const FILENAME: &str = "config.json";

    /// Default log level when neither config nor environment sets one
    pub const DEFAULT_LOG_LEVEL: &str = "info";
}

/// Environment variables consulted at startup
pub mod env {
    /// Log level override (trace, debug, info, warn, error)
    pub const LOG_LEVEL: &str = "LOG_LEVEL";

    /// Asset directory override
    pub const ASSETS_DIR: &str = "PORTFOLIO_ASSETS_DIR";
}

/// Bundled asset layout
pub mod assets {
    /// Root asset directory, relative to the working directory
    pub const DEFAULT_DIR: &str = "assets";

    /// Certificate images live here, one file per certificate
    pub const CERTIFICATES_SUBDIR: &str = "certificates";

    /// Profile photo shown in the hero and contact sections
    pub const PROFILE_PHOTO: &str = "profile.jpg";

    /// Extensions recognized as images (compared case-insensitively)
    pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

    /// URI scheme understood by the egui file loader
    pub const FILE_SCHEME: &str = "file://";
}
