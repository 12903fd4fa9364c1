//! Certificate catalog discovery
//!
//! Scan an asset directory once at startup and turn every image file into a
//! captioned record. Dropping a new image into the directory is enough to
//! have it show up in the gallery.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::constants::assets;

/// One discovered image: where to load it from and what to call it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRecord {
    /// `file://` URI understood by the egui image loaders
    pub locator: String,
    /// Human-readable name derived from the file name
    pub caption: String,
}

impl DisplayRecord {
    pub fn from_path(path: &Path) -> Self {
        Self {
            locator: locator_for(path),
            caption: caption_from_path(path),
        }
    }
}

/// Split a file name into (stem, extension) at the last dot
fn split_name(name: &str) -> (&str, Option<&str>) {
    match name.rfind('.') {
        Some(idx) => (&name[..idx], Some(&name[idx + 1..])),
        None => (name, None),
    }
}

/// Caption for an asset: file name without directory and extension,
/// with every underscore replaced by a space
pub fn caption_from_path(path: &Path) -> String {
    let Some(name) = path.file_name() else {
        return String::new();
    };
    let name = name.to_string_lossy();
    let (stem, _) = split_name(&name);
    stem.replace('_', " ")
}

/// Whether the file name carries one of the given extensions (case-insensitive)
pub fn is_image<S: AsRef<str>>(path: &Path, extensions: &[S]) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };
    let name = name.to_string_lossy();
    match split_name(&name) {
        (_, Some(ext)) => extensions
            .iter()
            .any(|known| known.as_ref().eq_ignore_ascii_case(ext)),
        (_, None) => false,
    }
}

/// Build a `file://` URI for the path, absolute when it can be resolved
pub fn locator_for(path: &Path) -> String {
    let resolved = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    format!("{}{}", assets::FILE_SCHEME, resolved.display())
}

/// Enumerate image files in `dir` and return one record per file
///
/// Entries that are not regular files, do not match `extensions` or cannot be
/// opened are skipped. Records are sorted by caption, then locator, so the
/// order does not depend on the filesystem. Duplicate captions are all kept.
pub fn build_catalog<S: AsRef<str>>(dir: &Path, extensions: &[S]) -> Result<Vec<DisplayRecord>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read asset directory {}", dir.display()))?;

    let mut records = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "Skipping unreadable directory entry");
                continue;
            }
        };
        let path = entry.path();

        match fs::metadata(&path) {
            Ok(meta) if meta.is_file() => {}
            Ok(_) => {
                debug!(path = %path.display(), "Skipping non-file entry");
                continue;
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Skipping entry with unreadable metadata");
                continue;
            }
        }

        if !is_image(&path, extensions) {
            debug!(path = %path.display(), "Skipping non-image file");
            continue;
        }

        if let Err(e) = fs::File::open(&path) {
            warn!(path = %path.display(), error = %e, "Skipping unreadable image");
            continue;
        }

        records.push(DisplayRecord::from_path(&path));
    }

    records.sort_by(|a, b| {
        a.caption
            .cmp(&b.caption)
            .then_with(|| a.locator.cmp(&b.locator))
    });

    info!(dir = %dir.display(), count = records.len(), "Built asset catalog");
    Ok(records)
}

/// Like [`build_catalog`], but a missing or unreadable directory yields an
/// empty catalog instead of an error
pub fn build_catalog_or_empty<S: AsRef<str>>(dir: &Path, extensions: &[S]) -> Vec<DisplayRecord> {
    build_catalog(dir, extensions).unwrap_or_else(|e| {
        warn!(dir = %dir.display(), error = ?e, "Asset catalog unavailable, continuing with none");
        Vec::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, b"not really an image").unwrap();
        path
    }

    fn captions(records: &[DisplayRecord]) -> Vec<&str> {
        records.iter().map(|r| r.caption.as_str()).collect()
    }

    #[test]
    fn test_caption_replaces_underscores_and_drops_extension() {
        assert_eq!(
            caption_from_path(Path::new("Google_Cloud_Cert.jpg")),
            "Google Cloud Cert"
        );
        assert_eq!(
            caption_from_path(Path::new("/some/dir/AWS_Cert.jpg")),
            "AWS Cert"
        );
    }

    #[test]
    fn test_caption_without_underscore_is_stem() {
        assert_eq!(caption_from_path(Path::new("Kubernetes.png")), "Kubernetes");
    }

    #[test]
    fn test_caption_only_last_extension_removed() {
        assert_eq!(caption_from_path(Path::new("v1.2_Final.jpg")), "v1.2 Final");
    }

    #[test]
    fn test_caption_consecutive_underscores_each_become_space() {
        assert_eq!(caption_from_path(Path::new("a__b.jpg")), "a  b");
    }

    #[test]
    fn test_caption_empty_when_no_file_name() {
        assert_eq!(caption_from_path(Path::new("/")), "");
        assert_eq!(caption_from_path(Path::new(".jpg")), "");
    }

    #[test]
    fn test_is_image_case_insensitive() {
        let exts = ["jpg", "png"];
        assert!(is_image(Path::new("scan.JPG"), &exts));
        assert!(is_image(Path::new("badge.png"), &exts));
        assert!(!is_image(Path::new("notes.txt"), &exts));
        assert!(!is_image(Path::new("README"), &exts));
    }

    #[test]
    fn test_build_catalog_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "Docker_Badge.jpg");
        touch(dir.path(), "AWS_Cert.jpg");

        let records = build_catalog(dir.path(), assets::IMAGE_EXTENSIONS).unwrap();
        assert_eq!(captions(&records), vec!["AWS Cert", "Docker Badge"]);
        assert!(records[0].locator.starts_with("file://"));
        assert!(records[0].locator.ends_with("AWS_Cert.jpg"));
    }

    #[test]
    fn test_build_catalog_skips_non_images_and_directories() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "Python_Basics.png");
        touch(dir.path(), "notes.txt");
        fs::create_dir(dir.path().join("nested.jpg")).unwrap();

        let records = build_catalog(dir.path(), assets::IMAGE_EXTENSIONS).unwrap();
        assert_eq!(captions(&records), vec!["Python Basics"]);
    }

    #[test]
    fn test_build_catalog_keeps_duplicate_captions() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "Cloud_Cert.jpg");
        touch(dir.path(), "Cloud Cert.png");

        let records = build_catalog(dir.path(), assets::IMAGE_EXTENSIONS).unwrap();
        assert_eq!(captions(&records), vec!["Cloud Cert", "Cloud Cert"]);
        assert_ne!(records[0].locator, records[1].locator);
    }

    #[test]
    fn test_build_catalog_picks_up_new_files() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "First.jpg");
        assert_eq!(build_catalog(dir.path(), &["jpg"]).unwrap().len(), 1);

        touch(dir.path(), "Second.jpg");
        assert_eq!(build_catalog(dir.path(), &["jpg"]).unwrap().len(), 2);
    }

    #[test]
    fn test_build_catalog_missing_dir_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        assert!(build_catalog(&missing, &["jpg"]).is_err());
        assert!(build_catalog_or_empty(&missing, &["jpg"]).is_empty());
    }
}
