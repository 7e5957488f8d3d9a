// SPDX-License-Identifier: MPL-2.0

//! Storage utilities for managing photo files

use crate::constants::app_info::APP_NAME;
use crate::constants::photo::GALLERY_EXTENSIONS;
use std::path::PathBuf;
use tracing::{debug, info};

/// The gallery directory photos are saved to
///
/// `~/Pictures/snapcam`, falling back to the home directory and finally the
/// current directory when the platform reports neither.
pub fn gallery_directory() -> PathBuf {
    dirs::picture_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Pictures")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Ensure the gallery directory exists, creating it if necessary
pub fn ensure_gallery_directory() -> Result<PathBuf, std::io::Error> {
    let dir = gallery_directory();
    std::fs::create_dir_all(&dir)?;
    info!(path = %dir.display(), "Gallery directory ready");
    Ok(dir)
}

/// Find the most recently modified photo in the gallery
///
/// Scans for the extensions the app writes, picking by modification time.
pub fn latest_photo(dir: &std::path::Path) -> Option<PathBuf> {
    let entries = std::fs::read_dir(dir).ok()?;

    let mut newest: Option<(std::time::SystemTime, PathBuf)> = None;
    for entry in entries.flatten() {
        let path = entry.path();
        let Some(ext) = path.extension() else {
            continue;
        };
        let ext = ext.to_string_lossy().to_lowercase();
        if !GALLERY_EXTENSIONS.contains(&ext.as_str()) {
            continue;
        }
        let Ok(modified) = entry.metadata().and_then(|m| m.modified()) else {
            continue;
        };
        match &newest {
            Some((time, _)) if *time >= modified => {}
            _ => newest = Some((modified, path)),
        }
    }

    if let Some((_, path)) = &newest {
        debug!(path = %path.display(), "Latest gallery photo");
    }
    newest.map(|(_, path)| path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_latest_photo_picks_newest_and_skips_other_files() {
        let dir = std::env::temp_dir().join("snapcam-test-latest-photo");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();

        fs::write(dir.join("old.jpg"), b"a").unwrap();
        fs::write(dir.join("notes.txt"), b"b").unwrap();
        fs::write(dir.join("new.png"), b"c").unwrap();

        // Force a strict mtime ordering instead of racing the clock
        let past = std::time::SystemTime::now() - std::time::Duration::from_secs(60);
        fs::OpenOptions::new()
            .write(true)
            .open(dir.join("old.jpg"))
            .unwrap()
            .set_modified(past)
            .unwrap();

        let latest = latest_photo(&dir).unwrap();
        assert_eq!(latest.file_name().unwrap(), "new.png");

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_latest_photo_empty_dir() {
        let dir = std::env::temp_dir().join("snapcam-test-empty-gallery");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();

        assert!(latest_photo(&dir).is_none());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_gallery_directory_ends_with_app_name() {
        assert!(gallery_directory().ends_with(APP_NAME));
    }
}
