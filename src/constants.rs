// SPDX-License-Identifier: GPL-3.0-only

//! Application-wide constants

/// Zoom behavior constants
pub mod zoom {
    /// Scale constant mapping pixel-distance change to zoom-fraction change
    ///
    /// Dividing by a fixed sensitivity (rather than using a relative delta)
    /// keeps the zoom rate independent of absolute finger spacing, giving a
    /// predictable linear response. Empirically chosen.
    pub const PINCH_SENSITIVITY: f64 = 500.0;

    /// Zoom fraction added or removed by one discrete zoom step
    pub const ZOOM_STEP: f64 = 0.05;

    /// Center-crop magnification the preview applies at zoom level 1.0
    ///
    /// The normalized [0,1] zoom level is lens-independent; this maps it
    /// onto the digital zoom range of the preview surface.
    pub const PREVIEW_MAX_MAGNIFICATION: f64 = 4.0;
}

/// UI constants for the terminal viewer
pub mod ui {
    use std::time::Duration;

    /// How long a transient status message stays on screen
    pub const STATUS_MESSAGE_DURATION: Duration = Duration::from_secs(3);

    /// Input poll timeout between frame redraws (~60 Hz)
    pub const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(16);

    /// Pinch emulation scale: one terminal cell of drag counts as this many
    /// screen pixels of finger travel
    pub const DRAG_PIXELS_PER_CELL: f64 = 10.0;
}

/// Timing constants
pub mod timing {
    use std::time::Duration;

    /// Frame counter modulo for periodic logging
    pub const FRAME_LOG_INTERVAL: u64 = 30;

    /// Delay between synthetic camera frames (~30fps)
    pub const SYNTHETIC_FRAME_DURATION: Duration = Duration::from_millis(33);

    /// Frame channel capacity; keep small for low preview latency
    pub const MAX_BUFFERED_FRAMES: usize = 10;
}

/// Photo file constants
pub mod photo {
    /// Prefix for saved photo filenames
    pub const FILENAME_PREFIX: &str = "IMG";

    /// Timestamp format for saved photo filenames
    pub const FILENAME_TIMESTAMP: &str = "%Y%m%d_%H%M%S";

    /// File extensions the gallery scan recognizes
    pub const GALLERY_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];
}

/// Application information utilities
pub mod app_info {
    /// Application name used for config and gallery directories
    pub const APP_NAME: &str = "snapcam";

    /// Get the application version
    pub fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_constants_sane() {
        assert!(zoom::PINCH_SENSITIVITY > 0.0);
        assert!(zoom::ZOOM_STEP > 0.0 && zoom::ZOOM_STEP < 1.0);
    }

    #[test]
    fn test_gallery_extensions_lowercase() {
        for ext in photo::GALLERY_EXTENSIONS {
            assert_eq!(*ext, ext.to_lowercase());
        }
    }
}
