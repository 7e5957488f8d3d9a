// SPDX-License-Identifier: GPL-3.0-only

//! Application state management

use crate::app::gesture::{TouchPoint, ZoomGestureController};
use crate::backends::camera;
use crate::backends::camera::types::{CameraDevice, CameraFrame};
use crate::config::Config;
use crate::constants::ui::STATUS_MESSAGE_DURATION;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::error;

/// Transient status line shown at the bottom of the screen
///
/// Messages clear themselves after a short delay; the event loop calls
/// [`try_clear`](Self::try_clear) once per tick.
#[derive(Debug, Default)]
pub struct StatusLine {
    message: Option<String>,
    shown_at: Option<Instant>,
}

impl StatusLine {
    /// Show a message, restarting the expiry clock
    pub fn set(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
        self.shown_at = Some(Instant::now());
    }

    /// The currently shown message, if any
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Clear the message if it has been shown long enough
    pub fn try_clear(&mut self) -> bool {
        match self.shown_at {
            Some(shown) if shown.elapsed() >= STATUS_MESSAGE_DURATION => {
                self.clear();
                true
            }
            _ => false,
        }
    }

    /// Clear the message unconditionally
    pub fn clear(&mut self) {
        self.message = None;
        self.shown_at = None;
    }
}

/// The application model stores app-specific state used to describe its
/// interface and drive its logic.
pub struct AppModel {
    /// Configuration data that persists between application runs
    pub config: Config,
    /// Where to persist the configuration, when available
    pub config_path: Option<PathBuf>,
    /// Available camera devices
    pub available_cameras: Vec<CameraDevice>,
    /// Current camera index
    pub current_camera_index: usize,
    /// Current camera frame
    pub current_frame: Option<Arc<CameraFrame>>,
    /// Pinch/step zoom state
    pub zoom: ZoomGestureController,
    /// Transient status message
    pub status: StatusLine,
    /// Whether a photo capture is in progress
    pub is_capturing: bool,
}

impl AppModel {
    /// Build the model, starting on the lens the config remembers
    pub fn new(config: Config, config_path: Option<PathBuf>) -> Self {
        let available_cameras = camera::enumerate_cameras();
        let current_camera_index =
            camera::index_for_facing(&available_cameras, config.last_camera_facing).unwrap_or(0);

        Self {
            config,
            config_path,
            available_cameras,
            current_camera_index,
            current_frame: None,
            zoom: ZoomGestureController::new(),
            status: StatusLine::default(),
            is_capturing: false,
        }
    }

    /// The currently selected camera device
    pub fn current_camera(&self) -> Option<&CameraDevice> {
        self.available_cameras.get(self.current_camera_index)
    }

    /// Persist the config, logging instead of failing
    pub(crate) fn persist_config(&self) {
        if let Some(path) = &self.config_path {
            if let Err(err) = self.config.save(path) {
                error!(%err, "Failed to save config");
            }
        }
    }
}

/// Messages emitted by the application and its widgets.
///
/// Messages are organized into logical groups:
/// - **Camera Control**: Camera switching, frames, mirror preview
/// - **Zoom**: Touch gesture samples and discrete zoom steps
/// - **Capture Operations**: Photo capture and save results
/// - **Gallery & UI**: Gallery opening, status line upkeep
#[derive(Debug, Clone)]
pub enum Message {
    // ===== Camera Control =====
    /// Switch to the other camera
    SwitchCamera,
    /// New camera frame received from the pipeline
    CameraFrame(Arc<CameraFrame>),
    /// Toggle mirror preview (horizontal flip)
    ToggleMirrorPreview,

    // ===== Zoom =====
    /// Touch-move sample with the currently active touch points
    TouchSample(Vec<TouchPoint>),
    /// Touch count dropped below two
    TouchEnd,
    /// Discrete zoom in
    ZoomIn,
    /// Discrete zoom out
    ZoomOut,
    /// Reset zoom to 1x
    ResetZoom,

    // ===== Capture Operations =====
    /// Capture photo
    Capture,
    /// Photo save finished with the given result
    PhotoSaved(Result<String, String>),

    // ===== Gallery & UI =====
    /// Open the gallery directory in the file manager
    OpenGallery,
    /// Expire the transient status message
    ClearStatusMessage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_line_set_and_clear() {
        let mut status = StatusLine::default();
        assert!(status.message().is_none());

        status.set("Saved");
        assert_eq!(status.message(), Some("Saved"));

        // Fresh messages survive a try_clear
        assert!(!status.try_clear());
        assert_eq!(status.message(), Some("Saved"));

        status.clear();
        assert!(status.message().is_none());
    }

    #[test]
    fn test_model_starts_on_configured_facing() {
        use crate::backends::camera::types::CameraFacing;

        let config = Config {
            last_camera_facing: CameraFacing::Back,
            ..Config::default()
        };
        let model = AppModel::new(config, None);
        assert_eq!(
            model.current_camera().unwrap().facing,
            CameraFacing::Back
        );
    }
}
