// SPDX-License-Identifier: GPL-3.0-only

//! Photo capture and zoom handlers

use crate::app::gesture::TouchPoint;
use crate::app::state::{AppModel, Message};
use crate::pipelines::photo::{PhotoCapture, PhotoPipeline};
use crate::storage;
use tracing::{error, info};

impl AppModel {
    // =========================================================================
    // Capture Handlers
    // =========================================================================

    pub(crate) fn handle_capture(&mut self) -> Vec<Message> {
        if self.is_capturing {
            info!("Capture already in progress, ignoring");
            return Vec::new();
        }

        let frame = match PhotoCapture::capture_from_frame(self.current_frame.clone()) {
            Ok(frame) => frame,
            Err(err) => {
                self.status.set(format!("Error: {}", err));
                return Vec::new();
            }
        };

        self.is_capturing = true;

        // Attempt, catch, report; no retry and no persisted error state
        let result = storage::ensure_gallery_directory()
            .map_err(|e| e.to_string())
            .and_then(|dir| {
                let pipeline = PhotoPipeline::new(self.config.photo_format.into());
                pipeline
                    .capture_to(frame, self.config.mirror_preview, dir)
                    .map_err(|e| e.to_string())
            })
            .map(|path| path.display().to_string());

        vec![Message::PhotoSaved(result)]
    }

    pub(crate) fn handle_photo_saved(&mut self, result: Result<String, String>) -> Vec<Message> {
        self.is_capturing = false;
        match result {
            Ok(path) => {
                info!(path = %path, "Photo saved successfully");
                self.status.set(format!("Saved: {}", path));
            }
            Err(err) => {
                error!(error = %err, "Failed to save photo");
                self.status.set(format!("Error: {}", err));
            }
        }
        Vec::new()
    }

    // =========================================================================
    // Zoom Handlers
    // =========================================================================

    pub(crate) fn handle_touch_sample(&mut self, touches: &[TouchPoint]) -> Vec<Message> {
        self.zoom.on_touch_sample(touches);
        Vec::new()
    }

    pub(crate) fn handle_touch_end(&mut self) -> Vec<Message> {
        self.zoom.on_touch_end();
        Vec::new()
    }

    pub(crate) fn handle_zoom_in(&mut self) -> Vec<Message> {
        self.zoom.zoom_in();
        Vec::new()
    }

    pub(crate) fn handle_zoom_out(&mut self) -> Vec<Message> {
        self.zoom.zoom_out();
        Vec::new()
    }

    pub(crate) fn handle_reset_zoom(&mut self) -> Vec<Message> {
        self.zoom.reset();
        Vec::new()
    }
}
