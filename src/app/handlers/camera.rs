// SPDX-License-Identifier: GPL-3.0-only

//! Camera control handlers
//!
//! Handles camera switching, frame delivery, and the mirror setting.

use crate::app::state::{AppModel, Message};
use crate::backends::camera::types::CameraFrame;
use crate::constants::timing::FRAME_LOG_INTERVAL;
use std::sync::Arc;
use tracing::{debug, info};

impl AppModel {
    pub(crate) fn handle_switch_camera(&mut self) -> Vec<Message> {
        if self.available_cameras.len() <= 1 {
            info!("Only one camera available, cannot switch");
            return Vec::new();
        }

        self.current_camera_index =
            (self.current_camera_index + 1) % self.available_cameras.len();
        let camera = &self.available_cameras[self.current_camera_index];
        info!(
            new_index = self.current_camera_index,
            camera = %camera.name,
            "Switching to camera"
        );

        // Reset zoom when switching cameras; zoom ranges are lens-specific
        self.zoom.reset();
        // Stale frame belongs to the old lens
        self.current_frame = None;

        self.config.last_camera_facing = camera.facing;
        self.status.set(format!("Camera: {}", camera.name));
        self.persist_config();

        Vec::new()
    }

    pub(crate) fn handle_camera_frame(&mut self, frame: Arc<CameraFrame>) -> Vec<Message> {
        static FRAME_MSG_COUNT: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(0);
        let count = FRAME_MSG_COUNT.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        if count % FRAME_LOG_INTERVAL == 0 {
            debug!(
                message = count,
                width = frame.width,
                height = frame.height,
                "Camera frame received"
            );
        }

        self.current_frame = Some(frame);
        Vec::new()
    }

    pub(crate) fn handle_toggle_mirror_preview(&mut self) -> Vec<Message> {
        self.config.mirror_preview = !self.config.mirror_preview;
        info!(
            mirror_preview = self.config.mirror_preview,
            "Mirror preview toggled"
        );
        self.status.set(if self.config.mirror_preview {
            "Mirror on"
        } else {
            "Mirror off"
        });
        self.persist_config();
        Vec::new()
    }
}
