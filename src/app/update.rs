// SPDX-License-Identifier: GPL-3.0-only

//! Message update handling
//!
//! The main `update()` function acts as a dispatcher, routing each message
//! to a focused handler method implemented in the `handlers` submodules.
//! Handlers return follow-up messages for the event loop to feed back in;
//! most return none.
//!
//! # Handler Modules
//!
//! - `handlers::camera`: Camera switching, frame handling, mirror preview
//! - `handlers::capture`: Photo capture and zoom
//! - `handlers::ui`: Gallery and status line

use crate::app::state::{AppModel, Message};

impl AppModel {
    /// Main message handler - routes messages to appropriate handler methods.
    pub fn update(&mut self, message: Message) -> Vec<Message> {
        match message {
            // ===== Camera Control =====
            Message::SwitchCamera => self.handle_switch_camera(),
            Message::CameraFrame(frame) => self.handle_camera_frame(frame),
            Message::ToggleMirrorPreview => self.handle_toggle_mirror_preview(),

            // ===== Zoom =====
            Message::TouchSample(touches) => self.handle_touch_sample(&touches),
            Message::TouchEnd => self.handle_touch_end(),
            Message::ZoomIn => self.handle_zoom_in(),
            Message::ZoomOut => self.handle_zoom_out(),
            Message::ResetZoom => self.handle_reset_zoom(),

            // ===== Capture Operations =====
            Message::Capture => self.handle_capture(),
            Message::PhotoSaved(result) => self.handle_photo_saved(result),

            // ===== Gallery & UI =====
            Message::OpenGallery => self.handle_open_gallery(),
            Message::ClearStatusMessage => {
                self.status.clear();
                Vec::new()
            }
        }
    }
}
