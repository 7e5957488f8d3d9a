// SPDX-License-Identifier: MPL-2.0

//! Photo capture from the preview stream
//!
//! Capture grabs the most recent preview frame rather than pulling a fresh
//! one from the backend, so the preview stream is never interrupted.

use crate::backends::camera::types::CameraFrame;
use crate::errors::PhotoError;
use std::sync::Arc;
use tracing::debug;

/// Photo capture handler
pub struct PhotoCapture;

impl PhotoCapture {
    /// Use the current preview frame as the photo
    ///
    /// Returns `PhotoError::NoFrameAvailable` when the preview has not
    /// produced a frame yet (capture pressed before the pipeline warmed up).
    pub fn capture_from_frame(
        frame: Option<Arc<CameraFrame>>,
    ) -> Result<Arc<CameraFrame>, PhotoError> {
        let frame = frame.ok_or(PhotoError::NoFrameAvailable)?;
        debug!(
            width = frame.width,
            height = frame.height,
            "Using current preview frame for photo"
        );
        Ok(frame)
    }
}
