// SPDX-License-Identifier: MPL-2.0

//! Photo capture pipeline
//!
//! ```text
//! Preview frame → Capture → Encoding → Disk I/O
//!       ↓
//! Preview continues uninterrupted
//! ```
//!
//! All stages run synchronously on the event-loop thread; a single frame
//! encode is fast enough that the preview only skips a beat, matching the
//! capture-flash the screen shows anyway.

pub mod capture;
pub mod encoding;

pub use capture::PhotoCapture;
pub use encoding::{EncodedImage, EncodingFormat, PhotoEncoder};

use crate::backends::camera::types::CameraFrame;
use crate::errors::PhotoError;
use std::path::PathBuf;
use std::sync::Arc;

/// Complete photo capture pipeline
///
/// Orchestrates the capture → encode → save workflow.
pub struct PhotoPipeline {
    encoder: PhotoEncoder,
}

impl PhotoPipeline {
    /// Create a pipeline writing the given format
    pub fn new(format: EncodingFormat) -> Self {
        Self {
            encoder: PhotoEncoder::new(format),
        }
    }

    /// Run the full pipeline on a frame and return the saved path
    ///
    /// `mirror` bakes the horizontal preview flip into the saved photo, so
    /// what the user sees is what lands in the gallery.
    pub fn capture_to(
        &self,
        frame: Arc<CameraFrame>,
        mirror: bool,
        output_dir: PathBuf,
    ) -> Result<PathBuf, PhotoError> {
        let encoded = self.encoder.encode(&frame, mirror)?;
        self.encoder.save(encoded, output_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::camera::types::PixelFormat;
    use std::time::Instant;

    fn test_frame() -> Arc<CameraFrame> {
        Arc::new(CameraFrame {
            width: 4,
            height: 4,
            data: Arc::from(vec![128u8; 4 * 4 * 4]),
            format: PixelFormat::Rgba,
            stride: 16,
            captured_at: Instant::now(),
        })
    }

    #[test]
    fn test_pipeline_saves_photo() {
        let dir = std::env::temp_dir().join("snapcam-test-pipeline-save");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();

        let pipeline = PhotoPipeline::new(EncodingFormat::Png);
        let path = pipeline.capture_to(test_frame(), false, dir.clone()).unwrap();
        assert!(path.exists());
        assert_eq!(path.extension().unwrap(), "png");

        let _ = std::fs::remove_dir_all(&dir);
    }
}
