// SPDX-License-Identifier: GPL-3.0-only

//! Photo encoding
//!
//! Converts a captured frame to JPEG (with quality control) or PNG
//! (lossless) and writes it to the gallery with a timestamped filename.

use crate::backends::camera::types::CameraFrame;
use crate::config::PhotoOutputFormat;
use crate::constants::photo::{FILENAME_PREFIX, FILENAME_TIMESTAMP};
use crate::errors::PhotoError;
use image::{ImageFormat, Rgb, RgbImage};
use std::path::PathBuf;
use tracing::{debug, info};

/// JPEG quality (0-100)
const JPEG_QUALITY: u8 = 92;

/// Supported encoding formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingFormat {
    /// JPEG format (lossy compression)
    Jpeg,
    /// PNG format (lossless compression)
    Png,
}

impl EncodingFormat {
    /// Get file extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            EncodingFormat::Jpeg => "jpg",
            EncodingFormat::Png => "png",
        }
    }
}

impl From<PhotoOutputFormat> for EncodingFormat {
    fn from(format: PhotoOutputFormat) -> Self {
        match format {
            PhotoOutputFormat::Jpeg => EncodingFormat::Jpeg,
            PhotoOutputFormat::Png => EncodingFormat::Png,
        }
    }
}

/// Encoded image data ready for saving
pub struct EncodedImage {
    pub data: Vec<u8>,
    pub format: EncodingFormat,
    pub width: u32,
    pub height: u32,
}

/// Photo encoder
pub struct PhotoEncoder {
    format: EncodingFormat,
}

impl PhotoEncoder {
    pub fn new(format: EncodingFormat) -> Self {
        Self { format }
    }

    /// Encode a frame to the configured format
    ///
    /// Honors the frame's stride and pixel format; `mirror` flips the image
    /// horizontally so a mirrored preview saves the way it was shown.
    pub fn encode(&self, frame: &CameraFrame, mirror: bool) -> Result<EncodedImage, PhotoError> {
        info!(
            width = frame.width,
            height = frame.height,
            format = ?self.format,
            mirror,
            "Starting encoding"
        );

        let image = Self::frame_to_rgb(frame, mirror);

        let data = match self.format {
            EncodingFormat::Jpeg => Self::encode_jpeg(image)?,
            EncodingFormat::Png => Self::encode_png(image)?,
        };

        debug!(size = data.len(), "Encoding complete");

        Ok(EncodedImage {
            data,
            format: self.format,
            width: frame.width,
            height: frame.height,
        })
    }

    /// Save encoded image to disk
    ///
    /// Generates a timestamped filename in the specified directory.
    pub fn save(&self, encoded: EncodedImage, output_dir: PathBuf) -> Result<PathBuf, PhotoError> {
        let timestamp = chrono::Local::now().format(FILENAME_TIMESTAMP);
        let filename = format!(
            "{}_{}.{}",
            FILENAME_PREFIX,
            timestamp,
            encoded.format.extension()
        );
        let filepath = output_dir.join(&filename);

        std::fs::write(&filepath, &encoded.data)?;

        info!(path = %filepath.display(), "Photo saved");
        Ok(filepath)
    }

    /// Convert a frame to a tightly packed RGB image
    fn frame_to_rgb(frame: &CameraFrame, mirror: bool) -> RgbImage {
        RgbImage::from_fn(frame.width, frame.height, |x, y| {
            let src_x = if mirror { frame.width - 1 - x } else { x };
            let (r, g, b) = frame.sample_rgb(src_x, y);
            Rgb([r, g, b])
        })
    }

    fn encode_jpeg(image: RgbImage) -> Result<Vec<u8>, PhotoError> {
        let mut buffer = Vec::new();
        let mut cursor = std::io::Cursor::new(&mut buffer);

        let mut encoder =
            image::codecs::jpeg::JpegEncoder::new_with_quality(&mut cursor, JPEG_QUALITY);
        encoder
            .encode(
                image.as_raw(),
                image.width(),
                image.height(),
                image::ExtendedColorType::Rgb8,
            )
            .map_err(|e| PhotoError::EncodingFailed(e.to_string()))?;

        Ok(buffer)
    }

    fn encode_png(image: RgbImage) -> Result<Vec<u8>, PhotoError> {
        let mut buffer = Vec::new();
        let mut cursor = std::io::Cursor::new(&mut buffer);

        image
            .write_to(&mut cursor, ImageFormat::Png)
            .map_err(|e| PhotoError::EncodingFailed(e.to_string()))?;

        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::camera::types::PixelFormat;
    use std::sync::Arc;
    use std::time::Instant;

    fn two_pixel_frame() -> CameraFrame {
        // Left pixel red, right pixel blue
        CameraFrame {
            width: 2,
            height: 1,
            data: Arc::from(vec![255, 0, 0, 255, 0, 0, 255, 255]),
            format: PixelFormat::Rgba,
            stride: 8,
            captured_at: Instant::now(),
        }
    }

    #[test]
    fn test_format_extensions() {
        assert_eq!(EncodingFormat::Jpeg.extension(), "jpg");
        assert_eq!(EncodingFormat::Png.extension(), "png");
    }

    #[test]
    fn test_mirror_flips_horizontally() {
        let frame = two_pixel_frame();

        let plain = PhotoEncoder::frame_to_rgb(&frame, false);
        assert_eq!(plain.get_pixel(0, 0).0, [255, 0, 0]);
        assert_eq!(plain.get_pixel(1, 0).0, [0, 0, 255]);

        let mirrored = PhotoEncoder::frame_to_rgb(&frame, true);
        assert_eq!(mirrored.get_pixel(0, 0).0, [0, 0, 255]);
        assert_eq!(mirrored.get_pixel(1, 0).0, [255, 0, 0]);
    }

    #[test]
    fn test_stride_padding_is_skipped() {
        // 1x2 RGB24 frame padded to an 8-byte stride
        let frame = CameraFrame {
            width: 1,
            height: 2,
            data: Arc::from(vec![
                10, 20, 30, 0, 0, 0, 0, 0, //
                40, 50, 60, 0, 0, 0, 0, 0,
            ]),
            format: PixelFormat::Rgb24,
            stride: 8,
            captured_at: Instant::now(),
        };

        let image = PhotoEncoder::frame_to_rgb(&frame, false);
        assert_eq!(image.get_pixel(0, 0).0, [10, 20, 30]);
        assert_eq!(image.get_pixel(0, 1).0, [40, 50, 60]);
    }

    #[test]
    fn test_png_round_trip() {
        let encoder = PhotoEncoder::new(EncodingFormat::Png);
        let encoded = encoder.encode(&two_pixel_frame(), false).unwrap();

        let decoded = image::load_from_memory(&encoded.data).unwrap().to_rgb8();
        assert_eq!(decoded.get_pixel(0, 0).0, [255, 0, 0]);
        assert_eq!(decoded.get_pixel(1, 0).0, [0, 0, 255]);
    }

    #[test]
    fn test_jpeg_encodes_nonempty() {
        let encoder = PhotoEncoder::new(EncodingFormat::Jpeg);
        let encoded = encoder.encode(&two_pixel_frame(), false).unwrap();
        assert!(!encoded.data.is_empty());
        assert_eq!(encoded.format, EncodingFormat::Jpeg);
    }
}
