// SPDX-License-Identifier: GPL-3.0-only

//! Shared types for camera backends

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

/// Which way a camera faces
///
/// Mobile-style devices carry a user-facing and a world-facing lens; the
/// facing decides mirror defaults and which synthetic pattern a test source
/// produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CameraFacing {
    /// User-facing lens (selfie)
    #[default]
    Front,
    /// World-facing lens
    Back,
}

impl CameraFacing {
    /// The facing on the other side of the device
    pub fn toggled(&self) -> Self {
        match self {
            CameraFacing::Front => CameraFacing::Back,
            CameraFacing::Back => CameraFacing::Front,
        }
    }
}

impl std::fmt::Display for CameraFacing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CameraFacing::Front => write!(f, "front"),
            CameraFacing::Back => write!(f, "back"),
        }
    }
}

/// Represents a camera device
#[derive(Debug, Clone)]
pub struct CameraDevice {
    pub name: String,
    pub facing: CameraFacing,
    /// The single format this device streams
    pub format: CameraFormat,
}

/// Framerate as a fraction (numerator/denominator)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Framerate {
    pub num: u32,
    pub denom: u32,
}

impl Framerate {
    /// Create a framerate from an integer (e.g., 30 becomes 30/1)
    pub fn from_int(fps: u32) -> Self {
        Self { num: fps, denom: 1 }
    }

    /// Get the framerate as a floating point value
    pub fn as_f64(&self) -> f64 {
        self.num as f64 / self.denom as f64
    }

    /// Get the rounded integer framerate
    pub fn as_int(&self) -> u32 {
        self.num / self.denom
    }
}

impl std::fmt::Display for Framerate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.denom != 1 {
            write!(f, "{:.2}", self.as_f64())
        } else {
            write!(f, "{}", self.num)
        }
    }
}

impl Default for Framerate {
    fn default() -> Self {
        Self { num: 30, denom: 1 }
    }
}

/// Camera format specification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CameraFormat {
    pub width: u32,
    pub height: u32,
    pub framerate: Framerate,
    pub pixel_format: PixelFormat,
}

impl std::fmt::Display for CameraFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{} @ {}fps", self.width, self.height, self.framerate)
    }
}

/// Pixel format for camera frames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// RGBA - 32-bit with alpha (4 bytes per pixel)
    Rgba,
    /// RGB24 - 24-bit RGB (3 bytes per pixel, no alpha)
    Rgb24,
    /// Gray8 - 8-bit grayscale (single channel)
    Gray8,
}

impl PixelFormat {
    /// Bytes per pixel for this format
    pub fn bytes_per_pixel(&self) -> u32 {
        match self {
            PixelFormat::Rgba => 4,
            PixelFormat::Rgb24 => 3,
            PixelFormat::Gray8 => 1,
        }
    }
}

/// A single captured frame
///
/// Frame data is reference counted so frames can be handed from the pipeline
/// thread to the preview and the photo pipeline without copying.
#[derive(Debug, Clone)]
pub struct CameraFrame {
    pub width: u32,
    pub height: u32,
    pub data: Arc<[u8]>,
    pub format: PixelFormat,
    /// Bytes per row; may exceed width * bytes_per_pixel for padded sources
    pub stride: u32,
    pub captured_at: Instant,
}

impl CameraFrame {
    /// Access the raw frame bytes
    pub fn data_slice(&self) -> &[u8] {
        &self.data
    }

    /// Sample one pixel as RGB, clamping coordinates to the frame bounds
    pub fn sample_rgb(&self, x: u32, y: u32) -> (u8, u8, u8) {
        let x = x.min(self.width.saturating_sub(1));
        let y = y.min(self.height.saturating_sub(1));
        let data = self.data_slice();

        match self.format {
            PixelFormat::Rgba => {
                let idx = (y * self.stride + x * 4) as usize;
                if idx + 2 < data.len() {
                    (data[idx], data[idx + 1], data[idx + 2])
                } else {
                    (0, 0, 0)
                }
            }
            PixelFormat::Rgb24 => {
                let idx = (y * self.stride + x * 3) as usize;
                if idx + 2 < data.len() {
                    (data[idx], data[idx + 1], data[idx + 2])
                } else {
                    (0, 0, 0)
                }
            }
            PixelFormat::Gray8 => {
                let idx = (y * self.stride + x) as usize;
                if idx < data.len() {
                    let v = data[idx];
                    (v, v, v)
                } else {
                    (0, 0, 0)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facing_toggles() {
        assert_eq!(CameraFacing::Front.toggled(), CameraFacing::Back);
        assert_eq!(CameraFacing::Back.toggled(), CameraFacing::Front);
    }

    #[test]
    fn test_sample_rgb_clamps_out_of_bounds() {
        let frame = CameraFrame {
            width: 2,
            height: 2,
            data: Arc::from(vec![
                255, 0, 0, 255, 0, 255, 0, 255, //
                0, 0, 255, 255, 9, 9, 9, 255,
            ]),
            format: PixelFormat::Rgba,
            stride: 8,
            captured_at: Instant::now(),
        };

        assert_eq!(frame.sample_rgb(0, 0), (255, 0, 0));
        // Coordinates past the edge clamp to the last pixel
        assert_eq!(frame.sample_rgb(99, 99), (9, 9, 9));
    }

    #[test]
    fn test_gray8_expands_to_rgb() {
        let frame = CameraFrame {
            width: 2,
            height: 1,
            data: Arc::from(vec![7u8, 200u8]),
            format: PixelFormat::Gray8,
            stride: 2,
            captured_at: Instant::now(),
        };
        assert_eq!(frame.sample_rgb(1, 0), (200, 200, 200));
    }
}
