// SPDX-License-Identifier: GPL-3.0-only

//! Synthetic frame sources
//!
//! Stands in for real camera hardware, which is outside this repository.
//! Each facing produces a visually distinct, deterministic test pattern with
//! a moving element so a running preview is recognizable at a glance.

use super::types::{CameraDevice, CameraFacing, CameraFormat, CameraFrame, PixelFormat};
use std::sync::Arc;
use std::time::Instant;

/// Deterministic test-pattern generator for one camera device
pub struct SyntheticCamera {
    facing: CameraFacing,
    format: CameraFormat,
    tick: u64,
}

impl SyntheticCamera {
    pub fn new(device: &CameraDevice) -> Self {
        Self {
            facing: device.facing,
            format: device.format,
            tick: 0,
        }
    }

    /// Produce the next frame and advance the pattern clock
    pub fn next_frame(&mut self) -> CameraFrame {
        let frame = self.frame_at(self.tick);
        self.tick = self.tick.wrapping_add(1);
        frame
    }

    /// Render the pattern for a given tick
    ///
    /// Exposed separately so tests can pin a tick and compare pixels.
    pub fn frame_at(&self, tick: u64) -> CameraFrame {
        let width = self.format.width;
        let height = self.format.height;
        let bpp = PixelFormat::Rgba.bytes_per_pixel();
        let stride = width * bpp;

        let mut data = vec![0u8; (stride * height) as usize];
        for y in 0..height {
            for x in 0..width {
                let (r, g, b) = match self.facing {
                    CameraFacing::Front => front_pixel(x, y, width, height, tick),
                    CameraFacing::Back => back_pixel(x, y, width, height, tick),
                };
                let idx = (y * stride + x * bpp) as usize;
                data[idx] = r;
                data[idx + 1] = g;
                data[idx + 2] = b;
                data[idx + 3] = 255;
            }
        }

        CameraFrame {
            width,
            height,
            data: Arc::from(data),
            format: PixelFormat::Rgba,
            stride,
            captured_at: Instant::now(),
        }
    }
}

/// Front lens: warm diagonal gradient with a vertical sweep band
fn front_pixel(x: u32, y: u32, width: u32, height: u32, tick: u64) -> (u8, u8, u8) {
    let r = (x * 255 / width.max(1)) as u8;
    let g = (y * 255 / height.max(1)) as u8;
    let band = ((tick * 4) % width as u64) as u32;
    let b = if x.abs_diff(band) < 8 { 255 } else { 64 };
    (r.saturating_add(64), g, b)
}

/// Back lens: cool checkerboard with a horizontal sweep band
fn back_pixel(x: u32, y: u32, _width: u32, height: u32, tick: u64) -> (u8, u8, u8) {
    let checker = ((x / 32) + (y / 32)) % 2 == 0;
    let base: u8 = if checker { 160 } else { 48 };
    let band = ((tick * 4) % height as u64) as u32;
    let g = if y.abs_diff(band) < 8 { 255 } else { base / 2 };
    (base / 4, g, base)
}
