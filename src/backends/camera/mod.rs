// SPDX-License-Identifier: MPL-2.0

//! Camera backend: device enumeration and the frame pipeline
//!
//! The pipeline runs a producer thread that pushes frames into a bounded
//! channel drained by the event loop. Frames are dropped, not queued, when
//! the consumer falls behind, keeping preview latency low.

pub mod synthetic;
pub mod types;

use crate::constants::timing::{MAX_BUFFERED_FRAMES, SYNTHETIC_FRAME_DURATION};
use crate::errors::CameraError;
use futures::channel::mpsc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use synthetic::SyntheticCamera;
use types::{CameraDevice, CameraFacing, CameraFormat, CameraFrame, Framerate, PixelFormat};

/// Enumerate the available camera devices, front lens first
///
/// Real sensor discovery belongs to the host platform; this backend exposes
/// the device-level shape of it over synthetic sources.
pub fn enumerate_cameras() -> Vec<CameraDevice> {
    vec![
        CameraDevice {
            name: "Front Camera".to_string(),
            facing: CameraFacing::Front,
            format: CameraFormat {
                width: 1280,
                height: 720,
                framerate: Framerate::from_int(30),
                pixel_format: PixelFormat::Rgba,
            },
        },
        CameraDevice {
            name: "Back Camera".to_string(),
            facing: CameraFacing::Back,
            format: CameraFormat {
                width: 1920,
                height: 1080,
                framerate: Framerate::from_int(30),
                pixel_format: PixelFormat::Rgba,
            },
        },
    ]
}

/// Find the device index for a facing, if present
pub fn index_for_facing(devices: &[CameraDevice], facing: CameraFacing) -> Option<usize> {
    devices.iter().position(|d| d.facing == facing)
}

/// A running camera pipeline
///
/// Owns the producer thread and its cancel flag. Dropping the pipeline stops
/// the producer; this is how camera switches tear down the old lens before
/// starting the new one.
pub struct CameraPipeline {
    cancel: Arc<AtomicBool>,
    handle: Option<thread::JoinHandle<()>>,
    receiver: mpsc::Receiver<CameraFrame>,
}

impl CameraPipeline {
    /// Start streaming frames from the given device
    pub fn start(device: &CameraDevice) -> Result<Self, CameraError> {
        let (mut sender, receiver) = mpsc::channel(MAX_BUFFERED_FRAMES);
        let cancel = Arc::new(AtomicBool::new(false));
        let cancel_flag = Arc::clone(&cancel);
        let mut source = SyntheticCamera::new(device);
        let name = device.name.clone();

        let handle = thread::Builder::new()
            .name(format!("frames-{}", device.facing))
            .spawn(move || {
                tracing::debug!(camera = %name, "Frame producer started");
                while !cancel_flag.load(Ordering::Acquire) {
                    let frame = source.next_frame();
                    match sender.try_send(frame) {
                        Ok(()) => {}
                        Err(e) if e.is_disconnected() => break,
                        // Channel full: drop the frame, the consumer is behind
                        Err(_) => {}
                    }
                    thread::sleep(SYNTHETIC_FRAME_DURATION);
                }
                tracing::debug!(camera = %name, "Frame producer stopped");
            })
            .map_err(|e| CameraError::PipelineFailed(e.to_string()))?;

        Ok(Self {
            cancel,
            handle: Some(handle),
            receiver,
        })
    }

    /// Non-blocking receive of the next frame, if one is ready
    pub fn try_next_frame(&mut self) -> Option<CameraFrame> {
        self.receiver.try_next().ok().flatten()
    }
}

impl Drop for CameraPipeline {
    fn drop(&mut self) {
        self.cancel.store(true, Ordering::Release);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
