// SPDX-License-Identifier: GPL-3.0-only

//! CLI commands for camera operations
//!
//! This module provides command-line functionality for:
//! - Listing available cameras
//! - Taking a one-shot photo without the interactive screen

use snapcam::backends::camera::{CameraPipeline, enumerate_cameras};
use snapcam::config::Config;
use snapcam::errors::CameraError;
use snapcam::pipelines::photo::{PhotoEncoder, PhotoPipeline};
use snapcam::storage;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// How long to wait for the pipeline to deliver a first frame
const FIRST_FRAME_TIMEOUT: Duration = Duration::from_secs(2);

/// List all available cameras
pub fn list_cameras() -> Result<(), Box<dyn std::error::Error>> {
    let cameras = enumerate_cameras();

    if cameras.is_empty() {
        println!("No cameras found.");
        return Ok(());
    }

    println!("Available cameras:");
    println!();
    for (index, camera) in cameras.iter().enumerate() {
        println!("  [{}] {} ({} facing)", index, camera.name, camera.facing);
        println!("      Format: {}", camera.format);
    }

    Ok(())
}

/// Take a photo using the specified camera
pub fn take_photo(
    camera_index: usize,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let cameras = enumerate_cameras();
    if cameras.is_empty() {
        return Err(CameraError::NoCameraFound.into());
    }
    let device = cameras
        .get(camera_index)
        .ok_or(CameraError::InvalidIndex(camera_index))?;

    let config = Config::default_path()
        .map(|path| Config::load(&path))
        .unwrap_or_default();

    println!("Using camera: {}", device.name);
    let mut pipeline = CameraPipeline::start(device)?;

    // Wait for the first frame
    let deadline = Instant::now() + FIRST_FRAME_TIMEOUT;
    let frame = loop {
        if let Some(frame) = pipeline.try_next_frame() {
            break frame;
        }
        if Instant::now() >= deadline {
            return Err("Timed out waiting for a camera frame".into());
        }
        std::thread::sleep(Duration::from_millis(5));
    };

    let saved_path = match output {
        Some(path) => {
            // Explicit output path: encode and write directly
            let encoder = PhotoEncoder::new(config.photo_format.into());
            let encoded = encoder.encode(&frame, false)?;
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, &encoded.data)?;
            path
        }
        None => {
            let gallery = storage::ensure_gallery_directory()?;
            let photo_pipeline = PhotoPipeline::new(config.photo_format.into());
            photo_pipeline.capture_to(std::sync::Arc::new(frame), false, gallery)?
        }
    };

    println!("Saved: {}", saved_path.display());
    Ok(())
}
