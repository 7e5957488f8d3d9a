// SPDX-License-Identifier: MPL-2.0

//! Integration tests for configuration module

use snapcam::Config;

#[test]
fn test_config_default() {
    let config = Config::default();

    // Check sensible defaults
    assert!(
        config.mirror_preview,
        "Mirror preview should be enabled by default"
    );
}

#[test]
fn test_config_default_facing_is_front() {
    use snapcam::backends::camera::types::CameraFacing;

    let config = Config::default();
    assert_eq!(config.last_camera_facing, CameraFacing::Front);
}
