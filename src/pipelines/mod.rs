// SPDX-License-Identifier: MPL-2.0

//! Capture pipelines
//!
//! - [`photo`]: Photo capture, encoding, and saving

pub mod photo;
