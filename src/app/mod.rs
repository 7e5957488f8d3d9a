// SPDX-License-Identifier: MPL-2.0

//! Main application module
//!
//! This module contains the application state, message handling, and the
//! gesture-to-zoom core.
//!
//! # Architecture
//!
//! - `gesture`: Pinch-to-zoom gesture controller
//! - `state`: Application state types (AppModel, Message, StatusLine)
//! - `update`: Message dispatch
//! - `handlers`: Focused handler methods grouped by domain

pub mod gesture;
mod handlers;
mod state;
mod update;

pub use gesture::{TouchPoint, ZoomDirection, ZoomGestureController, zoom_label};
pub use state::{AppModel, Message, StatusLine};
