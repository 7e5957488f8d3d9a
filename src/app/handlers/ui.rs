// SPDX-License-Identifier: GPL-3.0-only

//! Gallery and status-line handlers

use crate::app::state::{AppModel, Message};
use crate::storage;
use tracing::error;

impl AppModel {
    pub(crate) fn handle_open_gallery(&mut self) -> Vec<Message> {
        match storage::ensure_gallery_directory() {
            Ok(dir) => {
                if let Err(err) = open::that(&dir) {
                    error!(%err, "Failed to open gallery");
                    self.status.set(format!("Error: {}", err));
                } else {
                    self.status.set(format!("Gallery: {}", dir.display()));
                }
            }
            Err(err) => {
                error!(%err, "Failed to prepare gallery directory");
                self.status.set(format!("Error: {}", err));
            }
        }
        Vec::new()
    }
}
