//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

/// Queues `cmd` without blocking the UI thread. Returns whether it was queued.
pub fn dispatch_backend_command(cmd_tx: &Sender<BackendCommand>, cmd: BackendCommand) -> bool {
    let cmd_name = match &cmd {
        BackendCommand::FetchCatalog => "fetch_catalog",
        BackendCommand::FetchThumbnails { .. } => "fetch_thumbnails",
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            true
        }
        Err(TrySendError::Full(_)) => {
            tracing::warn!(command = cmd_name, "ui command queue is full; command dropped");
            false
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::warn!(
                command = cmd_name,
                "backend command processor disconnected (possible startup/runtime failure)"
            );
            false
        }
    }
}
