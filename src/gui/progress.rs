// src/gui/progress.rs
//! Everything a worker thread can tell the UI thread.

use std::path::PathBuf;

use crate::{calendar::Period, config::Credential, games::Game, progress::ProgressEvent};

#[derive(Debug)]
pub enum WorkerEvent {
    /// Result of a key check. `from_dialog` is false for the startup check of the stored key.
    KeyChecked { credential: Credential, valid: bool, from_dialog: bool },
    Period(Period),
    Games(Vec<Game>),
    Progress(ProgressEvent),
    Saved(PathBuf),
    Failed(String),
}

impl From<ProgressEvent> for WorkerEvent {
    fn from(ev: ProgressEvent) -> Self {
        WorkerEvent::Progress(ev)
    }
}
