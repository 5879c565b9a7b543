// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Each action spawns one worker thread and reports back over `App::events_tx`.

mod analyze;   // src/gui/actions/analyze.rs
mod check_key; // src/gui/actions/check_key.rs
mod refresh;   // src/gui/actions/refresh.rs

pub use analyze::analyze;
pub use check_key::check_key;
pub use refresh::refresh;
