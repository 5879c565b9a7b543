// src/gui/actions/check_key.rs
use std::thread;

use eframe::egui;

use crate::{
    config::Credential,
    gui::{app::App, progress::WorkerEvent},
};

/// Validate `credential` off the UI thread. The app adopts it (and saves it
/// when it came from the dialog) once the answer comes back.
pub fn check_key(app: &mut App, ctx: &egui::Context, credential: Credential, from_dialog: bool) {
    if credential.is_empty() {
        app.ask_for_key(from_dialog.then(|| s!("Please enter an API key.")));
        return;
    }

    app.running = true;
    app.key_dialog.checking = true;
    app.status = s!("Checking API key...");

    let client = app.client.clone();
    let tx = app.events_tx.clone();
    let ctx = ctx.clone();

    thread::spawn(move || {
        let valid = client.validate_credential(&credential);
        logf!("Key: check {}", if valid { "OK" } else { "rejected" });
        let _ = tx.send(WorkerEvent::KeyChecked { credential, valid, from_dialog });
        ctx.request_repaint();
    });
}
