// src/gui/actions/refresh.rs
use std::thread;

use eframe::egui;

use crate::gui::{app::App, progress::WorkerEvent};

pub fn refresh(app: &mut App, ctx: &egui::Context) {
    if app.running {
        logd!("Refresh: ignored, worker busy");
        return;
    }

    app.running = true;
    app.selected = None;
    app.status = s!("Fetching current week's games...");

    let client = app.client.clone();
    let division = app.options.api.division.clone();
    let tx = app.events_tx.clone();
    let ctx = ctx.clone();

    thread::spawn(move || {
        let period = client.resolve_current_period();
        logf!("Refresh: Begin {}", period.label());
        let _ = tx.send(WorkerEvent::Period(period.clone()));
        ctx.request_repaint();

        let games = client.list_games(
            period.year,
            period.week,
            &period.season_type,
            division.as_deref(),
        );
        let _ = tx.send(WorkerEvent::Games(games));
        ctx.request_repaint();
    });
}
