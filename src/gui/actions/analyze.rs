// src/gui/actions/analyze.rs
use std::thread;

use eframe::egui;

use crate::{
    file,
    gui::{app::App, progress::WorkerEvent},
    matchup::{BuildOptions, build_matchup_record},
    progress::ChannelProgress,
};

pub fn analyze(app: &mut App, ctx: &egui::Context) {
    if app.running {
        return;
    }
    let Some(game) = app.selected.and_then(|ix| app.games.get(ix)).cloned() else {
        app.status = s!("Please select a game to analyze");
        return;
    };

    logf!("Analyze: Begin id={} {}", game.id, game.matchup_label());
    app.running = true;
    app.progress = Some(0.0);
    app.status = format!("Analyzing {}...", game.matchup_label());

    let client = app.client.clone();
    let out_dir = app.options.output.dir.clone();
    let opts = BuildOptions { exclude_garbage_time: app.options.api.exclude_garbage_time };
    let tx = app.events_tx.clone();
    let ctx = ctx.clone();

    // → Analysis runs here, off the UI thread ←
    thread::spawn(move || {
        let mut prog = ChannelProgress::<WorkerEvent>::new(tx.clone()).with_notify({
            let ctx = ctx.clone();
            move || ctx.request_repaint()
        });

        let record = build_matchup_record(&client, &game, opts, Some(&mut prog));

        let ev = match file::save_matchup(&out_dir, &game, &record) {
            Ok(path) => WorkerEvent::Saved(path),
            Err(e) => {
                loge!("Analyze: Save failed id={}: {}", game.id, e);
                WorkerEvent::Failed(format!("Error analyzing game: {e}"))
            }
        };
        let _ = tx.send(ev);
        ctx.request_repaint();
    });
}
