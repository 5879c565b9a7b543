// src/gui/components/games_table.rs
//
// Away / Home table of the current week's games. Click a row to select it.
// Purely a view; the only thing it writes back is `app.selected`.

use eframe::egui::{self, Sense};
use egui_extras::{Column, TableBuilder};

use crate::gui::app::App;

const ROW_HEIGHT: f32 = 22.0;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.games.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label(if app.running { "Loading games..." } else { "No games to show" });
        });
        return;
    }

    let mut clicked = None;

    TableBuilder::new(ui)
        .striped(true)
        .sense(Sense::click())
        .column(Column::remainder().at_least(180.0).clip(true))
        .column(Column::remainder().at_least(180.0).clip(true))
        .header(ROW_HEIGHT, |mut header| {
            header.col(|ui| {
                ui.strong("Away Team");
            });
            header.col(|ui| {
                ui.strong("Home Team");
            });
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, app.games.len(), |mut row| {
                let ix = row.index();
                let game = &app.games[ix];
                row.set_selected(app.selected == Some(ix));

                row.col(|ui| {
                    ui.label(game.away_team.as_str());
                });
                row.col(|ui| {
                    ui.label(game.home_team.as_str());
                });

                if row.response().clicked() {
                    clicked = Some(ix);
                }
            });
        });

    // Selection is frozen while a worker runs.
    if let Some(ix) = clicked {
        if !app.running {
            logd!("UI: selected {}", app.games[ix].matchup_label());
            app.selected = Some(ix);
        }
    }
}
