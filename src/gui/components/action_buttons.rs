// src/gui/components/action_buttons.rs

use eframe::egui::{self, ProgressBar, widgets::Spinner};

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        let can_act = !app.running && app.has_key();

        if ui
            .add_enabled(can_act, egui::Button::new("Refresh Games"))
            .clicked()
        {
            actions::refresh(app, ui.ctx());
        }

        let button_analyze = ui.add_enabled(
            can_act && app.selected.is_some(),
            egui::Button::new(egui::RichText::new("Analyze Selected Game").strong()),
        );
        if button_analyze.clicked() {
            actions::analyze(app, ui.ctx());
        }

        if app.running {
            ui.add(Spinner::new().size(16.0));
        }

        ui.label(app.status.as_str());
    });

    if let Some(p) = app.progress {
        ui.add(ProgressBar::new(p).show_percentage());
    }
}
