// src/gui/components/key_dialog.rs
//
// Modal-ish prompt for the CFBD key. Shown at startup when the stored key is
// missing or rejected, and again after a rejected submit.

use eframe::egui::{self, Align2, Color32, Key, TextEdit, widgets::Spinner};

use crate::{
    config::{Credential, consts::API_KEY_URL},
    gui::{actions, app::App},
};

pub fn draw(ctx: &egui::Context, app: &mut App) {
    if !app.key_dialog.open {
        return;
    }

    let mut submit = false;

    egui::Window::new("API Key Required")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label("Please enter your CFBD API key:");
            ui.hyperlink_to("Get one from collegefootballdata.com", API_KEY_URL);
            ui.add_space(6.0);

            let field = ui.add(
                TextEdit::singleline(&mut app.key_dialog.text)
                    .password(true)
                    .desired_width(280.0),
            );
            if field.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                submit = true;
            }

            if let Some(err) = app.key_dialog.error.as_deref() {
                ui.colored_label(Color32::from_rgb(220, 30, 30), err);
            }

            ui.horizontal(|ui| {
                let checking = app.key_dialog.checking;
                if ui.add_enabled(!checking, egui::Button::new("Submit")).clicked() {
                    submit = true;
                }
                if checking {
                    ui.add(Spinner::new().size(14.0));
                }
            });
        });

    if submit && !app.key_dialog.checking {
        let candidate = Credential::new(app.key_dialog.text.clone());
        actions::check_key(app, ctx, candidate, true);
    }
}
