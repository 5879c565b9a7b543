// src/gui/app.rs
use std::{
    error::Error,
    sync::mpsc::{self, Receiver, Sender},
};

use eframe::egui;

use crate::{
    calendar::Period,
    client::ApiClient,
    config::{AppOptions, CredentialStore},
    games::Game,
    progress::ProgressEvent,
};

use super::{actions, components, progress::WorkerEvent};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let app_options = AppOptions::default();
    let store = CredentialStore::new(&app_options.credential_file);
    let client = ApiClient::new(&app_options.api, store.load())?;

    eframe::run_native(
        "College Football Matchup Analyzer",
        options,
        Box::new(move |cc| Ok(Box::new(App::new(&cc.egui_ctx, app_options, store, client)))),
    )?;
    Ok(())
}

/// State of the API key prompt.
#[derive(Default)]
pub struct KeyDialog {
    pub open: bool,
    pub text: String,
    pub error: Option<String>,
    pub checking: bool,
}

pub struct App {
    pub options: AppOptions,
    pub store: CredentialStore,

    // Only ever replaced here on the UI thread; workers get clones.
    pub client: ApiClient,

    pub period: Option<Period>,
    pub games: Vec<Game>,
    pub selected: Option<usize>,

    pub status: String,
    /// 0.0..=1.0 while an analysis runs.
    pub progress: Option<f32>,
    pub running: bool,

    pub key_dialog: KeyDialog,

    pub(super) events_tx: Sender<WorkerEvent>,
    events_rx: Receiver<WorkerEvent>,
}

impl App {
    pub fn new(
        ctx: &egui::Context,
        options: AppOptions,
        store: CredentialStore,
        client: ApiClient,
    ) -> Self {
        let (events_tx, events_rx) = mpsc::channel();

        let mut app = Self {
            options,
            store,
            client,
            period: None,
            games: Vec::new(),
            selected: None,
            status: s!("Idle"),
            progress: None,
            running: false,
            key_dialog: KeyDialog::default(),
            events_tx,
            events_rx,
        };

        let stored = app.client.credential().clone();
        if stored.is_empty() {
            logf!("Init: no stored API key");
            app.ask_for_key(None);
        } else {
            logf!("Init: checking stored API key");
            actions::check_key(&mut app, ctx, stored, false);
        }
        app
    }

    pub fn week_label(&self) -> String {
        match &self.period {
            Some(p) => p.label(),
            None => s!("Loading..."),
        }
    }

    pub fn has_key(&self) -> bool {
        !self.client.credential().is_empty() && !self.key_dialog.open
    }

    pub fn ask_for_key(&mut self, error: Option<String>) {
        self.key_dialog.open = true;
        self.key_dialog.checking = false;
        self.key_dialog.error = error;
        self.status = s!("API key required");
    }

    /// Drain whatever the workers have sent since the last frame.
    fn poll_events(&mut self, ctx: &egui::Context) {
        while let Ok(ev) = self.events_rx.try_recv() {
            self.handle(ev, ctx);
        }
    }

    fn handle(&mut self, ev: WorkerEvent, ctx: &egui::Context) {
        match ev {
            WorkerEvent::KeyChecked { credential, valid, from_dialog } => {
                self.running = false;
                if !valid {
                    let err = from_dialog.then(|| s!("Invalid API key. Please try again."));
                    self.ask_for_key(err);
                    return;
                }
                if from_dialog {
                    match self.store.save(&credential) {
                        Ok(()) => logf!("Key: saved to {}", self.store.path().display()),
                        Err(e) => loge!("Key: save failed: {}", e),
                    }
                }
                self.client = self.client.with_credential(credential);
                self.key_dialog = KeyDialog::default();
                actions::refresh(self, ctx);
            }
            WorkerEvent::Period(p) => {
                logd!("UI: period {}", p.label());
                self.period = Some(p);
            }
            WorkerEvent::Games(games) => {
                self.running = false;
                self.selected = None;
                self.status = if games.is_empty() {
                    s!("No games found for the current week.")
                } else {
                    format!("Loaded {} games", games.len())
                };
                self.games = games;
            }
            WorkerEvent::Progress(ProgressEvent::Step { label, percent }) => {
                self.progress = Some(f32::from(percent) / 100.0);
                self.status = label;
            }
            WorkerEvent::Progress(ProgressEvent::Log(msg)) => self.status = msg,
            WorkerEvent::Progress(ProgressEvent::Finished) => {}
            WorkerEvent::Saved(path) => {
                self.running = false;
                self.progress = None;
                self.status = format!("Analysis complete! Data saved to {}", path.display());
            }
            WorkerEvent::Failed(msg) => {
                self.running = false;
                self.progress = None;
                self.status = msg;
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_events(ctx);

        egui::TopBottomPanel::top("week").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.heading(self.week_label());
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("actions").show(ctx, |ui| {
            ui.add_space(4.0);
            components::action_buttons::draw(ui, self);
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::games_table::draw(ui, self);
        });

        components::key_dialog::draw(ctx, self);
    }
}
