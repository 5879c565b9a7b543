// src/progress.rs
use std::sync::mpsc::Sender;

/// Lightweight progress reporting used by long-running operations (analysis).
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called after one logical phase completes. `percent` never goes down.
    fn step(&mut self, _label: &str, _percent: u8) {}

    /// Called at the end.
    fn finish(&mut self) {}
}

/// What a [`ChannelProgress`] sends.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProgressEvent {
    Log(String),
    Step { label: String, percent: u8 },
    Finished,
}

/// Forwards every call over a channel, so the work can run on another thread.
/// `E` is whatever the receiver listens for; `notify` runs after each send
/// (e.g. asking a UI to repaint).
pub struct ChannelProgress<E> {
    tx: Sender<E>,
    notify: Option<Box<dyn Fn() + Send>>,
}

impl<E: From<ProgressEvent>> ChannelProgress<E> {
    pub fn new(tx: Sender<E>) -> Self {
        Self { tx, notify: None }
    }

    pub fn with_notify(mut self, notify: impl Fn() + Send + 'static) -> Self {
        self.notify = Some(Box::new(notify));
        self
    }

    fn send(&self, ev: ProgressEvent) {
        // Receiver gone means nobody is watching anymore; keep working.
        let _ = self.tx.send(E::from(ev));
        if let Some(n) = &self.notify {
            n();
        }
    }
}

impl<E: From<ProgressEvent>> Progress for ChannelProgress<E> {
    fn log(&mut self, msg: &str) {
        self.send(ProgressEvent::Log(s!(msg)));
    }
    fn step(&mut self, label: &str, percent: u8) {
        self.send(ProgressEvent::Step { label: s!(label), percent: percent.min(100) });
    }
    fn finish(&mut self) {
        self.send(ProgressEvent::Finished);
    }
}
