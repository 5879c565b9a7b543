// src/gui/components/mod.rs
pub mod action_buttons;
pub mod games_table;
pub mod key_dialog;
