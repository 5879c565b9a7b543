// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod calendar;
pub mod cli;
pub mod client;
pub mod config;
pub mod core;
pub mod endpoint;
pub mod error;
pub mod file;
pub mod games;
pub mod gui;
pub mod matchup;
pub mod progress;
