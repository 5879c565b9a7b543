// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub api: ApiOptions,
    pub output: OutputOptions,
    pub credential_file: PathBuf,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            api: ApiOptions::default(),
            output: OutputOptions::default(),
            credential_file: PathBuf::from(CREDENTIAL_FILE),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiOptions {
    pub base_url: String,
    /// `division` query filter for the games list; None = every division
    pub division: Option<String>,
    /// Ask for season stats with garbage time excluded
    pub exclude_garbage_time: bool,
}

impl Default for ApiOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            division: Some(s!(DEFAULT_DIVISION)),
            exclude_garbage_time: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputOptions {
    pub dir: PathBuf,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self { dir: PathBuf::from(DEFAULT_OUT_DIR) }
    }
}
