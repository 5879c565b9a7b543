// src/config/mod.rs
pub mod consts;
pub mod credential;
pub mod options;

pub use credential::{Credential, CredentialStore};
pub use options::AppOptions;
