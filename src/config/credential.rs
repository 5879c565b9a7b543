// src/config/credential.rs
use std::{fmt, fs, path::{Path, PathBuf}};

use serde::{Deserialize, Serialize};

use super::consts::{API_KEY_ENV, CREDENTIAL_FILE};
use crate::error::Result;

/// Bearer token for the API. Never printed in full.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("Credential(<empty>)")
        } else {
            f.write_str("Credential(<redacted>)")
        }
    }
}

#[derive(Serialize, Deserialize)]
struct CredentialFile {
    #[serde(default)]
    api_key: String,
}

/// `{"api_key": "<token>"}` on disk, with an environment variable fallback.
#[derive(Clone, Debug)]
pub struct CredentialStore {
    path: PathBuf,
    env_var: String,
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self::new(CREDENTIAL_FILE)
    }
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), env_var: s!(API_KEY_ENV) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File key first, then the process environment. Empty when neither has one.
    pub fn load(&self) -> Credential {
        self.load_with(|name| std::env::var(name).ok())
    }

    /// Same as [`load`](Self::load) with an injectable environment lookup.
    pub fn load_with(&self, env: impl Fn(&str) -> Option<String>) -> Credential {
        match self.read_file() {
            Some(key) if !key.is_empty() => {
                logd!("Credential: loaded from {}", self.path.display());
                return key;
            }
            _ => {}
        }
        match env(&self.env_var) {
            Some(v) if !v.trim().is_empty() => {
                logd!("Credential: loaded from ${}", self.env_var);
                Credential::new(v)
            }
            _ => Credential::default(),
        }
    }

    fn read_file(&self) -> Option<Credential> {
        let text = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str::<CredentialFile>(&text) {
            Ok(file) => Some(Credential::new(file.api_key)),
            Err(e) => {
                logw!("Credential: ignoring unreadable {}: {}", self.path.display(), e);
                None
            }
        }
    }

    /// Overwrite the credential file.
    pub fn save(&self, credential: &Credential) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let body = serde_json::to_string(&CredentialFile { api_key: s!(credential.as_str()) })?;
        fs::write(&self.path, body)?;
        logf!("Credential: saved to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> { None }

    #[test]
    fn debug_never_shows_token() {
        let c = Credential::new("secret-token");
        assert_eq!(format!("{c:?}"), "Credential(<redacted>)");
        assert_eq!(format!("{:?}", Credential::default()), "Credential(<empty>)");
    }

    #[test]
    fn token_is_trimmed() {
        assert_eq!(Credential::new("  abc \n").as_str(), "abc");
    }

    #[test]
    fn save_then_load_roundtrips_file_format() {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::new(dir.path().join("config.json"));
        store.save(&Credential::new("k1")).unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        assert_eq!(raw, r#"{"api_key":"k1"}"#);
        assert_eq!(store.load_with(no_env).as_str(), "k1");
    }

    #[test]
    fn env_used_when_file_missing_or_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::new(dir.path().join("config.json"));
        let env = |name: &str| (name == API_KEY_ENV).then(|| s!("from-env"));

        assert_eq!(store.load_with(env).as_str(), "from-env");

        fs::write(store.path(), r#"{"api_key": ""}"#).unwrap();
        assert_eq!(store.load_with(env).as_str(), "from-env");
    }

    #[test]
    fn file_wins_over_env() {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::new(dir.path().join("config.json"));
        fs::write(store.path(), r#"{"api_key": "from-file"}"#).unwrap();
        let env = |_: &str| Some(s!("from-env"));
        assert_eq!(store.load_with(env).as_str(), "from-file");
    }

    #[test]
    fn nothing_configured_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::new(dir.path().join("missing.json"));
        assert!(store.load_with(no_env).is_empty());
    }
}
