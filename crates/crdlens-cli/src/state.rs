//! Persisted CLI state
//!
//! A small JSON key-value file under the user data directory. Currently it
//! only records whether the welcome notice was shown; corrupt state is
//! recreated rather than surfaced as an error.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
struct AppState {
    #[serde(default)]
    welcome_shown: bool,
}

fn state_path() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("crdlens").join("state.json"))
}

fn load() -> AppState {
    let Some(path) = state_path() else {
        return AppState::default();
    };

    match std::fs::read_to_string(&path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!("State file corrupted, recreating: {}", e);
            AppState::default()
        }),
        Err(_) => AppState::default(),
    }
}

fn store(state: &AppState) {
    let Some(path) = state_path() else {
        return;
    };

    let write = || -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(state).unwrap_or_default();
        std::fs::write(&path, content)
    };

    if let Err(e) = write() {
        tracing::warn!("Failed to persist state: {}", e);
    }
}

/// Whether this is the first run; flips the persisted flag as a side effect.
pub fn first_run() -> bool {
    let mut state = load();
    if state.welcome_shown {
        return false;
    }

    state.welcome_shown = true;
    store(&state);
    true
}
