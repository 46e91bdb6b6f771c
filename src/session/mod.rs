//! Mock authentication session.
//!
//! Not a security mechanism: no credential validation, no expiry, no server.
//! Signed-in is simply the presence of `session.json` under the workspace
//! directory. State changes go through an explicit [`SessionContext`] that
//! notifies subscribers over a channel, replacing the string-keyed storage
//! flag (and its polling) the dashboard historically used.

use crate::config::Config;
use crate::error::SessionError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::mpsc::{Receiver, Sender, channel};
use tracing::info;
use uuid::Uuid;

const SESSION_FILE: &str = "session.json";

/// Storage keys older implementations scattered; `sign_out` sweeps them all.
const LEGACY_KEYS: [&str; 4] = ["auth_token", "user_data", "auth_state", "user_session"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionProfile {
    pub name: String,
    pub email: String,
    pub signed_in_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SessionRecord {
    /// Presence-only marker; the value itself is never checked.
    token: String,
    profile: SessionProfile,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    SignedOut,
    SignedIn(SessionProfile),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    SignedIn(SessionProfile),
    SignedOut,
}

/// Owns the durable session flag and the change-notification channel.
pub struct SessionContext {
    dir: PathBuf,
    subscribers: Mutex<Vec<Sender<SessionEvent>>>,
}

impl SessionContext {
    pub fn new(config: &Config) -> Self {
        Self::at(&config.workspace_dir)
    }

    pub fn at(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
            subscribers: Mutex::new(Vec::new()),
        }
    }

    fn session_path(&self) -> PathBuf {
        self.dir.join(SESSION_FILE)
    }

    pub fn status(&self) -> Result<SessionStatus, SessionError> {
        let path = self.session_path();
        if !path.exists() {
            return Ok(SessionStatus::SignedOut);
        }

        let raw = fs::read_to_string(&path)?;
        let record: SessionRecord = serde_json::from_str(&raw)
            .map_err(|error| SessionError::Corrupt(error.to_string()))?;
        Ok(SessionStatus::SignedIn(record.profile))
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self.status(), Ok(SessionStatus::SignedIn(_)))
    }

    /// Transition Signed-out → Signed-in. Writes a mock token and the
    /// profile; signing in while already signed in just replaces the record.
    pub fn sign_in(&self, name: &str, email: &str) -> Result<SessionProfile, SessionError> {
        let profile = SessionProfile {
            name: name.to_string(),
            email: email.to_string(),
            signed_in_at: Utc::now(),
        };
        let record = SessionRecord {
            token: format!("mock-{}", Uuid::new_v4()),
            profile: profile.clone(),
        };

        fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_string_pretty(&record)
            .map_err(|error| SessionError::Corrupt(error.to_string()))?;
        fs::write(self.session_path(), json)?;

        info!(email = %profile.email, "session signed in");
        self.notify(SessionEvent::SignedIn(profile.clone()));
        Ok(profile)
    }

    /// Transition Signed-in → Signed-out. Removes the session file and every
    /// legacy auth key file; idempotent when already signed out.
    pub fn sign_out(&self) -> Result<(), SessionError> {
        let was_signed_in = self.session_path().exists();

        remove_if_present(&self.session_path())?;
        for key in LEGACY_KEYS {
            remove_if_present(&self.dir.join(key))?;
        }

        if was_signed_in {
            info!("session signed out");
            self.notify(SessionEvent::SignedOut);
        }
        Ok(())
    }

    /// Subscribe to session transitions. Each live subscriber receives every
    /// subsequent [`SessionEvent`]; dropped receivers are pruned on the next
    /// notification.
    pub fn subscribe(&self) -> Receiver<SessionEvent> {
        let (tx, rx) = channel();
        self.subscribers
            .lock()
            .expect("session subscriber lock poisoned")
            .push(tx);
        rx
    }

    fn notify(&self, event: SessionEvent) {
        let mut subscribers = self
            .subscribers
            .lock()
            .expect("session subscriber lock poisoned");
        subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}

fn remove_if_present(path: &Path) -> Result<(), SessionError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(error) => Err(SessionError::Io(error)),
    }
}
