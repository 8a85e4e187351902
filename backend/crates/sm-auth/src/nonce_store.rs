//! Single-use, action-scoped anti-forgery tokens.
//!
//! A token is bound to the action it was issued for and to the actor that
//! requested it. It is consumed by the first successful check; a failed check
//! leaves a valid token in place.

use crate::{AuthError, NonceAction, Result as AuthErrorResult};

use std::collections::HashMap;
use std::panic::Location;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Duration, Utc};
use error_location::ErrorLocation;
use rand::Rng;
use rand::distr::Alphanumeric;
use serde::Serialize;

pub const NONCE_TOKEN_LENGTH: usize = 32;

/// Twelve hours
pub const DEFAULT_NONCE_TTL_SECS: u64 = 12 * 60 * 60;

/// Live tokens kept before the oldest are evicted
pub const DEFAULT_MAX_NONCES: usize = 10_000;

#[derive(Debug, Clone, Serialize)]
pub struct IssuedNonce {
    pub token: String,
    pub action: NonceAction,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
struct NonceEntry {
    action: NonceAction,
    actor_id: String,
    expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NonceStore {
    entries: Arc<Mutex<HashMap<String, NonceEntry>>>,
    ttl: Duration,
    max_entries: usize,
}

impl NonceStore {
    pub fn new(ttl_secs: u64) -> Self {
        Self::with_max_entries(ttl_secs, DEFAULT_MAX_NONCES)
    }

    /// Store holding at most `max_entries` live tokens; issuing past the
    /// limit evicts the tokens closest to expiry
    pub fn with_max_entries(ttl_secs: u64, max_entries: usize) -> Self {
        let ttl_secs = i64::try_from(ttl_secs).unwrap_or(i64::MAX);
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            ttl: Duration::try_seconds(ttl_secs).unwrap_or(Duration::MAX),
            max_entries: max_entries.max(1),
        }
    }

    pub fn issue(&self, action: NonceAction, actor_id: &str) -> IssuedNonce {
        self.issue_at(action, actor_id, Utc::now())
    }

    pub fn issue_at(&self, action: NonceAction, actor_id: &str, now: DateTime<Utc>) -> IssuedNonce {
        let mut entries = self.lock();
        entries.retain(|_, entry| now < entry.expires_at);
        while entries.len() >= self.max_entries {
            let Some(oldest) = entries
                .iter()
                .min_by_key(|(_, entry)| entry.expires_at)
                .map(|(token, _)| token.clone())
            else {
                break;
            };
            entries.remove(&oldest);
        }

        let mut rng = rand::rng();
        let token: String = loop {
            let candidate: String = (0..NONCE_TOKEN_LENGTH)
                .map(|_| char::from(rng.sample(Alphanumeric)))
                .collect();
            if !entries.contains_key(&candidate) {
                break candidate;
            }
        };

        let expires_at = now.checked_add_signed(self.ttl).unwrap_or(DateTime::<Utc>::MAX_UTC);
        entries.insert(
            token.clone(),
            NonceEntry {
                action,
                actor_id: actor_id.to_string(),
                expires_at,
            },
        );

        IssuedNonce {
            token,
            action,
            expires_at,
        }
    }

    #[track_caller]
    pub fn consume(
        &self,
        action: NonceAction,
        actor_id: &str,
        token: Option<&str>,
    ) -> AuthErrorResult<()> {
        self.consume_at(action, actor_id, token, Utc::now())
    }

    #[track_caller]
    pub fn consume_at(
        &self,
        action: NonceAction,
        actor_id: &str,
        token: Option<&str>,
        now: DateTime<Utc>,
    ) -> AuthErrorResult<()> {
        let caller = Location::caller();
        let reject = |message: &str| AuthError::InvalidNonce {
            action: action.as_str().to_string(),
            message: message.to_string(),
            location: ErrorLocation::from(caller),
        };

        let token = match token.map(str::trim) {
            Some(t) if !t.is_empty() => t,
            _ => return Err(reject("token missing")),
        };

        let mut entries = self.lock();
        let entry = entries.get(token).ok_or_else(|| reject("token unknown or already used"))?;

        if entry.action != action {
            return Err(reject("token issued for a different action"));
        }
        if entry.actor_id != actor_id {
            return Err(reject("token issued to a different user"));
        }
        if now >= entry.expires_at {
            entries.remove(token);
            return Err(reject("token expired"));
        }

        entries.remove(token);
        Ok(())
    }

    /// Number of live entries, expired ones included until the next issue
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, NonceEntry>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for NonceStore {
    fn default() -> Self {
        Self::new(DEFAULT_NONCE_TTL_SECS)
    }
}
