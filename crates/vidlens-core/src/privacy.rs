//! Privacy-policy gate run before a user's first lookup.
#![allow(clippy::future_not_send)]

use std::collections::HashMap;

use anyhow::Result;
use tokio::sync::Mutex;
use tracing::instrument;

/// Prefix of the callback payload sent when a user accepts the policy.
pub const ACCEPT_CALLBACK_PREFIX: &str = "accept_privacy:";

/// Persistence for users and their policy acceptance.
///
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(UserStore: Send)]
pub trait LocalUserStore {
    /// Whether `user_id` has accepted the policy.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    async fn has_accepted(&self, user_id: i64) -> Result<bool>;

    /// Records `user_id` as known, leaving acceptance unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    async fn record_user(&self, user_id: i64) -> Result<()>;

    /// Marks `user_id` as having accepted the policy.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    async fn accept(&self, user_id: i64) -> Result<()>;
}

/// Outcome of [`check_privacy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrivacyStatus {
    /// The user may proceed.
    Accepted,
    /// The policy must be shown with an accept button carrying `accept_callback`.
    PolicyRequired {
        /// Callback payload, `accept_privacy:<user_id>`.
        accept_callback: String,
    },
}

/// Checks whether `user_id` may proceed, recording first-time users.
///
/// # Errors
///
/// Returns an error if the store fails.
#[instrument(skip(store))]
pub async fn check_privacy(
    store: &(impl LocalUserStore + Sync),
    user_id: i64,
) -> Result<PrivacyStatus> {
    if store.has_accepted(user_id).await? {
        tracing::debug!("privacy policy already accepted");
        return Ok(PrivacyStatus::Accepted);
    }

    tracing::info!("privacy policy not accepted, requesting consent");
    store.record_user(user_id).await?;
    Ok(PrivacyStatus::PolicyRequired {
        accept_callback: format!("{ACCEPT_CALLBACK_PREFIX}{user_id}"),
    })
}

/// Recovers the user id from an `accept_privacy:<id>` payload.
#[must_use]
pub fn parse_accept_callback(data: &str) -> Option<i64> {
    data.strip_prefix(ACCEPT_CALLBACK_PREFIX)?.parse().ok()
}

/// Process-local [`UserStore`]; acceptance is lost on exit.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: Mutex<HashMap<i64, bool>>,
}

impl InMemoryUserStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of users seen so far.
    pub async fn len(&self) -> usize {
        self.users.lock().await.len()
    }

    /// Whether no user has been seen.
    pub async fn is_empty(&self) -> bool {
        self.users.lock().await.is_empty()
    }
}

impl LocalUserStore for InMemoryUserStore {
    async fn has_accepted(&self, user_id: i64) -> Result<bool> {
        Ok(self
            .users
            .lock()
            .await
            .get(&user_id)
            .copied()
            .unwrap_or(false))
    }

    async fn record_user(&self, user_id: i64) -> Result<()> {
        self.users.lock().await.entry(user_id).or_insert(false);
        Ok(())
    }

    async fn accept(&self, user_id: i64) -> Result<()> {
        self.users.lock().await.insert(user_id, true);
        Ok(())
    }
}
