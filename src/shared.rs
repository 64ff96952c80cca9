//! Process-wide shared client mirroring the original `window.supa`
//! drop-in surface.
//!
//! The handle is created at most once from the environment via a
//! `OnceLock`, which closes the check-then-create race of the
//! original lazy accessor: concurrent first calls contend on the lock
//! and exactly one client survives. Configuration is captured at that
//! point; changing the environment afterwards has no effect.
//!
//! Every free function short-circuits with `{data: None, error:
//! no_client}` when the handle could not be created, without
//! attempting a remote call.

use std::sync::OnceLock;

use uuid::Uuid;

use crate::client::BridgeClient;
use crate::config::BridgeConfig;
use crate::error::{BridgeError, BridgeResult};
use crate::response::BridgeResponse;
use crate::types::{
    Goal, InboxEntry, MentorProfile, MentorProfileUpsert, MentorshipRequest, NewGoal, NewRequest,
    RequestStatus, UserRecord, UserUpsert,
};

static SHARED: OnceLock<BridgeClient> = OnceLock::new();

fn shared() -> Option<&'static BridgeClient> {
    if let Some(client) = SHARED.get() {
        return Some(client);
    }
    let config = BridgeConfig::from_env()?;
    match BridgeClient::new(&config) {
        Ok(client) => {
            // A concurrent initializer may have won; either client is
            // equivalent, so the loser is simply dropped.
            let _ = SHARED.set(client);
            SHARED.get()
        }
        Err(error) => {
            tracing::warn!(error = %error, "Failed to create Supabase client");
            None
        }
    }
}

/// Initialize the shared client from `SUPABASE_URL` and
/// `SUPABASE_ANON_KEY`. Logs readiness, or warns and leaves the
/// handle unset when configuration is missing.
pub fn init() {
    match shared() {
        Some(_) => tracing::info!("Supabase client ready"),
        None => tracing::warn!("init: no client"),
    }
}

/// Initialize the shared client from an explicit configuration.
/// A no-op if the handle was already created.
pub fn init_with(config: &BridgeConfig) -> BridgeResult<()> {
    let client = BridgeClient::new(config)?;
    let _ = SHARED.set(client);
    Ok(())
}

/// Access the shared client, if configured.
pub fn client() -> Result<&'static BridgeClient, BridgeError> {
    shared().ok_or(BridgeError::NoClient)
}

/// See [`BridgeClient::upsert_user`].
pub async fn upsert_user(user: UserUpsert) -> BridgeResponse<UserRecord> {
    match shared() {
        Some(client) => client.upsert_user(user).await,
        None => BridgeResponse::no_client(),
    }
}

/// See [`BridgeClient::upsert_mentor_profile`].
pub async fn upsert_mentor_profile(profile: MentorProfileUpsert) -> BridgeResponse<MentorProfile> {
    match shared() {
        Some(client) => client.upsert_mentor_profile(profile).await,
        None => BridgeResponse::no_client(),
    }
}

/// See [`BridgeClient::create_request`].
pub async fn create_request(new: NewRequest) -> BridgeResponse<MentorshipRequest> {
    match shared() {
        Some(client) => client.create_request(new).await,
        None => BridgeResponse::no_client(),
    }
}

/// See [`BridgeClient::fetch_mentor_inbox`].
pub async fn fetch_mentor_inbox(mentor_email: &str) -> BridgeResponse<Vec<InboxEntry>> {
    match shared() {
        Some(client) => client.fetch_mentor_inbox(mentor_email).await,
        None => BridgeResponse::no_client(),
    }
}

/// See [`BridgeClient::update_request_status`].
pub async fn update_request_status(
    id: Uuid,
    status: RequestStatus,
) -> BridgeResponse<MentorshipRequest> {
    match shared() {
        Some(client) => client.update_request_status(id, status).await,
        None => BridgeResponse::no_client(),
    }
}

/// See [`BridgeClient::list_active_pairs`].
pub async fn list_active_pairs(email: &str, role: &str) -> BridgeResponse<Vec<MentorshipRequest>> {
    match shared() {
        Some(client) => client.list_active_pairs(email, role).await,
        None => BridgeResponse::no_client(),
    }
}

/// See [`BridgeClient::create_goal`].
pub async fn create_goal(goal: NewGoal) -> BridgeResponse<Goal> {
    match shared() {
        Some(client) => client.create_goal(goal).await,
        None => BridgeResponse::no_client(),
    }
}
