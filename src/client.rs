use std::sync::Arc;

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde_json::json;
use uuid::Uuid;

use crate::backend::{RestBackend, TableBackend};
use crate::config::BridgeConfig;
use crate::error::BridgeError;
use crate::query::{OrderDirection, TableRequest};
use crate::response::BridgeResponse;
use crate::types::{
    Goal, InboxEntry, MentorProfile, MentorProfileUpsert, MentorshipRequest, NewGoal, NewRequest,
    RequestStatus, Role, UserRecord, UserUpsert,
};

/// Typed gateway over the Mentorship.AI tables.
///
/// Each method performs a single best-effort remote operation and
/// resolves to the `{data, error}` pair the UI consumes. Remote
/// failures are logged and surfaced through the error field, never
/// panicked on. There is no retry, no rollback: if an ensure-user
/// step fails, the primary write is still attempted.
#[derive(Clone)]
pub struct BridgeClient {
    backend: Arc<dyn TableBackend>,
}

impl BridgeClient {
    /// Create a client talking to the PostgREST endpoint of the
    /// configured Supabase project.
    pub fn new(config: &BridgeConfig) -> Result<Self, BridgeError> {
        Ok(Self {
            backend: Arc::new(RestBackend::new(config)?),
        })
    }

    /// Create a client over a custom backend (tests substitute an
    /// in-memory one here).
    pub fn with_backend(backend: Arc<dyn TableBackend>) -> Self {
        Self { backend }
    }

    /// Insert or replace a user row, keyed by email. On conflict the
    /// name and role columns are overwritten, never merged.
    pub async fn upsert_user(&self, user: UserUpsert) -> BridgeResponse<UserRecord> {
        let body = match serde_json::to_value(&user) {
            Ok(body) => body,
            Err(e) => return self.fail("upsert_user", e.into()),
        };
        let request = TableRequest::upsert("users", body, "email").single();
        self.run("upsert_user", request).await
    }

    /// Insert or replace a mentor profile, keyed by user email.
    ///
    /// When a display name is supplied the user row is ensured first
    /// (role mentor); that write is best effort and its result does
    /// not gate the profile write.
    pub async fn upsert_mentor_profile(
        &self,
        profile: MentorProfileUpsert,
    ) -> BridgeResponse<MentorProfile> {
        if let Some(ref name) = profile.name {
            let _ = self
                .upsert_user(UserUpsert::new(profile.email.as_str(), Role::Mentor).name(name.clone()))
                .await;
        }

        let body = json!({
            "user_email": profile.email,
            "timezone": profile.timezone,
            "availability": profile.availability,
            "types": profile.types,
            "skills": profile.skills,
            "topics": profile.topics,
            "bio": profile.bio,
            "meeting_link": profile.meeting_link,
            "linkedin": profile.linkedin,
        });
        let request = TableRequest::upsert("mentors", body, "user_email").single();
        self.run("upsert_mentor_profile", request).await
    }

    /// Create a fresh mentorship request, status forced to pending.
    ///
    /// Both user rows are ensured first: the mentee only when a name
    /// was given, the mentor unconditionally with an explicit null
    /// name. Merge-duplicates resolution replaces the row, so an
    /// existing mentor display name is wiped by that write. Calling
    /// twice creates two request rows.
    pub async fn create_request(&self, new: NewRequest) -> BridgeResponse<MentorshipRequest> {
        if let Some(ref name) = new.mentee_name {
            let _ = self
                .upsert_user(
                    UserUpsert::new(new.mentee_email.as_str(), Role::Mentee).name(name.clone()),
                )
                .await;
        }
        let _ = self
            .upsert_user(UserUpsert::new(new.mentor_email.as_str(), Role::Mentor))
            .await;

        let body = json!({
            "mentee_email": new.mentee_email,
            "mentor_email": new.mentor_email,
            "status": RequestStatus::Pending,
            "note": new.note,
            "interests": new.interests,
        });
        let request = TableRequest::insert("requests", body).single();
        self.run("create_request", request).await
    }

    /// Fetch all requests addressed to a mentor, newest first, with
    /// display names joined in. Read-only; an email matching no rows
    /// yields an empty vec, not an error.
    pub async fn fetch_mentor_inbox(&self, mentor_email: &str) -> BridgeResponse<Vec<InboxEntry>> {
        let request = TableRequest::select("v_requests_with_names")
            .eq("mentor_email", mentor_email)
            .order("created_at", OrderDirection::Descending);
        self.run("fetch_mentor_inbox", request).await
    }

    /// Set the status of a request. Accepted and declined also stamp
    /// `decided_at` with the current time; pending leaves it untouched.
    /// Transitions are unchecked and the id is not validated.
    pub async fn update_request_status(
        &self,
        id: Uuid,
        status: RequestStatus,
    ) -> BridgeResponse<MentorshipRequest> {
        let mut updates = json!({ "status": status });
        if status.is_decision() {
            updates["decided_at"] = json!(Utc::now().to_rfc3339());
        }
        let request = TableRequest::update("requests", updates)
            .eq("id", id)
            .single();
        self.run("update_request_status", request).await
    }

    /// List accepted requests involving an email, newest first.
    ///
    /// The role string selects which side of the pair to filter on;
    /// an unrecognized role applies only the status filter, so rows
    /// for both sides may come back.
    pub async fn list_active_pairs(
        &self,
        email: &str,
        role: &str,
    ) -> BridgeResponse<Vec<MentorshipRequest>> {
        let mut request =
            TableRequest::select("requests").eq("status", RequestStatus::Accepted.as_str());
        match role {
            "mentee" => request = request.eq("mentee_email", email),
            "mentor" => request = request.eq("mentor_email", email),
            _ => {}
        }
        let request = request.order("created_at", OrderDirection::Descending);
        self.run("list_active_pairs", request).await
    }

    /// Insert a fresh goal row. Status defaults to "open", progress
    /// to 0. No linkage check against an accepted request.
    pub async fn create_goal(&self, goal: NewGoal) -> BridgeResponse<Goal> {
        let body = json!({
            "mentee_email": goal.mentee_email,
            "mentor_email": goal.mentor_email,
            "title": goal.title,
            "notes": goal.notes,
            "status": goal.status.unwrap_or_else(|| "open".to_string()),
            "progress": goal.progress.unwrap_or(0),
            "start_date": goal.start_date,
            "target_date": goal.target_date,
        });
        let request = TableRequest::insert("goals", body).single();
        self.run("create_goal", request).await
    }

    /// Execute one table request and parse the payload into `T`.
    async fn run<T: DeserializeOwned>(
        &self,
        op: &'static str,
        request: TableRequest,
    ) -> BridgeResponse<T> {
        let result = self.backend.execute(request).await.and_then(|value| {
            serde_json::from_value(value)
                .map_err(|e| BridgeError::serialization(format!("Failed to parse {op} row: {e}")))
        });
        match result {
            Ok(data) => BridgeResponse::ok(data),
            Err(error) => self.fail(op, error),
        }
    }

    fn fail<T>(&self, op: &'static str, error: BridgeError) -> BridgeResponse<T> {
        tracing::error!(op = op, error = %error, "Bridge operation failed");
        BridgeResponse::error(error)
    }
}

impl std::fmt::Debug for BridgeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BridgeClient").finish_non_exhaustive()
    }
}
