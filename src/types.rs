use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role a user plays in a mentorship pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Mentor,
    Mentee,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mentor => "mentor",
            Self::Mentee => "mentee",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status of a mentorship request.
///
/// Transitions are unchecked: any status may be written over any
/// other. Requests are always created as [`RequestStatus::Pending`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Accepted,
    Declined,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Declined => "declined",
        }
    }

    /// Whether writing this status also stamps `decided_at`.
    pub fn is_decision(&self) -> bool {
        matches!(self, Self::Accepted | Self::Declined)
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Rows ────────────────────────────────────────────────────────────

/// Row in the `users` table, keyed by email.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    pub role: Role,
}

/// Row in the `mentors` table, one-to-one with a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MentorProfile {
    pub user_email: String,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub availability: Vec<String>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub meeting_link: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
}

/// Row in the `requests` table: a mentee-to-mentor pairing proposal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MentorshipRequest {
    pub id: Uuid,
    pub mentee_email: String,
    pub mentor_email: String,
    pub status: RequestStatus,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    pub created_at: DateTime<Utc>,
    /// Set only when the request transitions to accepted or declined.
    #[serde(default)]
    pub decided_at: Option<DateTime<Utc>>,
}

/// Row in the `v_requests_with_names` view: a request joined with the
/// display names of both parties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InboxEntry {
    pub id: Uuid,
    pub mentee_email: String,
    pub mentor_email: String,
    #[serde(default)]
    pub mentee_name: Option<String>,
    #[serde(default)]
    pub mentor_name: Option<String>,
    pub status: RequestStatus,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub decided_at: Option<DateTime<Utc>>,
}

/// Row in the `goals` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: Uuid,
    pub mentee_email: String,
    pub mentor_email: String,
    pub title: String,
    #[serde(default)]
    pub notes: Option<String>,
    pub status: String,
    pub progress: i32,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub target_date: Option<NaiveDate>,
}

// ─── Inputs ──────────────────────────────────────────────────────────

/// Input to [`upsert_user`](crate::client::BridgeClient::upsert_user).
///
/// Serializes exactly the columns the upsert writes; `name: None`
/// becomes an explicit JSON null.
#[derive(Debug, Clone, Serialize)]
pub struct UserUpsert {
    pub email: String,
    pub name: Option<String>,
    pub role: Role,
}

impl UserUpsert {
    pub fn new(email: impl Into<String>, role: Role) -> Self {
        Self {
            email: email.into(),
            name: None,
            role,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Input to [`upsert_mentor_profile`](crate::client::BridgeClient::upsert_mentor_profile).
///
/// `name` is not part of the profile row; when present it triggers a
/// user upsert (role mentor) before the profile write.
#[derive(Debug, Clone, Default)]
pub struct MentorProfileUpsert {
    pub email: String,
    pub name: Option<String>,
    pub timezone: Option<String>,
    pub availability: Vec<String>,
    pub types: Vec<String>,
    pub skills: Vec<String>,
    pub topics: Vec<String>,
    pub bio: Option<String>,
    pub meeting_link: Option<String>,
    pub linkedin: Option<String>,
}

impl MentorProfileUpsert {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Self::default()
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }

    pub fn availability(mut self, slots: Vec<String>) -> Self {
        self.availability = slots;
        self
    }

    pub fn types(mut self, types: Vec<String>) -> Self {
        self.types = types;
        self
    }

    pub fn skills(mut self, skills: Vec<String>) -> Self {
        self.skills = skills;
        self
    }

    pub fn topics(mut self, topics: Vec<String>) -> Self {
        self.topics = topics;
        self
    }

    pub fn bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    pub fn meeting_link(mut self, link: impl Into<String>) -> Self {
        self.meeting_link = Some(link.into());
        self
    }

    pub fn linkedin(mut self, handle: impl Into<String>) -> Self {
        self.linkedin = Some(handle.into());
        self
    }
}

/// Input to [`create_request`](crate::client::BridgeClient::create_request).
#[derive(Debug, Clone)]
pub struct NewRequest {
    pub mentee_email: String,
    pub mentor_email: String,
    /// When present, the mentee user row is ensured first.
    pub mentee_name: Option<String>,
    pub note: Option<String>,
    pub interests: Vec<String>,
}

impl NewRequest {
    pub fn new(mentee_email: impl Into<String>, mentor_email: impl Into<String>) -> Self {
        Self {
            mentee_email: mentee_email.into(),
            mentor_email: mentor_email.into(),
            mentee_name: None,
            note: None,
            interests: Vec::new(),
        }
    }

    pub fn mentee_name(mut self, name: impl Into<String>) -> Self {
        self.mentee_name = Some(name.into());
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn interests(mut self, interests: Vec<String>) -> Self {
        self.interests = interests;
        self
    }
}

/// Input to [`create_goal`](crate::client::BridgeClient::create_goal).
///
/// `status` defaults to `"open"`, `progress` to `0`.
#[derive(Debug, Clone)]
pub struct NewGoal {
    pub mentee_email: String,
    pub mentor_email: String,
    pub title: String,
    pub notes: Option<String>,
    pub status: Option<String>,
    pub progress: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub target_date: Option<NaiveDate>,
}

impl NewGoal {
    pub fn new(
        mentee_email: impl Into<String>,
        mentor_email: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            mentee_email: mentee_email.into(),
            mentor_email: mentor_email.into(),
            title: title.into(),
            notes: None,
            status: None,
            progress: None,
            start_date: None,
            target_date: None,
        }
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn progress(mut self, progress: i32) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    pub fn target_date(mut self, date: NaiveDate) -> Self {
        self.target_date = Some(date);
        self
    }
}
