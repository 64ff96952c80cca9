//! Typed async gateway for the Mentorship.AI Supabase tables.
//!
//! Each operation performs one PostgREST table read or write and
//! resolves to a uniform [`BridgeResponse`] `{data, error}` pair, the
//! same shape the original browser bridge handed to its UI. There is
//! no retry, pooling, or transactional guarantee; every call is a
//! single best-effort remote operation.
//!
//! # Example
//! ```ignore
//! use mentorship_bridge::prelude::*;
//!
//! let config = BridgeConfig::new("https://yourproject.supabase.co", "anon-key");
//! let client = BridgeClient::new(&config)?;
//!
//! let result = client
//!     .create_request(
//!         NewRequest::new("a@x.com", "b@x.com")
//!             .mentee_name("Alice")
//!             .note("hi")
//!             .interests(vec!["ml".to_string()]),
//!     )
//!     .await;
//! if let Some(request) = result.data {
//!     println!("request {} is {}", request.id, request.status);
//! }
//! ```
//!
//! For drop-in use there is also a process-wide handle in [`shared`],
//! initialized once from `SUPABASE_URL` / `SUPABASE_ANON_KEY`.

pub mod backend;
pub mod client;
pub mod config;
pub mod error;
pub mod query;
pub mod response;
pub mod shared;
pub mod types;

pub use backend::{RestBackend, TableBackend};
pub use client::BridgeClient;
pub use config::BridgeConfig;
pub use error::{BridgeError, BridgeResult};
pub use query::{Operation, OrderClause, OrderDirection, TableRequest};
pub use response::BridgeResponse;
pub use types::{
    Goal, InboxEntry, MentorProfile, MentorProfileUpsert, MentorshipRequest, NewGoal, NewRequest,
    RequestStatus, Role, UserRecord, UserUpsert,
};

/// Prelude module for convenient imports.
///
/// ```ignore
/// use mentorship_bridge::prelude::*;
/// ```
pub mod prelude {
    pub use crate::backend::{RestBackend, TableBackend};
    pub use crate::client::BridgeClient;
    pub use crate::config::BridgeConfig;
    pub use crate::error::{BridgeError, BridgeResult};
    pub use crate::response::BridgeResponse;
    pub use crate::types::{
        Goal, InboxEntry, MentorProfile, MentorProfileUpsert, MentorshipRequest, NewGoal,
        NewRequest, RequestStatus, Role, UserRecord, UserUpsert,
    };
}
