//! Request context carrying the authenticated caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use roster_core::types::UserId;

/// Context for the current authenticated request.
///
/// Built by the HTTP layer from a verified token and passed into service
/// methods so that every write knows *who* is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: UserId,
    /// The user's email (from the token claims).
    pub email: String,
    /// IP address of the request origin.
    pub ip_address: String,
    /// User-Agent header value.
    pub user_agent: Option<String>,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context stamped with the current time.
    pub fn new(
        user_id: UserId,
        email: impl Into<String>,
        ip_address: impl Into<String>,
        user_agent: Option<String>,
    ) -> Self {
        Self {
            user_id,
            email: email.into(),
            ip_address: ip_address.into(),
            user_agent,
            request_time: Utc::now(),
        }
    }
}
