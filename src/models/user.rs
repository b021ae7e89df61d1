//! Identity issued by the auth collaborator.

use serde::{Deserialize, Serialize};

/// Role granted to catalog administrators.
pub const ADMIN_ROLE: &str = "admin";

/// User identity carried in the session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// User document ID
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    pub pseudo: String,
    pub nom: String,
    pub prenom: String,
    pub role: String,
}

impl Identity {
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}

/// Authenticated session, built from a verified token.
///
/// Passed explicitly to the operations that need it; the filtering engine
/// never sees it.
#[derive(Debug, Clone)]
pub struct Session {
    pub identity: Identity,
}
