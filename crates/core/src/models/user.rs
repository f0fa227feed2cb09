use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user as seen by the booking service. Users are owned elsewhere and are
/// only ever read here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub personal_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// A profile is complete once the user has filled in a non-empty
    /// personal id.
    pub fn has_complete_profile(&self) -> bool {
        self.personal_id
            .as_deref()
            .is_some_and(|personal_id| !personal_id.is_empty())
    }
}
