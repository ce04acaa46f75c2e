use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A row of the `profiles` table; `id` equals the authenticated session id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub role: Role,
    /// Non-null only for admins; names the one college the admin may manage.
    pub college_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Student,
    CollegeAdmin,
}

impl Role {
    /// Badge text: "Student" / "College Admin".
    pub fn label(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::CollegeAdmin => "College Admin",
        }
    }

    /// Account-row text: "Student Account" / "College Administrator".
    pub fn account_label(&self) -> &'static str {
        match self {
            Role::Student => "Student Account",
            Role::CollegeAdmin => "College Administrator",
        }
    }
}
