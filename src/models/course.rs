use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A row of the `courses` table, always scoped to one college.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Course {
    pub id: Uuid,
    pub college_id: Uuid,
    pub name: String,
    pub duration_years: i32,
    pub total_seats: i32,
    /// Base currency units per year.
    pub fees_per_year: i64,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for `courses`. The store assigns `id` and `created_at`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewCourse {
    pub college_id: Uuid,
    pub name: String,
    pub duration_years: i32,
    pub total_seats: i32,
    pub fees_per_year: i64,
    pub description: Option<String>,
}
