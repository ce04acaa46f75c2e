use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A row of the `colleges` table. Field names are the wire contract with the
/// hosted store and must not be renamed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct College {
    pub id: Uuid,
    pub name: String,
    pub location: String,
    pub established_year: i32,
    /// Null means unranked; unranked colleges sort after ranked ones.
    pub nirf_ranking: Option<i32>,
    /// Base currency units; divide by 100 000 for the Lakhs display value.
    pub total_fees: i64,
    pub description: String,
    pub infrastructure_details: String,
    pub has_hostel: bool,
    pub has_ac_hostel: bool,
    pub has_non_ac_hostel: bool,
    pub hostel_fees_ac: Option<i64>,
    pub hostel_fees_non_ac: Option<i64>,
    pub last_year_cutoff: f64,
    pub website_url: Option<String>,
    pub contact_email: String,
    pub contact_phone: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl College {
    /// "NIRF #n" for ranked colleges, "N/A" otherwise.
    pub fn ranking_label(&self) -> String {
        match self.nirf_ranking {
            Some(rank) => format!("NIRF #{rank}"),
            None => "N/A".to_string(),
        }
    }

    /// AC hostel fee for display. The store is trusted here: a null fee is
    /// shown as zero rather than rejected.
    pub fn ac_hostel_fee(&self) -> i64 {
        self.hostel_fees_ac.unwrap_or(0)
    }

    pub fn non_ac_hostel_fee(&self) -> i64 {
        self.hostel_fees_non_ac.unwrap_or(0)
    }
}
