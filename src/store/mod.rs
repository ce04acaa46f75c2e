pub mod memory;
pub mod rest;

use std::cmp::Ordering;
use std::env;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{College, Course, NewCourse, Profile};

pub use memory::MemoryStore;
pub use rest::RestStore;

/// Connection settings for the hosted store.
#[derive(Clone, Debug)]
pub struct StoreConfig {
    pub base_url: String,
    pub anon_key: String,
}

impl StoreConfig {
    pub fn new_from_env() -> Result<Self, AppError> {
        let base_url = env::var("SUPABASE_URL")
            .map_err(|_| AppError::Config("SUPABASE_URL is not set".to_string()))?;
        let anon_key = env::var("SUPABASE_ANON_KEY")
            .map_err(|_| AppError::Config("SUPABASE_ANON_KEY is not set".to_string()))?;

        Ok(Self { base_url, anon_key })
    }
}

/// Placement of null sort keys relative to present ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Nulls {
    Default,
    Last,
}

/// Sort descriptor for collection fetches. Field names match the store
/// schema verbatim.
#[derive(Clone, Debug)]
pub struct Order {
    pub field: &'static str,
    pub ascending: bool,
    pub nulls: Nulls,
}

impl Order {
    pub fn by(field: &'static str) -> Self {
        Self {
            field,
            ascending: true,
            nulls: Nulls::Default,
        }
    }

    pub fn nulls_last(mut self) -> Self {
        self.nulls = Nulls::Last;
        self
    }

    pub fn descending(mut self) -> Self {
        self.ascending = false;
        self
    }

    /// PostgREST `order=` value, e.g. "nirf_ranking.asc.nullslast".
    pub(crate) fn to_query_value(&self) -> String {
        let direction = if self.ascending { "asc" } else { "desc" };
        match self.nulls {
            Nulls::Default => format!("{}.{}", self.field, direction),
            Nulls::Last => format!("{}.{}.nullslast", self.field, direction),
        }
    }
}

/// Nulls-last comparison for optional sort keys: present values compare
/// normally, absent values land after every present one.
pub fn cmp_nulls_last<T: Ord>(a: &Option<T>, b: &Option<T>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.cmp(y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// The query gateway every screen talks through. One real implementation
/// ([`RestStore`]) and one in-memory implementation for tests
/// ([`MemoryStore`]).
///
/// All operations are one-shot: a failure is returned once and never
/// retried here.
#[async_trait]
pub trait CollegeStore: Send + Sync {
    /// All colleges, sorted by `order`. The nulls policy must be honored for
    /// nullable sort keys (used for `nirf_ranking`).
    async fn fetch_colleges(&self, order: Order) -> Result<Vec<College>, AppError>;

    /// A single college, or `Ok(None)` when the row is absent.
    async fn fetch_college(&self, id: Uuid) -> Result<Option<College>, AppError>;

    /// Courses belonging to one college, sorted by `order`.
    async fn fetch_courses_for_college(
        &self,
        college_id: Uuid,
        order: Order,
    ) -> Result<Vec<Course>, AppError>;

    /// A single profile, or `Ok(None)` when the row is absent.
    async fn fetch_profile(&self, id: Uuid) -> Result<Option<Profile>, AppError>;

    /// Creates one course row; the store assigns id and timestamps.
    async fn insert_course(&self, course: NewCourse) -> Result<(), AppError>;

    /// Removes one course row by id.
    async fn delete_course(&self, id: Uuid) -> Result<(), AppError>;
}
