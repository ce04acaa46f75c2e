use std::sync::Arc;

use tracing::error;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{College, Course};
use crate::store::{CollegeStore, Order};
use crate::view::DataBound;

/// What the detail screen fetched: the college (absent means a "not found"
/// render, not an error) plus its courses ordered by name.
#[derive(Debug, Clone)]
pub struct CollegeDetail {
    pub college: Option<College>,
    pub courses: Vec<Course>,
}

pub struct CollegeDetailScreen {
    store: Arc<dyn CollegeStore>,
    data: DataBound<CollegeDetail>,
}

impl CollegeDetailScreen {
    pub fn new(store: Arc<dyn CollegeStore>) -> Self {
        Self {
            store,
            data: DataBound::new(),
        }
    }

    pub async fn load(&mut self, id: Uuid) {
        let ticket = self.data.begin();
        let result = self.fetch_detail(id).await;
        if let Err(err) = &result {
            error!("error fetching college details: {err}");
        }
        self.data.resolve(ticket, result);
    }

    async fn fetch_detail(&self, id: Uuid) -> Result<CollegeDetail, AppError> {
        let college = self.store.fetch_college(id).await?;
        let courses = self
            .store
            .fetch_courses_for_college(id, Order::by("name"))
            .await?;
        Ok(CollegeDetail { college, courses })
    }

    pub fn college(&self) -> Option<&College> {
        self.data.data().and_then(|d| d.college.as_ref())
    }

    pub fn courses(&self) -> &[Course] {
        self.data.data().map(|d| d.courses.as_slice()).unwrap_or(&[])
    }

    /// True once the fetch settled without finding the college.
    pub fn not_found(&self) -> bool {
        matches!(self.data.data(), Some(detail) if detail.college.is_none())
    }

    pub fn is_loading(&self) -> bool {
        self.data.is_loading()
    }

    pub fn detach(&mut self) {
        self.data.detach();
    }
}
