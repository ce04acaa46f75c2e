//! In-memory store used by unit and flow tests, in place of the hosted
//! endpoint. Rows are sorted per the same `Order` descriptors the REST
//! gateway sends, and writes can be made to fail to exercise error paths.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{College, Course, NewCourse, Profile, Role};
use crate::store::{CollegeStore, Order, cmp_nulls_last};

#[derive(Default)]
pub struct MemoryStore {
    colleges: Mutex<Vec<College>>,
    courses: Mutex<Vec<Course>>,
    profiles: Mutex<Vec<Profile>>,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_colleges(colleges: Vec<College>) -> Self {
        let store = Self::new();
        *store.colleges.lock().unwrap() = colleges;
        store
    }

    pub fn add_college(&self, college: College) {
        self.colleges.lock().unwrap().push(college);
    }

    pub fn add_course(&self, course: Course) {
        self.courses.lock().unwrap().push(course);
    }

    pub fn add_profile(&self, profile: Profile) {
        self.profiles.lock().unwrap().push(profile);
    }

    /// When set, `insert_course` and `delete_course` fail with a store error.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, AtomicOrdering::SeqCst);
    }

    pub fn course_count(&self) -> usize {
        self.courses.lock().unwrap().len()
    }

    fn write_error() -> AppError {
        AppError::Store {
            status: 503,
            message: "store unavailable".to_string(),
        }
    }

    fn sort_colleges(rows: &mut [College], order: &Order) {
        match order.field {
            "name" => rows.sort_by(|a, b| a.name.cmp(&b.name)),
            "nirf_ranking" => {
                rows.sort_by(|a, b| cmp_nulls_last(&a.nirf_ranking, &b.nirf_ranking))
            }
            _ => {}
        }
        if !order.ascending {
            rows.reverse();
        }
    }

    fn sort_courses(rows: &mut [Course], order: &Order) {
        match order.field {
            "name" => rows.sort_by(|a, b| a.name.cmp(&b.name)),
            "created_at" => rows.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
            _ => {}
        }
        if !order.ascending {
            rows.reverse();
        }
    }
}

#[async_trait]
impl CollegeStore for MemoryStore {
    async fn fetch_colleges(&self, order: Order) -> Result<Vec<College>, AppError> {
        let mut rows = self.colleges.lock().unwrap().clone();
        Self::sort_colleges(&mut rows, &order);
        Ok(rows)
    }

    async fn fetch_college(&self, id: Uuid) -> Result<Option<College>, AppError> {
        let rows = self.colleges.lock().unwrap();
        Ok(rows.iter().find(|c| c.id == id).cloned())
    }

    async fn fetch_courses_for_college(
        &self,
        college_id: Uuid,
        order: Order,
    ) -> Result<Vec<Course>, AppError> {
        let mut rows: Vec<Course> = self
            .courses
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.college_id == college_id)
            .cloned()
            .collect();
        Self::sort_courses(&mut rows, &order);
        Ok(rows)
    }

    async fn fetch_profile(&self, id: Uuid) -> Result<Option<Profile>, AppError> {
        let rows = self.profiles.lock().unwrap();
        Ok(rows.iter().find(|p| p.id == id).cloned())
    }

    async fn insert_course(&self, course: NewCourse) -> Result<(), AppError> {
        if self.fail_writes.load(AtomicOrdering::SeqCst) {
            return Err(Self::write_error());
        }
        let row = Course {
            id: Uuid::new_v4(),
            college_id: course.college_id,
            name: course.name,
            duration_years: course.duration_years,
            total_seats: course.total_seats,
            fees_per_year: course.fees_per_year,
            description: course.description,
            created_at: Utc::now(),
        };
        self.courses.lock().unwrap().push(row);
        Ok(())
    }

    /// Unlike the REST endpoint, this double reports a missing row as a store
    /// error so flows can be tested against a failing delete.
    async fn delete_course(&self, id: Uuid) -> Result<(), AppError> {
        if self.fail_writes.load(AtomicOrdering::SeqCst) {
            return Err(Self::write_error());
        }
        let mut rows = self.courses.lock().unwrap();
        let before = rows.len();
        rows.retain(|c| c.id != id);
        if rows.len() == before {
            return Err(AppError::Store {
                status: 404,
                message: format!("no course with id {id}"),
            });
        }
        Ok(())
    }
}

/// Builds a college row with sensible defaults for tests.
pub fn college_fixture(name: &str, location: &str, nirf_ranking: Option<i32>) -> College {
    let now = Utc::now();
    College {
        id: Uuid::new_v4(),
        name: name.to_string(),
        location: location.to_string(),
        established_year: 1960,
        nirf_ranking,
        total_fees: 800_000,
        description: format!("{name} overview"),
        infrastructure_details: "Library, labs, sports complex".to_string(),
        has_hostel: false,
        has_ac_hostel: false,
        has_non_ac_hostel: false,
        hostel_fees_ac: None,
        hostel_fees_non_ac: None,
        last_year_cutoff: 85.0,
        website_url: None,
        contact_email: format!("admissions@{}.example.edu", name.to_lowercase().replace(' ', "-")),
        contact_phone: "+91 20 0000 0000".to_string(),
        image_url: None,
        created_at: now,
        updated_at: now,
    }
}

/// Builds a course row attached to the given college.
pub fn course_fixture(college_id: Uuid, name: &str) -> Course {
    Course {
        id: Uuid::new_v4(),
        college_id,
        name: name.to_string(),
        duration_years: 3,
        total_seats: 60,
        fees_per_year: 150_000,
        description: None,
        created_at: Utc::now(),
    }
}

/// Builds a profile row for the given role and admin scope.
pub fn profile_fixture(role: Role, college_id: Option<Uuid>) -> Profile {
    let now = Utc::now();
    Profile {
        id: Uuid::new_v4(),
        email: "asha@example.com".to_string(),
        full_name: "Asha Patil".to_string(),
        role,
        college_id,
        created_at: now,
        updated_at: now,
    }
}
