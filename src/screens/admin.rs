use std::mem;
use std::sync::Arc;

use tracing::{error, warn};
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{College, Course, NewCourse};
use crate::store::{CollegeStore, Order};
use crate::view::DataBound;

/// Raw form fields as entered. Values stay strings until submission so a
/// failed attempt hands them back to the form unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseDraft {
    pub name: String,
    /// Defaults to "3" like the form's placeholder.
    pub duration_years: String,
    pub total_seats: String,
    /// Entered in Lakhs; multiplied by 100 000 on submission.
    pub fees_lakhs: String,
    pub description: String,
}

impl Default for CourseDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            duration_years: "3".to_string(),
            total_seats: String::new(),
            fees_lakhs: String::new(),
            description: String::new(),
        }
    }
}

impl CourseDraft {
    /// Validates the required fields and builds the insert payload. Name,
    /// seats and fee must be non-empty; an empty duration falls back to 3.
    /// No bounds checks beyond parseability.
    fn to_insert(&self, college_id: Uuid) -> Result<NewCourse, AppError> {
        if self.name.trim().is_empty()
            || self.total_seats.trim().is_empty()
            || self.fees_lakhs.trim().is_empty()
        {
            return Err(AppError::Validation(
                "Please fill in all required fields".to_string(),
            ));
        }

        let duration_years = match self.duration_years.trim() {
            "" => 3,
            raw => raw
                .parse::<i32>()
                .map_err(|_| AppError::Validation("duration must be a whole number".to_string()))?,
        };
        let total_seats = self
            .total_seats
            .trim()
            .parse::<i32>()
            .map_err(|_| AppError::Validation("seats must be a whole number".to_string()))?;
        let fees_lakhs = self
            .fees_lakhs
            .trim()
            .parse::<f64>()
            .map_err(|_| AppError::Validation("fees must be a number".to_string()))?;

        let description = self.description.trim();
        Ok(NewCourse {
            college_id,
            name: self.name.trim().to_string(),
            duration_years,
            total_seats,
            fees_per_year: (fees_lakhs * 100_000.0).round() as i64,
            description: if description.is_empty() {
                None
            } else {
                Some(description.to_string())
            },
        })
    }
}

/// Course-creation states: `Idle -> Open -> Submitting -> Idle` on success;
/// validation and gateway failures return to `Open` with the draft intact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseForm {
    Idle,
    Open(CourseDraft),
    Submitting,
}

/// Course-deletion states; the prompt names the course being removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteFlow {
    Idle,
    ConfirmPending { id: Uuid, name: String },
}

/// What the dashboard fetched for the admin's one college.
#[derive(Debug, Clone)]
struct DashboardData {
    college: Option<College>,
    courses: Vec<Course>,
}

/// Admin dashboard: the assigned college, its courses, and the create/delete
/// flows. Every mutation is scoped to the college id the session carries;
/// there is no way to address another college from here.
pub struct AdminDashboard {
    store: Arc<dyn CollegeStore>,
    college_id: Option<Uuid>,
    data: DataBound<DashboardData>,
    form: CourseForm,
    delete: DeleteFlow,
    notice: Option<String>,
}

impl AdminDashboard {
    /// `college_id` comes from [`Session::admin_college_id`]; `None` renders
    /// the "No College Assigned" state and disables every mutation.
    ///
    /// [`Session::admin_college_id`]: crate::session::Session::admin_college_id
    pub fn new(store: Arc<dyn CollegeStore>, college_id: Option<Uuid>) -> Self {
        Self {
            store,
            college_id,
            data: DataBound::new(),
            form: CourseForm::Idle,
            delete: DeleteFlow::Idle,
            notice: None,
        }
    }

    /// Fetches the college and its courses in full. Called on entry and after
    /// every successful mutation; local state is never patched incrementally.
    pub async fn load(&mut self) {
        let Some(college_id) = self.college_id else {
            return;
        };
        let ticket = self.data.begin();
        let result = self.fetch_dashboard(college_id).await;
        if let Err(err) = &result {
            error!("error fetching college data: {err}");
        }
        self.data.resolve(ticket, result);
    }

    async fn fetch_dashboard(&self, college_id: Uuid) -> Result<DashboardData, AppError> {
        let college = self.store.fetch_college(college_id).await?;
        let courses = self
            .store
            .fetch_courses_for_college(college_id, Order::by("name"))
            .await?;
        Ok(DashboardData { college, courses })
    }

    pub fn college(&self) -> Option<&College> {
        self.data.data().and_then(|d| d.college.as_ref())
    }

    pub fn courses(&self) -> &[Course] {
        self.data.data().map(|d| d.courses.as_slice()).unwrap_or(&[])
    }

    pub fn is_loading(&self) -> bool {
        self.data.is_loading()
    }

    pub fn form(&self) -> &CourseForm {
        &self.form
    }

    pub fn delete_flow(&self) -> &DeleteFlow {
        &self.delete
    }

    /// Last surfaced error, shown once and cleared by the next attempt.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Opens the add-course form. Precondition: the session has an assigned
    /// college and its row is loaded; otherwise the form never renders.
    pub fn open_form(&mut self) -> bool {
        if self.college().is_none() || !matches!(self.form, CourseForm::Idle) {
            return false;
        }
        self.form = CourseForm::Open(CourseDraft::default());
        true
    }

    /// Closes the form and discards the draft ("Cancel").
    pub fn close_form(&mut self) {
        if matches!(self.form, CourseForm::Open(_)) {
            self.form = CourseForm::Idle;
        }
    }

    /// Live form fields, available while the form is open.
    pub fn draft_mut(&mut self) -> Option<&mut CourseDraft> {
        match &mut self.form {
            CourseForm::Open(draft) => Some(draft),
            _ => None,
        }
    }

    /// Submits the open form. Validation failure keeps the form open without
    /// ever reaching the store; a gateway failure reopens it with the entered
    /// values intact. Success closes the form and refetches the course list.
    pub async fn submit_course(&mut self) {
        let draft = match mem::replace(&mut self.form, CourseForm::Idle) {
            CourseForm::Open(draft) => draft,
            other => {
                self.form = other;
                return;
            }
        };
        let Some(college_id) = self.college().map(|c| c.id) else {
            self.form = CourseForm::Open(draft);
            return;
        };

        self.notice = None;
        let course = match draft.to_insert(college_id) {
            Ok(course) => course,
            Err(err) => {
                self.notice = Some(err.to_string());
                self.form = CourseForm::Open(draft);
                return;
            }
        };

        self.form = CourseForm::Submitting;
        match self.store.insert_course(course).await {
            Ok(()) => {
                self.form = CourseForm::Idle;
                self.load().await;
            }
            Err(err) => {
                warn!("error adding course: {err}");
                self.notice = Some(err.to_string());
                self.form = CourseForm::Open(draft);
            }
        }
    }

    /// The trash button: asks for confirmation, naming the course.
    pub fn request_delete(&mut self, course_id: Uuid) {
        let Some(course) = self.courses().iter().find(|c| c.id == course_id) else {
            return;
        };
        self.delete = DeleteFlow::ConfirmPending {
            id: course.id,
            name: course.name.clone(),
        };
    }

    /// Dialog text for the pending deletion.
    pub fn delete_prompt(&self) -> Option<String> {
        match &self.delete {
            DeleteFlow::ConfirmPending { name, .. } => {
                Some(format!("Are you sure you want to delete \"{name}\"?"))
            }
            DeleteFlow::Idle => None,
        }
    }

    pub fn cancel_delete(&mut self) {
        self.delete = DeleteFlow::Idle;
    }

    /// Runs the confirmed deletion. Success refetches in full; failure
    /// surfaces a notice and leaves the local snapshot untouched.
    pub async fn confirm_delete(&mut self) {
        let DeleteFlow::ConfirmPending { id, .. } =
            mem::replace(&mut self.delete, DeleteFlow::Idle)
        else {
            return;
        };

        self.notice = None;
        match self.store.delete_course(id).await {
            Ok(()) => self.load().await,
            Err(err) => {
                warn!("error deleting course: {err}");
                self.notice = Some(err.to_string());
            }
        }
    }

    pub fn detach(&mut self) {
        self.data.detach();
    }
}
