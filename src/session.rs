use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{Profile, Role};
use crate::store::CollegeStore;

/// The current user's identity, scoped to the app lifetime: created at start
/// around the gateway, populated once the session id is known, torn down by
/// [`Session::sign_out`]. Screens borrow this instead of reading globals.
pub struct Session {
    store: Arc<dyn CollegeStore>,
    profile: Option<Profile>,
}

impl Session {
    pub fn new(store: Arc<dyn CollegeStore>) -> Self {
        Self {
            store,
            profile: None,
        }
    }

    /// Loads the profile for the authenticated session id. An absent row
    /// leaves the session signed out rather than failing.
    pub async fn load_profile(&mut self, session_id: Uuid) -> Result<(), AppError> {
        self.profile = self.store.fetch_profile(session_id).await?;
        Ok(())
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    pub fn role(&self) -> Option<Role> {
        self.profile.as_ref().map(|p| p.role)
    }

    /// The one college this session may manage: present only for an admin
    /// profile with an assigned college. Everything in the admin flow keys
    /// off this, so an admin can never address another college.
    pub fn admin_college_id(&self) -> Option<Uuid> {
        match self.profile.as_ref() {
            Some(profile) if profile.role == Role::CollegeAdmin => profile.college_id,
            _ => None,
        }
    }

    /// Tears the identity down. Called only after explicit user confirmation.
    pub fn sign_out(&mut self) {
        if let Some(profile) = self.profile.take() {
            info!(user = %profile.id, "signed out");
        }
    }
}
