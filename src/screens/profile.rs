use crate::session::Session;

/// Account screen: renders the session's profile and runs the
/// confirm-then-sign-out flow. Sign-out only happens after the explicit
/// confirmation step; cancelling leaves the session untouched.
#[derive(Default)]
pub struct ProfileScreen {
    confirm_pending: bool,
}

impl ProfileScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// The "Sign Out" button: opens the confirmation dialog.
    pub fn request_sign_out(&mut self) {
        self.confirm_pending = true;
    }

    pub fn cancel_sign_out(&mut self) {
        self.confirm_pending = false;
    }

    pub fn confirm_sign_out(&mut self, session: &mut Session) {
        if !self.confirm_pending {
            return;
        }
        self.confirm_pending = false;
        session.sign_out();
    }

    pub fn is_confirm_pending(&self) -> bool {
        self.confirm_pending
    }

    /// Badge text for the session's role, e.g. "College Admin".
    pub fn role_label(session: &Session) -> &'static str {
        session
            .profile()
            .map(|p| p.role.label())
            .unwrap_or("Student")
    }
}
