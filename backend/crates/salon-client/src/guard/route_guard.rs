use crate::{GuardDecision, Route, SessionState};

use salon_core::UserRole;

/// Decides whether protected content may be shown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteGuard {
    required_role: Option<UserRole>,
}

impl RouteGuard {
    /// Any signed-in user
    pub fn new() -> Self {
        Self::default()
    }

    /// Only users with `role`; others go to the dashboard
    pub fn requiring(role: UserRole) -> Self {
        Self {
            required_role: Some(role),
        }
    }

    pub fn required_role(&self) -> Option<UserRole> {
        self.required_role
    }

    pub fn evaluate(&self, state: &SessionState) -> GuardDecision {
        if !state.initialized || state.is_loading {
            return GuardDecision::Pending;
        }

        let (Some(_), Some(user)) = (&state.token, &state.user) else {
            return GuardDecision::Redirect(Route::SignIn);
        };

        match self.required_role {
            Some(role) if user.role != role => GuardDecision::Redirect(Route::Dashboard),
            _ => GuardDecision::Render,
        }
    }
}
