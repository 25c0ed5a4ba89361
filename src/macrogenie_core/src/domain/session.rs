/// Outcome of one session validation attempt.
///
/// Always a complete value: every failure path substitutes
/// [`SessionResult::unauthenticated`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionResult {
    pub valid: bool,
    pub profile_complete: bool,
    pub email: String,
    pub email_verified: bool,
    pub is_google_account: bool,
}

impl SessionResult {
    pub fn unauthenticated() -> Self {
        Self::default()
    }

    /// True when the account must confirm its email before continuing.
    pub fn requires_email_verification(&self) -> bool {
        self.valid && !self.email_verified
    }
}

/// Flags the view layer branches on.
///
/// `is_profile_complete` only carries meaning while `is_logged_in` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionState {
    pub is_logged_in: bool,
    pub is_profile_complete: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    #[default]
    LoggedOut,
    LoggedInIncomplete,
    LoggedInComplete,
}

impl SessionPhase {
    pub fn from_profile_complete(profile_complete: bool) -> Self {
        if profile_complete {
            Self::LoggedInComplete
        } else {
            Self::LoggedInIncomplete
        }
    }

    pub fn is_logged_in(self) -> bool {
        !matches!(self, Self::LoggedOut)
    }
}

/// Everything the session state machine tracks.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionSnapshot {
    pub phase: SessionPhase,
    pub email_unverified: bool,
    pub is_google_account: bool,
    pub email: String,
}

impl SessionSnapshot {
    pub fn from_result(result: &SessionResult) -> Self {
        if !result.valid {
            return Self::default();
        }
        Self {
            phase: SessionPhase::from_profile_complete(result.profile_complete),
            email_unverified: !result.email_verified,
            is_google_account: result.is_google_account,
            email: result.email.clone(),
        }
    }

    pub fn state(&self) -> SessionState {
        SessionState {
            is_logged_in: self.phase.is_logged_in(),
            is_profile_complete: self.phase == SessionPhase::LoggedInComplete,
        }
    }
}
