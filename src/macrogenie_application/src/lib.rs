pub mod navigation;
pub mod session_state;
pub mod use_cases;

#[cfg(test)]
mod test_support;

pub use navigation::NavigationTracker;
pub use session_state::SessionStateMachine;
pub use use_cases::{
    change_password::{ChangePasswordError, ChangePasswordUseCase},
    complete_profile::{CompleteProfileError, CompleteProfileUseCase},
    google_login::{GoogleLoginError, GoogleLoginUseCase},
    login::{LoginError, LoginUseCase},
    logout::{LogoutError, LogoutUseCase},
    password_reset::{PasswordResetError, RequestPasswordResetUseCase, ResetPasswordUseCase},
    register::{RegisterError, RegisterUseCase},
    validate_session::ValidateSessionUseCase,
    verification_gate::{VerificationGate, VerifyEmailError, VerifyOutcome},
};
