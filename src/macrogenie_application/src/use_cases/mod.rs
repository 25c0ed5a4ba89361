pub mod change_password;
pub mod complete_profile;
pub mod google_login;
pub mod login;
pub mod logout;
pub mod password_reset;
pub mod register;
pub mod validate_session;
pub mod verification_gate;
