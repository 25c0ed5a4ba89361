use crate::domain::{email::Email, password::Password};

/// Data collected by the two registration stages.
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: Email,
    pub password: Password,
    pub birthdate: String,
    pub kilos: String,
    pub height: String,
    pub gender: String,
}
