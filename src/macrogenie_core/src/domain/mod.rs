pub mod auth_grant;
pub mod credential;
pub mod email;
pub mod password;
pub mod profile;
pub mod registration;
pub mod session;
pub mod verification_code;
pub mod verification_prompt;
