pub mod env {
    pub const CONFIG_PATH_ENV_VAR: &str = "MACROGENIE_CONFIG";
    pub const ENV_PREFIX: &str = "MACROGENIE";
    pub const ENV_SEPARATOR: &str = "__";
}

pub const DEFAULT_CONFIG_FILE: &str = "macrogenie.json";
pub const DEFAULT_CREDENTIAL_KEY: &str = "jwt_token";
pub const DEFAULT_CREDENTIALS_PATH: &str = "./macrogenie/credentials.json";

pub mod api {
    use std::time::Duration;

    pub const VALIDATE_TOKEN: &str = "/api/validate/token";
    pub const SEND_VERIFICATION_CODE: &str = "/api/send/verification/code";
    pub const VERIFY_EMAIL: &str = "/api/verify/email";
    pub const LOGIN: &str = "/api/login";
    pub const REGISTER: &str = "/api/register";
    pub const GOOGLE_LOGIN: &str = "/api/web/google-login";
    pub const SEND_PASSWORD_RESET_CODE: &str = "/api/password/reset/send/code";
    pub const RESET_PASSWORD: &str = "/api/password/reset";
    pub const CHANGE_PASSWORD: &str = "/api/change/password";
    pub const PROFILE_STATUS: &str = "/api/profile/status";
    pub const UPDATE_PROFILE: &str = "/api/update/profile";

    pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
}

pub mod test {
    pub mod api {
        use std::time::Duration;

        pub const TIMEOUT: Duration = Duration::from_millis(200);
    }
}
