pub mod config;
pub mod http;
pub mod persistence;

pub use config::Settings;
pub use http::ReqwestAuthApi;
pub use persistence::{FileCredentialStore, HashMapCredentialStore};
