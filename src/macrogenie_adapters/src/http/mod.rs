pub mod dto;
pub mod reqwest_auth_api;

pub use reqwest_auth_api::ReqwestAuthApi;
