pub mod file_credential_store;
pub mod hashmap_credential_store;

pub use file_credential_store::FileCredentialStore;
pub use hashmap_credential_store::HashMapCredentialStore;
