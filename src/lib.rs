//! # MacroGenie - Session Client Library
//!
//! Facade crate that re-exports the public API of the session client
//! components, so an app embeds one dependency.
//!
//! ## Structure
//!
//! - **Core domain types**: `Credential`, `Email`, `Password`, `SessionResult`, etc.
//! - **Port traits**: `CredentialStore`, `AuthApi`
//! - **Use cases**: `ValidateSessionUseCase`, `VerificationGate`, `LoginUseCase`, etc.
//! - **Adapters**: `FileCredentialStore`, `HashMapCredentialStore`, `ReqwestAuthApi`, `Settings`
//! - **Client**: `SessionClient` - the handle screens talk to

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use macrogenie_core::*;
}

pub use macrogenie_core::{
    AuthGrant, Credential, CredentialError, Email, EmailError, Password, PasswordError,
    ProfileDetails, ProfileError, ProfileStatus, Registration, RegistrationForm, SessionPhase,
    SessionResult, SessionSnapshot, SessionState, VerificationCode, VerificationCodeError,
    VerificationPrompt,
};

// ============================================================================
// Port Traits
// ============================================================================

/// Store and backend contracts
pub mod ports {
    pub use macrogenie_core::{AuthApi, AuthApiError, CredentialStore, CredentialStoreError};
}

pub use ports::{AuthApi, AuthApiError, CredentialStore, CredentialStoreError};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use macrogenie_application::*;
}

pub use macrogenie_application::{
    ChangePasswordUseCase, CompleteProfileUseCase, GoogleLoginUseCase, LoginUseCase,
    LogoutUseCase, NavigationTracker, RegisterUseCase, RequestPasswordResetUseCase,
    ResetPasswordUseCase, SessionStateMachine, ValidateSessionUseCase, VerificationGate,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Backend client
    pub mod http {
        pub use macrogenie_adapters::http::*;
    }

    /// Credential store implementations
    pub mod persistence {
        pub use macrogenie_adapters::persistence::*;
    }

    /// Configuration
    pub mod config {
        pub use macrogenie_adapters::config::*;
    }
}

pub use macrogenie_adapters::{
    FileCredentialStore, HashMapCredentialStore, ReqwestAuthApi, Settings,
};

// ============================================================================
// Session Client (Main Entry Point)
// ============================================================================

pub use macrogenie_client::{SessionClient, init_error_reporting, init_tracing};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};
