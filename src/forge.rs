//! Interface to the hosting platform (GitHub) that owns releases and pull
//! requests.
//!
//! Provides token-based authentication, release body and asset management,
//! and pull request description, file and comment operations through a
//! common trait.

/// Configuration and authentication for the forge platform.
pub mod config;

/// GitHub API client implementation for GitHub.com and Enterprise.
pub mod github;

/// Request and response types shared by forge implementations.
pub mod request;

/// Common traits for forge platform abstraction.
pub mod traits;
