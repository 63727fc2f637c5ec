//! Trait abstraction for session backends to enable mocking in tests

use anyhow::Result;
use async_trait::async_trait;

/// Trait for session operations, enabling mocking in tests
///
/// Implementations decide what logging in means; callers only see the
/// logged-in bit and the two transitions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Session: Send + Sync {
    /// Whether a user is currently logged in
    fn is_logged_in(&self) -> bool;

    /// Establish a session for the given credentials
    async fn login(&mut self, email: &str, password: &str) -> Result<()>;

    /// End the current session
    async fn logout(&mut self) -> Result<()>;
}
