//! Login, registration and logout.
//!
//! These are the only places the session slot is written. A failed login or
//! registration leaves it exactly as it was.

use store::Session;
use tracing::{info, warn};

use crate::backend::NotesApi;
use crate::error::ApiError;
use crate::models::Credentials;

/// Fallback shown when a failed login carries no server detail.
pub const LOGIN_FAILED: &str = "Login failed";
/// Fallback shown when a failed registration carries no server detail.
pub const REGISTRATION_FAILED: &str = "Registration failed";

/// Exchange credentials for a token and store it in `session`.
pub async fn login<A: NotesApi>(
    api: &A,
    session: &Session,
    credentials: &Credentials,
) -> Result<(), ApiError> {
    match api.login(credentials).await {
        Ok(token) => {
            session.set(&token.access_token);
            info!("Logged in as {}", credentials.username);
            Ok(())
        }
        Err(e) => {
            warn!("Login failed for {}: {}", credentials.username, e);
            Err(e)
        }
    }
}

/// Create an account. Does not log in.
pub async fn register<A: NotesApi>(api: &A, credentials: &Credentials) -> Result<(), ApiError> {
    match api.register(credentials).await {
        Ok(()) => {
            info!("Registered {}", credentials.username);
            Ok(())
        }
        Err(e) => {
            warn!("Registration failed for {}: {}", credentials.username, e);
            Err(e)
        }
    }
}

/// Forget the stored token.
pub fn logout(session: &Session) {
    session.clear();
    info!("Logged out");
}
