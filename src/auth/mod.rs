pub mod guard;

pub use guard::{GuardOutcome, GuardState, RouteGuard, LOGIN_ROUTE};

use crate::client::ApiClient;
use crate::error::{ClientError, ClientResult};

/// Log in as an admin and store the issued token.
///
/// Nothing is written to the session store unless the backend answers 2xx
/// with a non-empty `data.token`. A 2xx reply without one is reported as a
/// `RequestFailed`.
pub async fn login(client: &ApiClient, email: &str, password: &str) -> ClientResult<String> {
    let (status, envelope) = client.admin_login_exchange(email, password).await?;

    let token = envelope
        .into_data()
        .and_then(|data| data.token)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            tracing::warn!("Login response did not include a token");
            ClientError::request_failed(status, "Login response did not include a token")
        })?;

    client.session().set(&token)?;
    tracing::info!("Admin login succeeded for {}", email);
    Ok(token)
}

/// Drop the resident token. Does not contact the backend.
pub fn logout(client: &ApiClient) -> ClientResult<()> {
    client.session().clear()?;
    tracing::info!("Session cleared");
    Ok(())
}
