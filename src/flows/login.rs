//! Exchange credentials for a session token

use crate::api::{ApiClient, LoginResponse};
use crate::credentials::Credentials;
use crate::error::LoginError;
use crate::routes::{Navigator, Route};
use crate::session::TokenStore;
use crate::transport::ApiTransport;

/// Log in, persist the returned token and move to the admin page.
///
/// Nothing is stored and no navigation happens unless the backend answers
/// 2xx with a non-empty `access_token`.
pub async fn login<T, S, N>(
  api: &ApiClient<T>,
  store: &S,
  navigator: &N,
  credentials: &Credentials,
) -> Result<(), LoginError>
where
  T: ApiTransport,
  S: TokenStore + ?Sized,
  N: Navigator + ?Sized,
{
  let response = api.login(credentials).await?;
  if !response.ok() {
    tracing::warn!(status = response.status, "login rejected");
    return Err(LoginError::Rejected(response.status));
  }

  let body: LoginResponse = response
    .json()
    .map_err(|e| LoginError::MalformedResponse(e.to_string()))?;
  if body.access_token.is_empty() {
    return Err(LoginError::MalformedResponse("access_token is empty".to_string()));
  }

  store.set(&body.access_token)?;
  tracing::info!(email = %credentials.email, "logged in");
  navigator.push(Route::Admin);
  Ok(())
}
