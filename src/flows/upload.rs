//! Authenticated ZIP upload and logout

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

use crate::api::{ApiClient, UploadRequest};
use crate::error::{ReadError, StorageError, UploadError};
use crate::routes::{Navigator, Route};
use crate::session::{current_token, TokenStore};
use crate::transport::ApiTransport;

/// A user-selected file that can be read as a Base64 data URL
#[async_trait(?Send)]
pub trait ZipSource {
  fn name(&self) -> String;
  async fn read_data_url(&self) -> Result<String, ReadError>;
}

/// Upload form contents at submit time
#[derive(Clone, Debug, Default)]
pub struct UploadForm<F> {
  pub target_dir: String,
  pub zip_file: Option<F>,
}

/// Build `data:<mime>;base64,<payload>` the way a browser file reader does.
pub fn encode_data_url(mime: &str, bytes: &[u8]) -> String {
  let mime = if mime.is_empty() { "application/octet-stream" } else { mime };
  format!("data:{};base64,{}", mime, BASE64.encode(bytes))
}

/// Drop everything up to and including the first comma.
pub fn strip_data_url_prefix(mut data_url: String) -> Result<String, ReadError> {
  let comma = data_url.find(',').ok_or(ReadError::MalformedDataUrl)?;
  Ok(data_url.split_off(comma + 1))
}

/// Upload the selected archive and return the response pretty-printed.
pub async fn upload<T, S, N, F>(
  api: &ApiClient<T>,
  store: &S,
  navigator: &N,
  form: &UploadForm<F>,
) -> Result<String, UploadError>
where
  T: ApiTransport,
  S: TokenStore + ?Sized,
  N: Navigator + ?Sized,
  F: ZipSource,
{
  let file = match &form.zip_file {
    Some(file) if !form.target_dir.is_empty() => file,
    _ => return Err(UploadError::MissingInput),
  };

  let Some(token) = current_token(store) else {
    navigator.replace(Route::Login);
    return Err(UploadError::NotAuthenticated);
  };

  let data_url = file.read_data_url().await?;
  let body = UploadRequest {
    target_dir: form.target_dir.clone(),
    zip_file: strip_data_url_prefix(data_url)?,
  };

  let response = api.upload(&token, &body).await?;
  if !response.ok() {
    tracing::warn!(status = response.status, file = %file.name(), "upload rejected");
    return Err(UploadError::Rejected {
      status: response.status,
      body: response.body,
    });
  }

  let value: serde_json::Value = response
    .json()
    .map_err(|e| UploadError::MalformedResponse(e.to_string()))?;
  serde_json::to_string_pretty(&value).map_err(|e| UploadError::MalformedResponse(e.to_string()))
}

/// Forget the session locally and return to the login page.
///
/// The backend is not told; the token stays valid server-side until it expires.
pub fn logout<S, N>(store: &S, navigator: &N) -> Result<(), StorageError>
where
  S: TokenStore + ?Sized,
  N: Navigator + ?Sized,
{
  let cleared = store.clear();
  if let Err(e) = &cleared {
    tracing::warn!(error = %e, "failed to clear session token");
  }
  navigator.push(Route::Login);
  cleared
}
