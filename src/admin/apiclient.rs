//! Browser implementations of the client core's seams

use std::rc::Rc;

use async_trait::async_trait;
use gloo_net::http::Request;
use leptos_router::{use_navigate, NavigateOptions};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use crate::config::{ClientConfig, RUNTIME_CONFIG_PATH};
use crate::error::{ReadError, StorageError, TransportError};
use crate::flows::{encode_data_url, ZipSource};
use crate::routes::{Navigator, Route};
use crate::session::{TokenStore, TOKEN_KEY};
use crate::transport::{ApiRequest, ApiResponse, ApiTransport};

// =============================================================================
// HTTP
// =============================================================================

/// Sends API requests with the browser fetch API
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

fn network_error(e: gloo_net::Error) -> TransportError {
  TransportError::Network(e.to_string())
}

#[async_trait(?Send)]
impl ApiTransport for GlooTransport {
  async fn post(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
    let builder = Request::post(&request.url).header("Authorization", &request.authorization.header_value());
    let req = match &request.json {
      Some(body) => builder.json(body),
      None => builder.build(),
    }
    .map_err(network_error)?;

    let resp = req.send().await.map_err(network_error)?;
    let status = resp.status();
    let body = resp.text().await.map_err(network_error)?;
    Ok(ApiResponse { status, body })
  }
}

/// Runtime configuration published by the static host, if any.
///
/// Dev servers without `/env.json` answer with the SPA fallback page, which
/// fails to parse and yields `None`.
pub async fn fetch_runtime_config() -> Option<ClientConfig> {
  let resp = Request::get(RUNTIME_CONFIG_PATH).send().await.ok()?;
  if !resp.ok() {
    return None;
  }
  resp.json().await.ok()
}

// =============================================================================
// Session storage
// =============================================================================

/// Session slot backed by `window.localStorage`
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalTokenStore;

fn local_storage() -> Result<web_sys::Storage, StorageError> {
  web_sys::window()
    .ok_or(StorageError::Unavailable)?
    .local_storage()
    .map_err(|_| StorageError::Unavailable)?
    .ok_or(StorageError::Unavailable)
}

fn rejected(e: JsValue) -> StorageError {
  StorageError::Rejected(format!("{:?}", e))
}

impl TokenStore for LocalTokenStore {
  fn get(&self) -> Result<Option<String>, StorageError> {
    local_storage()?.get_item(TOKEN_KEY).map_err(rejected)
  }

  fn set(&self, token: &str) -> Result<(), StorageError> {
    local_storage()?.set_item(TOKEN_KEY, token).map_err(rejected)
  }

  fn clear(&self) -> Result<(), StorageError> {
    local_storage()?.remove_item(TOKEN_KEY).map_err(rejected)
  }
}

// =============================================================================
// Navigation
// =============================================================================

/// Navigator over the Leptos router. Must be created inside `<Router>`.
#[derive(Clone)]
pub struct RouterNavigator {
  navigate: Rc<dyn Fn(&str, NavigateOptions)>,
}

impl RouterNavigator {
  pub fn new() -> Self {
    Self {
      navigate: Rc::new(use_navigate()),
    }
  }
}

impl Default for RouterNavigator {
  fn default() -> Self {
    Self::new()
  }
}

impl Navigator for RouterNavigator {
  fn push(&self, route: Route) {
    (self.navigate)(route.path(), NavigateOptions::default());
  }

  fn replace(&self, route: Route) {
    (self.navigate)(
      route.path(),
      NavigateOptions {
        replace: true,
        ..Default::default()
      },
    );
  }
}

// =============================================================================
// Files
// =============================================================================

/// A file picked through an `<input type="file">`
#[derive(Clone, Debug)]
pub struct BrowserFile(web_sys::File);

impl BrowserFile {
  pub fn new(file: web_sys::File) -> Self {
    Self(file)
  }
}

#[async_trait(?Send)]
impl ZipSource for BrowserFile {
  fn name(&self) -> String {
    self.0.name()
  }

  async fn read_data_url(&self) -> Result<String, ReadError> {
    let buffer = JsFuture::from(self.0.array_buffer())
      .await
      .map_err(|e| ReadError::Io(format!("{:?}", e)))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(encode_data_url(&self.0.type_(), &bytes))
  }
}
