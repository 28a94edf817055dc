//! In-memory stand-ins for browser storage, routing, HTTP and files
#![allow(dead_code)]

use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::VecDeque;

use zipgate::api::ApiClient;
use zipgate::error::{ReadError, StorageError, TransportError};
use zipgate::flows::{encode_data_url, ZipSource};
use zipgate::routes::{Navigator, Route};
use zipgate::session::TokenStore;
use zipgate::transport::{ApiRequest, ApiResponse, ApiTransport};

pub const API_BASE: &str = "http://api.test";

// =============================================================================
// Storage
// =============================================================================

pub struct MemoryStore {
  token: RefCell<Option<String>>,
  available: bool,
}

impl MemoryStore {
  pub fn empty() -> Self {
    Self {
      token: RefCell::new(None),
      available: true,
    }
  }

  pub fn with_token(token: &str) -> Self {
    Self {
      token: RefCell::new(Some(token.to_string())),
      available: true,
    }
  }

  pub fn unavailable() -> Self {
    Self {
      token: RefCell::new(None),
      available: false,
    }
  }

  pub fn token(&self) -> Option<String> {
    self.token.borrow().clone()
  }
}

impl TokenStore for MemoryStore {
  fn get(&self) -> Result<Option<String>, StorageError> {
    if !self.available {
      return Err(StorageError::Unavailable);
    }
    Ok(self.token.borrow().clone())
  }

  fn set(&self, token: &str) -> Result<(), StorageError> {
    if !self.available {
      return Err(StorageError::Unavailable);
    }
    *self.token.borrow_mut() = Some(token.to_string());
    Ok(())
  }

  fn clear(&self) -> Result<(), StorageError> {
    if !self.available {
      return Err(StorageError::Unavailable);
    }
    *self.token.borrow_mut() = None;
    Ok(())
  }
}

// =============================================================================
// Navigation
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
  Push(Route),
  Replace(Route),
}

#[derive(Default)]
pub struct RecordingNavigator {
  history: RefCell<Vec<Navigation>>,
}

impl RecordingNavigator {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn history(&self) -> Vec<Navigation> {
    self.history.borrow().clone()
  }

  pub fn current(&self) -> Option<Route> {
    self.history.borrow().last().map(|n| match n {
      Navigation::Push(r) | Navigation::Replace(r) => *r,
    })
  }
}

impl Navigator for RecordingNavigator {
  fn push(&self, route: Route) {
    self.history.borrow_mut().push(Navigation::Push(route));
  }

  fn replace(&self, route: Route) {
    self.history.borrow_mut().push(Navigation::Replace(route));
  }
}

// =============================================================================
// HTTP
// =============================================================================

/// Replays queued outcomes and records every request it sees
#[derive(Default)]
pub struct MockTransport {
  outcomes: RefCell<VecDeque<Result<ApiResponse, TransportError>>>,
  requests: RefCell<Vec<ApiRequest>>,
}

impl MockTransport {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn respond(self, status: u16, body: &str) -> Self {
    self.outcomes.borrow_mut().push_back(Ok(ApiResponse::new(status, body)));
    self
  }

  pub fn fail(self, message: &str) -> Self {
    self
      .outcomes
      .borrow_mut()
      .push_back(Err(TransportError::Network(message.to_string())));
    self
  }

  pub fn requests(&self) -> Vec<ApiRequest> {
    self.requests.borrow().clone()
  }
}

#[async_trait(?Send)]
impl ApiTransport for MockTransport {
  async fn post(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
    self.requests.borrow_mut().push(request);
    self
      .outcomes
      .borrow_mut()
      .pop_front()
      .unwrap_or_else(|| Err(TransportError::Network("no response queued".to_string())))
  }
}

pub fn client(transport: MockTransport) -> ApiClient<MockTransport> {
  ApiClient::new(API_BASE, transport)
}

// =============================================================================
// Files
// =============================================================================

pub struct FakeZip {
  name: String,
  contents: Result<String, ReadError>,
}

impl FakeZip {
  pub fn with_bytes(name: &str, bytes: &[u8]) -> Self {
    Self {
      name: name.to_string(),
      contents: Ok(encode_data_url("application/zip", bytes)),
    }
  }

  pub fn with_data_url(name: &str, data_url: &str) -> Self {
    Self {
      name: name.to_string(),
      contents: Ok(data_url.to_string()),
    }
  }

  pub fn unreadable(name: &str) -> Self {
    Self {
      name: name.to_string(),
      contents: Err(ReadError::Io("NotReadableError".to_string())),
    }
  }
}

#[async_trait(?Send)]
impl ZipSource for FakeZip {
  fn name(&self) -> String {
    self.name.clone()
  }

  async fn read_data_url(&self) -> Result<String, ReadError> {
    self.contents.clone()
  }
}
