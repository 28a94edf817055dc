//! Session guard state machine
//!
//! The guard is a presence check only: any non-empty stored token admits the
//! wrapped page. Token semantics belong to the backend.

use crate::routes::{Navigator, Route};
use crate::session::{current_token, TokenStore};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GuardState {
  #[default]
  Unchecked,
  Authenticated,
  Redirecting,
}

impl GuardState {
  pub fn admits(self) -> bool {
    self == GuardState::Authenticated
  }
}

/// Build the wrapped content only once the state admits it.
pub fn render_gated<T>(state: GuardState, page: impl FnOnce() -> T) -> Option<T> {
  state.admits().then(page)
}

/// Run the mount-time check once and return the resulting state.
///
/// On a missing token the current route is replaced with the login page.
pub fn check_session<S, N>(store: &S, navigator: &N) -> GuardState
where
  S: TokenStore + ?Sized,
  N: Navigator + ?Sized,
{
  if current_token(store).is_some() {
    GuardState::Authenticated
  } else {
    tracing::debug!("no session token, redirecting to login");
    navigator.replace(Route::Login);
    GuardState::Redirecting
  }
}
