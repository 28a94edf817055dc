//! Client routes and the navigation seam

/// Pages known to the admin client
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
  Login,
  Admin,
}

impl Route {
  pub fn path(self) -> &'static str {
    match self {
      Route::Login => "/",
      Route::Admin => "/admin",
    }
  }
}

/// Moves the client between routes.
///
/// `push` adds a history entry; `replace` swaps the current one and is used
/// for redirects.
pub trait Navigator {
  fn push(&self, route: Route);
  fn replace(&self, route: Route);
}
