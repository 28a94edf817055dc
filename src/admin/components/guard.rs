//! Route guard decorator

use crate::admin::apiclient::{LocalTokenStore, RouterNavigator};
use crate::guard::{check_session, render_gated, GuardState};
use leptos::*;

/// Wrap a page so it renders only when a session token is stored.
///
/// Applied at route registration: `<Route path="/admin" view=protected(AdminPage)/>`.
/// The check runs once per mount; without a token the route is replaced with
/// the login page and nothing renders.
pub fn protected<F, V>(page: F) -> impl Fn() -> View + Clone + 'static
where
  F: Fn() -> V + Clone + 'static,
  V: IntoView,
{
  move || {
    let page = page.clone();
    let navigator = RouterNavigator::new();
    let (state, set_state) = create_signal(GuardState::Unchecked);

    create_effect(move |_| {
      set_state.set(check_session(&LocalTokenStore, &navigator));
    });

    (move || render_gated(state.get(), &page)).into_view()
  }
}
