//! Admin UI Components

use crate::admin::apiclient;
use crate::admin::state::AppState;
use crate::config::ClientConfig;
use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

mod guard;
mod input;
mod login;
mod upload;

pub use guard::protected;
pub use input::FormInput;
pub use login::LoginPage;
pub use upload::AdminPage;

/// Main App component
#[component]
pub fn App() -> impl IntoView {
  provide_meta_context();

  let state = AppState::new(ClientConfig::from_build_env());
  provide_context(state);

  let (config_loading, set_config_loading) = create_signal(true);

  // Resolve the API base before any page can issue requests
  create_effect(move |_| {
    spawn_local(async move {
      let runtime = apiclient::fetch_runtime_config().await;
      state.config.update(|config| *config = std::mem::take(config).overlay(runtime));
      logging::log!("API base: {:?}", state.config.with_untracked(|c| c.api_url.clone()));
      set_config_loading.set(false);
    });
  });

  view! {
    <Title text="Admin"/>
    <Router>
      <Show
        when=move || !config_loading.get()
        fallback=|| view! { <div class="page page-center">"Loading..."</div> }
      >
        <Routes>
          <Route path="/" view=LoginPage/>
          <Route path="/admin" view=protected(AdminPage)/>
        </Routes>
      </Show>
    </Router>
  }
}
