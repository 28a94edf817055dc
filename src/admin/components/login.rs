//! Login page component

use crate::admin::apiclient::{LocalTokenStore, RouterNavigator};
use crate::admin::components::FormInput;
use crate::admin::state::AppState;
use crate::credentials::Credentials;
use crate::flows;
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn LoginPage() -> impl IntoView {
  let state = use_context::<AppState>().expect("AppState not found");
  let navigator = RouterNavigator::new();

  let (email, set_email) = create_signal(String::new());
  let (password, set_password) = create_signal(String::new());
  let (error, set_error) = create_signal(String::new());

  let on_submit = move |ev: ev::SubmitEvent| {
    ev.prevent_default();

    let credentials = Credentials::new(email.get_untracked(), password.get_untracked());
    let api = state.api();
    let navigator = navigator.clone();

    spawn_local(async move {
      if let Err(e) = flows::login(&api, &LocalTokenStore, &navigator, &credentials).await {
        logging::error!("Login failed: {}", e);
        set_error.set(e.user_message().to_string());
      }
    });
  };

  view! {
    <Title text="Admin Login"/>
    <div class="page page-center">
      <div class="card card-narrow">
        <h1 class="card-title">"Admin Login"</h1>
        <form class="form" on:submit=on_submit>
          <FormInput
            id="email"
            label="Email"
            input_type="email"
            placeholder="Email"
            value=email
            on_change=move |ev: ev::Event| set_email.set(event_target_value(&ev))
            required=true
          />
          <FormInput
            id="password"
            label="Password"
            input_type="password"
            placeholder="Password"
            value=password
            on_change=move |ev: ev::Event| set_password.set(event_target_value(&ev))
            required=true
          />
          <Show when=move || !error.get().is_empty()>
            <p class="form-error">{move || error.get()}</p>
          </Show>
          <button type="submit" class="btn btn-primary btn-block">
            "Login"
          </button>
        </form>
      </div>
    </div>
  }
}
