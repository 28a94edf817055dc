//! Admin panel: ZIP upload form and logout

use crate::admin::apiclient::{BrowserFile, LocalTokenStore, RouterNavigator};
use crate::admin::components::FormInput;
use crate::admin::state::AppState;
use crate::flows::{self, UploadForm};
use leptos::*;
use leptos_meta::Title;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

#[component]
pub fn AdminPage() -> impl IntoView {
  let state = use_context::<AppState>().expect("AppState not found");
  let navigator = RouterNavigator::new();

  let (target_dir, set_target_dir) = create_signal(String::new());
  let zip_file = create_rw_signal(Option::<web_sys::File>::None);
  let (response_message, set_response_message) = create_signal(String::new());
  let (error, set_error) = create_signal(String::new());

  // Keep the previous selection if the picker is dismissed
  let on_file_change = move |ev: ev::Event| {
    let picked = ev
      .target()
      .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
      .and_then(|input| input.files())
      .and_then(|files| files.get(0));
    if picked.is_some() {
      zip_file.set(picked);
    }
  };

  let navigator_upload = navigator.clone();
  let on_submit = move |ev: ev::SubmitEvent| {
    ev.prevent_default();

    let form = UploadForm {
      target_dir: target_dir.get_untracked(),
      zip_file: zip_file.get_untracked().map(BrowserFile::new),
    };
    let api = state.api();
    let navigator = navigator_upload.clone();

    spawn_local(async move {
      match flows::upload(&api, &LocalTokenStore, &navigator, &form).await {
        Ok(pretty) => {
          set_response_message.set(pretty);
          set_error.set(String::new());
        }
        Err(e) => {
          logging::error!("Upload failed: {}", e);
          set_error.set(e.user_message().to_string());
          if e.clears_response() {
            set_response_message.set(String::new());
          }
        }
      }
    });
  };

  let on_logout = move |_: ev::MouseEvent| {
    if let Err(e) = flows::logout(&LocalTokenStore, &navigator) {
      logging::error!("Logout could not clear storage: {}", e);
    }
  };

  view! {
    <Title text="Admin Panel"/>
    <div class="page page-center">
      <div class="card">
        <div class="card-header">
          <h1 class="card-title">"Admin Panel"</h1>
          <button class="btn btn-danger btn-sm" on:click=on_logout>
            "Logout"
          </button>
        </div>

        <form class="form" on:submit=on_submit>
          <FormInput
            id="targetDir"
            label="Target Directory"
            input_type="text"
            placeholder="e.g., uploads"
            value=target_dir
            on_change=move |ev: ev::Event| set_target_dir.set(event_target_value(&ev))
            required=true
          />
          <FormInput
            id="zipFile"
            label="ZIP File"
            input_type="file"
            accept=".zip"
            on_change=on_file_change
            required=true
          />
          <Show when=move || !error.get().is_empty()>
            <p class="form-error">{move || error.get()}</p>
          </Show>
          <button type="submit" class="btn btn-primary btn-block">
            "Upload ZIP File"
          </button>
        </form>

        <Show when=move || !response_message.get().is_empty()>
          <div class="response">
            <h3>"Response:"</h3>
            <textarea readonly=true class="response-text" prop:value=move || response_message.get()></textarea>
          </div>
        </Show>
      </div>
    </div>
  }
}
