//! Labeled form control

use crate::form::ControlKind;
use leptos::*;

/// Stateless label + input pair.
///
/// Change events are forwarded untouched: text controls on `input`, file
/// controls on `change`. `required` only sets the native attribute.
#[component]
pub fn FormInput(
  #[prop(into)] id: String,
  #[prop(into)] label: String,
  #[prop(into)] input_type: String,
  #[prop(into)] on_change: Callback<ev::Event>,
  #[prop(optional, into)] value: Option<Signal<String>>,
  #[prop(optional, into)] placeholder: Option<String>,
  #[prop(optional, into)] accept: Option<String>,
  #[prop(optional)] required: bool,
) -> impl IntoView {
  let control = match ControlKind::from_input_type(&input_type) {
    ControlKind::File => view! {
      <input
        id=id.clone()
        type="file"
        class="input"
        accept=accept
        required=required
        on:change=move |ev| on_change.call(ev)
      />
    },
    ControlKind::Text => view! {
      <input
        id=id.clone()
        type=input_type
        class="input"
        placeholder=placeholder
        prop:value=move || value.map(|v| v.get()).unwrap_or_default()
        required=required
        on:input=move |ev| on_change.call(ev)
      />
    },
  };

  view! {
    <div class="form-group">
      <label for=id>{label}</label>
      {control}
    </div>
  }
}
