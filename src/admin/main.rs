//! zipgate admin panel - Client-Side Rendered (WASM)

use leptos::*;
use zipgate::admin::App;

fn main() {
  // Core `tracing` events fall through to `log` when no subscriber is set
  _ = console_log::init_with_level(log::Level::Debug);
  console_error_panic_hook::set_once();
  mount_to_body(|| view! { <App/> });
}
