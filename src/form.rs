//! Form control kinds

/// How a labeled control reports user changes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlKind {
  /// Fires on every `input` event
  Text,
  /// Fires on `change` once a selection is made
  File,
}

impl ControlKind {
  pub fn from_input_type(input_type: &str) -> Self {
    if input_type.eq_ignore_ascii_case("file") {
      ControlKind::File
    } else {
      ControlKind::Text
    }
  }
}
