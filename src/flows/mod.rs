//! User-facing operations, independent of the rendering layer

pub mod login;
pub mod upload;

pub use login::login;
pub use upload::{encode_data_url, logout, strip_data_url_prefix, upload, UploadForm, ZipSource};
