// Client core (shared by the WASM admin panel and tests)
pub mod api;
pub mod config;
pub mod credentials;
pub mod error;
pub mod flows;
pub mod form;
pub mod guard;
pub mod routes;
pub mod session;
pub mod transport;

// Browser UI (only compiled with csr feature)
#[cfg(feature = "csr")]
pub mod admin;

// Static host for the admin bundle (only compiled with server feature)
#[cfg(feature = "server")]
pub mod server;
