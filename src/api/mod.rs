//! # API Module
//!
//! HTTP handlers for the web surface. The authorization flow handlers
//! ([`root`], [`callback`]) render pages and redirects; everything under
//! `/api` speaks JSON and sits behind the access guard
//! ([`crate::session::AuthSession`]).
//!
//! ## Endpoints
//!
//! - `GET /` - app shell when authenticated, otherwise redirect into the
//!   provider consent flow
//! - `GET /callback` - authorization completion (code exchange)
//! - `GET /health` - liveness probe with version information
//! - `GET /api/playlists` - all playlists, annotated with editability
//! - `GET /api/playlists/{id}/tracks` - first track page, raw passthrough
//! - `GET /api/me` - authenticated user id
//! - `POST /api/delete-items` - bulk delete with partial-failure report

mod callback;
mod delete;
mod health;
mod me;
mod playlists;
mod root;

pub use callback::{CallbackParams, callback};
pub use delete::{delete_items, report_payload};
pub use health::health;
pub use me::me;
pub use playlists::{playlists, tracks};
pub use root::root;
