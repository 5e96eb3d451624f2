//! Stuhealth wellness portal.
//!
//! Application state, a reducer-style controller over a pluggable key-value
//! store, and a scripted chat helper. The Dioxus front end in `ui` and
//! `views` is compiled with the `web`, `desktop` or `mobile` feature.

pub mod chat;
pub mod config;
pub mod controller;
pub mod state;
pub mod store;
pub mod types;

#[cfg(feature = "dioxus")]
pub mod ui;
#[cfg(feature = "dioxus")]
pub mod views;

pub use controller::{Outcome, SharedApp, WellnessApp, send_chat_message, shared};
pub use state::{Action, AppState, Dashboard, Notice};
pub use store::{FileStore, KeyValueStore, MemoryStore, Slice, StoreError};
