//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod form;
pub use form::{is_valid_phone, FormState};

mod client;
pub use client::make_store;

pub mod views;

pub const APP_CSS: Asset = asset!("/assets/clientele.css");
