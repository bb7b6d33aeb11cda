//! Client-side dashboard for the AEMO electricity market API.
//!
//! Raw upstream payloads flow through [`services`] (gateway, endpoint catalog
//! and query cache) into [`normalize`], which produces the typed view models
//! in [`models`]. [`hooks`] and [`components`] are the Yew front end.

pub mod components;
pub mod config;
pub mod hooks;
pub mod models;
pub mod normalize;
pub mod services;
pub mod utils;
