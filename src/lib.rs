//! Task List Frontend
//!
//! A searchable, selectable list of tasks fetched from a remote JSON feed.

pub mod models;
pub mod config;
pub mod error;
pub mod filter;
pub mod commands;
pub mod screen;
pub mod store;
pub mod logger;
pub mod components;
pub mod app;
