//! # Listkeeper Server
//!
//! HTTP server for the to-do tracker: routing, form handling, and HTML
//! rendering over a [`listkeeper_store::TodoStore`] backend.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod routes;
pub mod server;
pub mod views;

pub use server::{AppState, Server, ServerConfig};
