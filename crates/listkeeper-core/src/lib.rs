//! # Listkeeper Core
//!
//! Core types shared across the listkeeper components:
//! - The to-do data model (items, named lists)
//! - List-name canonicalization
//! - The unified error type

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod model;
pub mod name;

pub use error::{Error, Result};
pub use model::{default_items, Item, TodoList};
pub use name::ListName;
