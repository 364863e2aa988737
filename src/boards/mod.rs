//! Board tree: boards own lists, lists own cards
//!
//! - **`db`** - parameterized CRUD per table
//! - **`handlers`** - HTTP handlers, including the two cascading deletes

pub mod db;
pub mod handlers;
