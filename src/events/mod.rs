//! Calendar events: flat CRUD, no hierarchy

pub mod db;
pub mod handlers;
