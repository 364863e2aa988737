//! To-do tree: to-do lists own to-do cards
//!
//! Parallel to the board tree, one level shallower.

pub mod db;
pub mod handlers;
