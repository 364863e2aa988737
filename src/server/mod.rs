//! Server setup
//!
//! - **`config`** - environment-driven configuration and pool creation
//! - **`state`** - the `AppState` container
//! - **`init`** - application assembly

pub mod config;
pub mod init;
pub mod state;

pub use init::create_app;
pub use state::AppState;
