//! State Management
//!
//! Global application state and the inactivity logout timer.

pub mod global;
pub mod session;

pub use global::{provide_global_state, GlobalState};
pub use session::init_inactivity_watch;
