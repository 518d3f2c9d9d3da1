//! Application orchestration: state, deferred timers and input handling.

pub mod event;
pub mod handler;
pub mod state;
pub mod timer;
