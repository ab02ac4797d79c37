//! Background Tasks Module
//!
//! Periodic tasks that run alongside the HTTP server.
//!
//! # Tasks
//! - Cache sweep: drops views whose sliding window elapsed
//! - Flag refresh: re-polls the toggle service

mod cleanup;
mod flag_refresh;

pub use cleanup::spawn_cleanup_task;
pub use flag_refresh::spawn_flag_refresh_task;
