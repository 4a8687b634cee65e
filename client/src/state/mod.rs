//! Client-side state models.
//!
//! SYSTEM CONTEXT
//! ==============
//! `async_state` is the shape hooks report; `run_tracker` decides which run
//! is allowed to write it.

pub mod async_state;
pub mod run_tracker;
