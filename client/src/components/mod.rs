//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components own page chrome so route modules only supply content.

pub mod wide_layout;
