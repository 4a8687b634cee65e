//! Reusable reactive hooks.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call these from component setup. `use_async` owns run/re-run
//! bookkeeping; `use_async_with_token` gates it behind an access-token
//! refresh resolved through `use_access_token`.

pub mod use_access_token;
pub mod use_async;
pub mod use_async_with_token;

// =============================================================================
// TEST HELPERS
// =============================================================================
