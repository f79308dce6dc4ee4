//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, clipboard, scrolling,
//! timers) from page and component logic so the latter stay testable.

pub mod browser;
pub mod theme;
