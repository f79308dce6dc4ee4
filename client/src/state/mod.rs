//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`ui`, `status`, `download`) and each struct is
//! held in an `RwSignal` provided via context, so handlers receive explicit
//! state instead of reaching for globals.

pub mod download;
pub mod status;
pub mod ui;
