//! Reusable UI components for the download page.

pub mod download_form;
pub mod result_section;
pub mod status_message;
pub mod theme_toggle;
