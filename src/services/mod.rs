//! Domain services invoked by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! `fetcher` defines the seam to the media backend. `download` turns fetched
//! media into served files and wire responses, with `archive` packaging
//! profiles into zips. `cleaner` expires old downloads in the background.

pub mod archive;
pub mod cleaner;
pub mod download;
pub mod fetcher;
