//! Networking for the `/download` endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the request and interprets the reply; the wire schema itself
//! lives in the shared `wire` crate.

pub mod api;
