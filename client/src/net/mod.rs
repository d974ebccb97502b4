//! Networking modules for the REST boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls and `types` defines the payload schema shared
//! with the server.

pub mod api;
pub mod types;
