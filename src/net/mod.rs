//! Networking modules for the feature annotation REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls, `types` defines the wire schema, and `error`
//! classifies failures for panel display.

pub mod api;
pub mod error;
pub mod types;
