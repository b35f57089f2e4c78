//! Client state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `panel` holds the per-card fetch lifecycle every annotation panel shares.
//! Panels own their state as local signals; nothing here is global.

pub mod panel;
