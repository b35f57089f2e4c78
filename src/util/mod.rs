//! Utility helpers shared across annotation UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `page` isolates host page and browser concerns; `links` builds the
//! navigation URLs panels and search hand to the browser.

pub mod links;
pub mod page;
