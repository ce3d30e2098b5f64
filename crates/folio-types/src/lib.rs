//! Foundation types for the folio console.
//!
//! This crate contains the front-end agnostic types shared by every folio
//! crate: the error type, input keys, entry severities, and the content
//! table / console configuration.

pub mod config;
pub mod error;
pub mod input;
pub mod severity;
