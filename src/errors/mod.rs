//! Error types for the front end.
//!
//! This module defines the structured errors the parser accumulates:
//!
//! - Error structures with source position information
//! - Specific error variants for each kind of parse failure
//! - Message formatting via `Display`

pub mod errors;
