//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`]: domain-level errors
//! - [`text`]: text normalization applied before any pattern matching

pub mod error;
pub mod text;
