//! FINVIA Core - Shared types library.
//!
//! This crate provides the domain types used by the storefront service:
//! identifiers, email addresses, user roles and product categories.
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP, no storage access.
//! This keeps it lightweight and allows any credential verifier backend to
//! share the same user vocabulary as the login endpoint.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, roles, and categories

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
