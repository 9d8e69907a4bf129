//! Domain models for the storefront.
//!
//! These types represent validated domain objects. Wire projections
//! (`UserSummary`) are kept next to the records they are derived from so the
//! set of fields that leaves the service is explicit.

pub mod product;
pub mod session;
pub mod user;

pub use product::Product;
pub use session::Session;
pub use user::{User, UserSummary};
