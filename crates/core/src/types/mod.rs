//! Core types for Handloom.
//!
//! This module provides type-safe wrappers for the marketplace's domain
//! concepts, along with the lenient numeric coercion used by page forms.

pub mod id;
pub mod price;
pub mod role;

pub use id::{ProductId, ProductIdError};
pub use price::{Price, Stock};
pub use role::{Role, RoleError};
