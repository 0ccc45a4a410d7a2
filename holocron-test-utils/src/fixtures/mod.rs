//! Fixture helpers for inserting catalog rows in tests.
//!
//! These insert through the entity `ActiveModel`s directly so this crate
//! does not depend on the host crate's repositories.

pub mod catalog;
pub mod favorite;
pub mod user;
