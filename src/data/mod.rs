//! Data access layer repositories.
//!
//! Repositories provide an abstraction over database operations, organized
//! by domain: user accounts, the catalog entities, and the favorite entries
//! linking them. Constraint enforcement (uniqueness, referential integrity,
//! required columns) is left to the storage engine; its failures surface
//! unchanged as [`sea_orm::DbErr`].

pub mod catalog;
pub mod favorite;
pub mod user;
