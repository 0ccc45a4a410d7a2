//! Core data layer for a favorites catalog.
//!
//! Defines the five catalog tables (users, characters, planets, vehicles,
//! and the favorite entries linking them), the serialized projections of
//! each, and the repositories a host application uses to persist them.
//! HTTP routing, request validation, and authentication live in the host;
//! this crate owns the schema and its access paths.

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod startup;
