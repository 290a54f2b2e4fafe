//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//!
//! Each resource follows the same progression for writes: `*Params` carry the raw request
//! values, a `*Candidate` is the merged record that validation inspects, and `*Changes`
//! is the typed, validated record the repository persists.

pub mod gift;
pub mod order;
pub mod recipient;
pub mod school;
pub mod user;
