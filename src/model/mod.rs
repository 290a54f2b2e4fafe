//! Wire types exchanged with API clients.
//!
//! DTOs in this module define the JSON request and response bodies. Server-side domain
//! models convert into these at the controller boundary.

pub mod api;
pub mod order;
pub mod recipient;
pub mod school;
pub mod user;
