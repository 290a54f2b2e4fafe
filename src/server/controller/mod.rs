//! HTTP request handlers.
//!
//! One module per resource. Handlers convert DTOs to parameter types, call the matching
//! service, and convert the returned domain models back to DTOs. Authentication happens
//! in `middleware::auth` before any protected handler runs.

pub mod order;
pub mod recipient;
pub mod school;
pub mod user;

#[cfg(test)]
mod test;
