//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! All database queries, inserts, updates, and deletes are performed through these repositories.

pub mod order;
pub mod recipient;
pub mod school;
pub mod user;

/// Result of a write that is refused rather than applied when it would change an order
/// that has already shipped.
///
/// Repositories re-check the shipped state inside the write transaction, so the refusal
/// also covers orders shipped by a concurrent request.
#[derive(Debug, Clone, PartialEq)]
pub enum WriteOutcome<T> {
    Written(T),
    /// The record being written does not exist.
    NotFound,
    /// The order being written, or the order a recipient would join, has shipped.
    OrderShipped,
    /// A recipient to move or delete belongs to an order that has shipped.
    RecipientLocked,
}

#[cfg(test)]
mod test;
