//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Token service for issuing and verifying bearer tokens
//! - Shipment notifier for shipped orders

use sea_orm::DatabaseConnection;

use crate::server::service::{auth::token::TokenService, notification::ShipmentNotifier};

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `TokenService` holds its secret behind an `Arc`
/// - `ShipmentNotifier` wraps a `reqwest::Client`, which uses an `Arc` internally
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Issues tokens at signup and login and verifies them on every protected request.
    pub tokens: TokenService,

    /// Told about every order that ships.
    pub notifier: ShipmentNotifier,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `tokens` - Bearer token service
    /// - `notifier` - Shipment notifier
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, tokens: TokenService, notifier: ShipmentNotifier) -> Self {
        Self {
            db,
            tokens,
            notifier,
        }
    }
}
