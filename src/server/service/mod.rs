//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Validation**: Running field validation on merged records before any write
//! - **Orchestration**: Coordinating repository calls and the shipment notifier
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod auth;
pub mod notification;
pub mod order;
pub mod recipient;
pub mod school;
pub mod validation;
