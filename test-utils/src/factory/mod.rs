//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation. Factories insert
//! directly through SeaORM and bypass application validation, which makes them suitable
//! for arranging states the API itself would reject.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::create_user(&db).await?;
//! let school = factory::school::create_school(&db).await?;
//! let recipient = factory::recipient::RecipientFactory::new(&db, user.id)
//!     .school_id(Some(school.id))
//!     .build()
//!     .await?;
//!
//! // Or everything at once
//! let (user, school, recipient, order) =
//!     factory::helpers::create_order_with_dependencies(&db).await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `school` - Create school entities
//! - `order` - Create order entities
//! - `recipient` - Create recipient entities
//! - `helpers` - Id generation and dependency helpers

pub mod helpers;
pub mod order;
pub mod recipient;
pub mod school;
pub mod user;

pub use order::create_order;
pub use recipient::create_recipient;
pub use school::create_school;
pub use user::create_user;
