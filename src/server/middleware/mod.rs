//! Request middleware.
//!
//! - `auth` - Bearer-token guard for every route except signup, login, and the API docs

pub mod auth;
