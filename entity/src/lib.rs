//! `SeaORM` entity models for the gift orders schema.

pub mod prelude;

pub mod order;
pub mod recipient;
pub mod school;
pub mod user;
