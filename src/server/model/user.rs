//! User domain models and parameters.
//!
//! Provides the user domain model exposed by the API and the credential-bearing types
//! used only during signup and login. The password digest never leaves those types.

use chrono::{DateTime, Utc};

use crate::model::user::{SignupDto, UserDto};

/// Registered API user.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Login e-mail, unique across users.
    pub email: String,
    pub age: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            age: self.age,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary,
    /// dropping the password digest.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            age: entity.age,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// A user together with the stored password digest, used to verify a login.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_digest: String,
}

impl UserCredentials {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        let password_digest = entity.password_digest.clone();
        Self {
            user: User::from_entity(entity),
            password_digest,
        }
    }
}

/// Signup request values before validation.
#[derive(Debug, Clone, Default)]
pub struct SignupParams {
    pub email: Option<String>,
    pub password: Option<String>,
    pub age: Option<i32>,
}

impl SignupParams {
    pub fn from_dto(dto: SignupDto) -> Self {
        Self {
            email: dto.email,
            password: dto.password,
            age: dto.age,
        }
    }
}

/// Validated signup values. The password is still plain text at this point.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub age: Option<i32>,
}

/// Parameters for inserting a user row.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub email: String,
    pub password_digest: String,
    pub age: Option<i32>,
}
