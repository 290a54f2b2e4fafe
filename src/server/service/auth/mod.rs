//! Signup, login, and bearer-token authentication.

pub mod password;
pub mod token;

use sea_orm::{DatabaseConnection, SqlErr};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParams, SignupParams, User},
    service::{
        auth::{password::hash_password, password::verify_password, token::TokenService},
        validation::{self, FieldErrors, TAKEN},
    },
};

/// Service providing business logic for user accounts and tokens.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `tokens` - Token issuer shared through application state
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Registers a new user and issues a token for them.
    ///
    /// # Returns
    /// - `Ok((User, String))` - The created user and a bearer token
    /// - `Err(AppError::Validation)` - Blank e-mail or password, taken e-mail, negative age
    /// - `Err(AppError::AuthErr)` - Password hashing or token signing failed
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn signup(&self, params: SignupParams) -> Result<(User, String), AppError> {
        let user_repo = UserRepository::new(self.db);

        let email_taken = match params.email.as_deref() {
            Some(email) if !email.trim().is_empty() => user_repo.email_exists(email).await?,
            _ => false,
        };
        let new_user = validation::user::validate(&params, email_taken)?;

        let password_digest = hash_password(&new_user.password)?;
        let user = match user_repo
            .create(CreateUserParams {
                email: new_user.email,
                password_digest,
                age: new_user.age,
            })
            .await
        {
            Ok(user) => user,
            // Lost a race with a concurrent signup for the same e-mail
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                return Err(FieldErrors::single("email", TAKEN).into());
            }
            Err(err) => return Err(err.into()),
        };

        let token = self.tokens.issue(user.id)?;
        tracing::info!("User {} signed up", user.id);

        Ok((user, token))
    }

    /// Verifies an e-mail and password and issues a token.
    ///
    /// Unknown e-mails and wrong passwords produce the same error.
    pub async fn login(&self, email: &str, password: &str) -> Result<(User, String), AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(credentials) = user_repo.find_credentials_by_email(email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };
        verify_password(password, &credentials.password_digest)?;

        let token = self.tokens.issue(credentials.user.id)?;

        Ok((credentials.user, token))
    }

    /// Resolves a bearer token to the user it was issued for.
    ///
    /// # Returns
    /// - `Ok(User)` - Token valid and user still exists
    /// - `Err(AppError::AuthErr)` - Token invalid, expired, or user deleted
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn authenticate(&self, token: &str) -> Result<User, AppError> {
        let claims = self.tokens.verify(token)?;

        let user_repo = UserRepository::new(self.db);
        let Some(user) = user_repo.find_by_id(claims.user_id).await? else {
            return Err(AuthError::UserNotInDatabase(claims.user_id).into());
        };

        Ok(user)
    }
}
