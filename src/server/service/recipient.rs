//! Recipient service for business logic.

use sea_orm::DatabaseConnection;

use crate::{
    model::api::IdParam,
    server::{
        data::{
            order::OrderRepository, recipient::RecipientRepository, school::SchoolRepository,
            user::UserRepository, WriteOutcome,
        },
        error::{internal::InternalError, AppError},
        model::recipient::{
            CreateRecipientParams, Recipient, RecipientCandidate, RecipientChanges,
            UpdateRecipientParams,
        },
        service::validation::{
            self, FieldErrors, LOCKED_BY_SHIPPED_ORDER, REFERS_TO_SHIPPED_ORDER,
        },
    },
};

/// Service providing business logic for recipients.
pub struct RecipientService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RecipientService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists recipients, optionally only those affiliated with `school_id`.
    pub async fn get_all(&self, school_id: Option<IdParam>) -> Result<Vec<Recipient>, AppError> {
        let school_id = match school_id {
            Some(IdParam::Unresolvable) => return Ok(Vec::new()),
            school_id => school_id.and_then(IdParam::id),
        };

        let recipients = RecipientRepository::new(self.db).get_all(school_id).await?;
        Ok(recipients)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Recipient>, AppError> {
        let recipient = RecipientRepository::new(self.db).find_by_id(id).await?;
        Ok(recipient)
    }

    /// Validates and creates a recipient.
    ///
    /// # Returns
    /// - `Ok(Recipient)` - The created recipient
    /// - `Err(AppError::Validation)` - Blank address, unknown user, invalid gifts, or
    ///   `order_id` names a shipped order
    /// - `Err(AppError::NotFound)` - `school_id` or `order_id` does not resolve
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, params: CreateRecipientParams) -> Result<Recipient, AppError> {
        let changes = self.validate(params.into_candidate()).await?;

        let outcome = RecipientRepository::new(self.db).create(&changes).await?;

        let recipient =
            written(outcome)?.ok_or(InternalError::UnexpectedWriteOutcome("Recipient"))?;

        Ok(recipient)
    }

    /// Applies a partial update to a recipient.
    ///
    /// # Returns
    /// - `Ok(Some(Recipient))` - The updated recipient
    /// - `Ok(None)` - No recipient with that id
    /// - `Err(AppError::Validation)` / `Err(AppError::NotFound)` - As for [`Self::create`];
    ///   also when the recipient would leave an order that has shipped
    pub async fn update(
        &self,
        params: UpdateRecipientParams,
    ) -> Result<Option<Recipient>, AppError> {
        let recipient_repo = RecipientRepository::new(self.db);
        let id = params.id;

        let Some(existing) = recipient_repo.find_by_id(id).await? else {
            return Ok(None);
        };

        let changes = self.validate(params.merge(&existing)).await?;

        let outcome = recipient_repo.update(id, &changes).await?;

        written(outcome)
    }

    /// Deletes a recipient.
    ///
    /// # Returns
    /// - `Ok(true)` - Recipient deleted
    /// - `Ok(false)` - No recipient with that id
    /// - `Err(AppError::Validation)` - The recipient belongs to a shipped order
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let outcome = RecipientRepository::new(self.db).delete(id).await?;

        Ok(written(outcome)?.is_some())
    }

    /// Runs field validation, then checks the optional school and order references.
    async fn validate(&self, candidate: RecipientCandidate) -> Result<RecipientChanges, AppError> {
        let user_exists = match candidate.user_id {
            Some(IdParam::Id(user_id)) => UserRepository::new(self.db).exists(user_id).await?,
            Some(IdParam::Unresolvable) | None => false,
        };

        let changes = validation::recipient::validate(&candidate, user_exists)?;

        let school_exists = match candidate.school_id {
            None => true,
            Some(IdParam::Unresolvable) => false,
            Some(IdParam::Id(school_id)) => {
                SchoolRepository::new(self.db).exists(school_id).await?
            }
        };
        if !school_exists {
            return Err(AppError::NotFound("School not found".to_string()));
        }

        let order_exists = match candidate.order_id {
            None => true,
            Some(IdParam::Unresolvable) => false,
            Some(IdParam::Id(order_id)) => OrderRepository::new(self.db)
                .find_by_id(order_id)
                .await?
                .is_some(),
        };
        if !order_exists {
            return Err(AppError::NotFound("Order not found".to_string()));
        }

        Ok(changes)
    }
}

/// Maps a recipient write outcome to the service result.
fn written<T>(outcome: WriteOutcome<T>) -> Result<Option<T>, AppError> {
    match outcome {
        WriteOutcome::Written(value) => Ok(Some(value)),
        WriteOutcome::NotFound => Ok(None),
        WriteOutcome::OrderShipped => {
            Err(FieldErrors::single("order_id", REFERS_TO_SHIPPED_ORDER).into())
        }
        WriteOutcome::RecipientLocked => {
            Err(FieldErrors::single("order_id", LOCKED_BY_SHIPPED_ORDER).into())
        }
    }
}
