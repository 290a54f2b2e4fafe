//! Order service for business logic.
//!
//! This module provides the `OrderService`, which validates order writes, checks that
//! every referenced recipient exists, enforces the shipped-order guard, and triggers
//! the shipment notification once a ship transition has been committed.

use sea_orm::DatabaseConnection;

use crate::{
    model::api::IdParam,
    server::{
        data::{
            order::OrderRepository, recipient::RecipientRepository, user::UserRepository,
            WriteOutcome,
        },
        error::{internal::InternalError, AppError},
        model::order::{CreateOrderParams, Order, OrderStatus, UpdateOrderParams},
        service::{
            notification::ShipmentNotifier,
            validation::{self, FieldErrors, INCLUDES_SHIPPED_RECIPIENT, ORDER_SHIPPED},
        },
    },
};

/// Service providing business logic for orders.
pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
    notifier: &'a ShipmentNotifier,
}

impl<'a> OrderService<'a> {
    /// Creates a new OrderService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `notifier` - Notifier told about shipped orders
    pub fn new(db: &'a DatabaseConnection, notifier: &'a ShipmentNotifier) -> Self {
        Self { db, notifier }
    }

    /// Lists orders, optionally only those with a recipient in `school_id`.
    ///
    /// An unresolvable school id matches no school and yields an empty list.
    pub async fn get_all(&self, school_id: Option<IdParam>) -> Result<Vec<Order>, AppError> {
        let school_id = match school_id {
            Some(IdParam::Unresolvable) => return Ok(Vec::new()),
            school_id => school_id.and_then(IdParam::id),
        };

        let orders = OrderRepository::new(self.db).get_all(school_id).await?;
        Ok(orders)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Order>, AppError> {
        let order = OrderRepository::new(self.db).find_by_id(id).await?;
        Ok(order)
    }

    /// Validates and creates an order, attaching its recipients.
    ///
    /// # Returns
    /// - `Ok(Order)` - The created order
    /// - `Err(AppError::Validation)` - Status, gift type, or recipient count invalid, or a
    ///   recipient belongs to a shipped order
    /// - `Err(AppError::NotFound)` - A referenced recipient does not exist
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, params: CreateOrderParams) -> Result<Order, AppError> {
        let candidate = params.into_candidate();
        let changes = validation::order::validate(&candidate, None)?;

        self.ensure_recipients_exist(&changes.recipient_ids).await?;

        let order = match OrderRepository::new(self.db).create(&changes).await? {
            WriteOutcome::Written(order) => order,
            WriteOutcome::RecipientLocked => return Err(shipped_recipient_error()),
            WriteOutcome::NotFound | WriteOutcome::OrderShipped => {
                return Err(InternalError::UnexpectedWriteOutcome("Order").into())
            }
        };
        tracing::info!("Created order {} with {} recipients", order.id, order.recipient_ids.len());

        Ok(order)
    }

    /// Applies a partial update to an order.
    ///
    /// The stored order is merged with the incoming fields and the full rule set is run
    /// on the result. A shipped order rejects every update, including one that loses a
    /// race with a concurrent ship. Recipients attached to another shipped order cannot
    /// be moved onto this one.
    ///
    /// # Returns
    /// - `Ok(Some(Order))` - The updated order
    /// - `Ok(None)` - No order with that id
    /// - `Err(AppError::Validation)` - Invalid fields or the order has shipped
    /// - `Err(AppError::NotFound)` - A referenced recipient does not exist
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update(&self, params: UpdateOrderParams) -> Result<Option<Order>, AppError> {
        let order_repo = OrderRepository::new(self.db);
        let id = params.id;

        let Some(existing) = order_repo.find_by_id(id).await? else {
            return Ok(None);
        };

        let candidate = params.merge(&existing);
        let changes = validation::order::validate(&candidate, Some(&existing))?;

        self.ensure_recipients_exist(&changes.recipient_ids).await?;

        match order_repo.update(id, &changes).await? {
            WriteOutcome::Written(()) => {}
            WriteOutcome::NotFound => return Ok(None),
            WriteOutcome::OrderShipped => {
                tracing::info!("Rejected update of order {} shipped concurrently", id);
                return Err(FieldErrors::single("status", ORDER_SHIPPED).into());
            }
            WriteOutcome::RecipientLocked => return Err(shipped_recipient_error()),
        }

        let order = order_repo
            .find_by_id(id)
            .await?
            .ok_or(InternalError::MissingAfterWrite("Order"))?;

        Ok(Some(order))
    }

    /// Moves an order to `ORDER_CANCELLED`.
    pub async fn cancel(&self, id: i32) -> Result<Option<Order>, AppError> {
        self.update(UpdateOrderParams::transition(id, OrderStatus::Cancelled))
            .await
    }

    /// Moves an order to `ORDER_SHIPPED` and notifies the owners of its recipients.
    ///
    /// The notification is sent only after the status change is committed. Failing to
    /// look up the owners is logged and does not undo the shipment.
    pub async fn ship(&self, id: i32) -> Result<Option<Order>, AppError> {
        let Some(order) = self
            .update(UpdateOrderParams::transition(id, OrderStatus::Shipped))
            .await?
        else {
            return Ok(None);
        };

        match UserRepository::new(self.db).get_emails_by_order(order.id).await {
            Ok(emails) => self.notifier.order_shipped(&order, emails),
            Err(e) => tracing::error!(
                "Failed to load recipients' owners for shipped order {}: {}",
                order.id,
                e
            ),
        }

        Ok(Some(order))
    }

    /// Deletes an order; its recipients are kept and detached.
    ///
    /// # Returns
    /// - `Ok(true)` - Order deleted
    /// - `Ok(false)` - No order with that id
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let deleted = OrderRepository::new(self.db).delete(id).await?;
        Ok(deleted)
    }

    async fn ensure_recipients_exist(&self, recipient_ids: &[i32]) -> Result<(), AppError> {
        let existing = RecipientRepository::new(self.db)
            .existing_ids(recipient_ids)
            .await?;

        if let Some(missing) = recipient_ids.iter().find(|id| !existing.contains(id)) {
            return Err(AppError::NotFound(format!(
                "Recipient not found: {}",
                missing
            )));
        }

        Ok(())
    }
}

fn shipped_recipient_error() -> AppError {
    FieldErrors::single("recipient_ids", INCLUDES_SHIPPED_RECIPIENT).into()
}
