//! Order data repository for database operations.
//!
//! This module provides the `OrderRepository` for managing order records. An order's
//! recipients are stored as `recipients.order_id`, so every write that changes the
//! recipient set runs inside a transaction together with the order row itself.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection,
    DatabaseTransaction, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, QueryTrait, RelationTrait, TransactionTrait,
};
use std::collections::HashMap;

use crate::server::{
    data::WriteOutcome,
    model::order::{Order, OrderChanges, OrderStatus},
};

/// Repository providing database operations for order management.
pub struct OrderRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderRepository<'a> {
    /// Creates a new OrderRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `OrderRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds an order by id together with its recipient ids.
    ///
    /// # Returns
    /// - `Ok(Some(Order))` - Order found
    /// - `Ok(None)` - No order with that id
    /// - `Err(DbErr)` - Database error or unrecognised stored value
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Order>, DbErr> {
        let Some(entity) = entity::prelude::Order::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let recipient_ids = entity::prelude::Recipient::find()
            .select_only()
            .column(entity::recipient::Column::Id)
            .filter(entity::recipient::Column::OrderId.eq(id))
            .order_by_asc(entity::recipient::Column::Id)
            .into_tuple::<i32>()
            .all(self.db)
            .await?;

        Order::from_entity(entity, recipient_ids).map(Some)
    }

    /// Lists orders ordered by id.
    ///
    /// When `school_id` is given, only orders with at least one recipient affiliated with
    /// that school are returned.
    ///
    /// # Arguments
    /// - `school_id` - Optional school filter
    ///
    /// # Returns
    /// - `Ok(Vec<Order>)` - Matching orders with their recipient ids
    /// - `Err(DbErr)` - Database error or unrecognised stored value
    pub async fn get_all(&self, school_id: Option<i32>) -> Result<Vec<Order>, DbErr> {
        let mut query = entity::prelude::Order::find();
        if let Some(school_id) = school_id {
            query = query
                .join(
                    sea_orm::JoinType::InnerJoin,
                    entity::order::Relation::Recipient.def(),
                )
                .filter(entity::recipient::Column::SchoolId.eq(school_id))
                .distinct();
        }

        let orders = query
            .order_by_asc(entity::order::Column::Id)
            .all(self.db)
            .await?;

        let order_ids: Vec<i32> = orders.iter().map(|order| order.id).collect();
        let mut recipients_by_order: HashMap<i32, Vec<i32>> = HashMap::new();
        let links = entity::prelude::Recipient::find()
            .select_only()
            .column(entity::recipient::Column::OrderId)
            .column(entity::recipient::Column::Id)
            .filter(entity::recipient::Column::OrderId.is_in(order_ids))
            .into_tuple::<(i32, i32)>()
            .all(self.db)
            .await?;
        for (order_id, recipient_id) in links {
            recipients_by_order
                .entry(order_id)
                .or_default()
                .push(recipient_id);
        }

        orders
            .into_iter()
            .map(|order| {
                let recipient_ids = recipients_by_order.remove(&order.id).unwrap_or_default();
                Order::from_entity(order, recipient_ids)
            })
            .collect()
    }

    /// Inserts an order and attaches the given recipients to it in one transaction.
    ///
    /// Recipients previously attached to another order are moved to the new one unless
    /// that order has shipped.
    ///
    /// # Returns
    /// - `Ok(WriteOutcome::Written(Order))` - The created order
    /// - `Ok(WriteOutcome::RecipientLocked)` - A recipient belongs to a shipped order
    ///   and nothing is written
    /// - `Err(DbErr)` - Database error; nothing is written
    pub async fn create(&self, changes: &OrderChanges) -> Result<WriteOutcome<Order>, DbErr> {
        let now = Utc::now();
        let txn = self.db.begin().await?;

        let order = entity::order::ActiveModel {
            status: ActiveValue::Set(changes.status.as_str().to_string()),
            gift_type: ActiveValue::Set(changes.gift_type.as_str().to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        if !attach_recipients(&txn, order.id, &changes.recipient_ids).await? {
            txn.rollback().await?;
            return Ok(WriteOutcome::RecipientLocked);
        }

        txn.commit().await?;

        Order::from_entity(order, changes.recipient_ids.clone()).map(WriteOutcome::Written)
    }

    /// Writes validated changes to an order unless it has already shipped.
    ///
    /// The update is conditional on the stored status not being `ORDER_SHIPPED`, so an
    /// order shipped by a concurrent request after it was loaded is never modified. The
    /// recipient set is replaced in the same transaction.
    ///
    /// # Returns
    /// - `Ok(WriteOutcome::Written(()))` - Order updated
    /// - `Ok(WriteOutcome::NotFound)` - No order with that id
    /// - `Ok(WriteOutcome::OrderShipped)` - The order has already shipped
    /// - `Ok(WriteOutcome::RecipientLocked)` - A recipient belongs to another shipped order
    /// - `Err(DbErr)` - Database error; nothing is written
    ///
    /// Nothing is written unless the outcome is `Written`.
    pub async fn update(
        &self,
        id: i32,
        changes: &OrderChanges,
    ) -> Result<WriteOutcome<()>, DbErr> {
        let now = Utc::now();
        let txn = self.db.begin().await?;

        let result = entity::prelude::Order::update_many()
            .col_expr(
                entity::order::Column::Status,
                Expr::value(changes.status.as_str()),
            )
            .col_expr(
                entity::order::Column::GiftType,
                Expr::value(changes.gift_type.as_str()),
            )
            .col_expr(entity::order::Column::UpdatedAt, Expr::value(now))
            .filter(entity::order::Column::Id.eq(id))
            .filter(entity::order::Column::Status.ne(OrderStatus::Shipped.as_str()))
            .exec(&txn)
            .await?;

        if result.rows_affected == 0 {
            let exists = entity::prelude::Order::find_by_id(id).count(&txn).await? > 0;
            txn.rollback().await?;
            return Ok(if exists {
                WriteOutcome::OrderShipped
            } else {
                WriteOutcome::NotFound
            });
        }

        entity::prelude::Recipient::update_many()
            .col_expr(
                entity::recipient::Column::OrderId,
                Expr::value(Option::<i32>::None),
            )
            .col_expr(entity::recipient::Column::UpdatedAt, Expr::value(now))
            .filter(entity::recipient::Column::OrderId.eq(id))
            .filter(entity::recipient::Column::Id.is_not_in(changes.recipient_ids.clone()))
            .exec(&txn)
            .await?;

        if !attach_recipients(&txn, id, &changes.recipient_ids).await? {
            txn.rollback().await?;
            return Ok(WriteOutcome::RecipientLocked);
        }

        txn.commit().await?;
        Ok(WriteOutcome::Written(()))
    }

    /// Deletes an order, detaching its recipients first.
    ///
    /// # Returns
    /// - `Ok(true)` - Order deleted
    /// - `Ok(false)` - No order with that id
    /// - `Err(DbErr)` - Database error
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::Recipient::update_many()
            .col_expr(
                entity::recipient::Column::OrderId,
                Expr::value(Option::<i32>::None),
            )
            .filter(entity::recipient::Column::OrderId.eq(id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Order::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;
        Ok(result.rows_affected > 0)
    }
}

/// Points every listed recipient at `order_id`.
///
/// Recipients attached to a different order that has shipped are left in place. Returns
/// `false` when any listed recipient was not attached, in which case the caller must roll
/// back.
async fn attach_recipients(
    txn: &DatabaseTransaction,
    order_id: i32,
    recipient_ids: &[i32],
) -> Result<bool, DbErr> {
    let shipped_orders = entity::prelude::Order::find()
        .select_only()
        .column(entity::order::Column::Id)
        .filter(entity::order::Column::Status.eq(OrderStatus::Shipped.as_str()))
        .filter(entity::order::Column::Id.ne(order_id))
        .into_query();

    let result = entity::prelude::Recipient::update_many()
        .col_expr(entity::recipient::Column::OrderId, Expr::value(order_id))
        .col_expr(entity::recipient::Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(entity::recipient::Column::Id.is_in(recipient_ids.to_vec()))
        .filter(
            Condition::any()
                .add(entity::recipient::Column::OrderId.is_null())
                .add(entity::recipient::Column::OrderId.not_in_subquery(shipped_orders)),
        )
        .exec(txn)
        .await?;

    Ok(result.rows_affected == recipient_ids.len() as u64)
}
