//! Recipient data repository for database operations.
//!
//! Writes that attach a recipient to an order, move it off one, or delete it re-check the
//! orders involved inside the write transaction and roll back when one of them has
//! shipped.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    TransactionTrait,
};

use crate::server::{
    data::WriteOutcome,
    model::{
        order::OrderStatus,
        recipient::{encode_gifts, Recipient, RecipientChanges},
    },
};

/// Repository providing database operations for recipients.
pub struct RecipientRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RecipientRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a recipient by id.
    ///
    /// # Returns
    /// - `Ok(Some(Recipient))` - Recipient found
    /// - `Ok(None)` - No recipient with that id
    /// - `Err(DbErr)` - Database error or unrecognised stored gift code
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Recipient>, DbErr> {
        entity::prelude::Recipient::find_by_id(id)
            .one(self.db)
            .await?
            .map(Recipient::from_entity)
            .transpose()
    }

    /// Lists recipients ordered by id, optionally only those of one school.
    pub async fn get_all(&self, school_id: Option<i32>) -> Result<Vec<Recipient>, DbErr> {
        let mut query = entity::prelude::Recipient::find();
        if let Some(school_id) = school_id {
            query = query.filter(entity::recipient::Column::SchoolId.eq(school_id));
        }

        query
            .order_by_asc(entity::recipient::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Recipient::from_entity)
            .collect()
    }

    /// Returns which of `ids` exist, ordered ascending.
    ///
    /// Used to verify every recipient of an order before it is written.
    pub async fn existing_ids(&self, ids: &[i32]) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Recipient::find()
            .select_only()
            .column(entity::recipient::Column::Id)
            .filter(entity::recipient::Column::Id.is_in(ids.to_vec()))
            .order_by_asc(entity::recipient::Column::Id)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Inserts a recipient.
    ///
    /// # Returns
    /// - `Ok(WriteOutcome::Written(Recipient))` - The created recipient
    /// - `Ok(WriteOutcome::OrderShipped)` - `order_id` names a shipped order and nothing
    ///   is written
    /// - `Err(DbErr)` - Database error
    pub async fn create(
        &self,
        changes: &RecipientChanges,
    ) -> Result<WriteOutcome<Recipient>, DbErr> {
        let now = Utc::now();
        let txn = self.db.begin().await?;

        let entity = entity::recipient::ActiveModel {
            user_id: ActiveValue::Set(changes.user_id),
            school_id: ActiveValue::Set(changes.school_id),
            order_id: ActiveValue::Set(changes.order_id),
            gift: ActiveValue::Set(encode_gifts(&changes.gift)),
            address: ActiveValue::Set(changes.address.clone()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        if let Some(order_id) = changes.order_id {
            if order_is_shipped(&txn, order_id).await? {
                txn.rollback().await?;
                return Ok(WriteOutcome::OrderShipped);
            }
        }

        txn.commit().await?;

        Recipient::from_entity(entity).map(WriteOutcome::Written)
    }

    /// Replaces every column of a recipient with the validated changes.
    ///
    /// Changing `order_id` is refused when the current or the new order has shipped.
    /// Other columns of a recipient on a shipped order can still change.
    ///
    /// # Returns
    /// - `Ok(WriteOutcome::Written(Recipient))` - Updated recipient
    /// - `Ok(WriteOutcome::NotFound)` - No recipient with that id
    /// - `Ok(WriteOutcome::RecipientLocked)` - The current order has shipped
    /// - `Ok(WriteOutcome::OrderShipped)` - The new order has shipped
    /// - `Err(DbErr)` - Database error
    pub async fn update(
        &self,
        id: i32,
        changes: &RecipientChanges,
    ) -> Result<WriteOutcome<Recipient>, DbErr> {
        let txn = self.db.begin().await?;

        let Some(entity) = entity::prelude::Recipient::find_by_id(id).one(&txn).await? else {
            txn.rollback().await?;
            return Ok(WriteOutcome::NotFound);
        };
        let previous_order_id = entity.order_id;

        let mut active_model = entity.into_active_model();
        active_model.user_id = ActiveValue::Set(changes.user_id);
        active_model.school_id = ActiveValue::Set(changes.school_id);
        active_model.order_id = ActiveValue::Set(changes.order_id);
        active_model.gift = ActiveValue::Set(encode_gifts(&changes.gift));
        active_model.address = ActiveValue::Set(changes.address.clone());
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(&txn).await?;

        if previous_order_id != changes.order_id {
            if let Some(order_id) = previous_order_id {
                if order_is_shipped(&txn, order_id).await? {
                    txn.rollback().await?;
                    return Ok(WriteOutcome::RecipientLocked);
                }
            }
            if let Some(order_id) = changes.order_id {
                if order_is_shipped(&txn, order_id).await? {
                    txn.rollback().await?;
                    return Ok(WriteOutcome::OrderShipped);
                }
            }
        }

        txn.commit().await?;

        Recipient::from_entity(entity).map(WriteOutcome::Written)
    }

    /// Deletes a recipient unless it belongs to a shipped order.
    ///
    /// # Returns
    /// - `Ok(WriteOutcome::Written(()))` - Recipient deleted
    /// - `Ok(WriteOutcome::NotFound)` - No recipient with that id
    /// - `Ok(WriteOutcome::RecipientLocked)` - Its order has shipped; nothing is deleted
    pub async fn delete(&self, id: i32) -> Result<WriteOutcome<()>, DbErr> {
        let txn = self.db.begin().await?;

        let Some(entity) = entity::prelude::Recipient::find_by_id(id).one(&txn).await? else {
            txn.rollback().await?;
            return Ok(WriteOutcome::NotFound);
        };

        entity::prelude::Recipient::delete_by_id(id).exec(&txn).await?;

        if let Some(order_id) = entity.order_id {
            if order_is_shipped(&txn, order_id).await? {
                txn.rollback().await?;
                return Ok(WriteOutcome::RecipientLocked);
            }
        }

        txn.commit().await?;
        Ok(WriteOutcome::Written(()))
    }
}

/// Whether the order has shipped.
///
/// Call after the transaction has written, while it holds the database write lock.
async fn order_is_shipped<C: ConnectionTrait>(db: &C, order_id: i32) -> Result<bool, DbErr> {
    let count = entity::prelude::Order::find()
        .filter(entity::order::Column::Id.eq(order_id))
        .filter(entity::order::Column::Status.eq(OrderStatus::Shipped.as_str()))
        .count(db)
        .await?;

    Ok(count > 0)
}
