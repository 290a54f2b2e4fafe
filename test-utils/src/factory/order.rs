//! Order factory for creating test order entities.
//!
//! Orders are inserted without recipients; attach recipients with
//! `RecipientFactory::order_id`.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test orders with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::order::OrderFactory;
///
/// let order = OrderFactory::new(&db)
///     .status("ORDER_SHIPPED")
///     .gift_type("MUG")
///     .build()
///     .await?;
/// ```
pub struct OrderFactory<'a> {
    db: &'a DatabaseConnection,
    status: String,
    gift_type: String,
}

impl<'a> OrderFactory<'a> {
    /// Creates a new OrderFactory with default values.
    ///
    /// Defaults:
    /// - status: `"ORDER_RECEIVED"`
    /// - gift_type: `"T_SHIRT"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            status: "ORDER_RECEIVED".to_string(),
            gift_type: "T_SHIRT".to_string(),
        }
    }

    /// Sets the stored status string.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the stored gift type string.
    pub fn gift_type(mut self, gift_type: impl Into<String>) -> Self {
        self.gift_type = gift_type.into();
        self
    }

    /// Builds and inserts the order entity into the database.
    pub async fn build(self) -> Result<entity::order::Model, DbErr> {
        let now = Utc::now();
        entity::order::ActiveModel {
            status: ActiveValue::Set(self.status),
            gift_type: ActiveValue::Set(self.gift_type),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an order with default values.
pub async fn create_order(db: &DatabaseConnection) -> Result<entity::order::Model, DbErr> {
    OrderFactory::new(db).build().await
}
