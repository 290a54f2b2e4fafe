//! Recipient factory for creating test recipient entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test recipients with customizable fields.
///
/// The owning user is required; school, order, and gifts default to empty.
pub struct RecipientFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    school_id: Option<i32>,
    order_id: Option<i32>,
    gift: Vec<String>,
    address: String,
}

impl<'a> RecipientFactory<'a> {
    /// Creates a new RecipientFactory with default values.
    ///
    /// Defaults:
    /// - school_id / order_id: `None`
    /// - gift: empty
    /// - address: `"{id} Recipient Road"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - Id of the owning user
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            school_id: None,
            order_id: None,
            gift: Vec::new(),
            address: format!("{} Recipient Road", id),
        }
    }

    /// Sets the school the recipient belongs to.
    pub fn school_id(mut self, school_id: Option<i32>) -> Self {
        self.school_id = school_id;
        self
    }

    /// Sets the order the recipient is attached to.
    pub fn order_id(mut self, order_id: Option<i32>) -> Self {
        self.order_id = order_id;
        self
    }

    /// Sets the gift codes for the recipient.
    pub fn gift(mut self, gift: &[&str]) -> Self {
        self.gift = gift.iter().map(|g| g.to_string()).collect();
        self
    }

    /// Sets the recipient address.
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Builds and inserts the recipient entity into the database.
    pub async fn build(self) -> Result<entity::recipient::Model, DbErr> {
        let now = Utc::now();
        entity::recipient::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            school_id: ActiveValue::Set(self.school_id),
            order_id: ActiveValue::Set(self.order_id),
            gift: ActiveValue::Set(self.gift.join(",")),
            address: ActiveValue::Set(self.address),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a recipient for the given user with default values.
pub async fn create_recipient(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::recipient::Model, DbErr> {
    RecipientFactory::new(db, user_id).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::TestBuilder, factory};

    #[tokio::test]
    async fn creates_recipient_with_dependencies() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_gift_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (user, school, recipient, order) =
            factory::helpers::create_order_with_dependencies(db).await?;

        assert_eq!(recipient.user_id, user.id);
        assert_eq!(recipient.school_id, Some(school.id));
        assert_eq!(recipient.order_id, Some(order.id));

        Ok(())
    }

    #[tokio::test]
    async fn stores_gifts_comma_separated() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_gift_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::user::create_user(db).await?;
        let recipient = RecipientFactory::new(db, user.id)
            .gift(&["MUG", "HOODIE"])
            .build()
            .await?;

        assert_eq!(recipient.gift, "MUG,HOODIE");

        Ok(())
    }
}
