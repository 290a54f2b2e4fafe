//! School factory for creating test school entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test schools with customizable fields.
pub struct SchoolFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    address: String,
}

impl<'a> SchoolFactory<'a> {
    /// Creates a new SchoolFactory with default values.
    ///
    /// Defaults:
    /// - name: `"School {id}"`
    /// - address: `"{id} School Street"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("School {}", id),
            address: format!("{} School Street", id),
        }
    }

    /// Sets the school name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the school address.
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Builds and inserts the school entity into the database.
    pub async fn build(self) -> Result<entity::school::Model, DbErr> {
        let now = Utc::now();
        entity::school::ActiveModel {
            name: ActiveValue::Set(self.name),
            address: ActiveValue::Set(self.address),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a school with default values.
pub async fn create_school(db: &DatabaseConnection) -> Result<entity::school::Model, DbErr> {
    SchoolFactory::new(db).build().await
}
