//! School data repository for database operations.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::school::{School, SchoolChanges};

/// Repository providing database operations for schools.
pub struct SchoolRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SchoolRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<School>, DbErr> {
        let entity = entity::prelude::School::find_by_id(id).one(self.db).await?;

        Ok(entity.map(School::from_entity))
    }

    /// Lists every school ordered by id.
    pub async fn get_all(&self) -> Result<Vec<School>, DbErr> {
        let entities = entity::prelude::School::find()
            .order_by_asc(entity::school::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(School::from_entity).collect())
    }

    /// Checks whether a school with the given id exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::School::find()
            .filter(entity::school::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn create(&self, changes: &SchoolChanges) -> Result<School, DbErr> {
        let now = Utc::now();

        let entity = entity::school::ActiveModel {
            name: ActiveValue::Set(changes.name.clone()),
            address: ActiveValue::Set(changes.address.clone()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(School::from_entity(entity))
    }

    /// Updates a school's name and address.
    ///
    /// # Returns
    /// - `Ok(Some(School))` - Updated school
    /// - `Ok(None)` - No school with that id
    /// - `Err(DbErr)` - Database error
    pub async fn update(&self, id: i32, changes: &SchoolChanges) -> Result<Option<School>, DbErr> {
        let Some(entity) = entity::prelude::School::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model = entity.into_active_model();
        active_model.name = ActiveValue::Set(changes.name.clone());
        active_model.address = ActiveValue::Set(changes.address.clone());
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(School::from_entity(entity)))
    }

    /// Deletes a school, clearing `school_id` on its recipients first.
    ///
    /// # Returns
    /// - `Ok(true)` - School deleted
    /// - `Ok(false)` - No school with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::Recipient::update_many()
            .col_expr(
                entity::recipient::Column::SchoolId,
                Expr::value(Option::<i32>::None),
            )
            .filter(entity::recipient::Column::SchoolId.eq(id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::School::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;
        Ok(result.rows_affected > 0)
    }
}
