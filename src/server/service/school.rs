//! School service for business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::school::SchoolRepository,
    error::AppError,
    model::school::{CreateSchoolParams, School, UpdateSchoolParams},
    service::validation,
};

/// Service providing business logic for schools.
pub struct SchoolService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SchoolService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<School>, AppError> {
        let schools = SchoolRepository::new(self.db).get_all().await?;
        Ok(schools)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<School>, AppError> {
        let school = SchoolRepository::new(self.db).find_by_id(id).await?;
        Ok(school)
    }

    pub async fn create(&self, params: CreateSchoolParams) -> Result<School, AppError> {
        let changes = validation::school::validate(&params.into_candidate())?;

        let school = SchoolRepository::new(self.db).create(&changes).await?;

        Ok(school)
    }

    /// Applies a partial update to a school.
    ///
    /// # Returns
    /// - `Ok(Some(School))` - The updated school
    /// - `Ok(None)` - No school with that id
    /// - `Err(AppError::Validation)` - Name or address would become blank
    pub async fn update(&self, params: UpdateSchoolParams) -> Result<Option<School>, AppError> {
        let school_repo = SchoolRepository::new(self.db);
        let id = params.id;

        let Some(existing) = school_repo.find_by_id(id).await? else {
            return Ok(None);
        };

        let changes = validation::school::validate(&params.merge(&existing))?;

        let school = school_repo.update(id, &changes).await?;

        Ok(school)
    }

    /// Deletes a school. Its recipients are kept with `school_id` cleared.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let deleted = SchoolRepository::new(self.db).delete(id).await?;
        Ok(deleted)
    }
}
