//! School domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::school::{CreateSchoolDto, SchoolDto, UpdateSchoolDto};

#[derive(Debug, Clone, PartialEq)]
pub struct School {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl School {
    pub fn into_dto(self) -> SchoolDto {
        SchoolDto {
            id: self.id,
            name: self.name,
            address: self.address,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn from_entity(entity: entity::school::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            address: entity.address,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CreateSchoolParams {
    pub name: Option<String>,
    pub address: Option<String>,
}

impl CreateSchoolParams {
    pub fn from_dto(dto: CreateSchoolDto) -> Self {
        Self {
            name: dto.name,
            address: dto.address,
        }
    }

    pub fn into_candidate(self) -> SchoolCandidate {
        SchoolCandidate {
            name: self.name,
            address: self.address,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateSchoolParams {
    pub id: i32,
    pub name: Option<String>,
    pub address: Option<String>,
}

impl UpdateSchoolParams {
    pub fn from_dto(id: i32, dto: UpdateSchoolDto) -> Self {
        Self {
            id,
            name: dto.name,
            address: dto.address,
        }
    }

    pub fn merge(self, existing: &School) -> SchoolCandidate {
        SchoolCandidate {
            name: Some(self.name.unwrap_or_else(|| existing.name.clone())),
            address: Some(self.address.unwrap_or_else(|| existing.address.clone())),
        }
    }
}

/// School record as it would be persisted, before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct SchoolCandidate {
    pub name: Option<String>,
    pub address: Option<String>,
}

/// Validated school fields ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct SchoolChanges {
    pub name: String,
    pub address: String,
}
