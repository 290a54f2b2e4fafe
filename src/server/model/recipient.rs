//! Recipient domain models and parameters.
//!
//! A recipient belongs to a user, may be affiliated with a school, and may be attached
//! to an order. Gift codes are stored as a comma-separated column and exposed as a list.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::{
        api::IdParam,
        recipient::{CreateRecipientDto, RecipientDto, UpdateRecipientDto},
    },
    server::{error::internal::InternalError, model::gift::GiftType},
};

/// Separator used for the stored `recipients.gift` column.
const GIFT_SEPARATOR: char = ',';

/// Person a gift is addressed to.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipient {
    pub id: i32,
    /// Owning user.
    pub user_id: i32,
    pub school_id: Option<i32>,
    pub order_id: Option<i32>,
    /// Requested gifts, at most three.
    pub gift: Vec<GiftType>,
    pub address: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Recipient {
    /// Converts the recipient domain model to a DTO for API responses.
    pub fn into_dto(self) -> RecipientDto {
        RecipientDto {
            id: self.id,
            user_id: self.user_id,
            school_id: self.school_id,
            order_id: self.order_id,
            gift: self
                .gift
                .into_iter()
                .map(|gift| gift.as_str().to_string())
                .collect(),
            address: self.address,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Converts an entity model to a recipient domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Recipient)` - The converted domain model
    /// - `Err(DbErr::Custom)` - The stored gift column holds an unknown gift code
    pub fn from_entity(entity: entity::recipient::Model) -> Result<Self, DbErr> {
        let gift = decode_gifts(&entity.gift)?;

        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            school_id: entity.school_id,
            order_id: entity.order_id,
            gift,
            address: entity.address,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

/// Joins gift codes into the stored column representation.
pub fn encode_gifts(gifts: &[GiftType]) -> String {
    gifts
        .iter()
        .map(|gift| gift.as_str())
        .collect::<Vec<_>>()
        .join(&GIFT_SEPARATOR.to_string())
}

fn decode_gifts(stored: &str) -> Result<Vec<GiftType>, DbErr> {
    stored
        .split(GIFT_SEPARATOR)
        .filter(|code| !code.is_empty())
        .map(|code| {
            GiftType::parse(code).ok_or_else(|| {
                DbErr::Custom(
                    InternalError::UnknownStoredValue {
                        column: "recipients.gift",
                        value: code.to_string(),
                    }
                    .to_string(),
                )
            })
        })
        .collect()
}

/// Parameters for creating a new recipient.
#[derive(Debug, Clone, Default)]
pub struct CreateRecipientParams {
    pub user_id: Option<IdParam>,
    pub address: Option<String>,
    pub school_id: Option<IdParam>,
    pub order_id: Option<IdParam>,
    pub gift: Vec<String>,
}

impl CreateRecipientParams {
    pub fn from_dto(dto: CreateRecipientDto) -> Self {
        Self {
            user_id: dto.user_id,
            address: dto.address,
            school_id: dto.school_id,
            order_id: dto.order_id,
            gift: dto.gift.unwrap_or_default(),
        }
    }

    pub fn into_candidate(self) -> RecipientCandidate {
        RecipientCandidate {
            user_id: self.user_id,
            address: self.address,
            school_id: self.school_id,
            order_id: self.order_id,
            gift: self.gift,
        }
    }
}

/// Parameters for a partial update of an existing recipient.
///
/// Id fields use the outer `Option` for presence and the inner one for the value, so a
/// request can clear `school_id` or `order_id` by sending null.
#[derive(Debug, Clone, Default)]
pub struct UpdateRecipientParams {
    pub id: i32,
    pub user_id: Option<Option<IdParam>>,
    pub address: Option<String>,
    pub school_id: Option<Option<IdParam>>,
    pub order_id: Option<Option<IdParam>>,
    pub gift: Option<Vec<String>>,
}

impl UpdateRecipientParams {
    pub fn from_dto(id: i32, dto: UpdateRecipientDto) -> Self {
        Self {
            id,
            user_id: dto.user_id,
            address: dto.address,
            school_id: dto.school_id,
            order_id: dto.order_id,
            gift: dto.gift,
        }
    }

    /// Merges the incoming fields over the stored recipient.
    pub fn merge(self, existing: &Recipient) -> RecipientCandidate {
        RecipientCandidate {
            user_id: self.user_id.unwrap_or(Some(IdParam::Id(existing.user_id))),
            address: Some(self.address.unwrap_or_else(|| existing.address.clone())),
            school_id: self
                .school_id
                .unwrap_or(existing.school_id.map(IdParam::Id)),
            order_id: self.order_id.unwrap_or(existing.order_id.map(IdParam::Id)),
            gift: self.gift.unwrap_or_else(|| {
                existing
                    .gift
                    .iter()
                    .map(|gift| gift.as_str().to_string())
                    .collect()
            }),
        }
    }
}

/// Recipient record as it would be persisted, before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipientCandidate {
    pub user_id: Option<IdParam>,
    pub address: Option<String>,
    pub school_id: Option<IdParam>,
    pub order_id: Option<IdParam>,
    pub gift: Vec<String>,
}

/// Validated recipient fields ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipientChanges {
    pub user_id: i32,
    pub address: String,
    pub school_id: Option<i32>,
    pub order_id: Option<i32>,
    pub gift: Vec<GiftType>,
}
