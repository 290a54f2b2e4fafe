//! Order domain models and parameters.
//!
//! Provides the order domain model, its status enumeration, and the parameter types
//! used to create, update, and transition orders.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use std::fmt;

use crate::{
    model::order::{CreateOrderDto, OrderDto, UpdateOrderDto},
    server::{error::internal::InternalError, model::gift::GiftType},
};

/// Lifecycle state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    Received,
    Processing,
    Shipped,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Received,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Received => "ORDER_RECEIVED",
            OrderStatus::Processing => "ORDER_PROCESSING",
            OrderStatus::Shipped => "ORDER_SHIPPED",
            OrderStatus::Cancelled => "ORDER_CANCELLED",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gift order placed for a group of recipients.
///
/// Recipients are linked through `recipients.order_id`; `recipient_ids` is derived from
/// those rows and is always sorted ascending.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    /// Unique identifier for the order.
    pub id: i32,
    /// Current lifecycle state.
    pub status: OrderStatus,
    /// Gift every recipient of the order receives.
    pub gift_type: GiftType,
    /// Ids of the recipients attached to this order.
    pub recipient_ids: Vec<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Converts the order domain model to a DTO for API responses.
    pub fn into_dto(self) -> OrderDto {
        OrderDto {
            id: self.id,
            status: self.status.as_str().to_string(),
            gift_type: self.gift_type.as_str().to_string(),
            recipient_ids: self.recipient_ids,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Converts an entity model to an order domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The order row
    /// - `recipient_ids` - Ids of recipient rows whose `order_id` points at this order
    ///
    /// # Returns
    /// - `Ok(Order)` - The converted domain model
    /// - `Err(DbErr::Custom)` - The stored status or gift type is not a known value
    pub fn from_entity(
        entity: entity::order::Model,
        mut recipient_ids: Vec<i32>,
    ) -> Result<Self, DbErr> {
        let status = OrderStatus::parse(&entity.status).ok_or_else(|| {
            DbErr::Custom(
                InternalError::UnknownStoredValue {
                    column: "orders.status",
                    value: entity.status.clone(),
                }
                .to_string(),
            )
        })?;
        let gift_type = GiftType::parse(&entity.gift_type).ok_or_else(|| {
            DbErr::Custom(
                InternalError::UnknownStoredValue {
                    column: "orders.gift_type",
                    value: entity.gift_type.clone(),
                }
                .to_string(),
            )
        })?;
        recipient_ids.sort_unstable();

        Ok(Self {
            id: entity.id,
            status,
            gift_type,
            recipient_ids,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn is_shipped(&self) -> bool {
        self.status == OrderStatus::Shipped
    }
}

/// Parameters for creating a new order.
///
/// Values are kept as received so that validation can report every problem at once.
#[derive(Debug, Clone, Default)]
pub struct CreateOrderParams {
    pub status: Option<String>,
    pub gift_type: Option<String>,
    pub recipient_ids: Option<Vec<i32>>,
}

impl CreateOrderParams {
    pub fn from_dto(dto: CreateOrderDto) -> Self {
        Self {
            status: dto.status,
            gift_type: dto.gift_type,
            recipient_ids: dto.recipient_ids,
        }
    }

    /// Builds the record to validate. Missing recipient ids mean "no recipients".
    pub fn into_candidate(self) -> OrderCandidate {
        OrderCandidate {
            status: self.status,
            gift_type: self.gift_type,
            recipient_ids: self.recipient_ids.unwrap_or_default(),
        }
    }
}

/// Parameters for a partial update of an existing order.
///
/// Absent fields keep the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateOrderParams {
    /// ID of the order to update.
    pub id: i32,
    pub status: Option<String>,
    pub gift_type: Option<String>,
    /// Replaces the full recipient set when present.
    pub recipient_ids: Option<Vec<i32>>,
}

impl UpdateOrderParams {
    pub fn from_dto(id: i32, dto: UpdateOrderDto) -> Self {
        Self {
            id,
            status: dto.status,
            gift_type: dto.gift_type,
            recipient_ids: dto.recipient_ids,
        }
    }

    /// Update that only moves the order to `status`.
    pub fn transition(id: i32, status: OrderStatus) -> Self {
        Self {
            id,
            status: Some(status.as_str().to_string()),
            ..Default::default()
        }
    }

    /// Merges the incoming fields over the stored order.
    pub fn merge(self, existing: &Order) -> OrderCandidate {
        OrderCandidate {
            status: Some(
                self.status
                    .unwrap_or_else(|| existing.status.as_str().to_string()),
            ),
            gift_type: Some(
                self.gift_type
                    .unwrap_or_else(|| existing.gift_type.as_str().to_string()),
            ),
            recipient_ids: self
                .recipient_ids
                .unwrap_or_else(|| existing.recipient_ids.clone()),
        }
    }
}

/// Order record as it would be persisted, before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderCandidate {
    pub status: Option<String>,
    pub gift_type: Option<String>,
    pub recipient_ids: Vec<i32>,
}

/// Validated order fields ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderChanges {
    pub status: OrderStatus,
    pub gift_type: GiftType,
    /// Distinct recipient ids, in the order first given.
    pub recipient_ids: Vec<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored_order() -> Order {
        let now = Utc::now();
        Order {
            id: 1,
            status: OrderStatus::Received,
            gift_type: GiftType::Mug,
            recipient_ids: vec![3, 4],
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn merge_keeps_stored_values_for_absent_fields() {
        let candidate = UpdateOrderParams {
            id: 1,
            gift_type: Some("HOODIE".to_string()),
            ..Default::default()
        }
        .merge(&stored_order());

        assert_eq!(candidate.status.as_deref(), Some("ORDER_RECEIVED"));
        assert_eq!(candidate.gift_type.as_deref(), Some("HOODIE"));
        assert_eq!(candidate.recipient_ids, vec![3, 4]);
    }

    #[test]
    fn transition_only_sets_status() {
        let params = UpdateOrderParams::transition(9, OrderStatus::Cancelled);

        assert_eq!(params.id, 9);
        assert_eq!(params.status.as_deref(), Some("ORDER_CANCELLED"));
        assert!(params.gift_type.is_none());
        assert!(params.recipient_ids.is_none());
    }

    #[test]
    fn from_entity_rejects_unknown_status() {
        let now = Utc::now();
        let entity = entity::order::Model {
            id: 1,
            status: "LOST".to_string(),
            gift_type: "MUG".to_string(),
            created_at: now,
            updated_at: now,
        };

        assert!(Order::from_entity(entity, Vec::new()).is_err());
    }
}
