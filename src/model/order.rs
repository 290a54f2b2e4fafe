use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::deserialize_text;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderDto {
    pub id: i32,
    pub status: String,
    pub gift_type: String,
    pub recipient_ids: Vec<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /orders`. Every field is optional at the wire level so that missing
/// fields and values of the wrong type surface as validation messages rather than parse
/// failures.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateOrderDto {
    #[serde(default, deserialize_with = "deserialize_text")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub gift_type: Option<String>,
    pub recipient_ids: Option<Vec<i32>>,
}

/// Body of `PATCH/PUT /orders/{id}`. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateOrderDto {
    #[serde(default, deserialize_with = "deserialize_text")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub gift_type: Option<String>,
    pub recipient_ids: Option<Vec<i32>>,
}
