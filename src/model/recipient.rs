use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::{deserialize_id, deserialize_patch_id, deserialize_text_list, IdParam};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipientDto {
    pub id: i32,
    pub user_id: i32,
    pub school_id: Option<i32>,
    pub order_id: Option<i32>,
    pub gift: Vec<String>,
    pub address: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /recipients`.
///
/// Ids that cannot name a stored row are kept as [`IdParam::Unresolvable`] and reported
/// by validation like any other unknown id.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateRecipientDto {
    #[serde(default, deserialize_with = "deserialize_id")]
    #[schema(value_type = Option<i32>)]
    pub user_id: Option<IdParam>,
    pub address: Option<String>,
    #[serde(default, deserialize_with = "deserialize_id")]
    #[schema(value_type = Option<i32>)]
    pub school_id: Option<IdParam>,
    #[serde(default, deserialize_with = "deserialize_id")]
    #[schema(value_type = Option<i32>)]
    pub order_id: Option<IdParam>,
    #[serde(default, deserialize_with = "deserialize_text_list")]
    pub gift: Option<Vec<String>>,
}

/// Body of `PATCH/PUT /recipients/{id}`.
///
/// Id fields distinguish "absent" (`None`, keep stored value) from "present but empty"
/// (`Some(None)`, clear the value).
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateRecipientDto {
    #[serde(default, deserialize_with = "deserialize_patch_id")]
    #[schema(value_type = Option<i32>)]
    pub user_id: Option<Option<IdParam>>,
    pub address: Option<String>,
    #[serde(default, deserialize_with = "deserialize_patch_id")]
    #[schema(value_type = Option<i32>)]
    pub school_id: Option<Option<IdParam>>,
    #[serde(default, deserialize_with = "deserialize_patch_id")]
    #[schema(value_type = Option<i32>)]
    pub order_id: Option<Option<IdParam>>,
    #[serde(default, deserialize_with = "deserialize_text_list")]
    pub gift: Option<Vec<String>>,
}
