use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Field name to the list of messages explaining why that field was rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct ValidationErrorsDto(pub BTreeMap<String, Vec<String>>);

/// Optional `?school_id=` filter shared by the order and recipient listings.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SchoolFilterQuery {
    /// Only return records associated with this school.
    #[serde(default, deserialize_with = "deserialize_id")]
    #[param(value_type = Option<i32>)]
    pub school_id: Option<IdParam>,
}

/// Reference to another record as submitted by a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdParam {
    Id(i32),
    /// A value was given but no stored row can have it, e.g. `"abc"` or `1e12`.
    Unresolvable,
}

impl IdParam {
    pub fn id(self) -> Option<i32> {
        match self {
            IdParam::Id(id) => Some(id),
            IdParam::Unresolvable => None,
        }
    }
}

/// Deserializes an id that may arrive as a number, a numeric string, an empty string, or
/// null. Empty strings and null both become `None`; any other value that is not a valid
/// id becomes [`IdParam::Unresolvable`] so it can be reported like an unknown id.
pub fn deserialize_id<'de, D>(deserializer: D) -> Result<Option<IdParam>, D::Error>
where
    D: Deserializer<'de>,
{
    let id = match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(value)) if value.trim().is_empty() => None,
        Some(Value::String(value)) => Some(value.trim().parse::<i32>().ok()),
        Some(Value::Number(value)) => Some(value.as_i64().and_then(|v| i32::try_from(v).ok())),
        Some(_) => Some(None),
    };

    Ok(id.map(|id| id.map_or(IdParam::Unresolvable, IdParam::Id)))
}

/// Like [`deserialize_id`] but keeps "field present" apart from "field absent".
///
/// Use together with `#[serde(default)]`: an absent field stays `None`, while a present
/// field becomes `Some(id)` where `id` is `None` for an explicit null or empty string.
pub fn deserialize_patch_id<'de, D>(deserializer: D) -> Result<Option<Option<IdParam>>, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_id(deserializer).map(Some)
}

/// Deserializes a text field without rejecting other JSON types.
///
/// Non-string values keep their JSON text (`5` becomes `"5"`) so that they reach the
/// validators and fail there with a field message.
pub fn deserialize_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(into_text))
}

/// List counterpart of [`deserialize_text`]. A lone value is read as a one-element list.
pub fn deserialize_text_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let list = match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::Array(values)) => Some(values.into_iter().filter_map(into_text).collect()),
        Some(value) => Some(into_text(value).into_iter().collect()),
    };

    Ok(list)
}

fn into_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}
