//! Field validation for records about to be written.
//!
//! Each resource has a pure `validate` function that inspects a merged candidate record
//! and either returns the typed changes to persist or a [`FieldErrors`] map holding every
//! message for every failing field. Rules never short-circuit one another.

pub mod order;
pub mod recipient;
pub mod school;
pub mod user;

use std::{collections::BTreeMap, fmt};

pub const NOT_INCLUDED: &str = "is not included in the list";
pub const CANT_BE_BLANK: &str = "can't be blank";
pub const MUST_EXIST: &str = "must exist";
pub const TAKEN: &str = "has already been taken";
pub const ORDER_SHIPPED: &str = "Status in ORDER_SHIPPED";
/// On `recipient_ids`: a listed recipient is attached to another order that has shipped.
pub const INCLUDES_SHIPPED_RECIPIENT: &str = "includes a recipient of an order in ORDER_SHIPPED";
/// On `order_id`: the recipient would join an order that has shipped.
pub const REFERS_TO_SHIPPED_ORDER: &str = "refers to an order in ORDER_SHIPPED";
/// On `order_id`: the recipient's current order has shipped, so it cannot leave it.
pub const LOCKED_BY_SHIPPED_ORDER: &str = "belongs to an order in ORDER_SHIPPED";

/// Field name to messages, ordered by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Error map holding a single message.
    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn into_inner(self) -> BTreeMap<String, Vec<String>> {
        self.0
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{} {}", field, message)?;
                first = false;
            }
        }
        Ok(())
    }
}

fn characters(count: usize) -> &'static str {
    if count == 1 {
        "character"
    } else {
        "characters"
    }
}

pub fn too_short(minimum: usize) -> String {
    format!(
        "is too short (minimum is {} {})",
        minimum,
        characters(minimum)
    )
}

pub fn too_long(maximum: usize) -> String {
    format!(
        "is too long (maximum is {} {})",
        maximum,
        characters(maximum)
    )
}

pub fn greater_than_or_equal_to(bound: i32) -> String {
    format!("must be greater than or equal to {}", bound)
}

/// Records `can't be blank` for `field` when `value` is blank and returns the present value.
pub fn require_present(errors: &mut FieldErrors, field: &str, value: Option<String>) -> Option<String> {
    match value {
        Some(value) if !value.trim().is_empty() => Some(value),
        _ => {
            errors.add(field, CANT_BE_BLANK);
            None
        }
    }
}
