use crate::server::{
    model::{
        gift::GiftType,
        order::{Order, OrderCandidate, OrderChanges, OrderStatus},
    },
    service::validation::{too_long, too_short, FieldErrors, NOT_INCLUDED, ORDER_SHIPPED},
};

pub const MIN_RECIPIENTS: usize = 1;
pub const MAX_RECIPIENTS: usize = 20;

/// Validates an order candidate.
///
/// `existing` is the stored order when the candidate comes from an update; a stored
/// status of `ORDER_SHIPPED` rejects the whole update regardless of which fields changed.
pub fn validate(
    candidate: &OrderCandidate,
    existing: Option<&Order>,
) -> Result<OrderChanges, FieldErrors> {
    let mut errors = FieldErrors::new();

    let status = candidate.status.as_deref().and_then(OrderStatus::parse);
    if status.is_none() {
        errors.add("status", NOT_INCLUDED);
    }

    let gift_type = candidate.gift_type.as_deref().and_then(GiftType::parse);
    if gift_type.is_none() {
        errors.add("gift_type", NOT_INCLUDED);
    }

    let mut recipient_ids = Vec::with_capacity(candidate.recipient_ids.len());
    for id in &candidate.recipient_ids {
        if !recipient_ids.contains(id) {
            recipient_ids.push(*id);
        }
    }
    if recipient_ids.len() < MIN_RECIPIENTS {
        errors.add("recipient_ids", too_short(MIN_RECIPIENTS));
    }
    if recipient_ids.len() > MAX_RECIPIENTS {
        errors.add("recipient_ids", too_long(MAX_RECIPIENTS));
    }

    if existing.is_some_and(Order::is_shipped) {
        errors.add("status", ORDER_SHIPPED);
    }

    match (status, gift_type) {
        (Some(status), Some(gift_type)) if errors.is_empty() => Ok(OrderChanges {
            status,
            gift_type,
            recipient_ids,
        }),
        _ => Err(errors),
    }
}
