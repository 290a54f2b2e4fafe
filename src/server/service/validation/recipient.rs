use crate::{
    model::api::IdParam,
    server::{
        model::{
            gift::GiftType,
            recipient::{RecipientCandidate, RecipientChanges},
        },
        service::validation::{require_present, too_long, FieldErrors, MUST_EXIST, NOT_INCLUDED},
    },
};

pub const MAX_GIFTS: usize = 3;

/// Validates a recipient candidate.
///
/// `user_exists` reports whether `candidate.user_id` resolves to a stored user; a missing,
/// unknown, or unresolvable id produces `user: must exist`. `school_id` and `order_id`
/// are expected to have been resolved by the caller.
pub fn validate(
    candidate: &RecipientCandidate,
    user_exists: bool,
) -> Result<RecipientChanges, FieldErrors> {
    let mut errors = FieldErrors::new();

    let address = require_present(&mut errors, "address", candidate.address.clone());

    let user_id = candidate
        .user_id
        .and_then(IdParam::id)
        .filter(|_| user_exists);
    if user_id.is_none() {
        errors.add("user", MUST_EXIST);
    }

    let gift: Vec<Option<GiftType>> = candidate
        .gift
        .iter()
        .map(|code| GiftType::parse(code))
        .collect();
    if gift.iter().any(Option::is_none) {
        errors.add("gift", NOT_INCLUDED);
    }
    if gift.len() > MAX_GIFTS {
        errors.add("gift", too_long(MAX_GIFTS));
    }

    match (user_id, address) {
        (Some(user_id), Some(address)) if errors.is_empty() => Ok(RecipientChanges {
            user_id,
            address,
            school_id: candidate.school_id.and_then(IdParam::id),
            order_id: candidate.order_id.and_then(IdParam::id),
            gift: gift.into_iter().flatten().collect(),
        }),
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::service::validation::CANT_BE_BLANK;

    fn candidate(address: Option<&str>, gift: &[&str]) -> RecipientCandidate {
        RecipientCandidate {
            user_id: Some(IdParam::Id(1)),
            address: address.map(str::to_string),
            school_id: None,
            order_id: None,
            gift: gift.iter().map(|g| g.to_string()).collect(),
        }
    }

    #[test]
    fn accepts_valid_recipient() {
        let changes = validate(&candidate(Some("1 Main St"), &["MUG", "HOODIE"]), true).unwrap();

        assert_eq!(changes.user_id, 1);
        assert_eq!(changes.gift, vec![GiftType::Mug, GiftType::Hoodie]);
    }

    #[test]
    fn blank_address_is_reported_alongside_other_errors() {
        let errors = validate(&candidate(Some("  "), &["SOCKS"]), false).unwrap_err();

        assert_eq!(errors.get("address"), Some(&[CANT_BE_BLANK.to_string()][..]));
        assert_eq!(errors.get("user"), Some(&[MUST_EXIST.to_string()][..]));
        assert_eq!(errors.get("gift"), Some(&[NOT_INCLUDED.to_string()][..]));
    }

    #[test]
    fn missing_user_id_must_exist() {
        let mut missing = candidate(Some("1 Main St"), &[]);
        missing.user_id = None;

        let errors = validate(&missing, true).unwrap_err();
        assert_eq!(errors.get("user"), Some(&[MUST_EXIST.to_string()][..]));
    }

    #[test]
    fn unresolvable_user_id_must_exist() {
        let mut unresolvable = candidate(Some("1 Main St"), &[]);
        unresolvable.user_id = Some(IdParam::Unresolvable);

        let errors = validate(&unresolvable, false).unwrap_err();
        assert_eq!(errors.get("user"), Some(&[MUST_EXIST.to_string()][..]));
    }

    #[test]
    fn rejects_more_than_three_gifts() {
        let errors = validate(
            &candidate(Some("1 Main St"), &["MUG", "MUG", "HOODIE", "STICKER"]),
            true,
        )
        .unwrap_err();

        assert_eq!(
            errors.get("gift"),
            Some(&["is too long (maximum is 3 characters)".to_string()][..])
        );
    }
}
