use super::*;

/// Tests creating a recipient with gifts and a school.
///
/// Verifies the gift list is stored and read back in the order given.
///
/// Expected: Ok with every field persisted
#[tokio::test]
async fn creates_recipient_with_gifts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gift_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let school = factory::create_school(db).await?;

    let repo = RecipientRepository::new(db);
    let WriteOutcome::Written(recipient) = repo
        .create(&RecipientChanges {
            user_id: user.id,
            address: "12 Elm Street".to_string(),
            school_id: Some(school.id),
            order_id: None,
            gift: vec![GiftType::Sticker, GiftType::Mug],
        })
        .await?
    else {
        panic!("expected the recipient to be written");
    };

    let stored = repo.find_by_id(recipient.id).await?.unwrap();
    assert_eq!(stored.user_id, user.id);
    assert_eq!(stored.school_id, Some(school.id));
    assert_eq!(stored.order_id, None);
    assert_eq!(stored.gift, vec![GiftType::Sticker, GiftType::Mug]);
    assert_eq!(stored.address, "12 Elm Street");

    Ok(())
}

/// Tests checking which recipient ids exist.
///
/// Expected: Ok with only the stored ids, ascending
#[tokio::test]
async fn reports_existing_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gift_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let first = factory::create_recipient(db, user.id).await?;
    let second = factory::create_recipient(db, user.id).await?;

    let existing = RecipientRepository::new(db)
        .existing_ids(&[second.id, 999, first.id])
        .await?;

    assert_eq!(existing, vec![first.id, second.id]);

    Ok(())
}

/// Tests creating a recipient directly on a shipped order.
///
/// Expected: Ok(OrderShipped) and no recipient row is inserted
#[tokio::test]
async fn refuses_to_join_shipped_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gift_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let shipped = OrderFactory::new(db).status("ORDER_SHIPPED").build().await?;

    let repo = RecipientRepository::new(db);
    let outcome = repo.create(&changes(user.id, Some(shipped.id))).await?;

    assert_eq!(outcome, WriteOutcome::OrderShipped);
    assert!(repo.get_all(None).await?.is_empty());

    Ok(())
}
