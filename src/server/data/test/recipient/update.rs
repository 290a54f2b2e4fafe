use super::*;

/// Tests replacing a recipient's fields.
///
/// Verifies that optional references can be cleared and gifts replaced.
///
/// Expected: Ok(Written) with new values
#[tokio::test]
async fn replaces_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gift_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _school, recipient, _order) =
        factory::helpers::create_order_with_dependencies(db).await?;

    let WriteOutcome::Written(updated) = RecipientRepository::new(db)
        .update(
            recipient.id,
            &RecipientChanges {
                user_id: user.id,
                address: "9 New Road".to_string(),
                school_id: None,
                order_id: None,
                gift: vec![GiftType::TShirt],
            },
        )
        .await?
    else {
        panic!("expected the recipient to be written");
    };

    assert_eq!(updated.address, "9 New Road");
    assert_eq!(updated.school_id, None);
    assert_eq!(updated.order_id, None);
    assert_eq!(updated.gift, vec![GiftType::TShirt]);
    assert!(updated.updated_at >= recipient.updated_at);

    Ok(())
}

/// Tests updating a recipient that does not exist.
///
/// Expected: Ok(NotFound)
#[tokio::test]
async fn reports_missing_recipient() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gift_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let updated = RecipientRepository::new(db)
        .update(
            77,
            &RecipientChanges {
                user_id: user.id,
                address: "1 Nowhere".to_string(),
                school_id: None,
                order_id: None,
                gift: Vec::new(),
            },
        )
        .await?;

    assert_eq!(updated, WriteOutcome::NotFound);

    Ok(())
}

/// Tests deleting a recipient.
///
/// Expected: Ok(Written) the first time, Ok(NotFound) once it is gone
#[tokio::test]
async fn deletes_recipient() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gift_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let recipient = factory::create_recipient(db, user.id).await?;

    let repo = RecipientRepository::new(db);
    assert_eq!(repo.delete(recipient.id).await?, WriteOutcome::Written(()));
    assert_eq!(repo.delete(recipient.id).await?, WriteOutcome::NotFound);
    assert!(repo.find_by_id(recipient.id).await?.is_none());

    Ok(())
}

/// Tests moving a recipient off a shipped order.
///
/// Expected: Ok(RecipientLocked) and the recipient stays on the shipped order
#[tokio::test]
async fn refuses_to_leave_shipped_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gift_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let shipped = OrderFactory::new(db).status("ORDER_SHIPPED").build().await?;
    let recipient = RecipientFactory::new(db, user.id)
        .order_id(Some(shipped.id))
        .build()
        .await?;

    let repo = RecipientRepository::new(db);
    let outcome = repo.update(recipient.id, &changes(user.id, None)).await?;

    assert_eq!(outcome, WriteOutcome::RecipientLocked);
    let stored = repo.find_by_id(recipient.id).await?.unwrap();
    assert_eq!(stored.order_id, Some(shipped.id));

    Ok(())
}

/// Tests moving a recipient onto a shipped order.
///
/// Expected: Ok(OrderShipped) and the recipient keeps its previous order
#[tokio::test]
async fn refuses_to_join_shipped_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gift_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _school, recipient, order) =
        factory::helpers::create_order_with_dependencies(db).await?;
    let shipped = OrderFactory::new(db).status("ORDER_SHIPPED").build().await?;

    let repo = RecipientRepository::new(db);
    let outcome = repo
        .update(recipient.id, &changes(user.id, Some(shipped.id)))
        .await?;

    assert_eq!(outcome, WriteOutcome::OrderShipped);
    let stored = repo.find_by_id(recipient.id).await?.unwrap();
    assert_eq!(stored.order_id, Some(order.id));

    Ok(())
}

/// Tests editing a recipient of a shipped order without changing its order.
///
/// Expected: Ok(Written) with the new address
#[tokio::test]
async fn edits_recipient_of_shipped_order_in_place() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gift_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let shipped = OrderFactory::new(db).status("ORDER_SHIPPED").build().await?;
    let recipient = RecipientFactory::new(db, user.id)
        .order_id(Some(shipped.id))
        .build()
        .await?;

    let outcome = RecipientRepository::new(db)
        .update(recipient.id, &changes(user.id, Some(shipped.id)))
        .await?;

    let WriteOutcome::Written(updated) = outcome else {
        panic!("expected the recipient to be written");
    };
    assert_eq!(updated.address, "1 Main St");
    assert_eq!(updated.order_id, Some(shipped.id));

    Ok(())
}

/// Tests deleting a recipient of a shipped order.
///
/// Expected: Ok(RecipientLocked) and the row is kept
#[tokio::test]
async fn refuses_to_delete_recipient_of_shipped_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gift_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let shipped = OrderFactory::new(db).status("ORDER_SHIPPED").build().await?;
    let recipient = RecipientFactory::new(db, user.id)
        .order_id(Some(shipped.id))
        .build()
        .await?;

    let outcome = RecipientRepository::new(db).delete(recipient.id).await?;

    assert_eq!(outcome, WriteOutcome::RecipientLocked);
    let stored = entity::prelude::Recipient::find_by_id(recipient.id)
        .one(db)
        .await?;
    assert!(stored.is_some());

    Ok(())
}
