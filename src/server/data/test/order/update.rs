use super::*;

/// Tests updating an order's fields and recipient set.
///
/// Verifies that status and gift type are written, the new recipient is attached, and
/// the recipient left out of the new set is detached but kept.
///
/// Expected: Ok(Written) with recipients replaced
#[tokio::test]
async fn updates_fields_and_replaces_recipients() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gift_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _school, old_recipient, order) =
        factory::helpers::create_order_with_dependencies(db).await?;
    let new_recipient = factory::create_recipient(db, user.id).await?;

    let repo = OrderRepository::new(db);
    let updated = repo
        .update(
            order.id,
            &OrderChanges {
                status: OrderStatus::Processing,
                gift_type: GiftType::Hoodie,
                recipient_ids: vec![new_recipient.id],
            },
        )
        .await?;
    assert_eq!(updated, WriteOutcome::Written(()));

    let stored = repo.find_by_id(order.id).await?.unwrap();
    assert_eq!(stored.status, OrderStatus::Processing);
    assert_eq!(stored.gift_type, GiftType::Hoodie);
    assert_eq!(stored.recipient_ids, vec![new_recipient.id]);

    let detached = entity::prelude::Recipient::find_by_id(old_recipient.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(detached.order_id, None);

    Ok(())
}

/// Tests updating an order whose stored status is already shipped.
///
/// Verifies the conditional update refuses the write and leaves both the order and
/// its recipients untouched.
///
/// Expected: Ok(OrderShipped) with nothing changed
#[tokio::test]
async fn refuses_to_update_shipped_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gift_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let order = OrderFactory::new(db).status("ORDER_SHIPPED").build().await?;
    let recipient = RecipientFactory::new(db, user.id)
        .order_id(Some(order.id))
        .build()
        .await?;
    let other = factory::create_recipient(db, user.id).await?;

    let repo = OrderRepository::new(db);
    let updated = repo
        .update(order.id, &changes(OrderStatus::Cancelled, vec![other.id]))
        .await?;
    assert_eq!(updated, WriteOutcome::OrderShipped);

    let stored = repo.find_by_id(order.id).await?.unwrap();
    assert_eq!(stored.status, OrderStatus::Shipped);
    assert_eq!(stored.gift_type, GiftType::TShirt);
    assert_eq!(stored.recipient_ids, vec![recipient.id]);

    Ok(())
}

/// Tests updating an order that does not exist.
///
/// Expected: Ok(NotFound)
#[tokio::test]
async fn reports_missing_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gift_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OrderRepository::new(db);
    let updated = repo
        .update(999, &changes(OrderStatus::Received, vec![1]))
        .await?;

    assert_eq!(updated, WriteOutcome::NotFound);

    Ok(())
}

/// Tests shipping an order through the conditional update.
///
/// Verifies the order's own recipients stay attached once its status becomes
/// `ORDER_SHIPPED` inside the same transaction.
///
/// Expected: Ok(Written) with the recipient set unchanged
#[tokio::test]
async fn ships_order_keeping_its_recipients() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gift_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _school, recipient, order) =
        factory::helpers::create_order_with_dependencies(db).await?;

    let repo = OrderRepository::new(db);
    let updated = repo
        .update(order.id, &changes(OrderStatus::Shipped, vec![recipient.id]))
        .await?;
    assert_eq!(updated, WriteOutcome::Written(()));

    let stored = repo.find_by_id(order.id).await?.unwrap();
    assert_eq!(stored.status, OrderStatus::Shipped);
    assert_eq!(stored.recipient_ids, vec![recipient.id]);

    Ok(())
}

/// Tests taking a recipient from another order that has shipped.
///
/// Verifies the update is rolled back: the target order keeps its fields and
/// recipients, and the shipped order keeps its recipient.
///
/// Expected: Ok(RecipientLocked) with nothing changed
#[tokio::test]
async fn refuses_recipient_of_other_shipped_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gift_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _school, own, order) = factory::helpers::create_order_with_dependencies(db).await?;
    let shipped = OrderFactory::new(db).status("ORDER_SHIPPED").build().await?;
    let locked = RecipientFactory::new(db, user.id)
        .order_id(Some(shipped.id))
        .build()
        .await?;

    let repo = OrderRepository::new(db);
    let updated = repo
        .update(order.id, &changes(OrderStatus::Processing, vec![locked.id]))
        .await?;
    assert_eq!(updated, WriteOutcome::RecipientLocked);

    let stored = repo.find_by_id(order.id).await?.unwrap();
    assert_eq!(stored.status, OrderStatus::Received);
    assert_eq!(stored.recipient_ids, vec![own.id]);

    let shipped = repo.find_by_id(shipped.id).await?.unwrap();
    assert_eq!(shipped.recipient_ids, vec![locked.id]);

    Ok(())
}
