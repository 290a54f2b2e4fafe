use super::*;

/// Tests creating an order with several recipients.
///
/// Verifies that the order row is inserted and every listed recipient gets its
/// `order_id` pointed at the new order.
///
/// Expected: Ok with recipient ids sorted ascending
#[tokio::test]
async fn creates_order_and_attaches_recipients() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gift_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let first = factory::create_recipient(db, user.id).await?;
    let second = factory::create_recipient(db, user.id).await?;

    let repo = OrderRepository::new(db);
    let WriteOutcome::Written(order) = repo
        .create(&changes(OrderStatus::Received, vec![second.id, first.id]))
        .await?
    else {
        panic!("expected the order to be written");
    };

    assert_eq!(order.status, OrderStatus::Received);
    assert_eq!(order.gift_type, GiftType::Mug);
    assert_eq!(order.recipient_ids, vec![first.id, second.id]);

    let stored = entity::prelude::Recipient::find_by_id(first.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.order_id, Some(order.id));

    Ok(())
}

/// Tests creating an order with a recipient already attached to an unshipped order.
///
/// Verifies that the recipient moves to the new order and the previous order no
/// longer lists it.
///
/// Expected: Ok with the recipient only on the new order
#[tokio::test]
async fn moves_recipient_from_previous_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gift_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _school, recipient, previous) =
        factory::helpers::create_order_with_dependencies(db).await?;

    let repo = OrderRepository::new(db);
    let WriteOutcome::Written(order) = repo
        .create(&changes(OrderStatus::Processing, vec![recipient.id]))
        .await?
    else {
        panic!("expected the order to be written");
    };

    assert_eq!(order.recipient_ids, vec![recipient.id]);
    let previous = repo.find_by_id(previous.id).await?.unwrap();
    assert!(previous.recipient_ids.is_empty());

    Ok(())
}

/// Tests creating an order with a recipient attached to a shipped order.
///
/// Verifies the whole write is rolled back: no order row is left behind and the
/// shipped order keeps its recipient.
///
/// Expected: Ok(RecipientLocked) with nothing changed
#[tokio::test]
async fn refuses_recipient_of_shipped_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gift_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let shipped = OrderFactory::new(db).status("ORDER_SHIPPED").build().await?;
    let locked = RecipientFactory::new(db, user.id)
        .order_id(Some(shipped.id))
        .build()
        .await?;
    let free = factory::create_recipient(db, user.id).await?;

    let repo = OrderRepository::new(db);
    let outcome = repo
        .create(&changes(OrderStatus::Received, vec![free.id, locked.id]))
        .await?;
    assert_eq!(outcome, WriteOutcome::RecipientLocked);

    let orders = repo.get_all(None).await?;
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].id, shipped.id);
    assert_eq!(orders[0].recipient_ids, vec![locked.id]);

    let free = entity::prelude::Recipient::find_by_id(free.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(free.order_id, None);

    Ok(())
}
