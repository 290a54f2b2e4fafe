use super::*;

/// Tests deleting an order.
///
/// Verifies the order row is removed while its recipients are kept with a cleared
/// `order_id`.
///
/// Expected: Ok(true)
#[tokio::test]
async fn deletes_order_and_detaches_recipients() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gift_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _school, recipient, order) =
        factory::helpers::create_order_with_dependencies(db).await?;

    let repo = OrderRepository::new(db);
    assert!(repo.delete(order.id).await?);
    assert!(repo.find_by_id(order.id).await?.is_none());

    let kept = entity::prelude::Recipient::find_by_id(recipient.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(kept.order_id, None);

    Ok(())
}

/// Tests deleting an order that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gift_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!OrderRepository::new(db).delete(42).await?);

    Ok(())
}
