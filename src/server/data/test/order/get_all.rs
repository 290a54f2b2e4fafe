use super::*;

/// Tests listing orders without a school filter.
///
/// Expected: Ok with every order, ordered by id, each carrying its recipient ids
#[tokio::test]
async fn returns_all_orders_without_filter() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gift_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _school, recipient, first) =
        factory::helpers::create_order_with_dependencies(db).await?;
    let second = factory::create_order(db).await?;

    let orders = OrderRepository::new(db).get_all(None).await?;

    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0].id, first.id);
    assert_eq!(orders[0].recipient_ids, vec![recipient.id]);
    assert_eq!(orders[1].id, second.id);
    assert!(orders[1].recipient_ids.is_empty());

    Ok(())
}

/// Tests listing orders filtered by school.
///
/// Verifies that only orders with at least one recipient in the school are returned,
/// each once even when several of its recipients match, and that the returned order
/// still lists all of its recipients.
///
/// Expected: Ok with the two matching orders
#[tokio::test]
async fn filters_orders_by_recipient_school() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gift_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let school = SchoolFactory::new(db).name("North").build().await?;
    let other_school = SchoolFactory::new(db).name("South").build().await?;

    let in_school = factory::create_order(db).await?;
    let elsewhere = factory::create_order(db).await?;
    let mixed = factory::create_order(db).await?;

    RecipientFactory::new(db, user.id)
        .school_id(Some(school.id))
        .order_id(Some(in_school.id))
        .build()
        .await?;
    RecipientFactory::new(db, user.id)
        .school_id(Some(other_school.id))
        .order_id(Some(elsewhere.id))
        .build()
        .await?;
    for school_id in [school.id, school.id, other_school.id] {
        RecipientFactory::new(db, user.id)
            .school_id(Some(school_id))
            .order_id(Some(mixed.id))
            .build()
            .await?;
    }

    let orders = OrderRepository::new(db).get_all(Some(school.id)).await?;

    let ids: Vec<i32> = orders.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![in_school.id, mixed.id]);
    assert_eq!(orders[1].recipient_ids.len(), 3);

    Ok(())
}

/// Tests filtering by a school no recipient belongs to.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_for_unused_school() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gift_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_order_with_dependencies(db).await?;
    let unused = factory::create_school(db).await?;

    let orders = OrderRepository::new(db).get_all(Some(unused.id)).await?;

    assert!(orders.is_empty());

    Ok(())
}
