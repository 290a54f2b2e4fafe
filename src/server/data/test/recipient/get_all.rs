use super::*;

/// Tests listing recipients filtered by school.
///
/// Expected: Ok with only the recipients whose own `school_id` matches
#[tokio::test]
async fn filters_by_school() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gift_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let school = factory::create_school(db).await?;
    let other_school = factory::create_school(db).await?;

    let matching = RecipientFactory::new(db, user.id)
        .school_id(Some(school.id))
        .gift(&["HOODIE"])
        .build()
        .await?;
    RecipientFactory::new(db, user.id)
        .school_id(Some(other_school.id))
        .build()
        .await?;
    factory::create_recipient(db, user.id).await?;

    let repo = RecipientRepository::new(db);

    let filtered = repo.get_all(Some(school.id)).await?;
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, matching.id);
    assert_eq!(filtered[0].gift, vec![GiftType::Hoodie]);

    let all = repo.get_all(None).await?;
    assert_eq!(all.len(), 3);

    Ok(())
}
