use crate::server::{data::school::SchoolRepository, model::school::SchoolChanges};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{self, recipient::RecipientFactory},
};

/// Tests creating and listing schools.
///
/// Expected: Ok with schools ordered by id
#[tokio::test]
async fn creates_and_lists_schools() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gift_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SchoolRepository::new(db);
    let first = repo
        .create(&SchoolChanges {
            name: "Ridgemont High".to_string(),
            address: "1 Ridgemont Way".to_string(),
        })
        .await?;
    let second = repo
        .create(&SchoolChanges {
            name: "Bayside High".to_string(),
            address: "2 Bayside Blvd".to_string(),
        })
        .await?;

    let schools = repo.get_all().await?;
    let ids: Vec<i32> = schools.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
    assert!(repo.exists(first.id).await?);
    assert!(!repo.exists(second.id + 1).await?);

    Ok(())
}

/// Tests updating a school.
///
/// Expected: Ok(Some) with new values, Ok(None) for an unknown id
#[tokio::test]
async fn updates_school() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gift_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let school = factory::create_school(db).await?;
    let changes = SchoolChanges {
        name: "Renamed".to_string(),
        address: "3 Moved Ave".to_string(),
    };

    let repo = SchoolRepository::new(db);
    let updated = repo.update(school.id, &changes).await?.unwrap();
    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.address, "3 Moved Ave");

    assert!(repo.update(school.id + 100, &changes).await?.is_none());

    Ok(())
}

/// Tests deleting a school that recipients belong to.
///
/// Verifies the recipients are kept with `school_id` cleared.
///
/// Expected: Ok(true)
#[tokio::test]
async fn deletes_school_and_clears_recipients() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gift_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let school = factory::create_school(db).await?;
    let recipient = RecipientFactory::new(db, user.id)
        .school_id(Some(school.id))
        .build()
        .await?;

    let repo = SchoolRepository::new(db);
    assert!(repo.delete(school.id).await?);
    assert!(!repo.delete(school.id).await?);

    let kept = entity::prelude::Recipient::find_by_id(recipient.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(kept.school_id, None);

    Ok(())
}
