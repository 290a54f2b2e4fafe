use test_utils::factory::{self, recipient::RecipientFactory};

use super::*;

/// Tests the school CRUD cycle.
///
/// Expected: 201, 200 list, 200 patch with the other field kept, 204 delete, then 404
#[tokio::test]
async fn school_crud() {
    let app = TestApp::new().await;
    let (_, token) = app.signup("admin@example.com").await;

    let (status, created) = app
        .send(
            Method::POST,
            "/schools",
            Some(&token),
            Some(json!({ "name": "Shermer High", "address": "1 Shermer Rd" })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let uri = format!("/schools/{}", created["id"]);

    let (status, list) = app.send(Method::GET, "/schools", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, json!([created.clone()]));

    let (status, updated) = app
        .send(
            Method::PATCH,
            &uri,
            Some(&token),
            Some(json!({ "name": "Shermer High School" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Shermer High School");
    assert_eq!(updated["address"], "1 Shermer Rd");

    let (status, _) = app.send(Method::DELETE, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = app.send(Method::GET, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "School not found" }));
}

/// Tests creating and updating a school with blank fields.
///
/// Expected: 422 with `can't be blank` for each blank field
#[tokio::test]
async fn rejects_blank_fields() {
    let app = TestApp::new().await;
    let (_, token) = app.signup("blankschool@example.com").await;
    let school = factory::create_school(&app.db).await.unwrap();

    let (status, body) = app
        .send(Method::POST, "/schools", Some(&token), Some(json!({ "name": " " })))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body,
        json!({ "address": ["can't be blank"], "name": ["can't be blank"] })
    );

    let (status, body) = app
        .send(
            Method::PUT,
            &format!("/schools/{}", school.id),
            Some(&token),
            Some(json!({ "address": "" })),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body, json!({ "address": ["can't be blank"] }));
}

/// Tests deleting a school that recipients belong to.
///
/// Expected: 204 and the recipient kept with no school
#[tokio::test]
async fn deleting_school_keeps_recipients() {
    let app = TestApp::new().await;
    let (user_id, token) = app.signup("keep@example.com").await;
    let school = factory::create_school(&app.db).await.unwrap();
    let recipient = RecipientFactory::new(&app.db, user_id)
        .school_id(Some(school.id))
        .build()
        .await
        .unwrap();

    let (status, _) = app
        .send(
            Method::DELETE,
            &format!("/schools/{}", school.id),
            Some(&token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = app
        .send(
            Method::GET,
            &format!("/recipients/{}", recipient.id),
            Some(&token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["school_id"], Value::Null);
}
