use super::*;

/// Tests deleting an existing listing.
///
/// Verifies that the row is removed and the call reports success.
///
/// Expected: Ok(true) with the row gone
#[tokio::test]
async fn deletes_existing_listing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Server)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::server::create_server(db).await?;

    let repo = ServerRepository::new(db);
    let deleted = repo.delete_by_id(&server.id).await?;

    assert!(deleted);
    assert!(entity::prelude::Server::find_by_id(&server.id)
        .one(db)
        .await?
        .is_none());

    Ok(())
}

/// Tests deleting a listing that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_listing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Server)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ServerRepository::new(db);
    let deleted = repo.delete_by_id("missing").await?;

    assert!(!deleted);

    Ok(())
}
