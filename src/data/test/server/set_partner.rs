use super::*;

/// Tests flipping the partner flag on.
///
/// Verifies that the update persists and the returned model reflects the
/// new flag.
///
/// Expected: Ok(Some) with is_partner true
#[tokio::test]
async fn sets_partner_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Server)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::server::create_server(db).await?;

    let repo = ServerRepository::new(db);
    let updated = repo.set_partner(&server.id, true).await?;

    assert!(updated.is_some());
    assert!(updated.unwrap().is_partner);

    let stored = entity::prelude::Server::find_by_id(&server.id)
        .one(db)
        .await?
        .unwrap();
    assert!(stored.is_partner);

    Ok(())
}

/// Tests clearing the partner flag.
///
/// Expected: Ok(Some) with is_partner false
#[tokio::test]
async fn clears_partner_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Server)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::server::ServerFactory::new(db)
        .is_partner(true)
        .build()
        .await?;

    let repo = ServerRepository::new(db);
    let updated = repo.set_partner(&server.id, false).await?;

    assert!(!updated.unwrap().is_partner);

    Ok(())
}

/// Tests updating a listing that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_listing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Server)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ServerRepository::new(db);
    let updated = repo.set_partner("missing", true).await?;

    assert!(updated.is_none());

    Ok(())
}
