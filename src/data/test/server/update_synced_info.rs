use super::*;

/// Tests persisting a fully resolved sync result.
///
/// Verifies that name, member counts, icon, banner, and the last-synced
/// timestamp are all written when the fetch resolved every field.
///
/// Expected: Ok with all fields updated
#[tokio::test]
async fn writes_all_resolved_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Server)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::server::ServerFactory::new(db)
        .name("Stale Name")
        .build()
        .await?;

    let synced_at = Utc::now();
    let repo = ServerRepository::new(db);
    repo.update_synced_info(
        &server.id,
        &SyncedServerInfo {
            name: "Fresh Name".to_string(),
            icon_url: Some("https://cdn.example/icon.png".to_string()),
            banner_url: Some("https://cdn.example/banner.png".to_string()),
            member_count: Some(1200),
            online_count: Some(340),
            synced_at,
        },
    )
    .await?;

    let updated = entity::prelude::Server::find_by_id(&server.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(updated.name, "Fresh Name");
    assert_eq!(
        updated.icon_url.as_deref(),
        Some("https://cdn.example/icon.png")
    );
    assert_eq!(
        updated.banner_url.as_deref(),
        Some("https://cdn.example/banner.png")
    );
    assert_eq!(updated.current_member_count, Some(1200));
    assert_eq!(updated.online_member_count, Some(340));
    assert_eq!(updated.last_synced, Some(synced_at));

    Ok(())
}

/// Tests that unresolved icon and banner do not clear stored URLs.
///
/// Verifies that a sync result with no icon or banner leaves the previously
/// stored URLs intact while still updating the rest of the record.
///
/// Expected: Ok with old icon/banner preserved
#[tokio::test]
async fn preserves_stored_assets_when_unresolved() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Server)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::server::ServerFactory::new(db)
        .icon_url(Some("https://cdn.example/old-icon.png".to_string()))
        .banner_url(Some("https://cdn.example/old-banner.png".to_string()))
        .build()
        .await?;

    let repo = ServerRepository::new(db);
    repo.update_synced_info(
        &server.id,
        &SyncedServerInfo {
            name: "Renamed".to_string(),
            icon_url: None,
            banner_url: None,
            member_count: Some(50),
            online_count: None,
            synced_at: Utc::now(),
        },
    )
    .await?;

    let updated = entity::prelude::Server::find_by_id(&server.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(updated.name, "Renamed");
    assert_eq!(
        updated.icon_url.as_deref(),
        Some("https://cdn.example/old-icon.png")
    );
    assert_eq!(
        updated.banner_url.as_deref(),
        Some("https://cdn.example/old-banner.png")
    );
    assert_eq!(updated.current_member_count, Some(50));

    Ok(())
}

/// Tests that only the targeted listing is touched.
///
/// Verifies that updating one listing leaves a sibling listing unchanged.
///
/// Expected: Ok with sibling untouched
#[tokio::test]
async fn leaves_other_listings_unchanged() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Server)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let target = factory::server::create_server(db).await?;
    let sibling = factory::server::create_server(db).await?;

    let repo = ServerRepository::new(db);
    repo.update_synced_info(
        &target.id,
        &SyncedServerInfo {
            name: "Touched".to_string(),
            icon_url: None,
            banner_url: None,
            member_count: Some(9),
            online_count: Some(3),
            synced_at: Utc::now(),
        },
    )
    .await?;

    let untouched = entity::prelude::Server::find_by_id(&sibling.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(untouched.name, sibling.name);
    assert!(untouched.last_synced.is_none());

    Ok(())
}
