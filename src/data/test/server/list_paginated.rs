use super::*;

/// Tests listing with no filters.
///
/// Verifies that every listing is returned along with the total count when
/// no search, partner, or member-count filter is set.
///
/// Expected: Ok with all listings and matching total
#[tokio::test]
async fn lists_all_without_filters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Server)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..3 {
        factory::server::create_server(db).await?;
    }

    let repo = ServerRepository::new(db);
    let (servers, total) = repo
        .list_paginated(&ListServersParam {
            page: 1,
            per_page: 10,
            ..Default::default()
        })
        .await?;

    assert_eq!(servers.len(), 3);
    assert_eq!(total, 3);

    Ok(())
}

/// Tests pagination across multiple pages.
///
/// Verifies that page 1 is the first page, that pages do not overlap, and
/// that the total reflects all matches regardless of the page requested.
///
/// Expected: Ok with correct page slices
#[tokio::test]
async fn paginates_without_overlap() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Server)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        factory::server::create_server(db).await?;
    }

    let repo = ServerRepository::new(db);
    let param = ListServersParam {
        page: 1,
        per_page: 2,
        sort: ServerSort::NameAsc,
        ..Default::default()
    };

    let (page1, total) = repo.list_paginated(&param).await?;
    assert_eq!(page1.len(), 2);
    assert_eq!(total, 5);

    // Page 0 is clamped to the first page rather than skipping ahead.
    let (clamped, _) = repo
        .list_paginated(&ListServersParam {
            page: 0,
            ..param.clone()
        })
        .await?;
    assert_eq!(clamped[0].id, page1[0].id);

    let (page3, _) = repo
        .list_paginated(&ListServersParam {
            page: 3,
            ..param.clone()
        })
        .await?;
    assert_eq!(page3.len(), 1);
    assert_ne!(page1[0].id, page3[0].id);

    Ok(())
}

/// Tests searching by name substring.
///
/// Verifies that the search term matches listings whose name contains it
/// and excludes the rest.
///
/// Expected: Ok with only matching listings
#[tokio::test]
async fn searches_by_name_substring() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Server)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::server::ServerFactory::new(db)
        .name("Rust Hangout")
        .build()
        .await?;
    factory::server::ServerFactory::new(db)
        .name("Gaming Lounge")
        .build()
        .await?;

    let repo = ServerRepository::new(db);
    let (servers, total) = repo
        .list_paginated(&ListServersParam {
            page: 1,
            per_page: 10,
            search: Some("Rust".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(total, 1);
    assert_eq!(servers[0].name, "Rust Hangout");

    Ok(())
}

/// Tests searching by exact listing id.
///
/// Verifies that a search term that matches no name still finds the listing
/// whose id equals the term exactly.
///
/// Expected: Ok with the id-matched listing
#[tokio::test]
async fn searches_by_exact_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Server)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::server::ServerFactory::new(db)
        .id("111222333")
        .name("Unrelated Name")
        .build()
        .await?;
    factory::server::create_server(db).await?;

    let repo = ServerRepository::new(db);
    let (servers, total) = repo
        .list_paginated(&ListServersParam {
            page: 1,
            per_page: 10,
            search: Some("111222333".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(total, 1);
    assert_eq!(servers[0].id, "111222333");

    Ok(())
}

/// Tests the partner filter.
///
/// Verifies that `Partners` returns only partnered listings and
/// `NonPartners` only the rest.
///
/// Expected: Ok with each filter selecting its subset
#[tokio::test]
async fn filters_by_partner_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Server)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::server::ServerFactory::new(db)
        .is_partner(true)
        .build()
        .await?;
    factory::server::create_server(db).await?;
    factory::server::create_server(db).await?;

    let repo = ServerRepository::new(db);

    let (partners, partners_total) = repo
        .list_paginated(&ListServersParam {
            page: 1,
            per_page: 10,
            partner_filter: PartnerFilter::Partners,
            ..Default::default()
        })
        .await?;
    assert_eq!(partners_total, 1);
    assert!(partners[0].is_partner);

    let (_, non_partners_total) = repo
        .list_paginated(&ListServersParam {
            page: 1,
            per_page: 10,
            partner_filter: PartnerFilter::NonPartners,
            ..Default::default()
        })
        .await?;
    assert_eq!(non_partners_total, 2);

    Ok(())
}

/// Tests the member-count range filter.
///
/// Verifies that bounded buckets apply both ends and the open-ended bucket
/// applies only the lower bound.
///
/// Expected: Ok with listings inside the bucket only
#[tokio::test]
async fn filters_by_member_count_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Server)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::server::ServerFactory::new(db)
        .name("Small")
        .member_counts(Some(50), None)
        .build()
        .await?;
    factory::server::ServerFactory::new(db)
        .name("Medium")
        .member_counts(Some(800), None)
        .build()
        .await?;
    factory::server::ServerFactory::new(db)
        .name("Huge")
        .member_counts(Some(20000), None)
        .build()
        .await?;

    let repo = ServerRepository::new(db);

    let (servers, _) = repo
        .list_paginated(&ListServersParam {
            page: 1,
            per_page: 10,
            member_count_range: Some(MemberCountRange {
                min: 500,
                max: Some(1000),
            }),
            ..Default::default()
        })
        .await?;
    assert_eq!(servers.len(), 1);
    assert_eq!(servers[0].name, "Medium");

    let (servers, _) = repo
        .list_paginated(&ListServersParam {
            page: 1,
            per_page: 10,
            member_count_range: Some(MemberCountRange {
                min: 5000,
                max: None,
            }),
            ..Default::default()
        })
        .await?;
    assert_eq!(servers.len(), 1);
    assert_eq!(servers[0].name, "Huge");

    Ok(())
}

/// Tests sorting by member count and by name.
///
/// Verifies that MembersDesc puts the largest listing first and NameAsc
/// orders alphabetically.
///
/// Expected: Ok with listings in the requested order
#[tokio::test]
async fn sorts_by_members_and_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Server)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::server::ServerFactory::new(db)
        .name("Beta")
        .member_counts(Some(10), None)
        .build()
        .await?;
    factory::server::ServerFactory::new(db)
        .name("Alpha")
        .member_counts(Some(500), None)
        .build()
        .await?;

    let repo = ServerRepository::new(db);

    let (by_members, _) = repo
        .list_paginated(&ListServersParam {
            page: 1,
            per_page: 10,
            sort: ServerSort::MembersDesc,
            ..Default::default()
        })
        .await?;
    assert_eq!(by_members[0].name, "Alpha");

    let (by_name, _) = repo
        .list_paginated(&ListServersParam {
            page: 1,
            per_page: 10,
            sort: ServerSort::NameAsc,
            ..Default::default()
        })
        .await?;
    assert_eq!(by_name[0].name, "Alpha");
    assert_eq!(by_name[1].name, "Beta");

    Ok(())
}
