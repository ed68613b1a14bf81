use super::*;

/// Tests the guard with no login session.
///
/// Verifies that an anonymous request is rejected before any permission is
/// even considered.
///
/// Expected: Err(UserNotInSession)
#[tokio::test]
async fn rejects_anonymous_request() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let guard = AuthGuard::new(db, session);
    let result = guard.require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests the guard with a logged-in user and no required permissions.
///
/// Expected: Ok with the session user's id
#[tokio::test]
async fn resolves_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id("123456789").await?;

    let guard = AuthGuard::new(db, session);
    let user_id = guard.require(&[]).await?;

    assert_eq!(user_id, "123456789");

    Ok(())
}

/// Tests the admin permission for a user without a moderator account.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn denies_admin_without_account() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id("123456789").await?;

    let guard = AuthGuard::new(db, session);
    let result = guard.require(&[Permission::Admin]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests the admin permission for a user with a moderator account.
///
/// Expected: Ok with the user's id
#[tokio::test]
async fn grants_admin_with_account() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::admin_user::AdminUserFactory::new(db)
        .discord_id("123456789")
        .build()
        .await?;

    AuthSession::new(session).set_user_id(&admin.discord_id).await?;

    let guard = AuthGuard::new(db, session);
    let user_id = guard.require(&[Permission::Admin]).await?;

    assert_eq!(user_id, admin.discord_id);

    Ok(())
}
