use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    data::admin_user::AdminUserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
};

pub enum Permission {
    Admin,
}

/// Guard resolving the session user and checking required permissions.
///
/// Every authenticated route constructs one; admin routes additionally pass
/// `Permission::Admin`, which requires a moderator account row for the
/// session user.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the authenticated user id, enforcing the given permissions.
    ///
    /// # Returns
    /// - `Ok(String)` - The authenticated user's Discord ID
    /// - `Err(AuthError::UserNotInSession)` - No login session (401)
    /// - `Err(AuthError::AccessDenied)` - Missing a required permission (403)
    pub async fn require(&self, permissions: &[Permission]) -> Result<String, AppError> {
        let Some(user_id) = AuthSession::new(self.session).user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    let is_admin = AdminUserRepository::new(self.db)
                        .find_by_discord_id(&user_id)
                        .await?
                        .is_some();

                    if !is_admin {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "User attempted an admin operation without a moderator account"
                                .to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user_id)
    }
}
