use sea_orm::DatabaseConnection;

use crate::{
    data::admin_user::AdminUserRepository,
    error::AppError,
    model::admin::{AddAdminParam, AdminUser},
};

pub struct AdminService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<AdminUser>, AppError> {
        let admins = AdminUserRepository::new(self.db).list().await?;

        Ok(admins.into_iter().map(AdminUser::from_entity).collect())
    }

    /// Grants moderator access to a Discord user.
    pub async fn add(&self, param: AddAdminParam) -> Result<AdminUser, AppError> {
        let repo = AdminUserRepository::new(self.db);

        if repo.find_by_discord_id(&param.discord_id).await?.is_some() {
            return Err(AppError::Conflict(
                "User is already an admin".to_string(),
            ));
        }

        let added_by = param.added_by.clone();
        let admin = repo.create(param).await?;

        tracing::info!("Admin {} added by {}", admin.discord_id, added_by);
        Ok(AdminUser::from_entity(admin))
    }

    /// Revokes moderator access. Admins cannot revoke their own access so
    /// the directory is never left without one.
    pub async fn remove(&self, discord_id: &str, acting_user_id: &str) -> Result<(), AppError> {
        if discord_id == acting_user_id {
            return Err(AppError::BadRequest(
                "You cannot remove your own admin access".to_string(),
            ));
        }

        let removed = AdminUserRepository::new(self.db).delete(discord_id).await?;

        if !removed {
            return Err(AppError::NotFound("Admin not found".to_string()));
        }

        tracing::info!("Admin {} removed by {}", discord_id, acting_user_id);
        Ok(())
    }
}
