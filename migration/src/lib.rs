pub use sea_orm_migration::prelude::*;

mod m20260115_000001_create_server_table;
mod m20260115_000002_create_sync_status_table;
mod m20260115_000003_create_favorite_table;
mod m20260115_000004_create_growth_history_table;
mod m20260116_000005_create_admin_user_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260115_000001_create_server_table::Migration),
            Box::new(m20260115_000002_create_sync_status_table::Migration),
            Box::new(m20260115_000003_create_favorite_table::Migration),
            Box::new(m20260115_000004_create_growth_history_table::Migration),
            Box::new(m20260116_000005_create_admin_user_table::Migration),
        ]
    }
}
