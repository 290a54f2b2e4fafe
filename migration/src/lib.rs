pub use sea_orm_migration::prelude::*;

mod m20210518_000001_create_users_table;
mod m20210518_000002_create_schools_table;
mod m20210518_000003_create_orders_table;
mod m20210518_000004_create_recipients_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20210518_000001_create_users_table::Migration),
            Box::new(m20210518_000002_create_schools_table::Migration),
            Box::new(m20210518_000003_create_orders_table::Migration),
            Box::new(m20210518_000004_create_recipients_table::Migration),
        ]
    }
}
