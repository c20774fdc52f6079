pub use sea_orm_migration::prelude::*;

mod m20250901_000001_create_users_table;
mod m20250901_000002_create_seasons_table;
mod m20250901_000003_create_stages_table;
mod m20250901_000004_create_applications_table;
mod m20250901_000005_create_performances_table;
mod m20250901_000006_create_champions_table;
mod m20250902_000001_create_messaging_tables;
mod m20250902_000002_create_inquiries_table;
mod m20250902_000003_create_merch_items_table;
mod m20250902_000004_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250901_000001_create_users_table::Migration),
            Box::new(m20250901_000002_create_seasons_table::Migration),
            Box::new(m20250901_000003_create_stages_table::Migration),
            Box::new(m20250901_000004_create_applications_table::Migration),
            Box::new(m20250901_000005_create_performances_table::Migration),
            Box::new(m20250901_000006_create_champions_table::Migration),
            Box::new(m20250902_000001_create_messaging_tables::Migration),
            Box::new(m20250902_000002_create_inquiries_table::Migration),
            Box::new(m20250902_000003_create_merch_items_table::Migration),
            Box::new(m20250902_000004_add_indexes::Migration),
        ]
    }
}
