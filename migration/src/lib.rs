pub use sea_orm_migration::prelude::*;

mod m20250712_000001_create_users_table;
mod m20250712_000002_create_vendors_table;
mod m20250712_000003_create_products_table;
mod m20250714_000001_create_chats_table;
mod m20250714_000002_create_chat_messages_table;
mod m20250718_000001_add_chat_list_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250712_000001_create_users_table::Migration),
            Box::new(m20250712_000002_create_vendors_table::Migration),
            Box::new(m20250712_000003_create_products_table::Migration),
            Box::new(m20250714_000001_create_chats_table::Migration),
            Box::new(m20250714_000002_create_chat_messages_table::Migration),
            Box::new(m20250718_000001_add_chat_list_indexes::Migration),
        ]
    }
}
