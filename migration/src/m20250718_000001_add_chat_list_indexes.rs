use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Chats {
    Table,
    UserId,
    VendorId,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Index on chats.user_id for the user's chat list
        manager
            .create_index(
                Index::create()
                    .name("idx_chats_user_id")
                    .table(Chats::Table)
                    .col(Chats::UserId)
                    .to_owned(),
            )
            .await?;

        // Index on chats.vendor_id for the vendor's chat list
        manager
            .create_index(
                Index::create()
                    .name("idx_chats_vendor_id")
                    .table(Chats::Table)
                    .col(Chats::VendorId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_chats_user_id").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_chats_vendor_id").to_owned())
            .await?;

        Ok(())
    }
}
