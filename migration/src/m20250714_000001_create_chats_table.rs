use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `chats` table and its columns.
#[derive(DeriveIden)]
enum Chats {
    Table,
    Id,
    UserId,
    VendorId,
    ProductId,
    LastMessage,
    LastMessageAt,
    IsBlocked,
    BlockedBy,
    CreatedAt,
}

/// Re-declare parent table identifiers for foreign-key references.
#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Vendors {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Products {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create the chats table.
        manager
            .create_table(
                Table::create()
                    .table(Chats::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Chats::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Chats::UserId).uuid().not_null())
                    .col(ColumnDef::new(Chats::VendorId).uuid().not_null())
                    .col(ColumnDef::new(Chats::ProductId).uuid().not_null())
                    .col(
                        ColumnDef::new(Chats::LastMessage)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Chats::LastMessageAt).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(Chats::IsBlocked)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Chats::BlockedBy).string())
                    .col(
                        ColumnDef::new(Chats::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_chats_user_id")
                            .from(Chats::Table, Chats::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_chats_vendor_id")
                            .from(Chats::Table, Chats::VendorId)
                            .to(Vendors::Table, Vendors::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_chats_product_id")
                            .from(Chats::Table, Chats::ProductId)
                            .to(Products::Table, Products::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Exactly one chat per (user, vendor, product). Concurrent creates for
        // the same triple race on this index; the loser re-reads the winner.
        manager
            .create_index(
                Index::create()
                    .name("idx_chats_user_vendor_product_unique")
                    .table(Chats::Table)
                    .col(Chats::UserId)
                    .col(Chats::VendorId)
                    .col(Chats::ProductId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Chats::Table).to_owned())
            .await
    }
}
