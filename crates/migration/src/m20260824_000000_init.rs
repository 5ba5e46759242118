//! Initial schema migration - creates all tables from scratch.
//!
//! - `members`: people known to the system, names unique case-insensitively
//! - `wallets`: one balance per (member, group) pair
//! - `transactions`: immutable split records with a JSON deduction map

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum Members {
    Table,
    Id,
    Name,
}

#[derive(Iden)]
enum Wallets {
    Table,
    Id,
    MemberId,
    GroupId,
    Balance,
    HeadCount,
}

#[derive(Iden)]
enum Transactions {
    Table,
    Id,
    GroupId,
    Payer,
    Participants,
    TotalAmount,
    SplitType,
    Details,
    Category,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Members::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Members::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Members::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        // The engine enforces case-insensitive uniqueness via LOWER() lookups;
        // the index guards the exact-name duplicate case.
        manager
            .create_index(
                Index::create()
                    .name("idx_members_name")
                    .table(Members::Table)
                    .col(Members::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Wallets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Wallets::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Wallets::MemberId).integer().not_null())
                    .col(ColumnDef::new(Wallets::GroupId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Wallets::Balance)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(Wallets::HeadCount)
                            .big_integer()
                            .not_null()
                            .default(1),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_wallets_member")
                            .from(Wallets::Table, Wallets::MemberId)
                            .to(Members::Table, Members::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // At most one wallet per (member, group).
        manager
            .create_index(
                Index::create()
                    .name("idx_wallets_member_group")
                    .table(Wallets::Table)
                    .col(Wallets::MemberId)
                    .col(Wallets::GroupId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Transactions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Transactions::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Transactions::GroupId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Transactions::Payer).string().not_null())
                    .col(
                        ColumnDef::new(Transactions::Participants)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Transactions::TotalAmount)
                            .double()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Transactions::SplitType).string().not_null())
                    .col(ColumnDef::new(Transactions::Details).text().not_null())
                    .col(ColumnDef::new(Transactions::Category).string())
                    .col(
                        ColumnDef::new(Transactions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_transactions_group")
                    .table(Transactions::Table)
                    .col(Transactions::GroupId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Transactions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Wallets::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Members::Table).to_owned())
            .await?;
        Ok(())
    }
}
