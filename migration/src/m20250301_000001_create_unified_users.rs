use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UnifiedUsers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UnifiedUsers::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(UnifiedUsers::Name)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UnifiedUsers::Email)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(UnifiedUsers::Phone)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(UnifiedUsers::Role)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UnifiedUsers::Department)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(UnifiedUsers::Status)
                            .string()
                            .not_null()
                            .default("active"),
                    )
                    // JSON array of dashboard tags
                    .col(
                        ColumnDef::new(UnifiedUsers::DashboardAccess)
                            .text()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(UnifiedUsers::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UnifiedUsers::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_unified_users_name")
                    .table(UnifiedUsers::Table)
                    .col(UnifiedUsers::Name)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_unified_users_status")
                    .table(UnifiedUsers::Table)
                    .col(UnifiedUsers::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UnifiedUsers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum UnifiedUsers {
    Table,
    Id,
    Name,
    Email,
    Phone,
    Role,
    Department,
    Status,
    DashboardAccess,
    CreatedAt,
    UpdatedAt,
}
