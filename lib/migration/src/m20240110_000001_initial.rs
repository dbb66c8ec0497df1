use sea_orm_migration::prelude::*;

const EMPLOYEE_ORGANISATION_ID_INDEX: &str = "index-Employee-OrganisationId";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Organisation::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Organisation::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Organisation::Name).string_len(100).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Employee::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Employee::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Employee::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Employee::OrganisationId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-Employee-OrganisationId")
                            .from_tbl(Employee::Table)
                            .from_col(Employee::OrganisationId)
                            .to_tbl(Organisation::Table)
                            .to_col(Organisation::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name(EMPLOYEE_ORGANISATION_ID_INDEX)
                    .table(Employee::Table)
                    .col(Employee::OrganisationId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Employee::Table).if_exists().to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Organisation::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Organisation {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
pub(crate) enum Employee {
    Table,
    Id,
    Name,
    #[sea_orm(iden = "organization_id")]
    OrganisationId,
}
