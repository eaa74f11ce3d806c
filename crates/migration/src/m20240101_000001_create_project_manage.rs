//! Create `project_manage` table.
//!
//! `product` is a bare integer; no foreign key is declared for it.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProjectManage::Table)
                    .if_not_exists()
                    .col(pk_auto(ProjectManage::Id))
                    .col(string(ProjectManage::Name))
                    .col(integer(ProjectManage::Product))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ProjectManage::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ProjectManage { Table, Id, Name, Product }
