use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20210518_000001_create_users_table::Users, m20210518_000002_create_schools_table::Schools,
    m20210518_000003_create_orders_table::Orders,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Recipients::Table)
                    .if_not_exists()
                    .col(pk_auto(Recipients::Id))
                    .col(integer(Recipients::UserId))
                    .col(integer_null(Recipients::SchoolId))
                    .col(integer_null(Recipients::OrderId))
                    .col(text(Recipients::Gift).default(""))
                    .col(string(Recipients::Address))
                    .col(
                        timestamp_with_time_zone(Recipients::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Recipients::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_recipients_user_id")
                            .from(Recipients::Table, Recipients::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_recipients_school_id")
                            .from(Recipients::Table, Recipients::SchoolId)
                            .to(Schools::Table, Schools::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_recipients_order_id")
                            .from(Recipients::Table, Recipients::OrderId)
                            .to(Orders::Table, Orders::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_recipients_school_id")
                    .table(Recipients::Table)
                    .col(Recipients::SchoolId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_recipients_order_id")
                    .table(Recipients::Table)
                    .col(Recipients::OrderId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Recipients::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Recipients {
    Table,
    Id,
    UserId,
    SchoolId,
    OrderId,
    Gift,
    Address,
    CreatedAt,
    UpdatedAt,
}
