use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Size::Table)
                    .if_not_exists()
                    .col(pk_auto(Size::Id))
                    .col(string(Size::Value))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Item::Table)
                    .if_not_exists()
                    .col(pk_auto(Item::Id))
                    .col(string(Item::Image))
                    .col(string_len(Item::Title, 100))
                    .col(integer(Item::Price))
                    .col(text(Item::Text))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ItemSize::Table)
                    .if_not_exists()
                    .col(integer(ItemSize::ItemId))
                    .col(integer(ItemSize::SizeId))
                    .primary_key(
                        Index::create()
                            .col(ItemSize::ItemId)
                            .col(ItemSize::SizeId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ItemSize::Table, ItemSize::ItemId)
                            .to(Item::Table, Item::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ItemSize::Table, ItemSize::SizeId)
                            .to(Size::Table, Size::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ItemSize::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Item::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Size::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Size {
    Table,
    Id,
    Value,
}

#[derive(DeriveIden)]
enum Item {
    Table,
    Id,
    Image,
    Title,
    Price,
    Text,
}

#[derive(DeriveIden)]
enum ItemSize {
    Table,
    ItemId,
    SizeId,
}
