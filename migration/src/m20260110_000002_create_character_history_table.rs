use sea_orm_migration::{prelude::*, schema::*};

use super::m20260110_000001_create_character_table::Character;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CharacterHistory::Table)
                    .if_not_exists()
                    .col(pk_auto(CharacterHistory::Id))
                    .col(integer(CharacterHistory::CharacterId))
                    .col(integer(CharacterHistory::Level))
                    .col(integer(CharacterHistory::Resets))
                    .col(
                        timestamp(CharacterHistory::RecordedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_character_history_character_id")
                            .from(CharacterHistory::Table, CharacterHistory::CharacterId)
                            .to(Character::Table, Character::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Trend queries filter by character and scan a time window
        manager
            .create_index(
                Index::create()
                    .name("idx_character_history_character_recorded")
                    .table(CharacterHistory::Table)
                    .col(CharacterHistory::CharacterId)
                    .col(CharacterHistory::RecordedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_character_history_character_recorded")
                    .table(CharacterHistory::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CharacterHistory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CharacterHistory {
    Table,
    Id,
    CharacterId,
    Level,
    Resets,
    RecordedAt,
}
