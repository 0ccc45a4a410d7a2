use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260115_000001_create_user_table::User, m20260115_000002_create_character_table::Character,
    m20260115_000003_create_planet_table::Planet, m20260115_000004_create_vehicle_table::Vehicle,
};

static IDX_FAVORITE_USER_ID: &str = "idx_favorite_user_id";
static FK_FAVORITE_USER_ID: &str = "fk_favorite_user_id";
static FK_FAVORITE_CHARACTER_ID: &str = "fk_favorite_character_id";
static FK_FAVORITE_PLANET_ID: &str = "fk_favorite_planet_id";
static FK_FAVORITE_VEHICLE_ID: &str = "fk_favorite_vehicle_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Favorite::Table)
                    .if_not_exists()
                    .col(pk_auto(Favorite::Id))
                    .col(integer(Favorite::UserId))
                    .col(integer_null(Favorite::CharacterId))
                    .col(integer_null(Favorite::PlanetId))
                    .col(integer_null(Favorite::VehicleId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITE_USER_ID)
                    .table(Favorite::Table)
                    .col(Favorite::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FAVORITE_USER_ID)
                    .from_tbl(Favorite::Table)
                    .from_col(Favorite::UserId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FAVORITE_CHARACTER_ID)
                    .from_tbl(Favorite::Table)
                    .from_col(Favorite::CharacterId)
                    .to_tbl(Character::Table)
                    .to_col(Character::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FAVORITE_PLANET_ID)
                    .from_tbl(Favorite::Table)
                    .from_col(Favorite::PlanetId)
                    .to_tbl(Planet::Table)
                    .to_col(Planet::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FAVORITE_VEHICLE_ID)
                    .from_tbl(Favorite::Table)
                    .from_col(Favorite::VehicleId)
                    .to_tbl(Vehicle::Table)
                    .to_col(Vehicle::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FAVORITE_VEHICLE_ID)
                    .table(Favorite::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FAVORITE_PLANET_ID)
                    .table(Favorite::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FAVORITE_CHARACTER_ID)
                    .table(Favorite::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FAVORITE_USER_ID)
                    .table(Favorite::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVORITE_USER_ID)
                    .table(Favorite::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Favorite::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Favorite {
    Table,
    Id,
    UserId,
    CharacterId,
    PlanetId,
    VehicleId,
}
