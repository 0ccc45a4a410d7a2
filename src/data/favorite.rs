use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter,
};

pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    /// Creates a new instance of [`FavoriteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Create a new favorite entry for a user
    ///
    /// The three target IDs are stored verbatim: the schema does not require
    /// exactly one of them to be set, so an entry with no target or with
    /// several is accepted. Non-null targets must reference existing rows or
    /// the storage engine rejects the insert.
    ///
    /// # Arguments
    /// - `user_id` (`i32`): ID of the owning user entry in the database
    /// - `character_id`, `planet_id`, `vehicle_id`: optional IDs of the
    ///   favorited rows
    pub async fn create(
        &self,
        user_id: i32,
        character_id: Option<i32>,
        planet_id: Option<i32>,
        vehicle_id: Option<i32>,
    ) -> Result<entity::favorite::Model, DbErr> {
        let favorite = entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            character_id: ActiveValue::Set(character_id),
            planet_id: ActiveValue::Set(planet_id),
            vehicle_id: ActiveValue::Set(vehicle_id),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    pub async fn get(&self, favorite_id: i32) -> Result<Option<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find_by_id(favorite_id)
            .one(self.db)
            .await
    }

    /// Gets all favorite entries owned by the provided user ID
    pub async fn get_many_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .all(self.db)
            .await
    }

    /// Deletes a favorite entry
    ///
    /// Returns OK regardless of the entry existing; to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, favorite_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Favorite::delete_by_id(favorite_id)
            .exec(self.db)
            .await
    }
}
