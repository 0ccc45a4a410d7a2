use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::error::TestError;

/// Insert a favorite row pointing at the given user and optional targets.
pub async fn insert_favorite(
    db: &DatabaseConnection,
    user_id: i32,
    character_id: Option<i32>,
    planet_id: Option<i32>,
    vehicle_id: Option<i32>,
) -> Result<entity::favorite::Model, TestError> {
    let favorite = entity::favorite::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        character_id: ActiveValue::Set(character_id),
        planet_id: ActiveValue::Set(planet_id),
        vehicle_id: ActiveValue::Set(vehicle_id),
        ..Default::default()
    };

    Ok(favorite.insert(db).await?)
}
