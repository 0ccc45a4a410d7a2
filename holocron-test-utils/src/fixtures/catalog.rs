use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::error::TestError;

/// Insert a character row with standard test values and the given name.
pub async fn insert_character(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entity::character::Model, TestError> {
    let character = entity::character::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        description: ActiveValue::Set(Some("A test character".to_string())),
        gender: ActiveValue::Set(Some("male".to_string())),
        birth_year: ActiveValue::Set(Some("19BBY".to_string())),
        ..Default::default()
    };

    Ok(character.insert(db).await?)
}

/// Insert a planet row with standard test values and the given name.
pub async fn insert_planet(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entity::planet::Model, TestError> {
    let planet = entity::planet::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        climate: ActiveValue::Set(Some("arid".to_string())),
        population: ActiveValue::Set(Some(200_000)),
        terrain: ActiveValue::Set(Some("desert".to_string())),
        ..Default::default()
    };

    Ok(planet.insert(db).await?)
}

/// Insert a vehicle row with standard test values and the given name.
pub async fn insert_vehicle(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entity::vehicle::Model, TestError> {
    let vehicle = entity::vehicle::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        model: ActiveValue::Set(Some("T-16 skyhopper".to_string())),
        manufacturer: ActiveValue::Set(Some("Incom Corporation".to_string())),
        vehicle_class: ActiveValue::Set(Some("repulsorcraft".to_string())),
        ..Default::default()
    };

    Ok(vehicle.insert(db).await?)
}
