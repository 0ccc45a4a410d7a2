//! Projections of the three catalog entities users can favorite.
//!
//! Each conversion is a pure field-by-field copy; integers and strings pass
//! through unchanged and unset columns serialize as `null`.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CharacterDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<String>,
}

impl From<entity::character::Model> for CharacterDto {
    fn from(character: entity::character::Model) -> Self {
        Self {
            id: character.id,
            name: character.name,
            description: character.description,
            gender: character.gender,
            birth_year: character.birth_year,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlanetDto {
    pub id: i32,
    pub name: String,
    pub climate: Option<String>,
    pub population: Option<i64>,
    pub terrain: Option<String>,
}

impl From<entity::planet::Model> for PlanetDto {
    fn from(planet: entity::planet::Model) -> Self {
        Self {
            id: planet.id,
            name: planet.name,
            climate: planet.climate,
            population: planet.population,
            terrain: planet.terrain,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VehicleDto {
    pub id: i32,
    pub name: String,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
    pub vehicle_class: Option<String>,
}

impl From<entity::vehicle::Model> for VehicleDto {
    fn from(vehicle: entity::vehicle::Model) -> Self {
        Self {
            id: vehicle.id,
            name: vehicle.name,
            model: vehicle.model,
            manufacturer: vehicle.manufacturer,
            vehicle_class: vehicle.vehicle_class,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{CharacterDto, PlanetDto, VehicleDto};

    /// Expect exactly the documented character keys
    #[test]
    fn character_serializes_documented_keys_only() {
        let dto = CharacterDto::from(entity::character::Model {
            id: 1,
            name: "Luke".to_string(),
            description: None,
            gender: Some("male".to_string()),
            birth_year: Some("19BBY".to_string()),
        });

        let value = serde_json::to_value(dto).unwrap();
        let object = value.as_object().unwrap();
        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();

        assert_eq!(
            keys,
            vec!["birth_year", "description", "gender", "id", "name"]
        );
        assert_eq!(value["description"], serde_json::Value::Null);
    }

    /// Expect planet fields to pass through unchanged, including the population integer
    #[test]
    fn planet_serializes_field_values_verbatim() {
        let dto = PlanetDto::from(entity::planet::Model {
            id: 2,
            name: "Tatooine".to_string(),
            climate: Some("arid".to_string()),
            population: Some(200_000),
            terrain: None,
        });

        let value = serde_json::to_value(dto).unwrap();

        assert_eq!(
            value,
            json!({
                "id": 2,
                "name": "Tatooine",
                "climate": "arid",
                "population": 200_000,
                "terrain": null,
            })
        );
    }

    /// Expect exactly the documented vehicle keys
    #[test]
    fn vehicle_serializes_documented_keys_only() {
        let dto = VehicleDto::from(entity::vehicle::Model {
            id: 3,
            name: "X-34 landspeeder".to_string(),
            model: Some("X-34".to_string()),
            manufacturer: None,
            vehicle_class: Some("repulsorcraft".to_string()),
        });

        let value = serde_json::to_value(dto).unwrap();
        let object = value.as_object().unwrap();
        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();

        assert_eq!(
            keys,
            vec!["id", "manufacturer", "model", "name", "vehicle_class"]
        );
    }
}
