use serde::{Deserialize, Serialize};

/// Projection of a favorite entry.
///
/// All four identifier columns are emitted verbatim, nulls included, so a
/// consumer can tell which target the entry points at.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FavoriteDto {
    pub id: i32,
    pub user_id: i32,
    pub character_id: Option<i32>,
    pub planet_id: Option<i32>,
    pub vehicle_id: Option<i32>,
}

impl From<entity::favorite::Model> for FavoriteDto {
    fn from(favorite: entity::favorite::Model) -> Self {
        Self {
            id: favorite.id,
            user_id: favorite.user_id,
            character_id: favorite.character_id,
            planet_id: favorite.planet_id,
            vehicle_id: favorite.vehicle_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::FavoriteDto;

    /// Expect all four identifiers emitted verbatim, nulls included
    #[test]
    fn serializes_unset_targets_as_null() {
        let dto = FavoriteDto::from(entity::favorite::Model {
            id: 9,
            user_id: 3,
            character_id: Some(5),
            planet_id: None,
            vehicle_id: None,
        });

        let value = serde_json::to_value(dto).unwrap();

        assert_eq!(
            value,
            json!({
                "id": 9,
                "user_id": 3,
                "character_id": 5,
                "planet_id": null,
                "vehicle_id": null,
            })
        );
    }
}
