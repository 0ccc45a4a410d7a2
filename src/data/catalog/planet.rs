use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter,
};

pub struct PlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanetRepository<'a, C> {
    /// Creates a new instance of [`PlanetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new planet
    ///
    /// A duplicate name is rejected by the storage engine's unique
    /// constraint.
    pub async fn create(
        &self,
        name: String,
        climate: Option<String>,
        population: Option<i64>,
        terrain: Option<String>,
    ) -> Result<entity::planet::Model, DbErr> {
        let planet = entity::planet::ActiveModel {
            name: ActiveValue::Set(name),
            climate: ActiveValue::Set(climate),
            population: ActiveValue::Set(population),
            terrain: ActiveValue::Set(terrain),
            ..Default::default()
        };

        planet.insert(self.db).await
    }

    pub async fn get(&self, planet_id: i32) -> Result<Option<entity::planet::Model>, DbErr> {
        entity::prelude::Planet::find_by_id(planet_id).one(self.db).await
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Option<entity::planet::Model>, DbErr> {
        entity::prelude::Planet::find()
            .filter(entity::planet::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::planet::Model>, DbErr> {
        entity::prelude::Planet::find().all(self.db).await
    }

    /// Replace every non-key column of a planet
    pub async fn update(
        &self,
        planet_id: i32,
        name: String,
        climate: Option<String>,
        population: Option<i64>,
        terrain: Option<String>,
    ) -> Result<Option<entity::planet::Model>, DbErr> {
        let planet = match entity::prelude::Planet::find_by_id(planet_id)
            .one(self.db)
            .await?
        {
            Some(planet) => planet,
            None => return Ok(None),
        };

        let mut planet_am = planet.into_active_model();
        planet_am.name = ActiveValue::Set(name);
        planet_am.climate = ActiveValue::Set(climate);
        planet_am.population = ActiveValue::Set(population);
        planet_am.terrain = ActiveValue::Set(terrain);

        let planet = planet_am.update(self.db).await?;

        Ok(Some(planet))
    }

    /// Deletes a planet
    ///
    /// Returns OK regardless of the planet existing; to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, planet_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Planet::delete_by_id(planet_id).exec(self.db).await
    }
}
