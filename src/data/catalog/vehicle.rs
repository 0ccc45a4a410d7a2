use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter,
};

pub struct VehicleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VehicleRepository<'a, C> {
    /// Creates a new instance of [`VehicleRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new vehicle
    ///
    /// A duplicate name is rejected by the storage engine's unique
    /// constraint.
    pub async fn create(
        &self,
        name: String,
        model: Option<String>,
        manufacturer: Option<String>,
        vehicle_class: Option<String>,
    ) -> Result<entity::vehicle::Model, DbErr> {
        let vehicle = entity::vehicle::ActiveModel {
            name: ActiveValue::Set(name),
            model: ActiveValue::Set(model),
            manufacturer: ActiveValue::Set(manufacturer),
            vehicle_class: ActiveValue::Set(vehicle_class),
            ..Default::default()
        };

        vehicle.insert(self.db).await
    }

    pub async fn get(&self, vehicle_id: i32) -> Result<Option<entity::vehicle::Model>, DbErr> {
        entity::prelude::Vehicle::find_by_id(vehicle_id).one(self.db).await
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Option<entity::vehicle::Model>, DbErr> {
        entity::prelude::Vehicle::find()
            .filter(entity::vehicle::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::vehicle::Model>, DbErr> {
        entity::prelude::Vehicle::find().all(self.db).await
    }

    /// Replace every non-key column of a vehicle
    pub async fn update(
        &self,
        vehicle_id: i32,
        name: String,
        model: Option<String>,
        manufacturer: Option<String>,
        vehicle_class: Option<String>,
    ) -> Result<Option<entity::vehicle::Model>, DbErr> {
        let vehicle = match entity::prelude::Vehicle::find_by_id(vehicle_id)
            .one(self.db)
            .await?
        {
            Some(vehicle) => vehicle,
            None => return Ok(None),
        };

        let mut vehicle_am = vehicle.into_active_model();
        vehicle_am.name = ActiveValue::Set(name);
        vehicle_am.model = ActiveValue::Set(model);
        vehicle_am.manufacturer = ActiveValue::Set(manufacturer);
        vehicle_am.vehicle_class = ActiveValue::Set(vehicle_class);

        let vehicle = vehicle_am.update(self.db).await?;

        Ok(Some(vehicle))
    }

    /// Deletes a vehicle
    ///
    /// Returns OK regardless of the vehicle existing; to confirm the
    /// deletion result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, vehicle_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Vehicle::delete_by_id(vehicle_id).exec(self.db).await
    }
}
