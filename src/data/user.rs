use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter,
};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user
    ///
    /// The subscription date is stamped with the current UTC time. A
    /// duplicate email is rejected by the storage engine's unique
    /// constraint.
    pub async fn create(
        &self,
        email: String,
        password: String,
        is_active: bool,
        first_name: Option<String>,
        last_name: Option<String>,
    ) -> Result<entity::user::Model, DbErr> {
        let user = entity::user::ActiveModel {
            email: ActiveValue::Set(email),
            password: ActiveValue::Set(password),
            is_active: ActiveValue::Set(is_active),
            first_name: ActiveValue::Set(first_name),
            last_name: ActiveValue::Set(last_name),
            subscription_date: ActiveValue::Set(Some(Utc::now().into())),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get(&self, user_id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Replace the user's first and last name
    ///
    /// Passing `None` clears the corresponding column.
    ///
    /// # Returns
    /// Returns a result containing:
    /// - `Option<`[`entity::user::Model`]`>`: Some if the update is
    ///   successful or None if the user is not found
    /// - [`DbErr`]: If a database-related error occurs
    pub async fn update_profile(
        &self,
        user_id: i32,
        first_name: Option<String>,
        last_name: Option<String>,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let user = match entity::prelude::User::find_by_id(user_id).one(self.db).await? {
            Some(user) => user,
            None => return Ok(None),
        };

        let mut user_am = user.into_active_model();
        user_am.first_name = ActiveValue::Set(first_name);
        user_am.last_name = ActiveValue::Set(last_name);

        let user = user_am.update(self.db).await?;

        Ok(Some(user))
    }

    /// Set whether the account is active
    pub async fn set_active(
        &self,
        user_id: i32,
        is_active: bool,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let user = match entity::prelude::User::find_by_id(user_id).one(self.db).await? {
            Some(user) => user,
            None => return Ok(None),
        };

        let mut user_am = user.into_active_model();
        user_am.is_active = ActiveValue::Set(is_active);

        let user = user_am.update(self.db).await?;

        Ok(Some(user))
    }

    /// Deletes a user
    ///
    /// Returns OK regardless of the user existing; to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::User::delete_by_id(user_id).exec(self.db).await
    }
}
