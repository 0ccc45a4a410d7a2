use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter,
};

pub struct CharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterRepository<'a, C> {
    /// Creates a new instance of [`CharacterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new character
    ///
    /// A duplicate name is rejected by the storage engine's unique
    /// constraint.
    pub async fn create(
        &self,
        name: String,
        description: Option<String>,
        gender: Option<String>,
        birth_year: Option<String>,
    ) -> Result<entity::character::Model, DbErr> {
        let character = entity::character::ActiveModel {
            name: ActiveValue::Set(name),
            description: ActiveValue::Set(description),
            gender: ActiveValue::Set(gender),
            birth_year: ActiveValue::Set(birth_year),
            ..Default::default()
        };

        character.insert(self.db).await
    }

    pub async fn get(&self, character_id: i32) -> Result<Option<entity::character::Model>, DbErr> {
        entity::prelude::Character::find_by_id(character_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Option<entity::character::Model>, DbErr> {
        entity::prelude::Character::find()
            .filter(entity::character::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::character::Model>, DbErr> {
        entity::prelude::Character::find().all(self.db).await
    }

    /// Replace every non-key column of a character
    ///
    /// # Returns
    /// Returns a result containing:
    /// - `Option<`[`entity::character::Model`]`>`: Some if the update is
    ///   successful or None if the character is not found
    /// - [`DbErr`]: If a database-related error occurs
    pub async fn update(
        &self,
        character_id: i32,
        name: String,
        description: Option<String>,
        gender: Option<String>,
        birth_year: Option<String>,
    ) -> Result<Option<entity::character::Model>, DbErr> {
        let character = match entity::prelude::Character::find_by_id(character_id)
            .one(self.db)
            .await?
        {
            Some(character) => character,
            None => return Ok(None),
        };

        let mut character_am = character.into_active_model();
        character_am.name = ActiveValue::Set(name);
        character_am.description = ActiveValue::Set(description);
        character_am.gender = ActiveValue::Set(gender);
        character_am.birth_year = ActiveValue::Set(birth_year);

        let character = character_am.update(self.db).await?;

        Ok(Some(character))
    }

    /// Deletes a character
    ///
    /// Returns OK regardless of the character existing; to confirm the
    /// deletion result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, character_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Character::delete_by_id(character_id)
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {

    mod create {
        use holocron_test_utils::prelude::*;
        use sea_orm::{DbErr, RuntimeErr};

        use crate::data::catalog::character::CharacterRepository;

        /// Expect success when creating a new character
        #[tokio::test]
        async fn creates_character() -> Result<(), TestError> {
            let test = test_setup_with_catalog_tables!()?;

            let character_repository = CharacterRepository::new(&test.state.db);
            let result = character_repository
                .create(
                    "Luke Skywalker".to_string(),
                    None,
                    Some("male".to_string()),
                    Some("19BBY".to_string()),
                )
                .await;

            assert!(result.is_ok());
            assert_eq!(result.unwrap().name, "Luke Skywalker");

            Ok(())
        }

        /// Expect Error when creating a second character with the same name
        #[tokio::test]
        async fn fails_for_duplicate_name() -> Result<(), TestError> {
            let test = test_setup_with_catalog_tables!()?;
            let _ = catalog::insert_character(&test.state.db, "Luke").await?;

            let character_repository = CharacterRepository::new(&test.state.db);
            let result = character_repository
                .create("Luke".to_string(), None, None, None)
                .await;

            assert!(result.is_err());

            // Assert error code is 2067 indicating a unique constraint error
            assert!(matches!(
                result,
                Err(DbErr::Query(RuntimeErr::SqlxError(err))) if err
                    .as_database_error()
                    .and_then(|d| d.code().map(|c| c == "2067"))
                    .unwrap_or(false)
            ));

            Ok(())
        }

        /// Expect Error when required database tables are not present
        #[tokio::test]
        async fn fails_when_tables_missing() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;

            let character_repository = CharacterRepository::new(&test.state.db);
            let result = character_repository
                .create("Luke".to_string(), None, None, None)
                .await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod get {
        use holocron_test_utils::prelude::*;

        use crate::data::catalog::character::CharacterRepository;

        /// Expect Ok(Some(_)) when an existing character is found
        #[tokio::test]
        async fn finds_existing_character() -> Result<(), TestError> {
            let test = test_setup_with_catalog_tables!()?;
            let character_model = catalog::insert_character(&test.state.db, "Luke").await?;

            let character_repository = CharacterRepository::new(&test.state.db);
            let result = character_repository.get(character_model.id).await;

            assert!(matches!(result, Ok(Some(_))));

            Ok(())
        }

        /// Expect Ok(None) when the character is not found
        #[tokio::test]
        async fn returns_none_for_nonexistent_character() -> Result<(), TestError> {
            let test = test_setup_with_catalog_tables!()?;

            let nonexistent_character_id = 1;
            let character_repository = CharacterRepository::new(&test.state.db);
            let result = character_repository.get(nonexistent_character_id).await;

            assert!(matches!(result, Ok(None)));

            Ok(())
        }
    }

    mod get_by_name {
        use holocron_test_utils::prelude::*;

        use crate::data::catalog::character::CharacterRepository;

        /// Expect Ok(Some(_)) when a character with the name exists
        #[tokio::test]
        async fn finds_character_by_name() -> Result<(), TestError> {
            let test = test_setup_with_catalog_tables!()?;
            let character_model = catalog::insert_character(&test.state.db, "Luke").await?;

            let character_repository = CharacterRepository::new(&test.state.db);
            let result = character_repository.get_by_name("Luke").await;

            assert!(matches!(result, Ok(Some(_))));
            assert_eq!(result.unwrap().unwrap().id, character_model.id);

            Ok(())
        }

        /// Expect Ok(None) for a name no character has
        #[tokio::test]
        async fn returns_none_for_unknown_name() -> Result<(), TestError> {
            let test = test_setup_with_catalog_tables!()?;
            let _ = catalog::insert_character(&test.state.db, "Luke").await?;

            let character_repository = CharacterRepository::new(&test.state.db);
            let result = character_repository.get_by_name("Leia").await;

            assert!(matches!(result, Ok(None)));

            Ok(())
        }
    }

    mod get_all {
        use holocron_test_utils::prelude::*;

        use crate::data::catalog::character::CharacterRepository;

        /// Expect every inserted character to be returned
        #[tokio::test]
        async fn returns_all_characters() -> Result<(), TestError> {
            let test = test_setup_with_catalog_tables!()?;
            let _ = catalog::insert_character(&test.state.db, "Luke").await?;
            let _ = catalog::insert_character(&test.state.db, "Leia").await?;

            let character_repository = CharacterRepository::new(&test.state.db);
            let result = character_repository.get_all().await;

            assert!(result.is_ok());
            assert_eq!(result.unwrap().len(), 2);

            Ok(())
        }

        /// Expect an empty Vec when no characters exist
        #[tokio::test]
        async fn returns_empty_vec_without_characters() -> Result<(), TestError> {
            let test = test_setup_with_catalog_tables!()?;

            let character_repository = CharacterRepository::new(&test.state.db);
            let result = character_repository.get_all().await;

            assert!(result.is_ok());
            assert!(result.unwrap().is_empty());

            Ok(())
        }
    }

    mod update {
        use holocron_test_utils::prelude::*;

        use crate::data::catalog::character::CharacterRepository;

        /// Expect Ok(Some(_)) with the new column values applied
        #[tokio::test]
        async fn updates_existing_character() -> Result<(), TestError> {
            let test = test_setup_with_catalog_tables!()?;
            let character_model = catalog::insert_character(&test.state.db, "Luke").await?;

            let character_repository = CharacterRepository::new(&test.state.db);
            let result = character_repository
                .update(
                    character_model.id,
                    "Luke Skywalker".to_string(),
                    Some("Jedi Knight".to_string()),
                    Some("male".to_string()),
                    None,
                )
                .await;

            assert!(matches!(result, Ok(Some(_))));
            let updated_character = result.unwrap().unwrap();

            assert_eq!(updated_character.name, "Luke Skywalker");
            assert_eq!(updated_character.description.as_deref(), Some("Jedi Knight"));
            assert!(updated_character.birth_year.is_none());

            Ok(())
        }

        /// Expect Ok(None) when the character does not exist
        #[tokio::test]
        async fn returns_none_for_nonexistent_character() -> Result<(), TestError> {
            let test = test_setup_with_catalog_tables!()?;

            let nonexistent_character_id = 1;
            let character_repository = CharacterRepository::new(&test.state.db);
            let result = character_repository
                .update(
                    nonexistent_character_id,
                    "Luke".to_string(),
                    None,
                    None,
                    None,
                )
                .await;

            assert!(matches!(result, Ok(None)));

            Ok(())
        }
    }

    mod delete {
        use holocron_test_utils::prelude::*;
        use sea_orm::EntityTrait;

        use crate::data::catalog::character::CharacterRepository;

        /// Expect success when deleting a character
        #[tokio::test]
        async fn deletes_existing_character() -> Result<(), TestError> {
            let test = test_setup_with_catalog_tables!()?;
            let character_model = catalog::insert_character(&test.state.db, "Luke").await?;

            let character_repository = CharacterRepository::new(&test.state.db);
            let result = character_repository.delete(character_model.id).await;

            assert!(result.is_ok());
            assert_eq!(result.unwrap().rows_affected, 1);

            let character_exists = entity::prelude::Character::find_by_id(character_model.id)
                .one(&test.state.db)
                .await?;
            assert!(character_exists.is_none());

            Ok(())
        }

        /// Expect no rows to be affected when deleting a character that does not exist
        #[tokio::test]
        async fn returns_no_rows_for_nonexistent_character() -> Result<(), TestError> {
            let test = test_setup_with_catalog_tables!()?;
            let character_model = catalog::insert_character(&test.state.db, "Luke").await?;

            let character_repository = CharacterRepository::new(&test.state.db);
            let result = character_repository.delete(character_model.id + 1).await;

            assert!(result.is_ok());
            assert_eq!(result.unwrap().rows_affected, 0);

            Ok(())
        }
    }
}
