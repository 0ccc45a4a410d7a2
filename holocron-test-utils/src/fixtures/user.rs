use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::error::TestError;

/// Insert a user row with standard test values and the given email.
pub async fn insert_user(
    db: &DatabaseConnection,
    email: &str,
) -> Result<entity::user::Model, TestError> {
    let user = entity::user::ActiveModel {
        email: ActiveValue::Set(email.to_string()),
        password: ActiveValue::Set("test-password".to_string()),
        is_active: ActiveValue::Set(true),
        subscription_date: ActiveValue::Set(Some(Utc::now().into())),
        ..Default::default()
    };

    Ok(user.insert(db).await?)
}
