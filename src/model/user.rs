use serde::{Deserialize, Serialize};

/// Public projection of a user account.
///
/// The password column is deliberately absent: credentials never appear in
/// serialized output.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// RFC 3339 timestamp, or `null` when the row has no subscription date.
    pub subscription_date: Option<String>,
}

impl From<entity::user::Model> for UserDto {
    fn from(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            subscription_date: user.subscription_date.map(|date| date.to_rfc3339()),
        }
    }
}
