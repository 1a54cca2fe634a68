use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::users::domain::model::UserEntity;
use crate::utils::date::serializer;

// UserDto never carries the password out of the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDto {
    pub username: String,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
}

impl From<&UserEntity> for UserDto {
    fn from(other: &UserEntity) -> Self {
        Self {
            username: other.username.to_string(),
            created_at: other.created_at,
        }
    }
}
