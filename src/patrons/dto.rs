use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::users::domain::model::UserEntity;
use crate::utils::date::serializer;


// UserDto is the public view of a member; the password never leaves the repository.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub username: String,
    pub full_name: String,
    pub email: String,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl UserDto {
    pub fn display_name(&self) -> &str {
        self.full_name.as_str()
    }

    pub fn summary(&self) -> String {
        format!("Username: {}, Name: {}, Email: {}", self.username, self.full_name, self.email)
    }
}

impl From<&UserEntity> for UserDto {
    fn from(other: &UserEntity) -> Self {
        Self {
            username: other.username.to_string(),
            full_name: other.full_name.to_string(),
            email: other.email.to_string(),
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}
