use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::core::repository::FieldAccess;
use crate::utils::date::serializer;

// UserEntity abstracts a registered library member. The username is the key
// and, like the password, never changes after registration.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct UserEntity {
    pub username: String,
    pub password: String,
    pub full_name: String,
    pub email: String,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl UserEntity {
    pub fn new(username: &str, password: &str, full_name: &str, email: &str, now: NaiveDateTime) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            full_name: full_name.to_string(),
            email: email.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    // plain-text comparison
    pub fn password_matches(&self, password: &str) -> bool {
        self.password == password
    }
}

impl FieldAccess for UserEntity {
    fn field(&self, name: &str) -> Option<String> {
        match name {
            "username" => Some(self.username.to_string()),
            "full_name" => Some(self.full_name.to_string()),
            "email" => Some(self.email.to_string()),
            _ => None,
        }
    }
}
