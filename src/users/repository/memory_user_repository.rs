use std::collections::HashMap;

use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::{FieldAccess, Repository};
use crate::users::domain::model::UserEntity;
use crate::users::repository::UserRepository;

#[derive(Debug, Default)]
pub struct MemoryUserRepository {
    users: Vec<UserEntity>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, username: &str) -> Option<usize> {
        self.users.iter().position(|u| u.username == username)
    }
}

impl Repository<UserEntity> for MemoryUserRepository {
    fn create(&mut self, entity: &UserEntity) -> LibraryResult<usize> {
        if self.position(entity.username.as_str()).is_some() {
            return Err(LibraryError::duplicate_key(
                format!("username '{}' is already taken", entity.username).as_str()));
        }
        self.users.push(entity.clone());
        Ok(1)
    }

    fn update(&mut self, entity: &UserEntity) -> LibraryResult<usize> {
        match self.position(entity.username.as_str()) {
            Some(ndx) => {
                self.users[ndx] = entity.clone();
                Ok(1)
            }
            None => Err(LibraryError::not_found(format!("user '{}' not found", entity.username).as_str())),
        }
    }

    fn get(&self, id: &str) -> LibraryResult<UserEntity> {
        self.position(id)
            .map(|ndx| self.users[ndx].clone())
            .ok_or_else(|| LibraryError::not_found(format!("user '{}' not found", id).as_str()))
    }

    fn query(&self, predicate: &HashMap<String, String>) -> LibraryResult<Vec<UserEntity>> {
        Ok(self.users.iter().filter(|u| u.matches(predicate)).cloned().collect())
    }

    fn count(&self) -> usize {
        self.users.len()
    }
}

impl UserRepository for MemoryUserRepository {}
