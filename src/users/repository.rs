pub mod memory_user_repository;

use crate::core::repository::Repository;
use crate::users::domain::model::UserEntity;

// Members are keyed by username and never removed.
pub trait UserRepository: Repository<UserEntity> {}
