use crate::core::library::LibraryResult;
use crate::patrons::dto::UserDto;

pub mod service;

pub trait PatronService {
    fn register_user(&mut self, username: &str, password: &str, full_name: &str, email: &str) -> LibraryResult<UserDto>;
    // a second login replaces the first
    fn login_user(&mut self, username: &str, password: &str) -> LibraryResult<UserDto>;
    fn logout_user(&mut self) -> LibraryResult<UserDto>;
    fn current_user(&self) -> Option<UserDto>;
    fn update_profile(&mut self, full_name: &str, email: &str) -> LibraryResult<UserDto>;
}
