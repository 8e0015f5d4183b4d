use tracing::{info, warn};
use crate::core::events::DomainEventType;
use crate::core::library::{LibraryError, LibraryResult};
use crate::manager::{LibraryManager, require_present};
use crate::patrons::domain::PatronService;
use crate::patrons::dto::UserDto;
use crate::users::domain::model::UserEntity;

impl PatronService for LibraryManager {
    fn register_user(&mut self, username: &str, password: &str, full_name: &str, email: &str) -> LibraryResult<UserDto> {
        require_present(&[("username", username), ("password", password),
            ("full_name", full_name), ("email", email)])?;
        let user = UserEntity::new(username, password, full_name, email, self.clock.now());
        self.user_repository.create(&user)?;
        let registered = UserDto::from(&user);
        info!(username, "user registered");
        self.publish("user_registered", "patrons", username, DomainEventType::Added, &registered)?;
        Ok(registered)
    }

    fn login_user(&mut self, username: &str, password: &str) -> LibraryResult<UserDto> {
        let user = match self.user_repository.get(username) {
            Ok(user) if user.password_matches(password) => user,
            _ => {
                warn!(username, "login rejected");
                return Err(LibraryError::not_granted("invalid username or password", Some("credentials".to_string())));
            }
        };
        if let Some(previous) = self.session.login(username) {
            info!(previous = previous.as_str(), username, "session replaced");
        }
        let logged_in = UserDto::from(&user);
        self.publish("user_logged_in", "patrons", username, DomainEventType::Updated, &logged_in)?;
        Ok(logged_in)
    }

    fn logout_user(&mut self) -> LibraryResult<UserDto> {
        let username = self.session.require_user()?;
        let user = self.user_repository.get(username.as_str())?;
        let logged_out = UserDto::from(&user);
        self.publish("user_logged_out", "patrons", username.as_str(), DomainEventType::Updated, &logged_out)?;
        self.session.logout();
        Ok(logged_out)
    }

    fn current_user(&self) -> Option<UserDto> {
        self.session.current_user()
            .and_then(|username| self.user_repository.get(username).ok())
            .map(|user| UserDto::from(&user))
    }

    fn update_profile(&mut self, full_name: &str, email: &str) -> LibraryResult<UserDto> {
        let username = self.session.require_user()?;
        require_present(&[("full_name", full_name), ("email", email)])?;
        let mut user = self.user_repository.get(username.as_str())?;
        user.full_name = full_name.to_string();
        user.email = email.to_string();
        user.updated_at = self.clock.now();
        self.user_repository.update(&user)?;
        let updated = UserDto::from(&user);
        info!(username = username.as_str(), "profile updated");
        self.publish("profile_updated", "patrons", username.as_str(), DomainEventType::Updated, &updated)?;
        Ok(updated)
    }
}
