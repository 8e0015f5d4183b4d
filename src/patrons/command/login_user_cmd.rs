use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::patrons::domain::PatronService;
use crate::patrons::dto::UserDto;

pub struct LoginUserCommand<'a> {
    patron_service: &'a mut dyn PatronService,
}

impl<'a> LoginUserCommand<'a> {
    pub fn new(patron_service: &'a mut dyn PatronService) -> Self {
        Self {
            patron_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginUserCommandRequest {
    pub username: String,
    pub password: String,
}

impl LoginUserCommandRequest {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginUserCommandResponse {
    pub user: UserDto,
}

impl LoginUserCommandResponse {
    pub fn new(user: UserDto) -> Self {
        Self {
            user,
        }
    }
}

impl Command<LoginUserCommandRequest, LoginUserCommandResponse> for LoginUserCommand<'_> {
    fn execute(&mut self, req: LoginUserCommandRequest) -> Result<LoginUserCommandResponse, CommandError> {
        self.patron_service.login_user(req.username.as_str(), req.password.as_str())
            .map_err(CommandError::from).map(LoginUserCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::{Command, CommandError};
    use crate::manager::testing::fixture;
    use crate::patrons::command::login_user_cmd::{LoginUserCommand, LoginUserCommandRequest};
    use crate::patrons::domain::PatronService;

    #[test]
    fn test_should_run_login_user() {
        let (mut manager, _clock, _publisher) = fixture();
        manager.register_user("alice", "pw1", "Alice", "a@x.com").expect("should register");

        let mut cmd = LoginUserCommand::new(&mut manager);
        let res = cmd.execute(LoginUserCommandRequest::new("alice", "wrong"));
        assert!(matches!(res, Err(CommandError::Access { .. })));
        let res = cmd.execute(LoginUserCommandRequest::new("alice", "pw1")).expect("should login");
        assert_eq!("Alice", res.user.display_name());
        assert!(manager.session().is_logged_in());
    }
}
