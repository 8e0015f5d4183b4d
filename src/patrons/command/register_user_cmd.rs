use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::patrons::domain::PatronService;
use crate::patrons::dto::UserDto;

pub struct RegisterUserCommand<'a> {
    patron_service: &'a mut dyn PatronService,
}

impl<'a> RegisterUserCommand<'a> {
    pub fn new(patron_service: &'a mut dyn PatronService) -> Self {
        Self {
            patron_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RegisterUserCommandRequest {
    pub username: String,
    pub password: String,
    pub full_name: String,
    pub email: String,
}

impl RegisterUserCommandRequest {
    pub fn new(username: &str, password: &str, full_name: &str, email: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            full_name: full_name.to_string(),
            email: email.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RegisterUserCommandResponse {
    pub user: UserDto,
}

impl RegisterUserCommandResponse {
    pub fn new(user: UserDto) -> Self {
        Self {
            user,
        }
    }
}

impl Command<RegisterUserCommandRequest, RegisterUserCommandResponse> for RegisterUserCommand<'_> {
    fn execute(&mut self, req: RegisterUserCommandRequest) -> Result<RegisterUserCommandResponse, CommandError> {
        self.patron_service.register_user(req.username.as_str(), req.password.as_str(),
                                          req.full_name.as_str(), req.email.as_str())
            .map_err(CommandError::from).map(RegisterUserCommandResponse::new)
    }
}
