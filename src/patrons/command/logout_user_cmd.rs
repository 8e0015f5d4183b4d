use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::patrons::domain::PatronService;
use crate::patrons::dto::UserDto;

pub struct LogoutUserCommand<'a> {
    patron_service: &'a mut dyn PatronService,
}

impl<'a> LogoutUserCommand<'a> {
    pub fn new(patron_service: &'a mut dyn PatronService) -> Self {
        Self {
            patron_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct LogoutUserCommandRequest {}

#[derive(Debug, Serialize)]
pub struct LogoutUserCommandResponse {
    pub user: UserDto,
}

impl LogoutUserCommandResponse {
    pub fn new(user: UserDto) -> Self {
        Self {
            user,
        }
    }
}

impl Command<LogoutUserCommandRequest, LogoutUserCommandResponse> for LogoutUserCommand<'_> {
    fn execute(&mut self, _req: LogoutUserCommandRequest) -> Result<LogoutUserCommandResponse, CommandError> {
        self.patron_service.logout_user()
            .map_err(CommandError::from).map(LogoutUserCommandResponse::new)
    }
}
