use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::patrons::domain::PatronService;
use crate::patrons::dto::UserDto;

pub struct UpdateProfileCommand<'a> {
    patron_service: &'a mut dyn PatronService,
}

impl<'a> UpdateProfileCommand<'a> {
    pub fn new(patron_service: &'a mut dyn PatronService) -> Self {
        Self {
            patron_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateProfileCommandRequest {
    pub full_name: String,
    pub email: String,
}

impl UpdateProfileCommandRequest {
    pub fn new(full_name: &str, email: &str) -> Self {
        Self {
            full_name: full_name.to_string(),
            email: email.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UpdateProfileCommandResponse {
    pub user: UserDto,
}

impl UpdateProfileCommandResponse {
    pub fn new(user: UserDto) -> Self {
        Self {
            user,
        }
    }
}

impl Command<UpdateProfileCommandRequest, UpdateProfileCommandResponse> for UpdateProfileCommand<'_> {
    fn execute(&mut self, req: UpdateProfileCommandRequest) -> Result<UpdateProfileCommandResponse, CommandError> {
        self.patron_service.update_profile(req.full_name.as_str(), req.email.as_str())
            .map_err(CommandError::from).map(UpdateProfileCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::{Command, CommandError};
    use crate::manager::testing::fixture;
    use crate::patrons::command::update_profile_cmd::{UpdateProfileCommand, UpdateProfileCommandRequest};
    use crate::patrons::domain::PatronService;

    #[test]
    fn test_should_run_update_profile() {
        let (mut manager, _clock, _publisher) = fixture();
        manager.register_user("alice", "pw1", "Alice", "a@x.com").expect("should register");
        manager.login_user("alice", "pw1").expect("should login");

        let mut cmd = UpdateProfileCommand::new(&mut manager);
        let res = cmd.execute(UpdateProfileCommandRequest::new("Alice L", "al@x.com")).expect("should update");
        assert_eq!("al@x.com", res.user.email.as_str());
        let res = cmd.execute(UpdateProfileCommandRequest::new("Alice L", " "));
        assert!(matches!(res, Err(CommandError::Validation { .. })));
    }
}
