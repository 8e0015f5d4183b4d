use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::core::command::{Command, CommandError};
use crate::hold::domain::HoldService;

pub struct CancelHoldBookCommand<'a> {
    hold_service: &'a mut dyn HoldService,
}

impl<'a> CancelHoldBookCommand<'a> {
    pub fn new(hold_service: &'a mut dyn HoldService) -> Self {
        Self {
            hold_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CancelHoldBookCommandRequest {
    title: String,
}

impl CancelHoldBookCommandRequest {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub struct CancelHoldBookCommandResponse {
    pub book: BookDto,
}

impl CancelHoldBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

impl Command<CancelHoldBookCommandRequest, CancelHoldBookCommandResponse> for CancelHoldBookCommand<'_> {
    fn execute(&mut self, req: CancelHoldBookCommandRequest) -> Result<CancelHoldBookCommandResponse, CommandError> {
        self.hold_service.cancel_reservation(req.title.as_str())
            .map_err(CommandError::from).map(CancelHoldBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;
    use crate::catalog::domain::CatalogService;
    use crate::core::command::{Command, CommandError};
    use crate::core::library::BookStatus;
    use crate::hold::command::cancel_hold_book_cmd::{CancelHoldBookCommand, CancelHoldBookCommandRequest};
    use crate::hold::domain::HoldService;
    use crate::manager::testing::fixture;
    use crate::patrons::domain::PatronService;

    #[test]
    fn test_should_run_cancel_hold_book() {
        let (mut manager, _clock, _publisher) = fixture();
        manager.add_book(&BookDto::new("Dune", "Herbert", "111", 1965, "SciFi", "Fiction")).expect("should add book");
        manager.register_user("alice", "pw1", "Alice", "a@x.com").expect("should register");
        manager.register_user("bob", "pw2", "Bob", "b@x.com").expect("should register");
        manager.login_user("alice", "pw1").expect("should login");
        manager.reserve_book("Dune").expect("should reserve");

        manager.login_user("bob", "pw2").expect("should login");
        let res = CancelHoldBookCommand::new(&mut manager).execute(CancelHoldBookCommandRequest::new("Dune"));
        assert!(matches!(res, Err(CommandError::Access { .. })));

        manager.login_user("alice", "pw1").expect("should login");
        let res = CancelHoldBookCommand::new(&mut manager).execute(CancelHoldBookCommandRequest::new("Dune"))
            .expect("should cancel hold");
        assert_eq!(BookStatus::Available, res.book.book_status);
    }
}
