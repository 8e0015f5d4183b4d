use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::core::command::{Command, CommandError};
use crate::hold::domain::HoldService;

pub struct ReserveBookCommand<'a> {
    hold_service: &'a mut dyn HoldService,
}

impl<'a> ReserveBookCommand<'a> {
    pub fn new(hold_service: &'a mut dyn HoldService) -> Self {
        Self {
            hold_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReserveBookCommandRequest {
    title: String,
}

impl ReserveBookCommandRequest {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub struct ReserveBookCommandResponse {
    pub book: BookDto,
}

impl ReserveBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

impl Command<ReserveBookCommandRequest, ReserveBookCommandResponse> for ReserveBookCommand<'_> {
    fn execute(&mut self, req: ReserveBookCommandRequest) -> Result<ReserveBookCommandResponse, CommandError> {
        self.hold_service.reserve_book(req.title.as_str())
            .map_err(CommandError::from).map(ReserveBookCommandResponse::new)
    }
}
