use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::checkout::domain::CheckoutService;
use crate::core::command::{Command, CommandError};

pub struct BorrowBookCommand<'a> {
    checkout_service: &'a mut dyn CheckoutService,
}

impl<'a> BorrowBookCommand<'a> {
    pub fn new(checkout_service: &'a mut dyn CheckoutService) -> Self {
        Self {
            checkout_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BorrowBookCommandRequest {
    title: String,
}

impl BorrowBookCommandRequest {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub struct BorrowBookCommandResponse {
    pub book: BookDto,
}

impl BorrowBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

impl Command<BorrowBookCommandRequest, BorrowBookCommandResponse> for BorrowBookCommand<'_> {
    fn execute(&mut self, req: BorrowBookCommandRequest) -> Result<BorrowBookCommandResponse, CommandError> {
        self.checkout_service.borrow_book(req.title.as_str())
            .map_err(CommandError::from).map(BorrowBookCommandResponse::new)
    }
}
