use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;

pub mod service;

// HoldService places and cancels reservations for the logged-in user.
pub trait HoldService {
    fn reserve_book(&mut self, title: &str) -> LibraryResult<BookDto>;
    fn cancel_reservation(&mut self, title: &str) -> LibraryResult<BookDto>;
}
