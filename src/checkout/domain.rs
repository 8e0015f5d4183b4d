use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;

pub mod service;

// CheckoutService lends books to the logged-in user and takes them back.
pub trait CheckoutService {
    fn borrow_book(&mut self, title: &str) -> LibraryResult<BookDto>;
    fn return_book(&mut self, title: &str) -> LibraryResult<BookDto>;
}
