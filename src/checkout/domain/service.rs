use tracing::info;
use crate::books::domain::Book;
use crate::books::dto::BookDto;
use crate::checkout::domain::CheckoutService;
use crate::core::events::DomainEventType;
use crate::core::library::{LibraryError, LibraryResult};
use crate::manager::LibraryManager;

impl CheckoutService for LibraryManager {
    fn borrow_book(&mut self, title: &str) -> LibraryResult<BookDto> {
        let username = self.session.require_user()?;
        let mut book = self.book_repository.get(title)?;
        if book.is_borrowed() {
            return Err(LibraryError::unavailable(
                format!("book '{}' is already borrowed", title).as_str(), Some("borrowed".to_string())));
        }
        if let Some(holder) = book.reserved_by() {
            return Err(LibraryError::unavailable(
                format!("book '{}' is reserved by {}", title, holder).as_str(), Some("reserved".to_string())));
        }
        book.lend(username.as_str(), self.clock.now(), self.config.book_loan_days);
        self.book_repository.update(&book)?;
        let borrowed = BookDto::from(&book);
        info!(title, username = username.as_str(), "book borrowed");
        self.publish("book_borrowed", "checkout", title, DomainEventType::Updated, &borrowed)?;
        Ok(borrowed)
    }

    fn return_book(&mut self, title: &str) -> LibraryResult<BookDto> {
        let username = self.session.require_user()?;
        let mut book = self.book_repository.get(title)?;
        if !book.is_borrowed() {
            return Err(LibraryError::unavailable(
                format!("book '{}' is not borrowed", title).as_str(), Some("not_borrowed".to_string())));
        }
        book.loan = None;
        // a hold placed by someone else survives the return
        if book.is_reserved_by(username.as_str()) {
            book.hold = None;
        }
        book.updated_at = self.clock.now();
        self.book_repository.update(&book)?;
        let returned = BookDto::from(&book);
        info!(title, username = username.as_str(), "book returned");
        self.publish("book_returned", "checkout", title, DomainEventType::Updated, &returned)?;
        Ok(returned)
    }
}
