use tracing::info;
use crate::books::domain::Book;
use crate::books::dto::BookDto;
use crate::core::events::DomainEventType;
use crate::core::library::{LibraryError, LibraryResult};
use crate::hold::domain::HoldService;
use crate::manager::LibraryManager;

impl HoldService for LibraryManager {
    fn reserve_book(&mut self, title: &str) -> LibraryResult<BookDto> {
        let username = self.session.require_user()?;
        let mut book = self.book_repository.get(title)?;
        if book.is_reserved() {
            return Err(LibraryError::unavailable(
                format!("book '{}' is already reserved", title).as_str(), Some("reserved".to_string())));
        }
        if book.is_borrowed() {
            return Err(LibraryError::unavailable(
                format!("book '{}' is currently borrowed", title).as_str(), Some("borrowed".to_string())));
        }
        book.reserve(username.as_str(), self.clock.now());
        self.book_repository.update(&book)?;
        let reserved = BookDto::from(&book);
        info!(title, username = username.as_str(), "book reserved");
        self.publish("book_reserved", "hold", title, DomainEventType::Added, &reserved)?;
        Ok(reserved)
    }

    fn cancel_reservation(&mut self, title: &str) -> LibraryResult<BookDto> {
        let username = self.session.require_user()?;
        let mut book = self.book_repository.get(title)?;
        match book.reserved_by() {
            None => {
                return Err(LibraryError::unavailable(
                    format!("book '{}' is not reserved", title).as_str(), Some("not_reserved".to_string())));
            }
            Some(holder) if holder != username => {
                return Err(LibraryError::access_denied(
                    format!("book '{}' is reserved by another user", title).as_str(), Some("owner".to_string())));
            }
            Some(_) => {}
        }
        book.hold = None;
        book.updated_at = self.clock.now();
        self.book_repository.update(&book)?;
        let cancelled = BookDto::from(&book);
        info!(title, username = username.as_str(), "reservation cancelled");
        self.publish("reservation_cancelled", "hold", title, DomainEventType::Deleted, &cancelled)?;
        Ok(cancelled)
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;
    use crate::catalog::domain::CatalogService;
    use crate::checkout::domain::CheckoutService;
    use crate::core::library::{BookStatus, LibraryError};
    use crate::hold::domain::HoldService;
    use crate::manager::LibraryManager;
    use crate::manager::testing::fixture;
    use crate::patrons::domain::PatronService;

    fn setup(manager: &mut LibraryManager) {
        manager.add_book(&BookDto::new("Dune", "Herbert", "111", 1965, "SciFi", "Fiction")).expect("should add book");
        manager.register_user("alice", "pw1", "Alice", "a@x.com").expect("should register");
        manager.register_user("bob", "pw2", "Bob", "b@x.com").expect("should register");
    }

    #[test]
    fn test_should_reserve_book() {
        let (mut manager, _clock, publisher) = fixture();
        setup(&mut manager);
        manager.login_user("alice", "pw1").expect("should login");

        let book = manager.reserve_book("Dune").expect("should reserve");
        assert_eq!(BookStatus::Reserved, book.book_status);
        assert_eq!(Some("alice".to_string()), book.reserved_by);
        assert_eq!(Some(&"book_reserved".to_string()), publisher.names().last());
    }

    #[test]
    fn test_should_not_reserve_without_session() {
        let (mut manager, _clock, _publisher) = fixture();
        setup(&mut manager);
        assert_eq!(Err(LibraryError::no_session()), manager.reserve_book("Dune"));
    }

    #[test]
    fn test_should_not_reserve_missing_book() {
        let (mut manager, _clock, _publisher) = fixture();
        setup(&mut manager);
        manager.login_user("alice", "pw1").expect("should login");
        assert!(matches!(manager.reserve_book("Emma"), Err(LibraryError::NotFound { .. })));
    }

    #[test]
    fn test_should_not_reserve_twice() {
        let (mut manager, _clock, _publisher) = fixture();
        setup(&mut manager);
        manager.login_user("alice", "pw1").expect("should login");
        manager.reserve_book("Dune").expect("should reserve");
        assert!(matches!(manager.reserve_book("Dune"), Err(LibraryError::CurrentlyUnavailable { .. })));

        manager.login_user("bob", "pw2").expect("should login");
        assert!(matches!(manager.reserve_book("Dune"), Err(LibraryError::CurrentlyUnavailable { .. })));
        assert_eq!(Some("alice".to_string()), manager.find_book("Dune").expect("should find").reserved_by);
    }

    #[test]
    fn test_should_not_reserve_borrowed_book() {
        let (mut manager, _clock, _publisher) = fixture();
        setup(&mut manager);
        manager.login_user("alice", "pw1").expect("should login");
        manager.borrow_book("Dune").expect("should borrow");

        manager.login_user("bob", "pw2").expect("should login");
        assert!(matches!(manager.reserve_book("Dune"), Err(LibraryError::CurrentlyUnavailable { .. })));
        assert_eq!(BookStatus::Borrowed, manager.find_book("Dune").expect("should find").book_status);
    }

    #[test]
    fn test_should_cancel_own_reservation() {
        let (mut manager, _clock, publisher) = fixture();
        setup(&mut manager);
        manager.login_user("alice", "pw1").expect("should login");
        manager.reserve_book("Dune").expect("should reserve");

        let book = manager.cancel_reservation("Dune").expect("should cancel");
        assert_eq!(BookStatus::Available, book.book_status);
        assert_eq!(Some(&"reservation_cancelled".to_string()), publisher.names().last());
        manager.borrow_book("Dune").expect("should borrow once hold is gone");
    }

    #[test]
    fn test_should_not_cancel_reservation_of_other_user() {
        let (mut manager, _clock, _publisher) = fixture();
        setup(&mut manager);
        manager.login_user("alice", "pw1").expect("should login");
        manager.reserve_book("Dune").expect("should reserve");

        manager.login_user("bob", "pw2").expect("should login");
        assert!(matches!(manager.cancel_reservation("Dune"), Err(LibraryError::AccessDenied { .. })));
        assert_eq!(Some("alice".to_string()), manager.find_book("Dune").expect("should find").reserved_by);
    }

    #[test]
    fn test_should_not_cancel_unreserved_book() {
        let (mut manager, _clock, _publisher) = fixture();
        setup(&mut manager);
        manager.login_user("alice", "pw1").expect("should login");
        assert!(matches!(manager.cancel_reservation("Dune"), Err(LibraryError::CurrentlyUnavailable { .. })));
        assert!(matches!(manager.cancel_reservation("Emma"), Err(LibraryError::NotFound { .. })));
    }
}
