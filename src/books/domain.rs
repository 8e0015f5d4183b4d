use crate::core::library::BookStatus;

pub mod model;

pub trait Book {
    fn is_borrowed(&self) -> bool;
    fn is_reserved(&self) -> bool;
    fn reserved_by(&self) -> Option<&str>;

    fn status(&self) -> BookStatus {
        match (self.is_borrowed(), self.is_reserved()) {
            (false, false) => BookStatus::Available,
            (true, false) => BookStatus::Borrowed,
            (false, true) => BookStatus::Reserved,
            (true, true) => BookStatus::BorrowedAndReserved,
        }
    }

    fn is_reserved_by(&self, username: &str) -> bool {
        self.reserved_by() == Some(username)
    }
}
