pub mod memory_book_repository;

use chrono::NaiveDateTime;
use crate::books::domain::model::BookEntity;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;


pub trait BookRepository: Repository<BookEntity> {
    // every book in insertion order
    fn scan(&self) -> Box<dyn Iterator<Item = &BookEntity> + '_>;

    // case-sensitive substring match on title or author
    fn find_by_text(&self, text: &str) -> LibraryResult<Vec<BookEntity>>;

    fn find_overdue(&self, now: NaiveDateTime) -> LibraryResult<Vec<BookEntity>>;

    // removes the first book with the title
    fn delete(&mut self, title: &str) -> LibraryResult<usize>;
}
