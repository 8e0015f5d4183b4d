pub mod service;

use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;

pub trait CatalogService {
    fn add_book(&mut self, book: &BookDto) -> LibraryResult<BookDto>;
    fn remove_book(&mut self, title: &str) -> LibraryResult<BookDto>;
    fn find_book(&self, title: &str) -> LibraryResult<BookDto>;
    // lazily yields every book in insertion order
    fn list_books(&self) -> Box<dyn Iterator<Item = BookDto> + '_>;
    fn search_books(&self, query: &str) -> LibraryResult<Vec<BookDto>>;
    fn search_books_by_category(&self, category: &str) -> LibraryResult<Vec<BookDto>>;
    fn search_books_by_genre(&self, genre: &str) -> LibraryResult<Vec<BookDto>>;
}
