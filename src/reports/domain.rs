use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;
use crate::reports::dto::GenreReportDto;

pub mod service;

pub trait ReportService {
    // borrowed books whose due date is strictly before now
    fn overdue_books(&self) -> LibraryResult<Vec<BookDto>>;
    // groups ordered by genre name, books in insertion order
    fn books_by_genre(&self) -> LibraryResult<Vec<GenreReportDto>>;
}
