use std::collections::BTreeMap;
use tracing::debug;
use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;
use crate::manager::LibraryManager;
use crate::reports::domain::ReportService;
use crate::reports::dto::GenreReportDto;

impl ReportService for LibraryManager {
    fn overdue_books(&self) -> LibraryResult<Vec<BookDto>> {
        let now = self.clock.now();
        let res = self.book_repository.find_overdue(now)?;
        debug!(overdue = res.len(), "overdue report");
        Ok(res.iter().map(BookDto::from).collect())
    }

    fn books_by_genre(&self) -> LibraryResult<Vec<GenreReportDto>> {
        let mut groups: BTreeMap<String, Vec<BookDto>> = BTreeMap::new();
        for book in self.book_repository.scan() {
            groups.entry(book.genre.to_string()).or_default().push(BookDto::from(book));
        }
        Ok(groups.into_iter().map(|(genre, books)| GenreReportDto::new(genre.as_str(), books)).collect())
    }
}
