use std::collections::HashMap;
use tracing::{debug, info};
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::events::DomainEventType;
use crate::core::library::{LibraryError, LibraryResult};
use crate::manager::{LibraryManager, require_present};

impl LibraryManager {
    fn validate_year(&self, year: i32) -> LibraryResult<()> {
        let current_year = self.clock.current_year();
        if year <= 0 || year > current_year {
            return Err(LibraryError::validation(
                format!("invalid input: year {} must be between 1 and {}", year, current_year).as_str(),
                Some("published_year".to_string())));
        }
        Ok(())
    }

    fn query_books(&self, field: &str, value: &str) -> LibraryResult<Vec<BookDto>> {
        require_present(&[(field, value)])?;
        let res = self.book_repository.query(&HashMap::from([(field.to_string(), value.to_string())]))?;
        Ok(res.iter().map(BookDto::from).collect())
    }
}

impl CatalogService for LibraryManager {
    fn add_book(&mut self, book: &BookDto) -> LibraryResult<BookDto> {
        require_present(&[("title", book.title.as_str()), ("author", book.author.as_str()),
            ("isbn", book.isbn.as_str()), ("genre", book.genre.as_str()),
            ("category", book.category.as_str())])?;
        self.validate_year(book.published_year)?;
        let entity = BookEntity::new(book.title.as_str(), book.author.as_str(), book.isbn.as_str(),
                                     book.published_year, book.genre.as_str(), book.category.as_str(),
                                     self.clock.now());
        self.book_repository.create(&entity)?;
        let added = BookDto::from(&entity);
        info!(title = added.title.as_str(), "book added");
        self.publish("book_added", "books", added.title.as_str(), DomainEventType::Added, &added)?;
        Ok(added)
    }

    fn remove_book(&mut self, title: &str) -> LibraryResult<BookDto> {
        let existing = self.book_repository.get(title)?;
        self.book_repository.delete(title)?;
        let removed = BookDto::from(&existing);
        info!(title, "book removed");
        self.publish("book_removed", "books", title, DomainEventType::Deleted, &removed)?;
        Ok(removed)
    }

    fn find_book(&self, title: &str) -> LibraryResult<BookDto> {
        self.book_repository.get(title).map(|b| BookDto::from(&b))
    }

    fn list_books(&self) -> Box<dyn Iterator<Item = BookDto> + '_> {
        Box::new(self.book_repository.scan().map(BookDto::from))
    }

    fn search_books(&self, query: &str) -> LibraryResult<Vec<BookDto>> {
        require_present(&[("query", query)])?;
        let res = self.book_repository.find_by_text(query)?;
        debug!(query, found = res.len(), "searched books");
        Ok(res.iter().map(BookDto::from).collect())
    }

    fn search_books_by_category(&self, category: &str) -> LibraryResult<Vec<BookDto>> {
        self.query_books("category", category)
    }

    fn search_books_by_genre(&self, genre: &str) -> LibraryResult<Vec<BookDto>> {
        self.query_books("genre", genre)
    }
}


#[cfg(test)]
mod tests {
    use chrono::Duration;
    use crate::books::dto::BookDto;
    use crate::catalog::domain::CatalogService;
    use crate::checkout::domain::CheckoutService;
    use crate::core::library::{BookStatus, LibraryError};
    use crate::manager::testing::fixture;
    use crate::patrons::domain::PatronService;

    fn dune() -> BookDto {
        BookDto::new("Dune", "Herbert", "111", 1965, "SciFi", "Fiction")
    }

    #[test]
    fn test_should_add_book() {
        let (mut catalog_svc, _clock, publisher) = fixture();

        let added = catalog_svc.add_book(&dune()).expect("should add book");
        assert_eq!(BookStatus::Available, added.book_status);

        let res = catalog_svc.search_books("Dune").expect("should search");
        assert_eq!(vec![added], res);
        assert_eq!(vec!["book_added".to_string()], publisher.names());
    }

    #[test]
    fn test_should_reject_empty_fields() {
        let (mut catalog_svc, _clock, _publisher) = fixture();

        let mut book = dune();
        book.author = "".to_string();
        let res = catalog_svc.add_book(&book);
        assert!(matches!(res, Err(LibraryError::Validation { .. })));
        assert_eq!(0, catalog_svc.list_books().count());
    }

    #[test]
    fn test_should_reject_out_of_range_year() {
        let (mut catalog_svc, _clock, _publisher) = fixture();

        for year in [0, -5, 2025] {
            let mut book = dune();
            book.published_year = year;
            let res = catalog_svc.add_book(&book);
            assert!(matches!(res, Err(LibraryError::Validation { .. })), "year {}", year);
        }
        assert_eq!(0, catalog_svc.list_books().count());

        let mut book = dune();
        book.published_year = 2024;
        catalog_svc.add_book(&book).expect("current year is valid");
    }

    #[test]
    fn test_should_validate_year_against_clock() {
        let (mut catalog_svc, clock, _publisher) = fixture();

        let mut book = dune();
        book.published_year = 2025;
        assert!(catalog_svc.add_book(&book).is_err());
        clock.advance(Duration::days(365));
        catalog_svc.add_book(&book).expect("year becomes valid once the clock reaches it");
    }

    #[test]
    fn test_should_list_books_in_insertion_order() {
        let (mut catalog_svc, _clock, _publisher) = fixture();
        assert_eq!(0, catalog_svc.list_books().count());

        for title in ["Emma", "Dune", "Ulysses"] {
            catalog_svc.add_book(&BookDto::new(title, "x", "1", 1900, "g", "c")).expect("should add book");
        }
        let titles: Vec<String> = catalog_svc.list_books().map(|b| b.title).collect();
        assert_eq!(vec!["Emma", "Dune", "Ulysses"], titles);
    }

    #[test]
    fn test_should_search_title_or_author() {
        let (mut catalog_svc, _clock, _publisher) = fixture();
        catalog_svc.add_book(&dune()).expect("should add book");
        catalog_svc.add_book(&BookDto::new("Children of Dune", "Herbert", "112", 1976, "SciFi", "Fiction")).expect("should add book");
        catalog_svc.add_book(&BookDto::new("Emma", "Austen", "113", 1815, "Romance", "Fiction")).expect("should add book");

        assert_eq!(2, catalog_svc.search_books("Dune").expect("should search").len());
        assert_eq!(2, catalog_svc.search_books("Herb").expect("should search").len());
        assert_eq!(1, catalog_svc.search_books("sten").expect("should search").len());
        assert!(catalog_svc.search_books("dune").expect("should search").is_empty());
        assert!(matches!(catalog_svc.search_books(""), Err(LibraryError::Validation { .. })));
        assert!(matches!(catalog_svc.search_books("  "), Err(LibraryError::Validation { .. })));
    }

    #[test]
    fn test_should_filter_by_category_and_genre() {
        let (mut catalog_svc, _clock, _publisher) = fixture();
        catalog_svc.add_book(&dune()).expect("should add book");
        catalog_svc.add_book(&BookDto::new("Cosmos", "Sagan", "114", 1980, "Science", "Non-Fiction")).expect("should add book");

        let res = catalog_svc.search_books_by_category("Non-Fiction").expect("should query");
        assert_eq!(1, res.len());
        assert_eq!("Cosmos", res[0].title.as_str());
        let res = catalog_svc.search_books_by_genre("SciFi").expect("should query");
        assert_eq!("Dune", res[0].title.as_str());
        assert!(catalog_svc.search_books_by_genre("Sci").expect("should query").is_empty());
        assert!(matches!(catalog_svc.search_books_by_genre(""), Err(LibraryError::Validation { .. })));
    }

    #[test]
    fn test_should_remove_first_match() {
        let (mut catalog_svc, _clock, publisher) = fixture();
        catalog_svc.add_book(&dune()).expect("should add book");
        catalog_svc.add_book(&BookDto::new("Dune", "Anderson", "115", 1999, "SciFi", "Fiction")).expect("should add book");

        let removed = catalog_svc.remove_book("Dune").expect("should remove book");
        assert_eq!("Herbert", removed.author.as_str());
        assert_eq!("Anderson", catalog_svc.find_book("Dune").expect("should remain").author.as_str());
        assert!(publisher.names().contains(&"book_removed".to_string()));

        catalog_svc.remove_book("Dune").expect("should remove book");
        assert!(matches!(catalog_svc.remove_book("Dune"), Err(LibraryError::NotFound { .. })));
    }

    #[test]
    fn test_should_remove_borrowed_book() {
        let (mut manager, _clock, _publisher) = fixture();
        manager.add_book(&dune()).expect("should add book");
        manager.register_user("alice", "pw1", "Alice", "a@x.com").expect("should register");
        manager.login_user("alice", "pw1").expect("should login");
        manager.borrow_book("Dune").expect("should borrow");

        manager.remove_book("Dune").expect("should remove borrowed book");
        assert!(manager.find_book("Dune").is_err());
    }
}
