use std::collections::HashMap;

use chrono::NaiveDateTime;

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::{FieldAccess, Repository};

#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    books: Vec<BookEntity>,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.books.iter().position(|b| b.title == id)
    }
}

impl Repository<BookEntity> for MemoryBookRepository {
    fn create(&mut self, entity: &BookEntity) -> LibraryResult<usize> {
        self.books.push(entity.clone());
        Ok(1)
    }

    fn update(&mut self, entity: &BookEntity) -> LibraryResult<usize> {
        match self.position(entity.title.as_str()) {
            Some(ndx) => {
                self.books[ndx] = entity.clone();
                Ok(1)
            }
            None => Err(LibraryError::not_found(format!("book '{}' not found", entity.title).as_str())),
        }
    }

    fn get(&self, id: &str) -> LibraryResult<BookEntity> {
        self.position(id)
            .map(|ndx| self.books[ndx].clone())
            .ok_or_else(|| LibraryError::not_found(format!("book '{}' not found", id).as_str()))
    }

    fn query(&self, predicate: &HashMap<String, String>) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.books.iter().filter(|b| b.matches(predicate)).cloned().collect())
    }

    fn count(&self) -> usize {
        self.books.len()
    }
}

impl BookRepository for MemoryBookRepository {
    fn scan(&self) -> Box<dyn Iterator<Item = &BookEntity> + '_> {
        Box::new(self.books.iter())
    }

    fn find_by_text(&self, text: &str) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.books.iter()
            .filter(|b| b.title.contains(text) || b.author.contains(text))
            .cloned().collect())
    }

    fn find_overdue(&self, now: NaiveDateTime) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.books.iter().filter(|b| b.is_overdue(now)).cloned().collect())
    }

    fn delete(&mut self, title: &str) -> LibraryResult<usize> {
        match self.position(title) {
            Some(ndx) => {
                self.books.remove(ndx);
                Ok(1)
            }
            None => Err(LibraryError::not_found(format!("book '{}' not found", title).as_str())),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use chrono::{Duration, NaiveDate, NaiveDateTime};

    use crate::books::domain::model::BookEntity;
    use crate::books::repository::BookRepository;
    use crate::books::repository::memory_book_repository::MemoryBookRepository;
    use crate::core::library::LibraryError;
    use crate::core::repository::Repository;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap().and_hms_opt(10, 0, 0).unwrap()
    }

    fn book(title: &str, author: &str, genre: &str) -> BookEntity {
        BookEntity::new(title, author, "isbn", 2000, genre, "Fiction", now())
    }

    #[test]
    fn test_should_create_get_books() {
        let mut books_repo = MemoryBookRepository::new();
        let size = books_repo.create(&book("Dune", "Herbert", "SciFi")).expect("should create book");
        assert_eq!(1, size);

        let loaded = books_repo.get("Dune").expect("should return book");
        assert_eq!("Herbert", loaded.author.as_str());
        assert!(matches!(books_repo.get("dune"), Err(LibraryError::NotFound { .. })));
    }

    #[test]
    fn test_should_update_first_match() {
        let mut books_repo = MemoryBookRepository::new();
        books_repo.create(&book("Dune", "Herbert", "SciFi")).expect("should create book");
        books_repo.create(&book("Dune", "Someone Else", "SciFi")).expect("should create book");

        let mut loaded = books_repo.get("Dune").expect("should return book");
        loaded.lend("alice", now(), 30);
        let size = books_repo.update(&loaded).expect("should update book");
        assert_eq!(1, size);

        let all: Vec<&BookEntity> = books_repo.scan().collect();
        assert!(all[0].loan.is_some());
        assert!(all[1].loan.is_none());
    }

    #[test]
    fn test_should_delete_first_match_only() {
        let mut books_repo = MemoryBookRepository::new();
        books_repo.create(&book("Dune", "Herbert", "SciFi")).expect("should create book");
        books_repo.create(&book("Dune", "Someone Else", "SciFi")).expect("should create book");

        let deleted = books_repo.delete("Dune").expect("should delete book");
        assert_eq!(1, deleted);
        assert_eq!(1, books_repo.count());
        assert_eq!("Someone Else", books_repo.get("Dune").expect("should remain").author.as_str());
        books_repo.delete("Dune").expect("should delete book");
        assert!(books_repo.delete("Dune").is_err());
    }

    #[test]
    fn test_should_scan_in_insertion_order() {
        let mut books_repo = MemoryBookRepository::new();
        for title in ["c", "a", "b"] {
            books_repo.create(&book(title, "x", "g")).expect("should create book");
        }
        let titles: Vec<&str> = books_repo.scan().map(|b| b.title.as_str()).collect();
        assert_eq!(vec!["c", "a", "b"], titles);
    }

    #[test]
    fn test_should_find_by_text() {
        let mut books_repo = MemoryBookRepository::new();
        books_repo.create(&book("Dune", "Frank Herbert", "SciFi")).expect("should create book");
        books_repo.create(&book("Emma", "Jane Austen", "Romance")).expect("should create book");
        books_repo.create(&book("Herbert West", "Lovecraft", "Horror")).expect("should create book");

        let res = books_repo.find_by_text("Herbert").expect("should search");
        assert_eq!(2, res.len());
        assert_eq!("Dune", res[0].title.as_str());
        assert_eq!("Herbert West", res[1].title.as_str());
        assert!(books_repo.find_by_text("herbert").expect("should search").is_empty());
    }

    #[test]
    fn test_should_query_books() {
        let mut books_repo = MemoryBookRepository::new();
        books_repo.create(&book("Dune", "Herbert", "SciFi")).expect("should create book");
        books_repo.create(&book("Emma", "Austen", "Romance")).expect("should create book");
        let res = books_repo.query(&HashMap::from([("genre".to_string(), "SciFi".to_string())]))
            .expect("should query");
        assert_eq!(1, res.len());
        assert_eq!("Dune", res[0].title.as_str());
    }

    #[test]
    fn test_should_find_overdue() {
        let mut books_repo = MemoryBookRepository::new();
        let mut late = book("Late", "x", "g");
        late.lend("alice", now() - Duration::days(40), 30);
        let mut on_time = book("OnTime", "x", "g");
        on_time.lend("alice", now(), 30);
        books_repo.create(&late).expect("should create book");
        books_repo.create(&on_time).expect("should create book");
        books_repo.create(&book("Shelf", "x", "g")).expect("should create book");

        let res = books_repo.find_overdue(now()).expect("should query");
        assert_eq!(1, res.len());
        assert_eq!("Late", res[0].title.as_str());
    }
}
