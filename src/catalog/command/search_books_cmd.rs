use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct SearchBooksCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> SearchBooksCommand<'a> {
    pub fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchBy {
    // substring of title or author
    Text,
    Category,
    Genre,
}

#[derive(Debug, Deserialize)]
pub struct SearchBooksCommandRequest {
    pub by: SearchBy,
    pub key: String,
}

impl SearchBooksCommandRequest {
    pub fn new(by: SearchBy, key: &str) -> Self {
        Self {
            by,
            key: key.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl SearchBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

impl Command<SearchBooksCommandRequest, SearchBooksCommandResponse> for SearchBooksCommand<'_> {
    fn execute(&mut self, req: SearchBooksCommandRequest) -> Result<SearchBooksCommandResponse, CommandError> {
        let key = req.key.as_str();
        let res = match req.by {
            SearchBy::Text => self.catalog_service.search_books(key),
            SearchBy::Category => self.catalog_service.search_books_by_category(key),
            SearchBy::Genre => self.catalog_service.search_books_by_genre(key),
        };
        res.map_err(CommandError::from).map(SearchBooksCommandResponse::new)
    }
}
