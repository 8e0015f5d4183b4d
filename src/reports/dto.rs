use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;

// GenreReportDto is one group of the books-by-genre report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreReportDto {
    pub genre: String,
    pub count: usize,
    pub books: Vec<BookDto>,
}

impl GenreReportDto {
    pub fn new(genre: &str, books: Vec<BookDto>) -> Self {
        Self {
            genre: genre.to_string(),
            count: books.len(),
            books,
        }
    }
}
