use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::core::library::BookStatus;
use crate::utils::date::{format_date, opt_serializer};

// BookDto is the outward view of a catalog record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub published_year: i32,
    pub genre: String,
    pub category: String,
    pub book_status: BookStatus,
    pub borrowed_by: Option<String>,
    #[serde(with = "opt_serializer")]
    pub due_at: Option<NaiveDateTime>,
    pub reserved_by: Option<String>,
}

impl BookDto {
    pub fn new(title: &str, author: &str, isbn: &str, published_year: i32, genre: &str, category: &str) -> BookDto {
        BookDto {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            published_year,
            genre: genre.to_string(),
            category: category.to_string(),
            book_status: BookStatus::Available,
            borrowed_by: None,
            due_at: None,
            reserved_by: None,
        }
    }

    // single console line, e.g. `Title: Dune, Author: Herbert, ... Status: Available`
    pub fn summary(&self) -> String {
        let mut line = format!("Title: {}, Author: {}, ISBN: {}, Year: {}, Genre: {}, Category: {}, Status: {}",
                               self.title, self.author, self.isbn, self.published_year,
                               self.genre, self.category, self.book_status);
        if let Some(due_at) = self.due_at {
            line.push_str(format!(", Due: {}", format_date(due_at)).as_str());
        }
        if let Some(reserved_by) = &self.reserved_by {
            line.push_str(format!(", Reserved by: {}", reserved_by).as_str());
        }
        line
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            title: other.title.to_string(),
            author: other.author.to_string(),
            isbn: other.isbn.to_string(),
            published_year: other.published_year,
            genre: other.genre.to_string(),
            category: other.category.to_string(),
            book_status: other.status(),
            borrowed_by: other.loan.as_ref().map(|l| l.patron_id.to_string()),
            due_at: other.due_at(),
            reserved_by: other.reserved_by().map(str::to_string),
        }
    }
}
