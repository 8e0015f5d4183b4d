use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::repository::FieldAccess;
use crate::utils::date::serializer;

// BookEntity abstracts a catalog record. The title doubles as its key, but
// the catalog does not enforce uniqueness and lookups take the first match.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct BookEntity {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub published_year: i32,
    pub genre: String,
    pub category: String,
    pub loan: Option<LoanEntity>,
    pub hold: Option<HoldEntity>,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

// LoanEntity is present exactly while the book is borrowed.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct LoanEntity {
    pub patron_id: String,
    #[serde(with = "serializer")]
    pub borrowed_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub due_at: NaiveDateTime,
}

// HoldEntity is present exactly while the book is reserved.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct HoldEntity {
    pub patron_id: String,
    #[serde(with = "serializer")]
    pub reserved_at: NaiveDateTime,
}

impl BookEntity {
    pub fn new(title: &str, author: &str, isbn: &str, published_year: i32,
               genre: &str, category: &str, now: NaiveDateTime) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            published_year,
            genre: genre.to_string(),
            category: category.to_string(),
            loan: None,
            hold: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn due_at(&self) -> Option<NaiveDateTime> {
        self.loan.as_ref().map(|l| l.due_at)
    }

    pub fn is_overdue(&self, now: NaiveDateTime) -> bool {
        self.due_at().map(|due| due < now).unwrap_or(false)
    }

    pub fn lend(&mut self, patron_id: &str, now: NaiveDateTime, loan_days: i64) {
        self.loan = Some(LoanEntity {
            patron_id: patron_id.to_string(),
            borrowed_at: now,
            due_at: now + Duration::days(loan_days),
        });
        self.updated_at = now;
    }

    pub fn reserve(&mut self, patron_id: &str, now: NaiveDateTime) {
        self.hold = Some(HoldEntity {
            patron_id: patron_id.to_string(),
            reserved_at: now,
        });
        self.updated_at = now;
    }
}

impl Book for BookEntity {
    fn is_borrowed(&self) -> bool {
        self.loan.is_some()
    }

    fn is_reserved(&self) -> bool {
        self.hold.is_some()
    }

    fn reserved_by(&self) -> Option<&str> {
        self.hold.as_ref().map(|h| h.patron_id.as_str())
    }
}

impl FieldAccess for BookEntity {
    fn field(&self, name: &str) -> Option<String> {
        match name {
            "title" => Some(self.title.to_string()),
            "author" => Some(self.author.to_string()),
            "isbn" => Some(self.isbn.to_string()),
            "published_year" => Some(self.published_year.to_string()),
            "genre" => Some(self.genre.to_string()),
            "category" => Some(self.category.to_string()),
            "book_status" => Some(self.status().to_string()),
            _ => None,
        }
    }
}
