use std::io::{BufRead, Write};
use crate::books::dto::BookDto;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest, SearchBy};
use crate::catalog::domain::CatalogService;
use crate::core::command::Command;
use crate::core::controller::{parse_year, Console, ControllerResult};

pub(crate) fn add_book<R: BufRead, W: Write>(svc: &mut dyn CatalogService, console: &mut Console<R, W>) -> ControllerResult<()> {
    let title = console.prompt("Title")?;
    let author = console.prompt("Author")?;
    let isbn = console.prompt("ISBN")?;
    let year = console.prompt("Publication year")?;
    let genre = console.prompt("Genre")?;
    let category = console.prompt("Category")?;
    let req = AddBookCommandRequest::new(title.as_str(), author.as_str(), isbn.as_str(),
                                         parse_year(year.as_str())?, genre.as_str(), category.as_str());
    let res = AddBookCommand::new(svc).execute(req)?;
    console.println(format!("Book '{}' added.", res.book.title).as_str())?;
    Ok(())
}

pub(crate) fn list_books<R: BufRead, W: Write>(svc: &mut dyn CatalogService, console: &mut Console<R, W>) -> ControllerResult<()> {
    let res = ListBooksCommand::new(svc).execute(ListBooksCommandRequest::default())?;
    print_books(console, &res.books, "No books available.")
}

pub(crate) fn find_book<R: BufRead, W: Write>(svc: &mut dyn CatalogService, console: &mut Console<R, W>) -> ControllerResult<()> {
    let title = console.prompt("Title")?;
    let res = GetBookCommand::new(svc).execute(GetBookCommandRequest::new(title.as_str()))?;
    console.println(res.book.summary().as_str())?;
    Ok(())
}

pub(crate) fn search_books<R: BufRead, W: Write>(svc: &mut dyn CatalogService, console: &mut Console<R, W>,
                                                 by: SearchBy) -> ControllerResult<()> {
    let label = match by {
        SearchBy::Text => "Search (title or author)",
        SearchBy::Category => "Category",
        SearchBy::Genre => "Genre",
    };
    let key = console.prompt(label)?;
    let res = SearchBooksCommand::new(svc).execute(SearchBooksCommandRequest::new(by, key.as_str()))?;
    print_books(console, &res.books, "No books found.")
}

pub(crate) fn remove_book<R: BufRead, W: Write>(svc: &mut dyn CatalogService, console: &mut Console<R, W>) -> ControllerResult<()> {
    let title = console.prompt("Title")?;
    let res = RemoveBookCommand::new(svc).execute(RemoveBookCommandRequest::new(title.as_str()))?;
    console.println(format!("Book '{}' deleted.", res.book.title).as_str())?;
    Ok(())
}

pub(crate) fn print_books<R: BufRead, W: Write>(console: &mut Console<R, W>, books: &[BookDto], empty: &str) -> ControllerResult<()> {
    if books.is_empty() {
        console.println(empty)?;
    }
    for book in books {
        console.println(book.summary().as_str())?;
    }
    Ok(())
}
