use std::io::{BufRead, Write};
use crate::checkout::command::checkout_book_cmd::{BorrowBookCommand, BorrowBookCommandRequest};
use crate::checkout::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
use crate::checkout::domain::CheckoutService;
use crate::core::command::Command;
use crate::core::controller::{Console, ControllerResult};
use crate::utils::date::format_date;

pub(crate) fn borrow_book<R: BufRead, W: Write>(svc: &mut dyn CheckoutService, console: &mut Console<R, W>) -> ControllerResult<()> {
    let title = console.prompt("Title")?;
    let res = BorrowBookCommand::new(svc).execute(BorrowBookCommandRequest::new(title.as_str()))?;
    match res.book.due_at {
        Some(due_at) => console.println(format!("Book '{}' borrowed, due {}.", res.book.title, format_date(due_at)).as_str())?,
        None => console.println(format!("Book '{}' borrowed.", res.book.title).as_str())?,
    }
    Ok(())
}

pub(crate) fn return_book<R: BufRead, W: Write>(svc: &mut dyn CheckoutService, console: &mut Console<R, W>) -> ControllerResult<()> {
    let title = console.prompt("Title")?;
    let res = ReturnBookCommand::new(svc).execute(ReturnBookCommandRequest::new(title.as_str()))?;
    console.println(format!("Book '{}' returned.", res.book.title).as_str())?;
    Ok(())
}
