use std::io::{BufRead, Write};
use crate::core::command::Command;
use crate::core::controller::{Console, ControllerResult};
use crate::hold::command::cancel_hold_book_cmd::{CancelHoldBookCommand, CancelHoldBookCommandRequest};
use crate::hold::command::reserve_book_cmd::{ReserveBookCommand, ReserveBookCommandRequest};
use crate::hold::domain::HoldService;

pub(crate) fn reserve_book<R: BufRead, W: Write>(svc: &mut dyn HoldService, console: &mut Console<R, W>) -> ControllerResult<()> {
    let title = console.prompt("Title")?;
    let res = ReserveBookCommand::new(svc).execute(ReserveBookCommandRequest::new(title.as_str()))?;
    console.println(format!("Book '{}' reserved.", res.book.title).as_str())?;
    Ok(())
}

pub(crate) fn cancel_reservation<R: BufRead, W: Write>(svc: &mut dyn HoldService, console: &mut Console<R, W>) -> ControllerResult<()> {
    let title = console.prompt("Title")?;
    let res = CancelHoldBookCommand::new(svc).execute(CancelHoldBookCommandRequest::new(title.as_str()))?;
    console.println(format!("Reservation for '{}' cancelled.", res.book.title).as_str())?;
    Ok(())
}
