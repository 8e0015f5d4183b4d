use std::io::{BufRead, Write};
use crate::catalog::controller::print_books;
use crate::core::command::Command;
use crate::core::controller::{Console, ControllerResult};
use crate::reports::command::genre_report_cmd::{GenreReportCommand, GenreReportCommandRequest};
use crate::reports::command::overdue_report_cmd::{OverdueReportCommand, OverdueReportCommandRequest};
use crate::reports::domain::ReportService;

pub(crate) fn overdue_report<R: BufRead, W: Write>(svc: &mut dyn ReportService, console: &mut Console<R, W>) -> ControllerResult<()> {
    let res = OverdueReportCommand::new(svc).execute(OverdueReportCommandRequest::default())?;
    print_books(console, &res.books, "No overdue books.")
}

pub(crate) fn genre_report<R: BufRead, W: Write>(svc: &mut dyn ReportService, console: &mut Console<R, W>) -> ControllerResult<()> {
    let res = GenreReportCommand::new(svc).execute(GenreReportCommandRequest::default())?;
    if res.genres.is_empty() {
        console.println("No books available.")?;
    }
    for group in res.genres {
        console.println(format!("Genre: {} ({} books)", group.genre, group.count).as_str())?;
        for book in group.books {
            console.println(format!("  {}", book.summary()).as_str())?;
        }
    }
    Ok(())
}
