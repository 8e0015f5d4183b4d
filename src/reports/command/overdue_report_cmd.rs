use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::core::command::{Command, CommandError};
use crate::reports::domain::ReportService;

pub struct OverdueReportCommand<'a> {
    report_service: &'a dyn ReportService,
}

impl<'a> OverdueReportCommand<'a> {
    pub fn new(report_service: &'a dyn ReportService) -> Self {
        Self {
            report_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct OverdueReportCommandRequest {}

#[derive(Debug, Serialize)]
pub struct OverdueReportCommandResponse {
    pub books: Vec<BookDto>,
}

impl Command<OverdueReportCommandRequest, OverdueReportCommandResponse> for OverdueReportCommand<'_> {
    fn execute(&mut self, _req: OverdueReportCommandRequest) -> Result<OverdueReportCommandResponse, CommandError> {
        self.report_service.overdue_books()
            .map_err(CommandError::from).map(|books| OverdueReportCommandResponse { books })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use crate::books::dto::BookDto;
    use crate::catalog::domain::CatalogService;
    use crate::checkout::domain::CheckoutService;
    use crate::core::command::Command;
    use crate::manager::testing::fixture;
    use crate::patrons::domain::PatronService;
    use crate::reports::command::overdue_report_cmd::{OverdueReportCommand, OverdueReportCommandRequest};

    #[test]
    fn test_should_run_overdue_report() {
        let (mut manager, clock, _publisher) = fixture();
        manager.add_book(&BookDto::new("Dune", "Herbert", "111", 1965, "SciFi", "Fiction")).expect("should add book");
        manager.register_user("alice", "pw1", "Alice", "a@x.com").expect("should register");
        manager.login_user("alice", "pw1").expect("should login");
        manager.borrow_book("Dune").expect("should borrow");
        clock.advance(Duration::days(45));

        let res = OverdueReportCommand::new(&manager).execute(OverdueReportCommandRequest::default())
            .expect("should report");
        assert_eq!(1, res.books.len());
    }
}
