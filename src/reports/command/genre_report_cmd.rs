use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::reports::domain::ReportService;
use crate::reports::dto::GenreReportDto;

pub struct GenreReportCommand<'a> {
    report_service: &'a dyn ReportService,
}

impl<'a> GenreReportCommand<'a> {
    pub fn new(report_service: &'a dyn ReportService) -> Self {
        Self {
            report_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct GenreReportCommandRequest {}

#[derive(Debug, Serialize)]
pub struct GenreReportCommandResponse {
    pub genres: Vec<GenreReportDto>,
}

impl Command<GenreReportCommandRequest, GenreReportCommandResponse> for GenreReportCommand<'_> {
    fn execute(&mut self, _req: GenreReportCommandRequest) -> Result<GenreReportCommandResponse, CommandError> {
        self.report_service.books_by_genre()
            .map_err(CommandError::from).map(|genres| GenreReportCommandResponse { genres })
    }
}
