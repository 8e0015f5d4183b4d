use std::fmt;
use std::fmt::{Display, Formatter};
use std::io::{BufRead, Write};
use crate::core::command::CommandError;
use crate::core::library::LibraryError;

// Console couples the line reader and the writer a controller talks to.
pub struct Console<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
        }
    }

    // next line without its line terminator, None once input is exhausted
    pub fn read_line(&mut self) -> std::io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    pub fn prompt(&mut self, label: &str) -> ControllerResult<String> {
        write!(self.output, "{}: ", label)?;
        self.output.flush()?;
        self.read_line()?.ok_or(ServerError::Closed)
    }

    pub fn println(&mut self, line: &str) -> std::io::Result<()> {
        writeln!(self.output, "{}", line)
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[derive(Debug)]
pub enum ServerError {
    // input ended in the middle of a command
    Closed,
    Io(std::io::Error),
    Command(CommandError),
}

pub type ControllerResult<T> = Result<T, ServerError>;

impl From<std::io::Error> for ServerError {
    fn from(err: std::io::Error) -> Self {
        ServerError::Io(err)
    }
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        ServerError::Command(err)
    }
}

impl From<LibraryError> for ServerError {
    fn from(err: LibraryError) -> Self {
        ServerError::Command(CommandError::from(err))
    }
}

impl Display for ServerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::Closed => write!(f, "input closed"),
            ServerError::Io(err) => write!(f, "{}", err),
            ServerError::Command(err) => write!(f, "{}", err),
        }
    }
}

pub fn parse_year(text: &str) -> ControllerResult<i32> {
    text.trim().parse::<i32>().map_err(|_| ServerError::from(LibraryError::validation(
        format!("invalid input: year '{}' is not a number", text.trim()).as_str(),
        Some("published_year".to_string()))))
}
