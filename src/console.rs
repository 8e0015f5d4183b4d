use std::io::{BufRead, Write};
use tracing::{debug, warn};
use crate::catalog::command::search_books_cmd::SearchBy;
use crate::catalog::controller as catalog;
use crate::checkout::controller as checkout;
use crate::core::controller::{Console, ControllerResult, ServerError};
use crate::hold::controller as hold;
use crate::manager::LibraryManager;
use crate::patrons::controller as patrons;
use crate::reports::controller as reports;

const HELP: &[(&str, &str)] = &[
    ("help", "show this list"),
    ("add (1)", "add a book"),
    ("list (2)", "list all books"),
    ("show", "show one book"),
    ("search (3)", "search by title or author"),
    ("category", "books in a category"),
    ("genre", "books in a genre"),
    ("delete", "delete a book"),
    ("register", "register a user"),
    ("login", "log in"),
    ("logout", "log out"),
    ("whoami", "show the logged-in user"),
    ("profile", "update your profile"),
    ("reserve (6)", "reserve a book"),
    ("cancel", "cancel your reservation"),
    ("borrow (4)", "borrow a book"),
    ("return (5)", "return a book"),
    ("overdue (7)", "overdue books report"),
    ("genres (8)", "books by genre report"),
    ("exit (9)", "quit"),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Choice {
    Help,
    Add,
    List,
    Show,
    Search,
    Category,
    Genre,
    Delete,
    Register,
    Login,
    Logout,
    Whoami,
    Profile,
    Reserve,
    Cancel,
    Borrow,
    Return,
    Overdue,
    Genres,
    Exit,
}

impl Choice {
    // keywords are case-insensitive, 1..9 follow the numbered menu
    pub fn parse(input: &str) -> Option<Choice> {
        match input.trim().to_lowercase().as_str() {
            "help" => Some(Choice::Help),
            "add" | "1" => Some(Choice::Add),
            "list" | "2" => Some(Choice::List),
            "show" => Some(Choice::Show),
            "search" | "3" => Some(Choice::Search),
            "category" => Some(Choice::Category),
            "genre" => Some(Choice::Genre),
            "delete" => Some(Choice::Delete),
            "register" => Some(Choice::Register),
            "login" => Some(Choice::Login),
            "logout" => Some(Choice::Logout),
            "whoami" => Some(Choice::Whoami),
            "profile" => Some(Choice::Profile),
            "reserve" | "6" => Some(Choice::Reserve),
            "cancel" => Some(Choice::Cancel),
            "borrow" | "4" => Some(Choice::Borrow),
            "return" | "5" => Some(Choice::Return),
            "overdue" | "7" => Some(Choice::Overdue),
            "genres" | "8" => Some(Choice::Genres),
            "exit" | "9" => Some(Choice::Exit),
            _ => None,
        }
    }
}

/// Runs the interactive loop until `exit` or end of input.
///
/// Failed operations are reported as `Error: <message>` and the loop goes on;
/// only I/O failures on the console itself end it with an error.
pub fn run<R: BufRead, W: Write>(manager: &mut LibraryManager, console: &mut Console<R, W>) -> std::io::Result<()> {
    console.println("Library Management System. Type 'help' for commands.")?;
    loop {
        let line = match console.prompt("Command") {
            Ok(line) => line,
            Err(ServerError::Io(err)) => return Err(err),
            Err(_) => return Ok(()),
        };
        if line.trim().is_empty() {
            continue;
        }
        let choice = match Choice::parse(line.as_str()) {
            Some(choice) => choice,
            None => {
                console.println("Invalid choice, please try again.")?;
                continue;
            }
        };
        if choice == Choice::Exit {
            console.println("Goodbye!")?;
            return Ok(());
        }
        debug!(?choice, "dispatching");
        match dispatch(manager, console, choice) {
            Ok(()) => {}
            Err(ServerError::Command(err)) => {
                warn!(?choice, error = err.to_string().as_str(), "command failed");
                console.println(format!("Error: {}", err).as_str())?;
            }
            Err(ServerError::Closed) => return Ok(()),
            Err(ServerError::Io(err)) => return Err(err),
        }
    }
}

fn dispatch<R: BufRead, W: Write>(manager: &mut LibraryManager, console: &mut Console<R, W>,
                                  choice: Choice) -> ControllerResult<()> {
    match choice {
        Choice::Help => print_help(console),
        Choice::Add => catalog::add_book(manager, console),
        Choice::List => catalog::list_books(manager, console),
        Choice::Show => catalog::find_book(manager, console),
        Choice::Search => catalog::search_books(manager, console, SearchBy::Text),
        Choice::Category => catalog::search_books(manager, console, SearchBy::Category),
        Choice::Genre => catalog::search_books(manager, console, SearchBy::Genre),
        Choice::Delete => catalog::remove_book(manager, console),
        Choice::Register => patrons::register_user(manager, console),
        Choice::Login => patrons::login_user(manager, console),
        Choice::Logout => patrons::logout_user(manager, console),
        Choice::Whoami => patrons::current_user(manager, console),
        Choice::Profile => patrons::update_profile(manager, console),
        Choice::Reserve => hold::reserve_book(manager, console),
        Choice::Cancel => hold::cancel_reservation(manager, console),
        Choice::Borrow => checkout::borrow_book(manager, console),
        Choice::Return => checkout::return_book(manager, console),
        Choice::Overdue => reports::overdue_report(manager, console),
        Choice::Genres => reports::genre_report(manager, console),
        Choice::Exit => Ok(()),
    }
}

fn print_help<R: BufRead, W: Write>(console: &mut Console<R, W>) -> ControllerResult<()> {
    for (keyword, text) in HELP {
        console.println(format!("  {:<12} {}", keyword, text).as_str())?;
    }
    Ok(())
}
