use std::io::{BufRead, Write};
use crate::core::command::Command;
use crate::core::controller::{Console, ControllerResult};
use crate::patrons::command::login_user_cmd::{LoginUserCommand, LoginUserCommandRequest};
use crate::patrons::command::logout_user_cmd::{LogoutUserCommand, LogoutUserCommandRequest};
use crate::patrons::command::register_user_cmd::{RegisterUserCommand, RegisterUserCommandRequest};
use crate::patrons::command::update_profile_cmd::{UpdateProfileCommand, UpdateProfileCommandRequest};
use crate::patrons::domain::PatronService;

pub(crate) fn register_user<R: BufRead, W: Write>(svc: &mut dyn PatronService, console: &mut Console<R, W>) -> ControllerResult<()> {
    let username = console.prompt("Username")?;
    let password = console.prompt("Password")?;
    let full_name = console.prompt("Full name")?;
    let email = console.prompt("Email")?;
    let req = RegisterUserCommandRequest::new(username.as_str(), password.as_str(), full_name.as_str(), email.as_str());
    let res = RegisterUserCommand::new(svc).execute(req)?;
    console.println(format!("User '{}' registered.", res.user.username).as_str())?;
    Ok(())
}

pub(crate) fn login_user<R: BufRead, W: Write>(svc: &mut dyn PatronService, console: &mut Console<R, W>) -> ControllerResult<()> {
    let username = console.prompt("Username")?;
    let password = console.prompt("Password")?;
    let res = LoginUserCommand::new(svc).execute(LoginUserCommandRequest::new(username.as_str(), password.as_str()))?;
    console.println(format!("Welcome, {}!", res.user.display_name()).as_str())?;
    Ok(())
}

pub(crate) fn logout_user<R: BufRead, W: Write>(svc: &mut dyn PatronService, console: &mut Console<R, W>) -> ControllerResult<()> {
    let res = LogoutUserCommand::new(svc).execute(LogoutUserCommandRequest::default())?;
    console.println(format!("Goodbye, {}.", res.user.display_name()).as_str())?;
    Ok(())
}

pub(crate) fn current_user<R: BufRead, W: Write>(svc: &mut dyn PatronService, console: &mut Console<R, W>) -> ControllerResult<()> {
    match svc.current_user() {
        Some(user) => console.println(user.summary().as_str())?,
        None => console.println("No user logged in.")?,
    }
    Ok(())
}

pub(crate) fn update_profile<R: BufRead, W: Write>(svc: &mut dyn PatronService, console: &mut Console<R, W>) -> ControllerResult<()> {
    let full_name = console.prompt("Full name")?;
    let email = console.prompt("Email")?;
    let res = UpdateProfileCommand::new(svc).execute(UpdateProfileCommandRequest::new(full_name.as_str(), email.as_str()))?;
    console.println(format!("Profile updated: {}", res.user.summary()).as_str())?;
    Ok(())
}
