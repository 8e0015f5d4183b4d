use crate::core::library::{LibraryError, LibraryResult};

// Session holds the single logged-in identity of a manager instance.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Session {
    current_user: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    // replaces any previous identity
    pub fn login(&mut self, username: &str) -> Option<String> {
        self.current_user.replace(username.to_string())
    }

    pub fn logout(&mut self) -> Option<String> {
        self.current_user.take()
    }

    pub fn current_user(&self) -> Option<&str> {
        self.current_user.as_deref()
    }

    pub fn require_user(&self) -> LibraryResult<String> {
        self.current_user.clone().ok_or_else(LibraryError::no_session)
    }

    pub fn is_logged_in(&self) -> bool {
        self.current_user.is_some()
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::LibraryError;
    use crate::core::session::Session;

    #[test]
    fn test_should_replace_identity_on_login() {
        let mut session = Session::new();
        assert_eq!(None, session.login("alice"));
        assert_eq!(Some("alice".to_string()), session.login("bob"));
        assert_eq!(Some("bob"), session.current_user());
    }

    #[test]
    fn test_should_clear_on_logout() {
        let mut session = Session::new();
        session.login("alice");
        assert_eq!(Some("alice".to_string()), session.logout());
        assert!(!session.is_logged_in());
        assert_eq!(None, session.logout());
    }

    #[test]
    fn test_should_require_user() {
        let session = Session::new();
        assert!(matches!(session.require_user(), Err(LibraryError::AccessDenied { .. })));
    }
}
